//! In-memory adjacency index for route searches.
//!
//! The adjacency index is a materialized view of the store's edge set,
//! built on demand. Nodes are numbered in store order so searches over it
//! are deterministic; each undirected edge appears in both endpoints' lists.

use std::collections::HashMap;

use super::GraphStore;

/// Dense, index-addressed adjacency lists for one graph.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    /// Node ids in store order; position is the node's index.
    order: Vec<String>,
    /// id → index.
    index: HashMap<String, usize>,
    /// index → [(neighbor index, edge weight)], in edge insertion order.
    neighbors: Vec<Vec<(usize, f64)>>,
}

impl AdjacencyIndex {
    /// Create a new empty adjacency index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index every node and edge of `graph`.
    pub fn from_graph(graph: &GraphStore) -> Self {
        let mut idx = Self::new();
        for node in graph.nodes() {
            idx.add_node(&node.id);
        }
        for edge in graph.edges() {
            idx.add_edge(&edge.a, &edge.b, edge.weight.value());
        }
        idx
    }

    /// Add a node to the index; re-adding is a no-op.
    pub fn add_node(&mut self, node_id: &str) -> usize {
        if let Some(&i) = self.index.get(node_id) {
            return i;
        }
        let i = self.order.len();
        self.order.push(node_id.to_string());
        self.index.insert(node_id.to_string(), i);
        self.neighbors.push(Vec::new());
        i
    }

    /// Add an undirected edge. Unknown endpoints are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) {
        let (Some(&ia), Some(&ib)) = (self.index.get(a), self.index.get(b)) else {
            return;
        };
        self.neighbors[ia].push((ib, weight));
        self.neighbors[ib].push((ia, weight));
    }

    /// Number of indexed nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when no nodes are indexed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Index of a node id.
    pub fn index_of(&self, node_id: &str) -> Option<usize> {
        self.index.get(node_id).copied()
    }

    /// Node id at an index.
    pub fn id(&self, i: usize) -> &str {
        &self.order[i]
    }

    /// Neighbors of the node at index `i`.
    pub fn neighbors(&self, i: usize) -> &[(usize, f64)] {
        &self.neighbors[i]
    }

    /// Neighbor ids of a node, in edge insertion order.
    pub fn neighbor_ids(&self, node_id: &str) -> Vec<&str> {
        self.index_of(node_id)
            .map(|i| self.neighbors[i].iter().map(|&(j, _)| self.id(j)).collect())
            .unwrap_or_default()
    }
}
