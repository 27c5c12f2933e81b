//! Protection index: which nodes and edges are pinned by paths.
//!
//! A node visited by any path, or an edge walked by any path, is protected:
//! the graph store refuses to delete it. The index is a pure function of the
//! path registry and is rebuilt eagerly after every mutation.

use std::collections::{HashMap, HashSet};

use tracegraph_core::{EdgeKey, EntityRef, TraceError, TraceResult};

use super::PathRegistry;

/// Materialized view of the registry: entity → labels of blocking paths.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProtectionIndex {
    nodes: HashMap<String, Vec<String>>,
    edges: HashMap<EdgeKey, Vec<String>>,
}

impl ProtectionIndex {
    /// Compute the index for the current registry.
    ///
    /// Each path contributes its label once per entity, even when it visits
    /// the entity twice. Distinct paths sharing a label are listed separately.
    pub fn rebuild(registry: &PathRegistry) -> Self {
        let mut idx = Self::default();
        for path in registry.paths() {
            let mut seen_nodes = HashSet::new();
            for node_id in &path.node_ids {
                if seen_nodes.insert(node_id.as_str()) {
                    idx.nodes.entry(node_id.clone()).or_default().push(path.label.clone());
                }
            }
            let mut seen_edges = HashSet::new();
            for key in path.edge_keys() {
                if seen_edges.insert(key.clone()) {
                    idx.edges.entry(key).or_default().push(path.label.clone());
                }
            }
        }
        idx
    }

    /// Is the node visited by some path?
    pub fn is_node_protected(&self, node_id: &str) -> bool {
        self.nodes.contains_key(node_id)
    }

    /// Is the edge `{a, b}` walked by some path?
    pub fn is_edge_protected(&self, a: &str, b: &str) -> bool {
        self.edges.contains_key(&EdgeKey::new(a, b))
    }

    /// Every protected node id (unordered).
    pub fn protected_nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Every protected edge key (unordered).
    pub fn protected_edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.keys()
    }

    /// Labels of the paths visiting a node, in registry order.
    pub fn node_blockers(&self, node_id: &str) -> &[String] {
        self.nodes.get(node_id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Labels of the paths walking an edge, in registry order.
    pub fn edge_blockers(&self, a: &str, b: &str) -> &[String] {
        self.edges
            .get(&EdgeKey::new(a, b))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fail with `ProtectedEntity` if the node may not be deleted.
    pub fn check_node(&self, node_id: &str) -> TraceResult<()> {
        match self.nodes.get(node_id) {
            Some(labels) => {
                tracing::warn!(target: "tracegraph::protection", node_id = %node_id, paths = ?labels, "Node is protected");
                Err(TraceError::ProtectedEntity {
                    entity: EntityRef::node(node_id),
                    paths: labels.clone(),
                })
            }
            None => Ok(()),
        }
    }

    /// Fail with `ProtectedEntity` if the edge may not be removed.
    pub fn check_edge(&self, a: &str, b: &str) -> TraceResult<()> {
        match self.edges.get(&EdgeKey::new(a, b)) {
            Some(labels) => {
                tracing::warn!(target: "tracegraph::protection", a = %a, b = %b, paths = ?labels, "Edge is protected");
                Err(TraceError::ProtectedEntity {
                    entity: EntityRef::edge(a, b),
                    paths: labels.clone(),
                })
            }
            None => Ok(()),
        }
    }
}
