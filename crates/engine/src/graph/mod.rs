//! Graph module for tracegraph.
//!
//! Owns the nodes and weighted undirected edges of the overlay. The graph
//! is simple: no self-loops, at most one edge per unordered pair. Destructive
//! operations consult a [`ProtectionIndex`] and refuse to touch anything a
//! path still walks.

pub mod adjacency;
pub mod keys;
pub mod traversal;

use tracegraph_core::{Edge, EdgeKey, Node, RawWeight, StepDirection, TraceError, TraceResult, Weight};

use crate::paths::ProtectionIndex;
use keys::IdAllocator;

/// Graph store providing CRUD operations on nodes and edges.
///
/// Nodes and edges are kept in insertion order, which fixes the iteration
/// order route searches see.
#[derive(Debug, Clone)]
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    ids: IdAllocator,
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

fn check_finite(x: f64, y: f64) -> TraceResult<()> {
    if x.is_finite() && y.is_finite() {
        Ok(())
    } else {
        Err(TraceError::invalid_input(format!(
            "coordinates must be finite, got ({}, {})",
            x, y
        )))
    }
}

impl GraphStore {
    /// Create an empty store generating `N<n>` ids.
    pub fn new() -> Self {
        Self::with_id_prefix("N")
    }

    /// Create an empty store generating `{prefix}<n>` ids.
    pub fn with_id_prefix(prefix: &str) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            ids: IdAllocator::new(prefix),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Look up a node.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Does the node exist?
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// The edge joining `a` and `b`, in either order.
    pub fn find_edge(&self, a: &str, b: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }

    /// Is there an edge between `a` and `b`?
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.find_edge(a, b).is_some()
    }

    /// Edges with `id` as an endpoint.
    pub fn incident_edges<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.touches(id))
    }

    /// Next counter value of the node id allocator, `None` once exhausted.
    pub fn next_id_counter(&self) -> Option<u64> {
        self.ids.peek()
    }

    fn require_node(&self, id: &str) -> TraceResult<()> {
        if self.contains_node(id) {
            Ok(())
        } else {
            Err(TraceError::node_not_found(id))
        }
    }

    fn edge_mut(&mut self, a: &str, b: &str) -> TraceResult<&mut Edge> {
        self.edges
            .iter_mut()
            .find(|e| e.connects(a, b))
            .ok_or_else(|| TraceError::edge_not_found(a, b))
    }

    // =========================================================================
    // Node CRUD
    // =========================================================================

    /// Create a node at `(x, y)` with the next unused id.
    pub fn add_node(&mut self, x: f64, y: f64) -> TraceResult<Node> {
        check_finite(x, y)?;
        let nodes = &self.nodes;
        let id = self.ids.allocate(|id| nodes.iter().any(|n| n.id == id))?;
        let node = Node::new(id, x, y);
        self.nodes.push(node.clone());
        tracing::debug!(target: "tracegraph::graph", node_id = %node.id, x, y, "Node added");
        Ok(node)
    }

    /// Remove a node and every incident edge.
    ///
    /// Fails with `ProtectedEntity` while any path visits the node.
    pub fn remove_node(&mut self, id: &str, guard: &ProtectionIndex) -> TraceResult<Node> {
        let pos = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| TraceError::node_not_found(id))?;
        guard.check_node(id)?;

        let node = self.nodes.remove(pos);
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        tracing::debug!(
            target: "tracegraph::graph",
            node_id = %id,
            edges_removed = before - self.edges.len(),
            "Node removed"
        );
        Ok(node)
    }

    /// Overwrite a node's coordinates. Bounding is the caller's job.
    pub fn move_node(&mut self, id: &str, x: f64, y: f64) -> TraceResult<()> {
        check_finite(x, y)?;
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| TraceError::node_not_found(id))?;
        node.x = x;
        node.y = y;
        Ok(())
    }

    /// Set a node's label. A blank label reverts to the id.
    ///
    /// Returns whether the label changed.
    pub fn rename_node(&mut self, id: &str, label: &str) -> TraceResult<bool> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| TraceError::node_not_found(id))?;
        let label = match label.trim() {
            "" => node.id.clone(),
            trimmed => trimmed.to_string(),
        };
        if node.label == label {
            return Ok(false);
        }
        node.label = label;
        Ok(true)
    }

    // =========================================================================
    // Edge CRUD
    // =========================================================================

    /// Connect `a` and `b` with a weight-1 edge.
    ///
    /// Self-loops and already-connected pairs are no-ops; returns whether an
    /// edge was created.
    pub fn add_edge(&mut self, a: &str, b: &str) -> TraceResult<bool> {
        self.require_node(a)?;
        self.require_node(b)?;
        if a == b || self.has_edge(a, b) {
            return Ok(false);
        }
        self.edges.push(Edge::new(a, b));
        tracing::debug!(target: "tracegraph::graph", a = %a, b = %b, "Edge added");
        Ok(true)
    }

    /// Disconnect `a` and `b`.
    ///
    /// Fails with `ProtectedEntity` while any path walks the edge.
    pub fn remove_edge(&mut self, a: &str, b: &str, guard: &ProtectionIndex) -> TraceResult<Edge> {
        let pos = self
            .edges
            .iter()
            .position(|e| e.connects(a, b))
            .ok_or_else(|| TraceError::edge_not_found(a, b))?;
        guard.check_edge(a, b)?;
        let edge = self.edges.remove(pos);
        tracing::debug!(target: "tracegraph::graph", a = %a, b = %b, "Edge removed");
        Ok(edge)
    }

    /// Remove the edge if present, create it otherwise.
    ///
    /// Returns whether `a` and `b` are connected afterwards.
    pub fn toggle_edge(&mut self, a: &str, b: &str, guard: &ProtectionIndex) -> TraceResult<bool> {
        if self.has_edge(a, b) {
            self.remove_edge(a, b, guard)?;
            Ok(false)
        } else {
            self.add_edge(a, b)?;
            Ok(self.has_edge(a, b))
        }
    }

    /// Parse and normalize `raw`, then store it on the edge `{a, b}`.
    pub fn set_edge_weight(
        &mut self,
        a: &str,
        b: &str,
        raw: impl Into<RawWeight>,
    ) -> TraceResult<Weight> {
        let weight = raw.into().normalize();
        let edge = self.edge_mut(a, b)?;
        edge.weight = weight;
        tracing::debug!(target: "tracegraph::graph", a = %a, b = %b, weight = %weight, "Edge weight set");
        Ok(weight)
    }

    /// Move the weight of `{a, b}` one step along the scale.
    pub fn step_edge_weight(
        &mut self,
        a: &str,
        b: &str,
        direction: StepDirection,
    ) -> TraceResult<Weight> {
        let edge = self.edge_mut(a, b)?;
        edge.weight = Self::step_weight(edge.weight, direction);
        Ok(edge.weight)
    }

    /// One step along `…, 1/3, 1/2, 1, 2, 3, …`.
    pub fn step_weight(current: Weight, direction: StepDirection) -> Weight {
        current.step(direction)
    }

    // =========================================================================
    // Bulk state
    // =========================================================================

    /// Re-run weight normalization over every edge.
    pub fn normalize_weights(&mut self) {
        for edge in &mut self.edges {
            edge.weight = Weight::normalize(edge.weight.value());
        }
    }

    /// Replace the whole node/edge set (snapshot restore, import).
    ///
    /// The id counter is left alone; ids still present are skipped anyway.
    pub fn replace(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        self.nodes = nodes;
        self.edges = edges;
        self.normalize_weights();
    }

    /// Resume id allocation above the largest `N<n>` currently stored.
    pub fn resume_ids(&mut self) {
        self.ids.resume_after(self.nodes.iter().map(|n| n.id.as_str()));
    }

    /// Drop every node and edge and restart ids at 1.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.ids.reset();
    }

    /// Keys of every edge.
    pub fn edge_keys(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.iter().map(Edge::key)
    }
}
