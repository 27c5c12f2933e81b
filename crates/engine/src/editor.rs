//! The editing context.
//!
//! [`Editor`] owns the graph, the paths, the edit session and the history,
//! and is the only way to mutate them. Every mutation goes through a private
//! `apply` wrapper, which records the pre-state for undo when the graph or
//! the paths actually changed, rebuilds the protection index, and rolls the
//! state back if the operation fails half-way.

use std::fmt;

use serde::Serialize;
use tracegraph_core::{
    Dimensions, Edge, EditorConfig, Node, Path, RawWeight, StepDirection, TraceError, TraceResult,
    Weight,
};

use crate::graph::traversal::Route;
use crate::graph::GraphStore;
use crate::history::{Snapshot, SnapshotHistory};
use crate::interchange::ProjectDocument;
use crate::paths::{PathRegistry, ProtectionIndex};
use crate::session::{self, EditState, ExtendOutcome, PathEditSession, PathEnd};

/// Non-fatal warning: the loaded image and the imported document disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DimensionMismatch {
    /// Size declared by the document.
    pub expected: Dimensions,
    /// Size of the loaded image.
    pub actual: Dimensions,
}

impl fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "image size {} does not match document {}",
            self.actual, self.expected
        )
    }
}

/// Summary of an import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportReport {
    /// Nodes loaded.
    pub nodes: usize,
    /// Edges loaded.
    pub edges: usize,
    /// Paths loaded.
    pub paths: usize,
    /// Image size declared by the document.
    pub dimensions: Dimensions,
    /// Set when an image is already loaded with a different size.
    pub mismatch: Option<DimensionMismatch>,
}

/// Per-path figures for listings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathStats {
    /// Path id.
    pub path_id: String,
    /// Path label.
    pub label: String,
    /// Number of nodes visited.
    pub nodes: usize,
    /// Number of edges walked.
    pub edges: usize,
    /// Sum of the walked edge weights.
    pub total_weight: f64,
    /// Whether the path is drawn.
    pub visible: bool,
}

/// Graph, paths, session and history of one project.
#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    graph: GraphStore,
    paths: PathRegistry,
    protection: ProtectionIndex,
    session: PathEditSession,
    history: SnapshotHistory,
    image: Option<Dimensions>,
    expected: Option<Dimensions>,
    from_document: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::build(EditorConfig::default())
    }
}

impl Editor {
    /// Create an empty project with the given configuration.
    pub fn new(config: EditorConfig) -> TraceResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: EditorConfig) -> Self {
        Self {
            graph: GraphStore::with_id_prefix(&config.node_id_prefix),
            paths: PathRegistry::with_prefixes(&config.path_id_prefix, &config.path_label_prefix),
            protection: ProtectionIndex::default(),
            session: PathEditSession::new(),
            history: SnapshotHistory::with_limit(config.history_limit),
            image: None,
            expected: None,
            from_document: false,
            config,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// The graph.
    pub fn graph(&self) -> &GraphStore {
        &self.graph
    }

    /// The path registry.
    pub fn paths(&self) -> &PathRegistry {
        &self.paths
    }

    /// What the paths currently protect.
    pub fn protection(&self) -> &ProtectionIndex {
        &self.protection
    }

    /// Edit session state.
    pub fn edit_state(&self) -> &EditState {
        self.session.state()
    }

    /// Undo/redo stacks.
    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    /// Size of the loaded image, if any.
    pub fn image(&self) -> Option<Dimensions> {
        self.image
    }

    /// Size declared by the last imported document, if any.
    pub fn expected_image(&self) -> Option<Dimensions> {
        self.expected
    }

    /// Was the current project loaded from a document?
    pub fn is_from_document(&self) -> bool {
        self.from_document
    }

    /// Deep copy of the undoable state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            nodes: self.graph.nodes().to_vec(),
            edges: self.graph.edges().to_vec(),
            paths: self.paths.paths().to_vec(),
            edit_state: self.session.state().clone(),
        }
    }

    fn bounds(&self) -> Option<Dimensions> {
        self.image.or(self.expected)
    }

    // =========================================================================
    // Mutation plumbing
    // =========================================================================

    fn data_differs(&self, before: &Snapshot) -> bool {
        before.nodes.as_slice() != self.graph.nodes()
            || before.edges.as_slice() != self.graph.edges()
            || before.paths.as_slice() != self.paths.paths()
    }

    fn restore(&mut self, snapshot: Snapshot) {
        let Snapshot {
            nodes,
            edges,
            paths,
            edit_state,
        } = snapshot;
        self.graph.replace(nodes, edges);
        self.paths.replace(paths);
        self.protection = ProtectionIndex::rebuild(&self.paths);
        let dangling = edit_state
            .active_path_id()
            .is_some_and(|id| self.paths.get(id).is_none());
        self.session
            .set_state(if dangling { EditState::Idle } else { edit_state });
    }

    /// Run a mutation with undo recording and rollback on failure.
    fn apply<T>(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&mut Self) -> TraceResult<T>,
    ) -> TraceResult<T> {
        let before = self.snapshot();
        match f(self) {
            Ok(value) => {
                if self.data_differs(&before) {
                    self.protection = ProtectionIndex::rebuild(&self.paths);
                    self.history.record(before);
                    tracing::debug!(target: "tracegraph::editor", op, "Applied");
                }
                Ok(value)
            }
            Err(e) => {
                if self.data_differs(&before) || self.session.state() != &before.edit_state {
                    self.restore(before);
                }
                tracing::debug!(target: "tracegraph::editor", op, error = %e, "Rejected");
                Err(e)
            }
        }
    }

    /// Structural graph edits are refused while a path is being edited.
    fn ensure_graph_editable(&self, op: &'static str) -> TraceResult<()> {
        match self.session.active_path_id() {
            None => Ok(()),
            Some(path_id) => {
                tracing::debug!(target: "tracegraph::editor", op, path_id, "Graph edit while editing");
                Err(TraceError::invalid_state(
                    "Graph edits are disabled while editing a path.",
                ))
            }
        }
    }

    fn graph_edit<T>(
        &mut self,
        op: &'static str,
        f: impl FnOnce(&mut Self) -> TraceResult<T>,
    ) -> TraceResult<T> {
        self.ensure_graph_editable(op)?;
        self.apply(op, f)
    }

    // =========================================================================
    // Graph edits
    // =========================================================================

    /// Place a node. Inside the image bounds when they are known.
    pub fn add_node(&mut self, x: f64, y: f64) -> TraceResult<Node> {
        self.ensure_graph_editable("add_node")?;
        if let Some(bounds) = self.bounds() {
            if !bounds.contains(x, y) {
                return Err(TraceError::invalid_input(format!(
                    "({}, {}) lies outside the {} image",
                    x, y, bounds
                )));
            }
        }
        self.graph_edit("add_node", |ed| ed.graph.add_node(x, y))
    }

    /// Delete a node and its incident edges.
    pub fn remove_node(&mut self, id: &str) -> TraceResult<Node> {
        self.graph_edit("remove_node", |ed| ed.graph.remove_node(id, &ed.protection))
    }

    /// Move a node, clamped to the image when configured.
    ///
    /// Returns the coordinates actually stored.
    pub fn move_node(&mut self, id: &str, x: f64, y: f64) -> TraceResult<(f64, f64)> {
        let (x, y) = match self.bounds() {
            Some(bounds) if self.config.clamp_to_image => bounds.clamp(x, y),
            _ => (x, y),
        };
        self.graph_edit("move_node", |ed| ed.graph.move_node(id, x, y))?;
        Ok((x, y))
    }

    /// Relabel a node; blank reverts to the id.
    pub fn rename_node(&mut self, id: &str, label: &str) -> TraceResult<bool> {
        self.apply("rename_node", |ed| ed.graph.rename_node(id, label))
    }

    /// Connect two nodes. Returns whether an edge was created.
    pub fn add_edge(&mut self, a: &str, b: &str) -> TraceResult<bool> {
        self.graph_edit("add_edge", |ed| ed.graph.add_edge(a, b))
    }

    /// Disconnect two nodes.
    pub fn remove_edge(&mut self, a: &str, b: &str) -> TraceResult<Edge> {
        self.graph_edit("remove_edge", |ed| ed.graph.remove_edge(a, b, &ed.protection))
    }

    /// Flip the connection between two nodes. Returns whether they are
    /// connected afterwards.
    pub fn toggle_edge(&mut self, a: &str, b: &str) -> TraceResult<bool> {
        self.graph_edit("toggle_edge", |ed| ed.graph.toggle_edge(a, b, &ed.protection))
    }

    /// Parse, normalize and store an edge weight.
    pub fn set_edge_weight(
        &mut self,
        a: &str,
        b: &str,
        raw: impl Into<RawWeight>,
    ) -> TraceResult<Weight> {
        let raw = raw.into();
        self.graph_edit("set_edge_weight", move |ed| ed.graph.set_edge_weight(a, b, raw))
    }

    /// Move an edge weight one step along the scale.
    pub fn step_edge_weight(
        &mut self,
        a: &str,
        b: &str,
        direction: StepDirection,
    ) -> TraceResult<Weight> {
        self.graph_edit("step_edge_weight", |ed| ed.graph.step_edge_weight(a, b, direction))
    }

    // =========================================================================
    // Path editing
    // =========================================================================

    /// Start a new path at `start` and select its only end.
    pub fn begin_path(&mut self, start: &str) -> TraceResult<Path> {
        if !self.session.is_idle() {
            return Err(TraceError::invalid_state(
                "Exit the current path before starting a new one.",
            ));
        }
        if !self.graph.contains_node(start) {
            return Err(TraceError::node_not_found(start));
        }
        self.apply("begin_path", |ed| {
            let path = ed.paths.create(start)?;
            ed.session.begin(&path.path_id)?;
            Ok(path)
        })
    }

    /// Make a path active, awaiting an endpoint click. Activating the path
    /// that is already active leaves editing instead.
    pub fn activate_path(&mut self, path_id: &str) -> TraceResult<EditState> {
        self.paths.require(path_id)?;
        if self.session.active_path_id() == Some(path_id) {
            self.session.exit();
        } else {
            self.session.activate(path_id);
        }
        Ok(self.session.state().clone())
    }

    /// Choose which end of the active path grows.
    pub fn select_endpoint(&mut self, node_id: &str) -> TraceResult<PathEnd> {
        let path_id = self
            .session
            .active_path_id()
            .ok_or_else(|| TraceError::invalid_state("No path is being edited."))?
            .to_string();
        let path = self.paths.require(&path_id)?;
        self.session.select_endpoint(path, node_id)
    }

    /// Drop the growth end, keeping the path active.
    pub fn deselect_endpoint(&mut self) -> TraceResult<()> {
        self.session.deselect_endpoint()
    }

    /// Stop editing. The path stays as it is.
    pub fn exit_editing(&mut self) {
        self.session.exit();
    }

    /// Grow the active path by one edge, or truncate back to `target`.
    pub fn adjacent_extend(&mut self, target: &str) -> TraceResult<ExtendOutcome> {
        self.apply("adjacent_extend", |ed| {
            let (path_id, end) = ed.session.require_endpoint()?;
            let path = ed.paths.get_mut(path_id)?;
            session::adjacent_extend(&ed.graph, path, end, target)
        })
    }

    /// Grow the active path along the cheapest route to `target`, or
    /// truncate back to it.
    pub fn shortest_path_extend(&mut self, target: &str) -> TraceResult<ExtendOutcome> {
        self.apply("shortest_path_extend", |ed| {
            let (path_id, end) = ed.session.require_endpoint()?;
            let path = ed.paths.get_mut(path_id)?;
            session::shortest_path_extend(&ed.graph, path, end, target)
        })
    }

    /// Delete a path; leaves editing if it was the active one.
    pub fn delete_path(&mut self, path_id: &str) -> TraceResult<Path> {
        self.apply("delete_path", |ed| {
            let path = ed.paths.delete(path_id)?;
            if ed.session.active_path_id() == Some(path_id) {
                ed.session.exit();
            }
            Ok(path)
        })
    }

    /// Relabel a path; blank reverts to the id.
    pub fn rename_path(&mut self, path_id: &str, label: &str) -> TraceResult<bool> {
        self.apply("rename_path", |ed| ed.paths.rename(path_id, label))
    }

    /// Show or hide a path. Returns whether visibility changed.
    pub fn set_path_visible(&mut self, path_id: &str, visible: bool) -> TraceResult<bool> {
        self.apply("set_path_visible", |ed| ed.paths.set_visible(path_id, visible))
    }

    /// Flip a path's visibility; returns the new value.
    pub fn toggle_path_visibility(&mut self, path_id: &str) -> TraceResult<bool> {
        self.apply("toggle_path_visibility", |ed| ed.paths.toggle_visible(path_id))
    }

    // =========================================================================
    // History
    // =========================================================================

    /// Step back one mutation. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                tracing::info!(target: "tracegraph::history", depths = ?self.history.depths(), "Undo");
                true
            }
            None => false,
        }
    }

    /// Re-apply an undone mutation. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                tracing::info!(target: "tracegraph::history", depths = ?self.history.depths(), "Redo");
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Project lifecycle
    // =========================================================================

    /// Empty the project, keeping the loaded image. Undoable.
    pub fn clear_project(&mut self) -> TraceResult<()> {
        self.apply("clear_project", |ed| {
            ed.graph.clear();
            ed.paths.clear();
            ed.session.exit();
            Ok(())
        })?;
        self.expected = None;
        self.from_document = false;
        tracing::info!(target: "tracegraph::editor", "Project cleared");
        Ok(())
    }

    fn reset(&mut self) {
        self.graph.clear();
        self.paths.clear();
        self.protection = ProtectionIndex::default();
        self.session.exit();
        self.history.clear();
        self.expected = None;
        self.from_document = false;
    }

    fn mismatch_against(&self, expected: Option<Dimensions>) -> Option<DimensionMismatch> {
        match (expected, self.image) {
            (Some(expected), Some(actual)) if expected != actual => {
                Some(DimensionMismatch { expected, actual })
            }
            _ => None,
        }
    }

    /// Record the reference image size.
    ///
    /// Starts a fresh project unless the current one came from a document,
    /// in which case a size disagreement is returned as a warning.
    pub fn load_image(&mut self, width: u32, height: u32) -> TraceResult<Option<DimensionMismatch>> {
        if width == 0 || height == 0 {
            return Err(TraceError::invalid_input(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        self.image = Some(Dimensions::new(width, height));
        let mismatch = self.mismatch_against(self.expected);
        if let Some(m) = &mismatch {
            tracing::warn!(target: "tracegraph::editor", %m, "Image size mismatch");
        }
        if !self.from_document {
            self.reset();
        }
        tracing::info!(target: "tracegraph::editor", width, height, "Image loaded");
        Ok(mismatch)
    }

    /// Replace the whole project with a validated document.
    ///
    /// The session returns to idle and history is dropped.
    pub fn import_document(&mut self, doc: ProjectDocument) -> ImportReport {
        let dimensions = doc.dimensions();
        let ProjectDocument {
            nodes, edges, paths, ..
        } = doc;
        let report = ImportReport {
            nodes: nodes.len(),
            edges: edges.len(),
            paths: paths.len(),
            dimensions,
            mismatch: self.mismatch_against(Some(dimensions)),
        };

        self.graph.replace(nodes, edges);
        self.graph.resume_ids();
        self.paths.replace(paths);
        self.paths.resume_ids();
        self.protection = ProtectionIndex::rebuild(&self.paths);
        self.session.exit();
        self.history.clear();
        self.expected = Some(dimensions);
        self.from_document = true;

        if let Some(m) = &report.mismatch {
            tracing::warn!(target: "tracegraph::editor", %m, "Image size mismatch");
        }
        tracing::info!(
            target: "tracegraph::editor",
            nodes = report.nodes,
            edges = report.edges,
            paths = report.paths,
            "Project imported"
        );
        report
    }

    /// Parse, validate and import JSON text.
    pub fn import_json(&mut self, text: &str) -> TraceResult<ImportReport> {
        let doc = ProjectDocument::from_json(text)?;
        Ok(self.import_document(doc))
    }

    /// The current project as a document.
    ///
    /// Fails when neither an image nor an imported document supplied the
    /// image size.
    pub fn export_document(&self) -> TraceResult<ProjectDocument> {
        let dims = self
            .bounds()
            .ok_or_else(|| TraceError::invalid_state("Cannot export without image dimensions."))?;
        tracing::info!(
            target: "tracegraph::editor",
            nodes = self.graph.node_count(),
            paths = self.paths.len(),
            "Project exported"
        );
        Ok(ProjectDocument {
            image_width: dims.width,
            image_height: dims.height,
            nodes: self.graph.nodes().to_vec(),
            edges: self.graph.edges().to_vec(),
            paths: self.paths.paths().to_vec(),
        })
    }

    /// The current project as pretty-printed JSON.
    pub fn export_json(&self) -> TraceResult<String> {
        self.export_document()?.to_json_pretty()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Figures for one path.
    pub fn path_stats(&self, path_id: &str) -> TraceResult<PathStats> {
        let path = self.paths.require(path_id)?;
        Ok(self.stats_of(path))
    }

    /// Figures for every path, in creation order.
    pub fn all_path_stats(&self) -> Vec<PathStats> {
        self.paths.paths().iter().map(|p| self.stats_of(p)).collect()
    }

    fn stats_of(&self, path: &Path) -> PathStats {
        let total_weight = path
            .node_ids
            .windows(2)
            .filter_map(|w| self.graph.find_edge(&w[0], &w[1]))
            .map(|e| e.weight.value())
            .sum();
        PathStats {
            path_id: path.path_id.clone(),
            label: path.label.clone(),
            nodes: path.len(),
            edges: path.edge_count(),
            total_weight,
            visible: path.visible,
        }
    }

    /// Cheapest route between two nodes, without touching any path.
    pub fn shortest_route(&self, from: &str, to: &str) -> TraceResult<Route> {
        for id in [from, to] {
            if !self.graph.contains_node(id) {
                return Err(TraceError::node_not_found(id));
            }
        }
        self.graph.shortest_path(from, to).ok_or_else(|| TraceError::NoRoute {
            from: from.to_string(),
            to: to.to_string(),
        })
    }
}
