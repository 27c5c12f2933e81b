//! Command results.

use tracegraph_core::{Dimensions, Edge, Node, Path, Weight};
use tracegraph_engine::{
    DimensionMismatch, EditState, ExtendOutcome, ImportReport, PathEnd, PathStats, Route,
};

/// Snapshot of the editor for status lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    /// Node count.
    pub nodes: usize,
    /// Edge count.
    pub edges: usize,
    /// Path count.
    pub paths: usize,
    /// Session state.
    pub state: EditState,
    /// Undo depth.
    pub undo_depth: usize,
    /// Redo depth.
    pub redo_depth: usize,
    /// Loaded image size.
    pub image: Option<Dimensions>,
    /// Size declared by the imported document.
    pub expected_image: Option<Dimensions>,
}

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Nothing to report.
    Unit,
    /// A yes/no answer (edge created, label changed, ...).
    Bool(bool),
    /// A node.
    Node(Node),
    /// A removed edge.
    Edge(Edge),
    /// An edge weight after a change.
    Weight(Weight),
    /// Stored coordinates after a move.
    Moved {
        /// Stored x.
        x: f64,
        /// Stored y.
        y: f64,
    },
    /// A path.
    Path(Path),
    /// The selected growth end.
    Endpoint(PathEnd),
    /// The session state after a change.
    State(EditState),
    /// What an extend did.
    Extended(ExtendOutcome),
    /// Undo/redo: whether a step was taken.
    Stepped(bool),
    /// Image recorded, possibly with a warning.
    ImageLoaded(Option<DimensionMismatch>),
    /// Import summary.
    Imported(ImportReport),
    /// JSON text.
    Json(String),
    /// A route.
    Route(Route),
    /// All nodes.
    Nodes(Vec<Node>),
    /// All edges.
    Edges(Vec<Edge>),
    /// All paths.
    Paths(Vec<PathStats>),
    /// Editor status.
    Status(Status),
}
