//! Editing engine for tracegraph
//!
//! Owns the mutable graph and the paths derived from it, and keeps them
//! consistent under arbitrary interleavings of edits:
//! - GraphStore: nodes and weighted undirected edges
//! - PathRegistry / ProtectionIndex: named paths and what they pin
//! - ShortestPath: weighted routes across the whole graph
//! - PathEditSession: the interactive path-growth state machine
//! - SnapshotHistory: whole-state undo/redo
//! - Editor: the context object tying them together

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod editor;
pub mod graph;
pub mod history;
pub mod interchange;
pub mod paths;
pub mod session;

pub use editor::{DimensionMismatch, Editor, ImportReport, PathStats};
pub use graph::traversal::{GraphAlgorithm, Route, ShortestPath};
pub use graph::GraphStore;
pub use history::{Snapshot, SnapshotHistory};
pub use interchange::ProjectDocument;
pub use paths::{PathRegistry, ProtectionIndex};
pub use session::{EditState, ExtendOutcome, PathEditSession, PathEnd};
