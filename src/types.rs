//! Public types for the tracegraph API.
//!
//! This module re-exports types from the internal crates under one path.

// ============================================================================
// Data model
// ============================================================================

// Overlay entities
pub use tracegraph_core::{Dimensions, Edge, EdgeKey, Node, Path};

// Edge weights
pub use tracegraph_core::{RawWeight, StepDirection, Weight};

// Configuration
pub use tracegraph_core::EditorConfig;

// ============================================================================
// Editing
// ============================================================================

// Session and extension results
pub use tracegraph_engine::{EditState, ExtendOutcome, PathEnd};

// Queries and reports
pub use tracegraph_engine::{DimensionMismatch, ImportReport, PathStats, Route};

// Interchange document
pub use tracegraph_engine::ProjectDocument;

// ============================================================================
// Errors
// ============================================================================

pub use tracegraph_core::{ErrorKind, TraceError};
