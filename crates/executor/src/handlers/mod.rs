//! Command handlers, grouped by area.
//!
//! Each handler calls one [`Editor`](tracegraph_engine::Editor) operation
//! and wraps the result in an [`Output`](crate::Output).

pub mod graph;
pub mod paths;
pub mod project;
