//! Core types for tracegraph
//!
//! This crate defines what every other layer shares:
//! - Node, Edge, Path: the overlay data model
//! - Weight: the discrete edge-weight scale
//! - TraceError / TraceResult: the error taxonomy
//! - EditorConfig: tunables loaded from TOML

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod types;
pub mod weight;

pub use config::EditorConfig;
pub use error::{EntityRef, ErrorKind, TraceError, TraceResult};
pub use types::{Dimensions, Edge, EdgeKey, Node, Path};
pub use weight::{RawWeight, StepDirection, Weight};
