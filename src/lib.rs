//! tracegraph: weighted graph and path editing for image overlays.
//!
//! Nodes are placed on a reference image, joined by weighted undirected
//! edges, and traced into named paths that can be grown one edge at a time
//! or along the cheapest route. Every mutation is undoable and the whole
//! project round-trips through a JSON document.
//!
//! ```no_run
//! use tracegraph::{Project, StepDirection};
//!
//! let mut project = Project::new();
//! project.load_image(640, 480)?;
//! let a = project.add_node(20.0, 20.0)?.id;
//! let b = project.add_node(300.0, 40.0)?.id;
//! project.add_edge(&a, &b)?;
//! project.step_edge_weight(&a, &b, StepDirection::Up)?;
//! project.begin_path(&a)?;
//! project.shortest_path_extend(&b)?;
//! println!("{}", project.export_json()?);
//! # Ok::<(), tracegraph::Error>(())
//! ```

#![warn(clippy::all)]

mod types;

pub use types::*;

pub use tracegraph_engine::{Editor, GraphStore, PathRegistry, ProtectionIndex, Snapshot};
pub use tracegraph_executor::{
    CollectingNotifier, Command, Error, Executor, Level, Notice, Notifier, Output, Project,
    Status, TracingNotifier,
};

/// Result type for the public API.
pub type Result<T> = std::result::Result<T, Error>;
