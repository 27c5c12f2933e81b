//! Command execution layer for tracegraph
//!
//! Every editor operation is a [`Command`] value. The [`Executor`] runs
//! commands against one [`tracegraph_engine::Editor`] and returns an
//! [`Output`] or an [`Error`]. Failures and dimension warnings are also
//! pushed to a [`Notifier`] so a front end can surface them without
//! inspecting every result.
//!
//! [`Project`] layers typed methods over the executor for library use.

#![warn(clippy::all)]

pub mod api;
pub mod command;
pub mod convert;
pub mod error;
pub mod executor;
mod handlers;
pub mod notify;
pub mod output;

pub use api::Project;
pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use notify::{CollectingNotifier, Level, Notice, Notifier, TracingNotifier};
pub use output::{Output, Status};

/// Result type for executor operations.
pub type Result<T> = std::result::Result<T, Error>;
