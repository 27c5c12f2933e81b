//! Executor error type.

use thiserror::Error;
use tracegraph_core::ErrorKind;

/// Errors returned by [`Executor::execute`](crate::Executor::execute).
///
/// Each variant carries the human-readable text the notification sink
/// shows; [`Error::kind`] gives the category.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed import document.
    #[error("Invalid project: {reason}")]
    Validation {
        /// What was wrong.
        reason: String,
    },

    /// Node or edge still walked by saved paths.
    #[error("{entity} used in saved paths: {}", .paths.join(", "))]
    ProtectedEntity {
        /// Display form of the entity (`Node N1`, `Edge N1-N2`).
        entity: String,
        /// Labels of the blocking paths.
        paths: Vec<String>,
    },

    /// No direct edge to the target.
    #[error("Cannot append {to}: no edge between {from} and {to}")]
    InvalidAppend {
        /// Active end node.
        from: String,
        /// Requested target.
        to: String,
    },

    /// Target unreachable.
    #[error("No path in graph between {from} and {to}")]
    NoRoute {
        /// Active end node.
        from: String,
        /// Requested target.
        to: String,
    },

    /// Clicked node is not an endpoint of the active path.
    #[error("Select one of the path endpoints ({node} is not an endpoint)")]
    InvalidEndpointSelection {
        /// The clicked node.
        node: String,
    },

    /// Unknown node.
    #[error("Node not found: {id}")]
    NodeNotFound {
        /// Node id.
        id: String,
    },

    /// Unknown edge.
    #[error("Edge not found: {edge}")]
    EdgeNotFound {
        /// `a-b`.
        edge: String,
    },

    /// Unknown path.
    #[error("Path not found: {id}")]
    PathNotFound {
        /// Path id.
        id: String,
    },

    /// Operation not valid in the current session state.
    #[error("Invalid state: {reason}")]
    InvalidState {
        /// Why it was refused.
        reason: String,
    },

    /// Bad argument.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Details.
        reason: String,
    },

    /// JSON failure.
    #[error("Serialization error: {reason}")]
    Serialization {
        /// Details.
        reason: String,
    },

    /// Filesystem failure.
    #[error("I/O error: {reason}")]
    Io {
        /// Details.
        reason: String,
    },

    /// A command produced an output of the wrong shape.
    #[error("Internal error: {reason}")]
    Internal {
        /// Details.
        reason: String,
    },
}

impl Error {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation { .. } => ErrorKind::ValidationError,
            Error::ProtectedEntity { .. } => ErrorKind::ProtectedEntity,
            Error::InvalidAppend { .. } => ErrorKind::InvalidAppend,
            Error::NoRoute { .. } => ErrorKind::NoRoute,
            Error::InvalidEndpointSelection { .. } => ErrorKind::InvalidEndpointSelection,
            Error::NodeNotFound { .. } | Error::EdgeNotFound { .. } | Error::PathNotFound { .. } => {
                ErrorKind::NotFound
            }
            Error::InvalidState { .. } => ErrorKind::InvalidState,
            Error::InvalidInput { .. } => ErrorKind::InvalidInput,
            Error::Serialization { .. } => ErrorKind::Serialization,
            Error::Io { .. } => ErrorKind::Io,
            Error::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Shorthand for an unexpected-output error.
    pub fn unexpected_output(command: &str) -> Self {
        Error::Internal {
            reason: format!("Unexpected output for {}", command),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io {
            reason: e.to_string(),
        }
    }
}
