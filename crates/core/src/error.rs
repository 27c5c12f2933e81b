//! Error taxonomy for tracegraph.
//!
//! Every error is local and recoverable: it aborts only the attempted
//! operation and leaves editor state untouched. [`TraceError::kind`] gives the
//! notification layer a stable, distinguishable category.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result alias used across tracegraph crates.
pub type TraceResult<T> = Result<T, TraceError>;

/// The graph entity an error refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntityRef {
    /// A node, by id.
    Node {
        /// Node id.
        id: String,
    },
    /// An edge, by its endpoints.
    Edge {
        /// One endpoint.
        a: String,
        /// The other endpoint.
        b: String,
    },
}

impl EntityRef {
    /// Reference a node.
    pub fn node(id: impl Into<String>) -> Self {
        EntityRef::Node { id: id.into() }
    }

    /// Reference an edge.
    pub fn edge(a: impl Into<String>, b: impl Into<String>) -> Self {
        EntityRef::Edge {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityRef::Node { id } => write!(f, "Node {}", id),
            EntityRef::Edge { a, b } => write!(f, "Edge {}-{}", a, b),
        }
    }
}

/// Errors raised by editor operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TraceError {
    /// Malformed interchange document (or an export with no known dimensions).
    #[error("Invalid project: {reason}")]
    Validation {
        /// What was wrong.
        reason: String,
    },

    /// Delete/disconnect of a node or edge still walked by at least one path.
    #[error("{entity} used in saved paths: {}", .paths.join(", "))]
    ProtectedEntity {
        /// The entity that could not be removed.
        entity: EntityRef,
        /// Labels of the blocking paths.
        paths: Vec<String>,
    },

    /// Adjacent extend with no direct edge to the target.
    #[error("Cannot append {to}: no edge between {from} and {to}")]
    InvalidAppend {
        /// Active end node.
        from: String,
        /// Requested target.
        to: String,
    },

    /// Shortest-path extend to an unreachable target.
    #[error("No path in graph between {from} and {to}")]
    NoRoute {
        /// Active end node.
        from: String,
        /// Requested target.
        to: String,
    },

    /// Endpoint-selection click on a node that is not an endpoint.
    #[error("Select one of the path endpoints ({node} is not an endpoint)")]
    InvalidEndpointSelection {
        /// The clicked node.
        node: String,
    },

    /// Unknown node id.
    #[error("Node not found: {id}")]
    NodeNotFound {
        /// Node id.
        id: String,
    },

    /// No edge between the given nodes.
    #[error("Edge not found: {a}-{b}")]
    EdgeNotFound {
        /// One endpoint.
        a: String,
        /// The other endpoint.
        b: String,
    },

    /// Unknown path id.
    #[error("Path not found: {id}")]
    PathNotFound {
        /// Path id.
        id: String,
    },

    /// The operation is not valid in the current edit-session state.
    #[error("Invalid state: {reason}")]
    InvalidState {
        /// Why the operation was refused.
        reason: String,
    },

    /// Bad argument (non-finite coordinate, unparseable config, ...).
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Details.
        message: String,
    },

    /// JSON encoding/decoding failure.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Details.
        message: String,
    },

    /// Filesystem failure.
    #[error("I/O error: {message}")]
    Io {
        /// Details.
        message: String,
    },
}

/// Stable category of a [`TraceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// See [`TraceError::Validation`].
    ValidationError,
    /// See [`TraceError::ProtectedEntity`].
    ProtectedEntity,
    /// See [`TraceError::InvalidAppend`].
    InvalidAppend,
    /// See [`TraceError::NoRoute`].
    NoRoute,
    /// See [`TraceError::InvalidEndpointSelection`].
    InvalidEndpointSelection,
    /// Node, edge or path lookup failed.
    NotFound,
    /// See [`TraceError::InvalidState`].
    InvalidState,
    /// See [`TraceError::InvalidInput`].
    InvalidInput,
    /// See [`TraceError::Serialization`].
    Serialization,
    /// See [`TraceError::Io`].
    Io,
    /// A command produced an output of the wrong shape.
    Internal,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl TraceError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TraceError::Validation { .. } => ErrorKind::ValidationError,
            TraceError::ProtectedEntity { .. } => ErrorKind::ProtectedEntity,
            TraceError::InvalidAppend { .. } => ErrorKind::InvalidAppend,
            TraceError::NoRoute { .. } => ErrorKind::NoRoute,
            TraceError::InvalidEndpointSelection { .. } => ErrorKind::InvalidEndpointSelection,
            TraceError::NodeNotFound { .. }
            | TraceError::EdgeNotFound { .. }
            | TraceError::PathNotFound { .. } => ErrorKind::NotFound,
            TraceError::InvalidState { .. } => ErrorKind::InvalidState,
            TraceError::InvalidInput { .. } => ErrorKind::InvalidInput,
            TraceError::Serialization { .. } => ErrorKind::Serialization,
            TraceError::Io { .. } => ErrorKind::Io,
        }
    }

    /// Validation failure.
    pub fn validation(reason: impl Into<String>) -> Self {
        TraceError::Validation {
            reason: reason.into(),
        }
    }

    /// Invalid argument.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        TraceError::InvalidInput {
            message: message.into(),
        }
    }

    /// Operation refused in the current session state.
    pub fn invalid_state(reason: impl Into<String>) -> Self {
        TraceError::InvalidState {
            reason: reason.into(),
        }
    }

    /// Unknown node.
    pub fn node_not_found(id: impl Into<String>) -> Self {
        TraceError::NodeNotFound { id: id.into() }
    }

    /// Unknown path.
    pub fn path_not_found(id: impl Into<String>) -> Self {
        TraceError::PathNotFound { id: id.into() }
    }

    /// Missing edge.
    pub fn edge_not_found(a: impl Into<String>, b: impl Into<String>) -> Self {
        TraceError::EdgeNotFound {
            a: a.into(),
            b: b.into(),
        }
    }
}

impl From<serde_json::Error> for TraceError {
    fn from(e: serde_json::Error) -> Self {
        TraceError::Serialization {
            message: e.to_string(),
        }
    }
}

impl From<std::io::Error> for TraceError {
    fn from(e: std::io::Error) -> Self {
        TraceError::Io {
            message: e.to_string(),
        }
    }
}
