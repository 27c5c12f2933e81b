//! Error conversion from engine errors.
//!
//! Maps [`TraceError`] onto the executor's [`Error`], keeping every detail
//! the notification sink needs.

use tracegraph_core::TraceError;

use crate::Error;

/// Convert a TraceError to an executor Error.
impl From<TraceError> for Error {
    fn from(err: TraceError) -> Self {
        match err {
            TraceError::Validation { reason } => Error::Validation { reason },

            // Protection: entity rendered the way the sink shows it
            TraceError::ProtectedEntity { entity, paths } => Error::ProtectedEntity {
                entity: entity.to_string(),
                paths,
            },

            // Path growth
            TraceError::InvalidAppend { from, to } => Error::InvalidAppend { from, to },
            TraceError::NoRoute { from, to } => Error::NoRoute { from, to },
            TraceError::InvalidEndpointSelection { node } => {
                Error::InvalidEndpointSelection { node }
            }

            // Lookups
            TraceError::NodeNotFound { id } => Error::NodeNotFound { id },
            TraceError::EdgeNotFound { a, b } => Error::EdgeNotFound {
                edge: format!("{}-{}", a, b),
            },
            TraceError::PathNotFound { id } => Error::PathNotFound { id },

            TraceError::InvalidState { reason } => Error::InvalidState { reason },
            TraceError::InvalidInput { message } => Error::InvalidInput { reason: message },

            // System errors
            TraceError::Serialization { message } => Error::Serialization { reason: message },
            TraceError::Io { message } => Error::Io { reason: message },
        }
    }
}

/// Convert a TraceResult to an executor Result.
pub fn convert_result<T>(result: tracegraph_core::TraceResult<T>) -> crate::Result<T> {
    result.map_err(Error::from)
}
