//! Paths over the graph and the protection they impose on it.

pub mod protection;
pub mod registry;

pub use protection::ProtectionIndex;
pub use registry::PathRegistry;
