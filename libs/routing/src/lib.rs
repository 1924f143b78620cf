//! # Cherry Cluster Routing
//!
//! Addressing primitives for the cherry cluster protocol: textual actor
//! paths and their structured form, a concurrent parse cache, and the
//! deterministic subject names cluster nodes publish and subscribe on.
//!
//! Independently deployed nodes must agree on every string this crate
//! produces, so parsing and naming are pure over their inputs and carry no
//! node-local state beyond the resolver's cache.

pub mod address;
pub mod error;
pub mod node;
pub mod resolver;
pub mod subjects;

// Re-export commonly used types
pub use address::{child_path, parent_path, ActorPath, PATH_SEPARATOR};
pub use error::AddressFormatError;
pub use node::NodeInfo;
pub use resolver::AddressResolver;
pub use subjects::{local_subject, remote_subject, remote_type_subject, reply_subject};

/// Result type for routing operations
pub type RoutingResult<T> = std::result::Result<T, AddressFormatError>;
