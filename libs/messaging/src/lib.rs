//! # Cherry Cluster Messaging
//!
//! The per-message routing record of the cherry cluster protocol. A sender
//! builds an [`Envelope`] (locally, or from a decoded [`ClusterPacket`]),
//! publishes it on a subject computed by the `routing` crate, and the
//! receiving side's dispatch layer resolves the envelope's target address
//! to route it to the correct actor instance.
//!
//! The envelope carries routing metadata and payload only; executing the
//! named handler and decoding cluster payload bytes belong to the dispatch
//! layer.

pub mod envelope;
pub mod packet;
pub mod payload;
pub mod session;

// Re-export commonly used types
pub use envelope::Envelope;
pub use packet::ClusterPacket;
pub use payload::Payload;
pub use session::Session;

pub use routing::{ActorPath, AddressFormatError, AddressResolver};
