//! Argument payloads.
//!
//! A local send carries an already-decoded value shared as
//! `Arc<dyn Any + Send + Sync>`; a cluster-origin send carries the raw,
//! still-undecoded bytes from the wire packet. Decoding raw bytes into a
//! typed value is the dispatch layer's responsibility, never the
//! envelope's.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use bytes::Bytes;

/// Argument payload of an envelope
#[derive(Clone, Default)]
pub enum Payload {
    /// No arguments
    #[default]
    Empty,
    /// Decoded value for a local send
    Value(Arc<dyn Any + Send + Sync>),
    /// Raw undecoded bytes from a cluster packet
    Raw(Bytes),
}

impl Payload {
    /// Wrap a decoded value for a local send
    pub fn value<T: Any + Send + Sync>(value: T) -> Self {
        Payload::Value(Arc::new(value))
    }

    /// Wrap raw cluster payload bytes
    pub fn raw(bytes: impl Into<Bytes>) -> Self {
        Payload::Raw(bytes.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Payload::Raw(_))
    }

    /// Raw bytes, if this is a cluster-origin payload
    pub fn as_raw(&self) -> Option<&Bytes> {
        match self {
            Payload::Raw(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Downcast a decoded value to its concrete type
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        match self {
            Payload::Value(value) => Arc::clone(value).downcast::<T>().ok(),
            _ => None,
        }
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Empty => f.write_str("Payload::Empty"),
            Payload::Value(_) => f.write_str("Payload::Value(..)"),
            Payload::Raw(bytes) => write!(f, "Payload::Raw({} bytes)", bytes.len()),
        }
    }
}
