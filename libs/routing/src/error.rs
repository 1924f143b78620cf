//! Actor path errors.

use thiserror::Error;

/// Raised when a textual actor path cannot be split into valid segments.
///
/// Always returned as a recoverable value so the transport loader or
/// dispatch layer decides whether to drop or log the message. `Clone` and
/// `PartialEq` are derived so that recomputed failures for the same input
/// compare identical across callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressFormatError {
    /// The path was the empty string
    #[error("empty actor path")]
    Empty,

    /// No `.` separator, so there is no NodeID/ActorID split
    #[error("actor path {path:?} is missing a '.' separator (expected NodeID.ActorID)")]
    MissingSeparator { path: String },

    /// More than three `.`-separated segments
    #[error("actor path {path:?} has more than three segments")]
    TooManySegments { path: String },
}

impl AddressFormatError {
    /// Create a MissingSeparator error for the given path
    pub fn missing_separator(path: impl Into<String>) -> Self {
        Self::MissingSeparator { path: path.into() }
    }

    /// Create a TooManySegments error for the given path
    pub fn too_many_segments(path: impl Into<String>) -> Self {
        Self::TooManySegments { path: path.into() }
    }
}
