//! Structured actor addresses.
//!
//! An actor is addressed as `NodeID.ActorID` or `NodeID.ActorID.ChildID`.
//! The two-segment form targets a node-level actor; the three-segment form
//! targets a child actor nested under it. No other segment count is valid.

use std::fmt;

/// Separator between address segments
pub const PATH_SEPARATOR: char = '.';

/// Structured identity of a routing target.
///
/// Immutable once constructed; produced either directly from components or
/// by [`AddressResolver::parse`](crate::resolver::AddressResolver::parse).
/// The `Display` impl renders the canonical dot-joined path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActorPath {
    /// Cluster node hosting the target actor
    pub node_id: String,
    /// Actor instance or type root on that node
    pub actor_id: String,
    /// Child actor nested under `actor_id`; empty means no child
    pub child_id: String,
}

impl ActorPath {
    /// Two-segment address targeting a node-level actor
    pub fn new(node_id: impl Into<String>, actor_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            actor_id: actor_id.into(),
            child_id: String::new(),
        }
    }

    /// Three-segment address targeting a child actor
    pub fn with_child(
        node_id: impl Into<String>,
        actor_id: impl Into<String>,
        child_id: impl Into<String>,
    ) -> Self {
        Self {
            node_id: node_id.into(),
            actor_id: actor_id.into(),
            child_id: child_id.into(),
        }
    }

    /// True when the address targets a node-level actor (no child segment)
    pub fn is_parent(&self) -> bool {
        self.child_id.is_empty()
    }

    /// True when the address targets a child actor
    pub fn is_child(&self) -> bool {
        !self.child_id.is_empty()
    }
}

impl fmt::Display for ActorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.child_id.is_empty() {
            write!(f, "{}{}{}", self.node_id, PATH_SEPARATOR, self.actor_id)
        } else {
            write!(
                f,
                "{}{}{}{}{}",
                self.node_id, PATH_SEPARATOR, self.actor_id, PATH_SEPARATOR, self.child_id
            )
        }
    }
}

/// Build the canonical two-segment path string
pub fn parent_path(node_id: &str, actor_id: &str) -> String {
    let mut path = String::with_capacity(node_id.len() + 1 + actor_id.len());
    path.push_str(node_id);
    path.push(PATH_SEPARATOR);
    path.push_str(actor_id);
    path
}

/// Build the canonical three-segment path string.
///
/// Falls back to the two-segment form when `child_id` is empty, so callers
/// can thread an optional child through without branching.
pub fn child_path(node_id: &str, actor_id: &str, child_id: &str) -> String {
    if child_id.is_empty() {
        return parent_path(node_id, actor_id);
    }
    let mut path = String::with_capacity(node_id.len() + actor_id.len() + child_id.len() + 2);
    path.push_str(node_id);
    path.push(PATH_SEPARATOR);
    path.push_str(actor_id);
    path.push(PATH_SEPARATOR);
    path.push_str(child_id);
    path
}
