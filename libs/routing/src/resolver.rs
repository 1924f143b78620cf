//! Actor path resolution with a concurrent parse cache.
//!
//! Hot dispatch paths resolve the same handful of target strings over and
//! over, so successful parses are memoized in a concurrent map keyed by the
//! raw input. Failed parses are NOT cached and are recomputed on every
//! call. Entries are never evicted; they live for the process lifetime.
//!
//! The resolver is an explicitly constructed instance injected into its
//! callers rather than a process-wide singleton, which keeps tests isolated
//! and leaves room to bound the cache later.

use dashmap::DashMap;
use tracing::trace;

use crate::address::{ActorPath, PATH_SEPARATOR};
use crate::error::AddressFormatError;
use crate::RoutingResult;

/// Parses textual actor paths and owns the address cache.
///
/// Safe for concurrent use from many callers. Concurrent parses of the same
/// unseen path may each do the work independently, but every caller observes
/// the same outcome and never a partially written entry.
#[derive(Debug, Default)]
pub struct AddressResolver {
    cache: DashMap<String, ActorPath>,
}

impl AddressResolver {
    /// Create a resolver with an empty cache
    pub fn new() -> Self {
        Self {
            cache: DashMap::new(),
        }
    }

    /// Parse a textual path into its structured form.
    ///
    /// Fails with [`AddressFormatError`] when the path is empty, has no
    /// separator, or has more than three segments.
    pub fn parse(&self, path: &str) -> RoutingResult<ActorPath> {
        if path.is_empty() {
            return Err(AddressFormatError::Empty);
        }

        if let Some(cached) = self.cache.get(path) {
            return Ok(cached.clone());
        }

        let parsed = parse_path(path)?;
        trace!(path, "caching parsed actor path");
        self.cache.insert(path.to_string(), parsed.clone());
        Ok(parsed)
    }

    /// Number of cached parse results
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

// All offsets below are byte indices into the slice they were computed
// from; the remainder is re-sliced before the second scan so no offset is
// ever applied against a different indexing of the input.
fn parse_path(path: &str) -> RoutingResult<ActorPath> {
    let first = path
        .find(PATH_SEPARATOR)
        .ok_or_else(|| AddressFormatError::missing_separator(path))?;
    let node_id = &path[..first];
    let rest = &path[first + 1..];

    match rest.find(PATH_SEPARATOR) {
        None => Ok(ActorPath::new(node_id, rest)),
        Some(second) => {
            let actor_id = &rest[..second];
            let child_id = &rest[second + 1..];
            if child_id.contains(PATH_SEPARATOR) {
                return Err(AddressFormatError::too_many_segments(path));
            }
            Ok(ActorPath::with_child(node_id, actor_id, child_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_parse_two_segments() {
        let resolver = AddressResolver::new();
        let path = resolver.parse("node1.actorA").unwrap();

        assert_eq!(path.node_id, "node1");
        assert_eq!(path.actor_id, "actorA");
        assert_eq!(path.child_id, "");
        assert!(path.is_parent());
        assert!(!path.is_child());
    }

    #[test]
    fn test_parse_three_segments() {
        let resolver = AddressResolver::new();
        let path = resolver.parse("node1.actorA.child1").unwrap();

        assert_eq!(path.node_id, "node1");
        assert_eq!(path.actor_id, "actorA");
        assert_eq!(path.child_id, "child1");
        assert!(path.is_child());
    }

    #[test]
    fn test_parse_empty_fails() {
        let resolver = AddressResolver::new();
        assert_eq!(resolver.parse(""), Err(AddressFormatError::Empty));
    }

    #[test]
    fn test_parse_no_separator_fails() {
        let resolver = AddressResolver::new();
        assert_eq!(
            resolver.parse("node1"),
            Err(AddressFormatError::missing_separator("node1"))
        );
    }

    #[test]
    fn test_parse_four_segments_fails() {
        let resolver = AddressResolver::new();
        assert_eq!(
            resolver.parse("a.b.c.d"),
            Err(AddressFormatError::too_many_segments("a.b.c.d"))
        );
    }

    #[test]
    fn test_empty_segments_are_accepted() {
        let resolver = AddressResolver::new();

        let trailing = resolver.parse("node1.").unwrap();
        assert_eq!(trailing.node_id, "node1");
        assert_eq!(trailing.actor_id, "");

        let leading = resolver.parse(".actorA").unwrap();
        assert_eq!(leading.node_id, "");
        assert_eq!(leading.actor_id, "actorA");
    }

    #[test]
    fn test_cache_hit_returns_equal_result() {
        let resolver = AddressResolver::new();

        let first = resolver.parse("game-1.room.10001").unwrap();
        assert_eq!(resolver.cache_size(), 1);

        let second = resolver.parse("game-1.room.10001").unwrap();
        assert_eq!(first, second);
        assert_eq!(resolver.cache_size(), 1);
    }

    #[test]
    fn test_failures_are_not_cached() {
        let resolver = AddressResolver::new();

        assert!(resolver.parse("no-separator").is_err());
        assert!(resolver.parse("a.b.c.d").is_err());
        assert_eq!(resolver.cache_size(), 0);

        // Same failures on retry
        assert_eq!(
            resolver.parse("no-separator"),
            Err(AddressFormatError::missing_separator("no-separator"))
        );
    }

    #[test]
    fn test_concurrent_parse_agrees() {
        let resolver = Arc::new(AddressResolver::new());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let resolver = Arc::clone(&resolver);
                thread::spawn(move || resolver.parse("node1.actorA.child1"))
            })
            .collect();

        let results: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().unwrap().unwrap())
            .collect();

        let expected = ActorPath::with_child("node1", "actorA", "child1");
        assert!(results.iter().all(|path| *path == expected));
        assert_eq!(resolver.cache_size(), 1);
    }

    #[test]
    fn test_round_trip() {
        let resolver = AddressResolver::new();
        for raw in ["node1.actorA", "node1.actorA.child1", "gate-1.player.9"] {
            let parsed = resolver.parse(raw).unwrap();
            assert_eq!(parsed.to_string(), raw);
        }
    }
}
