//! Parse/format properties over generated addresses.

use proptest::prelude::*;
use routing::AddressResolver;

proptest! {
    #[test]
    fn parent_path_round_trips(
        node in "[A-Za-z0-9_-]{1,12}",
        actor in "[A-Za-z0-9_-]{1,12}",
    ) {
        let raw = format!("{}.{}", node, actor);
        let resolver = AddressResolver::new();

        let path = resolver.parse(&raw).unwrap();
        prop_assert_eq!(&path.node_id, &node);
        prop_assert_eq!(&path.actor_id, &actor);
        prop_assert!(path.is_parent());
        prop_assert_eq!(path.to_string(), raw);
    }

    #[test]
    fn child_path_round_trips(
        node in "[A-Za-z0-9_-]{1,12}",
        actor in "[A-Za-z0-9_-]{1,12}",
        child in "[A-Za-z0-9_-]{1,12}",
    ) {
        let raw = format!("{}.{}.{}", node, actor, child);
        let resolver = AddressResolver::new();

        let path = resolver.parse(&raw).unwrap();
        prop_assert_eq!(&path.child_id, &child);
        prop_assert!(path.is_child());
        prop_assert_eq!(path.to_string(), raw);
    }

    #[test]
    fn four_segments_always_fail(
        a in "[A-Za-z0-9_-]{1,8}",
        b in "[A-Za-z0-9_-]{1,8}",
        c in "[A-Za-z0-9_-]{1,8}",
        d in "[A-Za-z0-9_-]{1,8}",
    ) {
        let raw = format!("{}.{}.{}.{}", a, b, c, d);
        prop_assert!(AddressResolver::new().parse(&raw).is_err());
    }

    #[test]
    fn separator_free_input_always_fails(raw in "[A-Za-z0-9_-]{1,24}") {
        prop_assert!(AddressResolver::new().parse(&raw).is_err());
    }
}
