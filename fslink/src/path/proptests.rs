//! Property-based tests for the path grammar.

use super::grammar::{base, join, parent, strip_base, valid_path};
use super::types::LinkTargetPolicy;
use proptest::prelude::*;

// Segments that are never `.` or `..`.
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_.-]{1,12}".prop_filter("dot segment", |s| s != "." && s != "..")
}

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(segment_strategy(), 1..6).prop_map(|parts| parts.join("/"))
}

fn any_name_strategy() -> impl Strategy<Value = String> {
    "[a-z./]{0,12}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Generated paths satisfy the grammar.
    #[test]
    fn generated_paths_are_valid(path in path_strategy()) {
        prop_assert!(valid_path(&path));
    }

    // Joining valid paths yields a valid path.
    #[test]
    fn join_preserves_validity(dir in path_strategy(), name in path_strategy()) {
        prop_assert!(valid_path(&join(&dir, &name)));
    }

    // The root is the identity for join.
    #[test]
    fn join_root_identity(path in path_strategy()) {
        prop_assert_eq!(join(".", &path), path.clone());
        prop_assert_eq!(join(&path, "."), path);
    }

    // strip_base undoes join.
    #[test]
    fn strip_base_inverts_join(dir in path_strategy(), name in path_strategy()) {
        let full = join(&dir, &name);
        prop_assert_eq!(strip_base(&dir, &full), Some(name.as_str()));
    }

    // A directory is never the prefix of a sibling that merely shares its
    // leading characters.
    #[test]
    fn strip_base_respects_segment_boundary(dir in path_strategy(), tail in "[a-z]{1,4}") {
        let sibling = format!("{dir}{tail}");
        prop_assert_eq!(strip_base(&dir, &sibling), None);
    }

    // parent and base reassemble the path.
    #[test]
    fn parent_and_base_reassemble(path in path_strategy()) {
        prop_assert_eq!(join(parent(&path), base(&path)), path);
    }

    // The contained policy accepts exactly the valid paths.
    #[test]
    fn contained_policy_is_valid_path(name in any_name_strategy()) {
        prop_assert_eq!(LinkTargetPolicy::Contained.accepts(&name), valid_path(&name));
    }

    // Every target accepted under the contained policy is accepted under
    // the relative one, and absolute targets never are.
    #[test]
    fn relative_policy_widens_contained(name in any_name_strategy()) {
        if LinkTargetPolicy::Contained.accepts(&name) {
            prop_assert!(LinkTargetPolicy::Relative.accepts(&name));
        }
        if name.starts_with('/') {
            prop_assert!(!LinkTargetPolicy::Relative.accepts(&name));
        }
    }

    // Climbing targets are accepted under the relative policy.
    #[test]
    fn relative_policy_accepts_climbing(path in path_strategy(), ups in 1usize..4) {
        let target = format!("{}{path}", "../".repeat(ups));
        prop_assert!(LinkTargetPolicy::Relative.accepts(&target));
        prop_assert!(!LinkTargetPolicy::Contained.accepts(&target));
    }
}
