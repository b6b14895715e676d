//! Property tests for tree invariants
//!
//! Random insert/delete sequences must keep search order, AVL balance and
//! node counts, and every iterator style must visit each node exactly once.

use std::collections::BTreeSet;

use arbor_traverse::{Direction, TraversalStyle, TreeIter};
use arbor_tree::{AvlTree, SearchTree, TreeArena, height, size};
use proptest::prelude::*;

fn keys() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,3}", 0..64)
}

fn any_style() -> impl Strategy<Value = TraversalStyle> {
    prop_oneof![
        Just(TraversalStyle::InOrder),
        Just(TraversalStyle::PreOrder),
        Just(TraversalStyle::PostOrder),
        Just(TraversalStyle::BreadthFirst),
    ]
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Forward), Just(Direction::Backward)]
}

proptest! {
    #[test]
    fn test_in_order_is_strictly_ascending(values in keys()) {
        let arena = TreeArena::new();
        let mut tree = SearchTree::new(&arena);
        let mut expected = BTreeSet::new();
        for value in &values {
            let inserted = tree.insert(value).is_ok();
            prop_assert_eq!(inserted, expected.insert(value.as_str()));
        }

        let walked: Vec<&str> = TreeIter::new(tree.root(), TraversalStyle::InOrder, Direction::Forward)
            .map(|n| n.value())
            .collect();
        prop_assert_eq!(walked, expected.into_iter().collect::<Vec<_>>());
        prop_assert_eq!(size(tree.root()), tree.len());
    }

    #[test]
    fn test_avl_stays_balanced(values in keys(), removals in keys()) {
        let arena = TreeArena::new();
        let mut tree = AvlTree::new(&arena);
        let mut expected = BTreeSet::new();

        for value in &values {
            let inserted = tree.insert(value).is_ok();
            prop_assert_eq!(inserted, expected.insert(value.clone()));
            prop_assert!(tree.validate().is_ok());
        }
        for value in &removals {
            let before = size(tree.root());
            let removed = tree.remove(value).is_ok();
            prop_assert_eq!(removed, expected.remove(value));
            prop_assert_eq!(size(tree.root()), if removed { before - 1 } else { before });
            prop_assert!(tree.validate().is_ok());
        }

        prop_assert_eq!(tree.len(), expected.len());
        // An AVL tree of n nodes is no taller than 1.44 * log2(n + 2).
        let bound = 1.45 * ((tree.len() + 2) as f64).log2();
        prop_assert!((height(tree.root()) as f64) < bound);
    }

    #[test]
    fn test_search_tree_size_round_trip(values in keys(), removals in keys()) {
        let arena = TreeArena::new();
        let mut tree = SearchTree::new(&arena);
        let mut expected = BTreeSet::new();

        for value in &values {
            let inserted = tree.insert(value).is_ok();
            prop_assert_eq!(inserted, expected.insert(value.clone()));
            prop_assert_eq!(size(tree.root()), expected.len());
        }
        for value in &removals {
            let before = size(tree.root());
            let removed = tree.remove(value).is_ok();
            prop_assert_eq!(removed, expected.remove(value));
            prop_assert_eq!(size(tree.root()), if removed { before - 1 } else { before });
        }

        prop_assert_eq!(tree.len(), expected.len());
        let walked: Vec<&str> = TreeIter::new(tree.root(), TraversalStyle::InOrder, Direction::Forward)
            .map(|n| n.value())
            .collect();
        prop_assert_eq!(walked, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_search_tree_duplicate_insert_is_idempotent(values in keys(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!values.is_empty());
        let arena = TreeArena::new();
        let mut tree = SearchTree::new(&arena);
        for value in &values {
            let _ = tree.insert(value);
        }
        let before = serde_json::to_string(&tree.root()).unwrap();
        let len = tree.len();

        let duplicate = pick.get(&values);
        prop_assert!(tree.insert(duplicate).is_err());

        prop_assert_eq!(serde_json::to_string(&tree.root()).unwrap(), before);
        prop_assert_eq!(tree.len(), len);
    }

    #[test]
    fn test_duplicate_insert_is_idempotent(values in keys(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!values.is_empty());
        let arena = TreeArena::new();
        let mut tree = AvlTree::new(&arena);
        for value in &values {
            let _ = tree.insert(value);
        }
        let before = serde_json::to_string(&tree.root()).unwrap();
        let len = tree.len();

        let duplicate = pick.get(&values);
        prop_assert!(tree.insert(duplicate).is_err());

        prop_assert_eq!(serde_json::to_string(&tree.root()).unwrap(), before);
        prop_assert_eq!(tree.len(), len);
    }

    #[test]
    fn test_iterator_exhaustion(values in keys(), style in any_style(), direction in any_direction()) {
        let arena = TreeArena::new();
        let mut tree = AvlTree::new(&arena);
        for value in &values {
            let _ = tree.insert(value);
        }
        let total = size(tree.root());

        let mut iter = TreeIter::new(tree.root(), style, direction);
        prop_assert_eq!(iter.available(), total);

        let mut seen = BTreeSet::new();
        while iter.has_next() {
            let node = iter.next();
            prop_assert!(node.is_some());
            prop_assert!(seen.insert(node.map(|n| n.value())));
        }
        prop_assert_eq!(seen.len(), total);
        prop_assert_eq!(iter.yielded(), total);
        prop_assert_eq!(iter.available(), 0);
        prop_assert!(!iter.has_next());

        iter.reset();
        prop_assert_eq!(iter.available(), total);
        prop_assert_eq!(iter.yielded(), 0);
        prop_assert_eq!(iter.by_ref().count(), total);
        prop_assert_eq!(iter.yielded(), total);
    }
}
