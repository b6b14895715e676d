//! Integration tests for tree building and traversal
//!
//! Builds trees through the public handles and primitives, then checks
//! them through iterators, crawlers and the renderers.

use std::ops::ControlFlow;

use arbor_traverse::{
    BreadthFirstCrawler, DepthFirstCrawler, Direction, TraversalOptions, TraversalState,
    TraversalStyle, TreeIter,
};
use arbor_tree::render::{prefix, prefix_with_balance};
use arbor_tree::{AvlTree, NodeRef, SearchTree, Side, TreeArena, attach_child, size};

fn values(iter: TreeIter<'_>) -> Vec<&str> {
    iter.map(|n| n.value()).collect()
}

/// Builds `( + ( - 9 ( sqr 2 ) ) ( * ( / 8 4 ) 7 ) )` by explicit attachment.
fn expression_tree(arena: &TreeArena) -> NodeRef<'_> {
    let plus = arena.node("+");
    let minus = arena.node("-");
    let times = arena.node("*");
    let sqr = arena.node("sqr");
    let div = arena.node("/");

    attach_child(minus, plus, Side::Left).unwrap();
    attach_child(times, plus, Side::Right).unwrap();
    attach_child(arena.node("9"), minus, Side::Left).unwrap();
    attach_child(sqr, minus, Side::Right).unwrap();
    attach_child(arena.node("2"), sqr, Side::Right).unwrap();
    attach_child(div, times, Side::Left).unwrap();
    attach_child(arena.node("7"), times, Side::Right).unwrap();
    attach_child(arena.node("8"), div, Side::Left).unwrap();
    attach_child(arena.node("4"), div, Side::Right).unwrap();
    plus
}

mod search_tree {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn orders_seven_values() {
        let arena = TreeArena::new();
        let mut tree = SearchTree::new(&arena);
        for value in ["D", "B", "F", "A", "C", "E", "G"] {
            tree.insert(value).unwrap();
        }

        let iter = |style| TreeIter::new(tree.root(), style, Direction::Forward);
        assert_eq!(values(iter(TraversalStyle::InOrder)), ["A", "B", "C", "D", "E", "F", "G"]);
        assert_eq!(values(iter(TraversalStyle::PreOrder)), ["D", "B", "A", "C", "F", "E", "G"]);
        assert_eq!(values(iter(TraversalStyle::PostOrder)), ["A", "C", "B", "E", "G", "F", "D"]);
    }

    #[test]
    fn keeps_shape_of_insertion_order() {
        let arena = TreeArena::new();
        let mut tree = SearchTree::new(&arena);
        for value in ["N", "F", "U", "D", "G", "P", "X", "J", "O", "R"] {
            tree.insert(value).unwrap();
        }

        insta::assert_snapshot!(prefix(tree.root()), @"( N ( F D ( G J ) ) ( U ( P O R ) X ) )");
    }

    #[test]
    fn delete_missing_leaves_tree_unchanged() {
        let arena = TreeArena::new();
        let mut tree = SearchTree::new(&arena);
        for value in ["N", "F", "U", "D", "G"] {
            tree.insert(value).unwrap();
        }
        let before = serde_json::to_value(tree.root().unwrap()).unwrap();

        assert!(tree.remove("A").is_err());

        assert_eq!(serde_json::to_value(tree.root().unwrap()).unwrap(), before);
        assert_eq!(tree.len(), 5);
    }
}

mod avl_tree {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rebalances_right_heavy_insertions() {
        let arena = TreeArena::new();
        let mut tree = AvlTree::new(&arena);
        for value in ["N", "F", "U", "P", "X", "Z"] {
            tree.insert(value).unwrap();
        }

        let root = tree.root().unwrap();
        assert_eq!(root.value(), "U");
        let left = root.left().unwrap();
        let right = root.right().unwrap();
        assert_eq!(left.value(), "N");
        assert_eq!(left.left().map(|n| n.value()), Some("F"));
        assert_eq!(left.right().map(|n| n.value()), Some("P"));
        assert_eq!(right.value(), "X");
        assert_eq!(right.right().map(|n| n.value()), Some("Z"));

        for node in TreeIter::new(tree.root(), TraversalStyle::PreOrder, Direction::Forward) {
            assert!((-1..=1).contains(&node.balance()));
        }
    }

    #[test]
    fn serializes_balanced_tree() {
        let arena = TreeArena::new();
        let mut tree = AvlTree::new(&arena);
        for value in ["N", "F", "U"] {
            tree.insert(value).unwrap();
        }

        insta::assert_json_snapshot!(tree.root().unwrap(), @r###"
        {
          "value": "N",
          "balance": 0,
          "left": {
            "value": "F",
            "balance": 0
          },
          "right": {
            "value": "U",
            "balance": 0
          }
        }
        "###);
    }

    #[test]
    fn delete_rotates_and_keeps_order() {
        let arena = TreeArena::new();
        let mut tree = AvlTree::new(&arena);
        for value in ["N", "F", "U", "B", "J", "X", "G", "L"] {
            tree.insert(value).unwrap();
        }

        tree.remove("X").unwrap();

        assert_eq!(
            prefix_with_balance(tree.root()),
            "( J[0] ( F[0] B[0] G[0] ) ( N[0] L[0] U[0] ) )"
        );
        assert_eq!(
            values(TreeIter::new(tree.root(), TraversalStyle::InOrder, Direction::Forward)),
            ["B", "F", "G", "J", "L", "N", "U"]
        );
    }
}

mod crawlers {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn breadth_first_visits_expression_by_level() {
        let arena = TreeArena::new();
        let root = expression_tree(&arena);
        let mut crawler = BreadthFirstCrawler::<Vec<&str>, _>::new(Some(root), |ctx| {
            let value = ctx.value();
            ctx.data_mut().push(value);
            ControlFlow::Continue(())
        });

        assert!(crawler.run(Vec::new()));
        assert_eq!(crawler.data().join(" "), "+ - * 9 sqr / 7 2 8 4");
    }

    #[test]
    fn depth_first_renders_prefix_notation() {
        let arena = TreeArena::new();
        let root = expression_tree(&arena);
        let mut crawler = DepthFirstCrawler::<Vec<&str>, _>::new(Some(root), |ctx| {
            if ctx.state() == TraversalState::FromParent {
                let value = ctx.value();
                ctx.data_mut().push(value);
            }
            ControlFlow::Continue(())
        });

        assert!(crawler.run_iterative(Vec::new()));
        assert_eq!(crawler.data().join(" "), "+ - 9 sqr 2 * / 8 4 7");
        assert_eq!(crawler.count(), size(Some(root)));
    }

    #[test]
    fn callback_can_rewrite_values() {
        let arena = TreeArena::new();
        let root = expression_tree(&arena);
        let mut crawler = DepthFirstCrawler::<(), _>::new(Some(root), |ctx| {
            if ctx.state() == TraversalState::FromParent && ctx.value() == "sqr" {
                ctx.set_value("sqrt");
            }
            ControlFlow::Continue(())
        });

        assert!(crawler.run_recursive(()));
        assert_eq!(prefix(Some(root)), "( + ( - 9 ( sqrt 2 ) ) ( * ( / 8 4 ) 7 ) )");
    }
}

mod options {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn json_options_drive_iteration() {
        let arena = TreeArena::new();
        let root = expression_tree(&arena);
        let options =
            TraversalOptions::from_json(r#"{"style": "post-order", "direction": "backward"}"#)
                .unwrap();

        let order = values(TreeIter::with_options(Some(root), options)).join(" ");
        assert_eq!(order, "7 4 8 / * 2 sqr 9 - +");
    }
}
