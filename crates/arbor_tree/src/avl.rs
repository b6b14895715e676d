//! AVL rebalancing on top of the binary search tree.
//!
//! Each node's balance factor is `height(right) - height(left)` and stays
//! in `-1..=1`. After an insert or delete the factors are retraced upward
//! from the changed node, rotating wherever a subtree leans by two.
//!
//! Rotations are written once, parameterized by the [`Side`] the heavy
//! child hangs from (the exterior side); the mirror case is the same code
//! with the side flipped.

use std::cmp::Ordering;

use tracing::trace;

use crate::binary_tree::{find_root, height};
use crate::search::{self, Compare};
use crate::{NodePool, NodeRef, Side, TreeError};

/// Inserts `value` and rebalances. Returns the root of the tree afterwards.
///
/// `root` must already satisfy the AVL invariants.
pub fn insert<'a>(
    pool: &mut NodePool<'a>,
    root: Option<NodeRef<'a>>,
    value: &str,
    cmp: Compare,
) -> Result<NodeRef<'a>, TreeError> {
    insert_node(pool, root, value, cmp).map(|(_, root)| root)
}

/// Like [`insert`], but also returns the node now holding `value`.
pub(crate) fn insert_node<'a>(
    pool: &mut NodePool<'a>,
    root: Option<NodeRef<'a>>,
    value: &str,
    cmp: Compare,
) -> Result<(NodeRef<'a>, NodeRef<'a>), TreeError> {
    let node = search::insert(pool, root, value, cmp)?;
    let root = retrace_after_insert(node);
    debug_assert_path_balanced(Some(node));
    Ok((node, root))
}

/// Removes the node equal to `key` and rebalances. Returns the root of the
/// tree afterwards, `None` once the last node is gone.
pub fn delete<'a>(
    pool: &mut NodePool<'a>,
    root: Option<NodeRef<'a>>,
    key: &str,
    cmp: Compare,
) -> Result<Option<NodeRef<'a>>, TreeError> {
    let removal = search::delete(pool, root, key, cmp)?;
    let root = match (removal.parent, removal.side) {
        (Some(parent), Some(side)) => Some(retrace_after_delete(parent, side)),
        _ => removal.root,
    };
    debug_assert_path_balanced(removal.parent);
    Ok(root)
}

/// Asserts the balance range on every node from `node` up to the root.
///
/// Retracing only touches this path, so the rest of the tree is not
/// walked.
#[inline]
fn debug_assert_path_balanced(node: Option<NodeRef<'_>>) {
    if cfg!(debug_assertions) {
        let mut current = node;
        while let Some(n) = current {
            debug_assert!(
                (-1..=1).contains(&n.balance()),
                "balance factor {} at {} after retrace",
                n.balance(),
                n.value()
            );
            current = n.parent();
        }
    }
}

/// Checks every structural, ordering and balance invariant below `root`.
///
/// Reports the first violation found. Runs with an explicit stack, so
/// arbitrarily deep trees are checked without recursion.
pub fn validate(root: Option<NodeRef<'_>>, cmp: Compare) -> Result<(), TreeError> {
    enum Frame<'a> {
        Enter {
            node: NodeRef<'a>,
            lower: Option<&'a str>,
            upper: Option<&'a str>,
        },
        Exit(NodeRef<'a>),
    }

    let Some(root) = root else {
        return Ok(());
    };

    // Heights of finished subtrees, consumed by their parent's exit.
    let mut heights: Vec<isize> = Vec::new();
    let mut stack = vec![Frame::Enter {
        node: root,
        lower: None,
        upper: None,
    }];

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter { node, lower, upper } => {
                let value = node.value();
                if lower.is_some_and(|lower| cmp(value, lower) != Ordering::Greater) {
                    return Err(TreeError::invariant(value, "not greater than an ancestor on its left"));
                }
                if upper.is_some_and(|upper| cmp(value, upper) != Ordering::Less) {
                    return Err(TreeError::invariant(value, "not less than an ancestor on its right"));
                }

                stack.push(Frame::Exit(node));
                // Right is pushed first so the left height lands below it.
                for side in [Side::Right, Side::Left] {
                    let Some(child) = node.child(side) else {
                        continue;
                    };
                    if !child.parent().is_some_and(|p| std::ptr::eq(p, node)) {
                        return Err(TreeError::invariant(
                            child.value(),
                            format!("parent link does not point back to {value}"),
                        ));
                    }
                    let (lower, upper) = match side {
                        Side::Left => (lower, Some(value)),
                        Side::Right => (Some(value), upper),
                    };
                    stack.push(Frame::Enter {
                        node: child,
                        lower,
                        upper,
                    });
                }
            }
            Frame::Exit(node) => {
                let right = match node.right() {
                    Some(_) => heights.pop().unwrap_or(-1),
                    None => -1,
                };
                let left = match node.left() {
                    Some(_) => heights.pop().unwrap_or(-1),
                    None => -1,
                };

                let value = node.value();
                let measured = right - left;
                if measured != isize::from(node.balance()) {
                    return Err(TreeError::invariant(
                        value,
                        format!("stored balance {} but subtrees differ by {measured}", node.balance()),
                    ));
                }
                if !(-1..=1).contains(&measured) {
                    return Err(TreeError::invariant(value, format!("balance factor {measured}")));
                }
                heights.push(1 + left.max(right));
            }
        }
    }
    Ok(())
}

/// Walks up from a freshly inserted node, returning the root.
fn retrace_after_insert<'a>(inserted: NodeRef<'a>) -> NodeRef<'a> {
    let mut child = inserted;
    while let Some(parent) = child.parent() {
        let Some(side) = parent.side_of(child) else {
            break;
        };
        let exterior = side.sign();

        match parent.balance() {
            0 => {
                parent.set_balance(exterior);
                child = parent;
            }
            b if b == -exterior => {
                parent.set_balance(0);
                trace!(value = parent.value(), "insert absorbed");
                return find_root(parent);
            }
            _ => {
                let subtree = rotate(parent, child, side);
                return find_root(subtree);
            }
        }
    }
    find_root(child)
}

/// Walks up from the parent of a physically removed node, where `side` is
/// the side that lost a level. Returns the root.
fn retrace_after_delete<'a>(start: NodeRef<'a>, side: Side) -> NodeRef<'a> {
    let mut node = start;
    let mut side = side;
    loop {
        let shrunk = side.sign();
        let top = match node.balance() {
            0 => {
                node.set_balance(-shrunk);
                trace!(value = node.value(), "delete absorbed");
                return find_root(node);
            }
            b if b == shrunk => {
                node.set_balance(0);
                node
            }
            _ => {
                let Some(sibling) = node.child(side.opposite()) else {
                    debug_assert!(false, "heavy side of {} has no child", node.value());
                    return find_root(node);
                };
                let was_balanced = sibling.balance() == 0;
                let subtree = rotate(node, sibling, side.opposite());
                if was_balanced {
                    // Subtree height is unchanged.
                    return find_root(subtree);
                }
                subtree
            }
        };

        match (top.parent(), top.side_in_parent()) {
            (Some(parent), Some(parent_side)) => {
                node = parent;
                side = parent_side;
            }
            _ => return top,
        }
    }
}

/// Rebalances `parent`, which leans two levels toward `outer` hanging on
/// `side`. Links the new subtree root into the grandparent and returns it.
fn rotate<'a>(parent: NodeRef<'a>, outer: NodeRef<'a>, side: Side) -> NodeRef<'a> {
    let grandparent = parent.parent();
    let parent_side = parent.side_in_parent();

    let subtree = if outer.balance() == -side.sign() {
        double_rotate(parent, outer, side)
    } else {
        single_rotate(parent, outer, side)
    };

    subtree.set_parent(grandparent);
    if let (Some(grandparent), Some(parent_side)) = (grandparent, parent_side) {
        grandparent.set_child(parent_side, Some(subtree));
    }
    subtree
}

/// Promotes `outer` into the place of `parent`. The caller links the
/// returned node to the grandparent.
fn single_rotate<'a>(parent: NodeRef<'a>, outer: NodeRef<'a>, side: Side) -> NodeRef<'a> {
    trace!(parent = parent.value(), outer = outer.value(), %side, "single rotation");

    let inner = outer.child(side.opposite());
    parent.set_child(side, inner);
    if let Some(inner) = inner {
        inner.set_parent(Some(parent));
    }
    outer.set_child(side.opposite(), Some(parent));
    parent.set_parent(Some(outer));

    // Only a deletion can leave `outer` balanced here.
    if outer.balance() == 0 {
        parent.set_balance(side.sign());
        outer.set_balance(-side.sign());
    } else {
        parent.set_balance(0);
        outer.set_balance(0);
    }
    outer
}

/// Promotes the interior child of `outer` above both `outer` and `parent`.
/// The caller links the returned node to the grandparent.
fn double_rotate<'a>(parent: NodeRef<'a>, outer: NodeRef<'a>, side: Side) -> NodeRef<'a> {
    let Some(pivot) = outer.child(side.opposite()) else {
        debug_assert!(false, "interior-heavy {} has no interior child", outer.value());
        return single_rotate(parent, outer, side);
    };
    trace!(
        parent = parent.value(),
        outer = outer.value(),
        pivot = pivot.value(),
        %side,
        "double rotation"
    );

    let toward_outer = pivot.child(side);
    outer.set_child(side.opposite(), toward_outer);
    if let Some(n) = toward_outer {
        n.set_parent(Some(outer));
    }
    pivot.set_child(side, Some(outer));
    outer.set_parent(Some(pivot));

    let toward_parent = pivot.child(side.opposite());
    parent.set_child(side, toward_parent);
    if let Some(n) = toward_parent {
        n.set_parent(Some(parent));
    }
    pivot.set_child(side.opposite(), Some(parent));
    parent.set_parent(Some(pivot));

    let pivot_balance = pivot.balance();
    if pivot_balance == 0 {
        parent.set_balance(0);
        outer.set_balance(0);
    } else if pivot_balance == outer.balance() {
        parent.set_balance(0);
        outer.set_balance(-pivot_balance);
    } else {
        parent.set_balance(-pivot_balance);
        outer.set_balance(0);
    }
    pivot.set_balance(0);
    pivot
}

/// Balance factor recomputed from subtree heights rather than read from
/// the node.
pub fn measured_balance(node: NodeRef<'_>) -> isize {
    height(node.right()) - height(node.left())
}
