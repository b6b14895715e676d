//! Unbalanced binary search tree.
//!
//! Values are ordered by a caller-supplied [`Compare`] function. Equal
//! values are rejected, so every tree holds a set.

use std::cmp::Ordering;

use tracing::debug;

use crate::binary_tree::{attach_child, find_root};
use crate::{NodePool, NodeRef, Side, TreeError};

/// Three-way comparison over node values.
pub type Compare = fn(&str, &str) -> Ordering;

/// Lexicographic byte order, the default [`Compare`].
pub fn natural_order(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Outcome of a successful [`delete`].
///
/// `parent` is the parent of the node that was physically unlinked, which
/// is not the node holding `key` when that node had two children.
#[derive(Debug, Clone, Copy)]
pub struct Removal<'a> {
    /// Parent of the unlinked node; `None` if the old root was unlinked.
    pub parent: Option<NodeRef<'a>>,
    /// Side of `parent` that lost the node.
    pub side: Option<Side>,
    /// Root of the tree after the removal; `None` if the tree is now empty.
    pub root: Option<NodeRef<'a>>,
}

/// Returns the node with the smallest value that is greater than or equal
/// to `key`, or `None` if every value is smaller.
pub fn find<'a>(root: Option<NodeRef<'a>>, key: &str, cmp: Compare) -> Option<NodeRef<'a>> {
    let mut cur = root;
    let mut ceiling = None;
    while let Some(node) = cur {
        match cmp(key, node.value()) {
            Ordering::Less => {
                ceiling = Some(node);
                cur = node.left();
            }
            Ordering::Greater => cur = node.right(),
            Ordering::Equal => return Some(node),
        }
    }
    ceiling
}

/// Returns the node equal to `key` if present, otherwise the node that
/// would become its parent. `None` only for an empty tree.
pub fn find_insertion_point<'a>(
    root: Option<NodeRef<'a>>,
    key: &str,
    cmp: Compare,
) -> Option<NodeRef<'a>> {
    let mut cur = root?;
    loop {
        let next = match cmp(key, cur.value()) {
            Ordering::Less => cur.left(),
            Ordering::Greater => cur.right(),
            Ordering::Equal => return Some(cur),
        };
        match next {
            Some(node) => cur = node,
            None => return Some(cur),
        }
    }
}

/// Returns the node whose value equals `key`.
pub fn find_equal<'a>(root: Option<NodeRef<'a>>, key: &str, cmp: Compare) -> Option<NodeRef<'a>> {
    find_insertion_point(root, key, cmp).filter(|node| cmp(key, node.value()) == Ordering::Equal)
}

/// Inserts `value` below `root` and returns the new node.
///
/// With no root the new node is returned detached and becomes the root of
/// a new tree. The value is copied into the pool's arena only when the
/// insertion succeeds.
pub fn insert<'a>(
    pool: &mut NodePool<'a>,
    root: Option<NodeRef<'a>>,
    value: &str,
    cmp: Compare,
) -> Result<NodeRef<'a>, TreeError> {
    let Some(parent) = find_insertion_point(root, value, cmp) else {
        return Ok(pool.node(value));
    };

    let side = match cmp(value, parent.value()) {
        Ordering::Less => Side::Left,
        Ordering::Greater => Side::Right,
        Ordering::Equal => {
            debug!(value, "rejecting duplicate insert");
            return Err(TreeError::duplicate(value));
        }
    };

    let node = pool.node(value);
    if let Err(err) = attach_child(node, parent, side) {
        pool.release(node);
        return Err(err);
    }
    Ok(node)
}

/// Removes the node equal to `key` from the tree rooted at `root`.
///
/// A node with two children takes the value of its in-order successor,
/// and the successor is unlinked instead. The unlinked node goes back to
/// `pool`.
pub fn delete<'a>(
    pool: &mut NodePool<'a>,
    root: Option<NodeRef<'a>>,
    key: &str,
    cmp: Compare,
) -> Result<Removal<'a>, TreeError> {
    let Some(target) = find_equal(root, key, cmp) else {
        debug!(key, "delete of missing value");
        return Err(TreeError::not_found(key));
    };

    let victim = match (target.left(), target.right()) {
        (Some(_), Some(right)) => {
            let successor = leftmost(right);
            target.swap_values(successor);
            successor
        }
        _ => target,
    };

    let removal = splice(victim);
    pool.release(victim);
    Ok(removal)
}

fn leftmost<'a>(node: NodeRef<'a>) -> NodeRef<'a> {
    let mut cur = node;
    while let Some(left) = cur.left() {
        cur = left;
    }
    cur
}

/// Unlinks a node with at most one child, moving the child into its place.
fn splice<'a>(node: NodeRef<'a>) -> Removal<'a> {
    debug_assert!(node.left().is_none() || node.right().is_none());

    let child = node.left().or(node.right());
    let parent = node.parent();
    let side = node.side_in_parent();

    if let Some(child) = child {
        child.set_parent(parent);
    }
    if let (Some(parent), Some(side)) = (parent, side) {
        parent.set_child(side, child);
    }
    node.set_parent(None);
    node.set_child(Side::Left, None);
    node.set_child(Side::Right, None);

    let root = match parent {
        Some(parent) => Some(find_root(parent)),
        None => child,
    };
    Removal { parent, side, root }
}
