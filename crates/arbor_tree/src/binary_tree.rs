//! Binary tree primitives.
//!
//! Structural operations shared by the search tree, the AVL rebalancer and
//! the traversals. None of them look at node values.

use crate::{NodePool, NodeRef, Side, TreeError};

/// Links `child` under `parent` on `side`, setting both directions of the
/// edge.
///
/// Fails without touching either node if the slot is already occupied.
/// `child` is not detached from any previous parent.
pub fn attach_child<'a>(
    child: NodeRef<'a>,
    parent: NodeRef<'a>,
    side: Side,
) -> Result<(), TreeError> {
    if parent.child(side).is_some() {
        return Err(TreeError::slot_occupied(side));
    }
    parent.set_child(side, Some(child));
    child.set_parent(Some(parent));
    Ok(())
}

/// Unlinks `node` from its parent, returning the former parent and the side
/// the node hung from.
pub fn detach<'a>(node: NodeRef<'a>) -> Option<(NodeRef<'a>, Side)> {
    let parent = node.parent()?;
    node.set_parent(None);
    let side = parent.side_of(node)?;
    parent.set_child(side, None);
    Some((parent, side))
}

/// Detaches `root` from its parent and returns every node of its subtree
/// to `pool`. Returns the number of nodes released.
pub fn delete_subtree<'a>(pool: &mut NodePool<'a>, root: NodeRef<'a>) -> usize {
    detach(root);

    let mut released = 0;
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        stack.extend(node.left());
        stack.extend(node.right());
        pool.release(node);
        released += 1;
    }
    released
}

/// Walks parent links up to the root of the tree containing `node`.
pub fn find_root<'a>(node: NodeRef<'a>) -> NodeRef<'a> {
    let mut cur = node;
    while let Some(parent) = cur.parent() {
        cur = parent;
    }
    cur
}

/// Number of edges between `node` and its root; `-1` for no node.
pub fn depth(node: Option<NodeRef<'_>>) -> isize {
    let Some(mut cur) = node else {
        return -1;
    };
    let mut depth = 0;
    while let Some(parent) = cur.parent() {
        depth += 1;
        cur = parent;
    }
    depth
}

/// Number of edges on the longest path from `node` down to a leaf; `-1`
/// for no node.
pub fn height(node: Option<NodeRef<'_>>) -> isize {
    let Some(root) = node else {
        return -1;
    };
    let mut height = 0;
    let mut stack = vec![(root, 0isize)];
    while let Some((node, level)) = stack.pop() {
        height = height.max(level);
        stack.extend(node.left().map(|n| (n, level + 1)));
        stack.extend(node.right().map(|n| (n, level + 1)));
    }
    height
}

/// Number of nodes in the subtree rooted at `node`.
pub fn size(node: Option<NodeRef<'_>>) -> usize {
    let mut count = 0;
    let mut stack: Vec<NodeRef<'_>> = node.into_iter().collect();
    while let Some(node) = stack.pop() {
        count += 1;
        stack.extend(node.left());
        stack.extend(node.right());
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeArena;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// ( + ( - 9 ( sqr 2 ) ) ( * ( / 8 4 ) 7 ) )
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

    fn leftmost(node: NodeRef<'_>) -> NodeRef<'_> {
        let mut cur = node;
        while let Some(left) = cur.left() {
            cur = left;
        }
        cur
    }

    #[test]
    fn test_attach_child_links_both_directions() {
        let arena = TreeArena::new();
        let parent = arena.node("-");
        let child = arena.node("9");

        attach_child(child, parent, Side::Left).unwrap();

        assert!(std::ptr::eq(parent.left().unwrap(), child));
        assert!(std::ptr::eq(child.parent().unwrap(), parent));
        assert!(parent.right().is_none());
    }

    #[test]
    fn test_attach_child_occupied_slot() {
        let arena = TreeArena::new();
        let parent = arena.node("-");
        let first = arena.node("9");
        let second = arena.node("4");
        attach_child(first, parent, Side::Left).unwrap();

        let err = attach_child(second, parent, Side::Left).unwrap_err();

        assert_eq!(err, TreeError::slot_occupied(Side::Left));
        assert!(std::ptr::eq(parent.left().unwrap(), first));
        assert!(second.is_root());
    }

    #[test]
    fn test_detach() {
        let arena = TreeArena::new();
        let root = expression_tree(&arena);
        let minus = root.left().unwrap();

        let (parent, side) = detach(minus).unwrap();

        assert!(std::ptr::eq(parent, root));
        assert_eq!(side, Side::Left);
        assert!(root.left().is_none());
        assert!(minus.is_root());
        assert!(detach(minus).is_none());
    }

    #[test]
    fn test_find_root() {
        let arena = TreeArena::new();
        let root = expression_tree(&arena);
        let eight = leftmost(root.right().unwrap());

        assert_eq!(eight.value(), "8");
        assert!(std::ptr::eq(find_root(eight), root));
        assert!(std::ptr::eq(find_root(root), root));
    }

    #[test]
    fn test_depth() {
        let arena = TreeArena::new();
        let root = expression_tree(&arena);
        let two = root.left().unwrap().right().unwrap().right().unwrap();

        assert_eq!(two.value(), "2");
        assert_eq!(depth(Some(two)), 3);
        assert_eq!(depth(Some(root)), 0);
        assert_eq!(depth(None), -1);
    }

    #[rstest]
    #[case::empty(None, -1)]
    #[case::leaf(Some("leaf"), 0)]
    fn test_height_trivial(#[case] value: Option<&str>, #[case] expected: isize) {
        let arena = TreeArena::new();
        let node = value.map(|v| arena.node(v));
        assert_eq!(height(node), expected);
    }

    #[test]
    fn test_height_and_size_of_expression() {
        let arena = TreeArena::new();
        let root = expression_tree(&arena);

        assert_eq!(height(Some(root)), 3);
        assert_eq!(size(Some(root)), 10);
        assert_eq!(size(root.left()), 4);
        assert_eq!(size(None), 0);
    }

    #[test]
    fn test_height_of_degenerate_chain() {
        let arena = TreeArena::new();
        let root = arena.node("0");
        let mut tail = root;
        for i in 1..10_000 {
            let next = arena.node(&i.to_string());
            attach_child(next, tail, Side::Right).unwrap();
            tail = next;
        }

        assert_eq!(height(Some(root)), 9_999);
        assert_eq!(size(Some(root)), 10_000);
        assert_eq!(depth(Some(tail)), 9_999);
    }

    #[test]
    fn test_delete_subtree_releases_nodes() {
        let arena = TreeArena::new();
        let mut pool = NodePool::new(&arena);
        let root = expression_tree(&arena);
        let times = root.right().unwrap();

        let released = delete_subtree(&mut pool, times);

        assert_eq!(released, 5);
        assert_eq!(pool.spare_count(), 5);
        assert!(root.right().is_none());
        assert_eq!(size(Some(root)), 5);
    }
}
