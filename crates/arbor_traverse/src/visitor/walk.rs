//! Walk functions driving a [`TreeVisitor`].

use std::ops::ControlFlow;

use arbor_tree::NodeRef;

use super::visit::{TreeVisitor, VisitResult};
use crate::cursor::Cursor;
use crate::{Direction, TraversalState, TraversalStyle, TreeIter};

/// Walks the subtree rooted at `root` depth-first, calling `enter`,
/// `between` and `exit` on every node.
///
/// Does not recurse, so the walk is safe on trees of any height.
///
/// # Returns
///
/// `ControlFlow::Continue(())` if the whole subtree was walked,
/// or `ControlFlow::Break(())` if the visitor stopped early.
pub fn walk_depth_first<'a, V>(
    visitor: &mut V,
    root: Option<NodeRef<'a>>,
    direction: Direction,
) -> VisitResult
where
    V: TreeVisitor<'a>,
{
    let mut cursor = Cursor::new(root, direction);
    while let Some((node, state)) = cursor.position() {
        cursor.advance();
        match state {
            TraversalState::FromParent => visitor.enter(node)?,
            TraversalState::FromFirst => visitor.between(node)?,
            TraversalState::FromSecond => visitor.exit(node)?,
        }
    }
    ControlFlow::Continue(())
}

/// Walks the subtree rooted at `root` level by level, calling `enter` on
/// every node.
#[inline]
pub fn walk_breadth_first<'a, V>(
    visitor: &mut V,
    root: Option<NodeRef<'a>>,
    direction: Direction,
) -> VisitResult
where
    V: TreeVisitor<'a>,
{
    for node in TreeIter::new(root, TraversalStyle::BreadthFirst, direction) {
        visitor.enter(node)?;
    }
    ControlFlow::Continue(())
}
