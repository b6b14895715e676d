//! Visitor trait for traversal events.

use std::ops::ControlFlow;

use arbor_tree::NodeRef;

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - continue the walk
/// - `ControlFlow::Break(())` - stop the walk early
pub type VisitResult = ControlFlow<()>;

/// Receives the events of a tree walk.
///
/// Every hook defaults to continuing, so implement only the events you
/// care about. Depth-first walks call all three hooks for every node;
/// breadth-first walks call only [`enter`](Self::enter).
///
/// # Lifetime
///
/// The `'a` lifetime ties visited nodes to their arena.
pub trait TreeVisitor<'a>: Sized {
    /// Called when the walk reaches a node, before either subtree.
    #[inline]
    fn enter(&mut self, _node: NodeRef<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called between the first and the second subtree.
    #[inline]
    fn between(&mut self, _node: NodeRef<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Called after both subtrees.
    #[inline]
    fn exit(&mut self, _node: NodeRef<'a>) -> VisitResult {
        ControlFlow::Continue(())
    }
}
