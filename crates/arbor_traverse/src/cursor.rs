//! Depth-first traversal state machine.
//!
//! Walks a tree without recursion or an explicit stack by following parent
//! links back up. Every node is reached in three states (entered, back from
//! the first subtree, back from the second subtree), and each call to
//! [`Cursor::advance`] moves exactly one state forward.

use arbor_tree::NodeRef;

use crate::{Direction, TraversalState};

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'a> {
    root: Option<NodeRef<'a>>,
    cur: Option<NodeRef<'a>>,
    state: TraversalState,
    direction: Direction,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(root: Option<NodeRef<'a>>, direction: Direction) -> Self {
        Self {
            root,
            cur: root,
            state: TraversalState::FromParent,
            direction,
        }
    }

    #[inline]
    pub(crate) fn root(&self) -> Option<NodeRef<'a>> {
        self.root
    }

    #[inline]
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// The node and state the next [`advance`](Self::advance) will leave,
    /// or `None` once the walk is over.
    #[inline]
    pub(crate) fn position(&self) -> Option<(NodeRef<'a>, TraversalState)> {
        self.cur.map(|node| (node, self.state))
    }

    #[inline]
    pub(crate) fn is_done(&self) -> bool {
        self.cur.is_none()
    }

    pub(crate) fn rewind(&mut self) {
        self.cur = self.root;
        self.state = TraversalState::FromParent;
    }

    pub(crate) fn finish(&mut self) {
        self.cur = None;
    }

    /// Moves one state forward.
    pub(crate) fn advance(&mut self) {
        let Some(node) = self.cur else {
            return;
        };

        match self.state {
            TraversalState::FromParent => match node.child(self.direction.first()) {
                Some(first) => self.cur = Some(first),
                None => self.state = TraversalState::FromFirst,
            },
            TraversalState::FromFirst => match node.child(self.direction.second()) {
                Some(second) => {
                    self.cur = Some(second);
                    self.state = TraversalState::FromParent;
                }
                None => self.state = TraversalState::FromSecond,
            },
            TraversalState::FromSecond => {
                let at_root = self.root.is_some_and(|root| std::ptr::eq(root, node));
                match node.parent() {
                    Some(parent) if !at_root => {
                        self.state = if node.side_in_parent() == Some(self.direction.first()) {
                            TraversalState::FromFirst
                        } else {
                            TraversalState::FromSecond
                        };
                        self.cur = Some(parent);
                    }
                    _ => self.cur = None,
                }
            }
        }
    }
}
