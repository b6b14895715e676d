//! TreeNode definition.
//!
//! The binary tree node shared by every tree and traversal in arbor.

use std::cell::Cell;
use std::fmt;

use serde::Serialize;

/// One of the two child slots of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Returns the balance factor contribution of this side: `-1` for left,
    /// `+1` for right.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }

    /// Returns the side a balance factor leans toward, or `None` when the
    /// factor is zero.
    #[inline]
    pub const fn from_sign(balance: i8) -> Option<Self> {
        if balance < 0 {
            Some(Side::Left)
        } else if balance > 0 {
            Some(Side::Right)
        } else {
            None
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Shared reference to an arena-allocated node.
pub type NodeRef<'a> = &'a TreeNode<'a>;

/// A node in a binary tree.
///
/// Nodes are allocated in a [`TreeArena`](crate::TreeArena) and linked
/// through `Cell`s, so a tree can be restructured through shared
/// references. The parent link is navigational only: the arena owns every
/// node, and a parent reference never keeps anything alive.
///
/// # Example
///
/// ```rust
/// use arbor_tree::{TreeArena, Side, attach_child};
///
/// let arena = TreeArena::new();
/// let root = arena.node("-");
/// let left = arena.node("9");
///
/// attach_child(left, root, Side::Left).unwrap();
/// assert_eq!(root.left().map(|n| n.value()), Some("9"));
/// assert!(std::ptr::eq(left.parent().unwrap(), root));
/// ```
pub struct TreeNode<'a> {
    value: Cell<&'a str>,
    balance: Cell<i8>,
    parent: Cell<Option<NodeRef<'a>>>,
    left: Cell<Option<NodeRef<'a>>>,
    right: Cell<Option<NodeRef<'a>>>,
}

impl<'a> TreeNode<'a> {
    /// Creates a detached node holding `value`.
    #[inline]
    pub const fn new(value: &'a str) -> Self {
        Self {
            value: Cell::new(value),
            balance: Cell::new(0),
            parent: Cell::new(None),
            left: Cell::new(None),
            right: Cell::new(None),
        }
    }

    /// Returns the value stored in this node.
    #[inline]
    pub fn value(&self) -> &'a str {
        self.value.get()
    }

    /// Replaces the value stored in this node.
    ///
    /// Changing the value of a node inside a search tree can break the
    /// ordering invariant; that is the caller's responsibility.
    #[inline]
    pub fn set_value(&self, value: &'a str) {
        self.value.set(value);
    }

    /// Exchanges the values of two nodes.
    #[inline]
    pub fn swap_values(&self, other: &TreeNode<'a>) {
        self.value.swap(&other.value);
    }

    /// Returns the balance factor, `height(right) - height(left)`.
    #[inline]
    pub fn balance(&self) -> i8 {
        self.balance.get()
    }

    #[inline]
    pub(crate) fn set_balance(&self, balance: i8) {
        self.balance.set(balance);
    }

    /// Returns the parent of this node, or `None` for a root.
    #[inline]
    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.parent.get()
    }

    /// Returns the child on the given side.
    #[inline]
    pub fn child(&self, side: Side) -> Option<NodeRef<'a>> {
        match side {
            Side::Left => self.left.get(),
            Side::Right => self.right.get(),
        }
    }

    /// Returns the left child.
    #[inline]
    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.left.get()
    }

    /// Returns the right child.
    #[inline]
    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.right.get()
    }

    /// Sets one direction of a parent edge. Callers keep both directions
    /// consistent.
    #[inline]
    pub(crate) fn set_parent(&self, parent: Option<NodeRef<'a>>) {
        self.parent.set(parent);
    }

    /// Sets one direction of a child edge. Callers keep both directions
    /// consistent.
    #[inline]
    pub(crate) fn set_child(&self, side: Side, child: Option<NodeRef<'a>>) {
        match side {
            Side::Left => self.left.set(child),
            Side::Right => self.right.set(child),
        }
    }

    /// Returns true if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.get().is_none() && self.right.get().is_none()
    }

    /// Returns true if this node has no parent.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.get().is_none()
    }

    /// Returns which side `child` hangs from, or `None` if it is not a
    /// child of this node.
    pub fn side_of(&self, child: &TreeNode<'a>) -> Option<Side> {
        if self.right.get().is_some_and(|n| std::ptr::eq(n, child)) {
            Some(Side::Right)
        } else if self.left.get().is_some_and(|n| std::ptr::eq(n, child)) {
            Some(Side::Left)
        } else {
            None
        }
    }

    /// Returns which side of its parent this node hangs from, or `None` for
    /// a root.
    pub fn side_in_parent(&self) -> Option<Side> {
        self.parent.get().and_then(|parent| parent.side_of(self))
    }

    /// Clears links and balance and installs a new value, for reuse of a
    /// released node.
    pub(crate) fn reset(&self, value: &'a str) {
        self.value.set(value);
        self.balance.set(0);
        self.parent.set(None);
        self.left.set(None);
        self.right.set(None);
    }
}

// Links are cyclic through `parent`, so only neighbor values are printed.
impl fmt::Debug for TreeNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeNode")
            .field("value", &self.value())
            .field("balance", &self.balance())
            .field("parent", &self.parent().map(TreeNode::value))
            .field("left", &self.left().map(TreeNode::value))
            .field("right", &self.right().map(TreeNode::value))
            .finish()
    }
}

/// Deepest subtree, in edges, that [`TreeNode`] serializes.
///
/// Nested output recurses once per level. Balanced trees stay far below
/// this bound; deeper trees are rejected with a serializer error.
pub const MAX_SERIALIZE_HEIGHT: isize = 256;

impl Serialize for TreeNode<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let height = 1 + crate::height(self.left()).max(crate::height(self.right()));
        if height > MAX_SERIALIZE_HEIGHT {
            return Err(<S::Error as serde::ser::Error>::custom(format!(
                "tree under {} is {height} levels deep, more than {MAX_SERIALIZE_HEIGHT}",
                self.value()
            )));
        }
        Nested(self).serialize(serializer)
    }
}

/// Serializes a subtree whose height was already checked.
struct Nested<'n, 'a>(&'n TreeNode<'a>);

impl Serialize for Nested<'_, '_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let node = self.0;
        let left = node.left();
        let right = node.right();

        let mut len = 2; // value, balance
        if left.is_some() {
            len += 1;
        }
        if right.is_some() {
            len += 1;
        }

        let mut state = serializer.serialize_struct("TreeNode", len)?;

        state.serialize_field("value", node.value())?;
        state.serialize_field("balance", &node.balance())?;

        if let Some(left) = left {
            state.serialize_field("left", &Nested(left))?;
        }
        if let Some(right) = right {
            state.serialize_field("right", &Nested(right))?;
        }

        state.end()
    }
}
