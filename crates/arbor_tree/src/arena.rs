//! Arena allocator for tree nodes.
//!
//! Uses `bumpalo` for bump allocation of nodes and their values.
//! Every node of a tree lives in the same arena and is freed together
//! when the arena is dropped.

use bumpalo::Bump;

use crate::{NodeRef, TreeNode};

/// Arena allocator for tree nodes.
///
/// # Example
///
/// ```rust
/// use arbor_tree::TreeArena;
///
/// let arena = TreeArena::new();
///
/// let node = arena.node("sqr");
/// assert_eq!(node.value(), "sqr");
/// assert!(node.is_leaf());
///
/// let s = arena.alloc_str("hello");
/// assert_eq!(s, "hello");
/// ```
pub struct TreeArena {
    bump: Bump,
}

impl TreeArena {
    /// Creates a new arena allocator.
    #[inline]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Allocates a value in the arena and returns a reference to it.
    #[inline]
    pub fn alloc<T>(&self, val: T) -> &T {
        self.bump.alloc(val)
    }

    /// Copies a string slice into the arena.
    #[inline]
    pub fn alloc_str(&self, s: &str) -> &str {
        self.bump.alloc_str(s)
    }

    /// Allocates a detached node holding a copy of `value`.
    #[inline]
    pub fn node(&self, value: &str) -> NodeRef<'_> {
        let value = self.alloc_str(value);
        self.alloc(TreeNode::new(value))
    }
}

impl Default for TreeArena {
    fn default() -> Self {
        Self::new()
    }
}

/// Node allocator with a free list on top of a [`TreeArena`].
///
/// The arena cannot free individual allocations, so nodes removed from a
/// tree are handed back here and reused by the next insertion.
pub struct NodePool<'a> {
    arena: &'a TreeArena,
    spare: Vec<NodeRef<'a>>,
}

impl<'a> NodePool<'a> {
    /// Creates an empty pool that allocates from `arena`.
    pub fn new(arena: &'a TreeArena) -> Self {
        Self {
            arena,
            spare: Vec::new(),
        }
    }

    /// Returns a detached node holding a copy of `value`, reusing a
    /// released node when one is available.
    pub fn node(&mut self, value: &str) -> NodeRef<'a> {
        let value = self.arena.alloc_str(value);
        match self.spare.pop() {
            Some(node) => {
                node.reset(value);
                node
            }
            None => self.arena.alloc(TreeNode::new(value)),
        }
    }

    /// Takes back a node that is no longer linked into any tree.
    pub fn release(&mut self, node: NodeRef<'a>) {
        node.reset("");
        self.spare.push(node);
    }

    /// Returns the number of released nodes waiting for reuse.
    #[inline]
    pub fn spare_count(&self) -> usize {
        self.spare.len()
    }
}
