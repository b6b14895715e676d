//! Owning tree handles.
//!
//! [`SearchTree`] and [`AvlTree`] bundle a root, a comparator and a
//! [`NodePool`] so callers do not have to thread them through every call.
//! Both are a [`Tree`] and differ only in their [`Balancing`] strategy.

use std::marker::PhantomData;

use crate::avl;
use crate::binary_tree::{delete_subtree, height};
use crate::search::{self, Compare, natural_order};
use crate::{NodePool, NodeRef, TreeArena, TreeError};

/// How a [`Tree`] links in and unlinks nodes.
pub trait Balancing {
    /// Inserts `value`, returning the new node and the root afterwards.
    fn insert<'a>(
        pool: &mut NodePool<'a>,
        root: Option<NodeRef<'a>>,
        value: &str,
        cmp: Compare,
    ) -> Result<(NodeRef<'a>, NodeRef<'a>), TreeError>;

    /// Removes the node equal to `key`, returning the root afterwards.
    fn delete<'a>(
        pool: &mut NodePool<'a>,
        root: Option<NodeRef<'a>>,
        key: &str,
        cmp: Compare,
    ) -> Result<Option<NodeRef<'a>>, TreeError>;
}

/// Plain binary search tree insertion and deletion.
#[derive(Debug)]
pub enum Unbalanced {}

impl Balancing for Unbalanced {
    fn insert<'a>(
        pool: &mut NodePool<'a>,
        root: Option<NodeRef<'a>>,
        value: &str,
        cmp: Compare,
    ) -> Result<(NodeRef<'a>, NodeRef<'a>), TreeError> {
        let node = search::insert(pool, root, value, cmp)?;
        Ok((node, root.unwrap_or(node)))
    }

    fn delete<'a>(
        pool: &mut NodePool<'a>,
        root: Option<NodeRef<'a>>,
        key: &str,
        cmp: Compare,
    ) -> Result<Option<NodeRef<'a>>, TreeError> {
        search::delete(pool, root, key, cmp).map(|removal| removal.root)
    }
}

/// AVL insertion and deletion with rebalancing.
#[derive(Debug)]
pub enum Avl {}

impl Balancing for Avl {
    fn insert<'a>(
        pool: &mut NodePool<'a>,
        root: Option<NodeRef<'a>>,
        value: &str,
        cmp: Compare,
    ) -> Result<(NodeRef<'a>, NodeRef<'a>), TreeError> {
        avl::insert_node(pool, root, value, cmp)
    }

    fn delete<'a>(
        pool: &mut NodePool<'a>,
        root: Option<NodeRef<'a>>,
        key: &str,
        cmp: Compare,
    ) -> Result<Option<NodeRef<'a>>, TreeError> {
        avl::delete(pool, root, key, cmp)
    }
}

/// An unbalanced binary search tree.
///
/// # Example
///
/// ```rust
/// use arbor_tree::{SearchTree, TreeArena};
///
/// let arena = TreeArena::new();
/// let mut tree = SearchTree::new(&arena);
/// for value in ["N", "F", "U"] {
///     tree.insert(value).unwrap();
/// }
///
/// assert!(tree.contains("F"));
/// assert_eq!(tree.len(), 3);
/// assert!(tree.insert("U").is_err());
/// ```
pub type SearchTree<'a> = Tree<'a, Unbalanced>;

/// A self-balancing AVL tree.
///
/// # Example
///
/// ```rust
/// use arbor_tree::{AvlTree, TreeArena, render::prefix_with_balance};
///
/// let arena = TreeArena::new();
/// let mut tree = AvlTree::new(&arena);
/// for value in ["A", "B", "C"] {
///     tree.insert(value).unwrap();
/// }
///
/// assert_eq!(prefix_with_balance(tree.root()), "( B[0] A[0] C[0] )");
/// assert!(tree.validate().is_ok());
/// ```
pub type AvlTree<'a> = Tree<'a, Avl>;

/// A search tree owning its root, comparator and [`NodePool`].
///
/// `B` decides how nodes are linked in and out; see [`SearchTree`] and
/// [`AvlTree`].
pub struct Tree<'a, B: Balancing> {
    pool: NodePool<'a>,
    root: Option<NodeRef<'a>>,
    cmp: Compare,
    len: usize,
    balancing: PhantomData<B>,
}

impl<'a, B: Balancing> Tree<'a, B> {
    /// Creates an empty tree ordered by [`natural_order`].
    pub fn new(arena: &'a TreeArena) -> Self {
        Self::with_compare(arena, natural_order)
    }

    /// Creates an empty tree ordered by `cmp`.
    pub fn with_compare(arena: &'a TreeArena, cmp: Compare) -> Self {
        Self {
            pool: NodePool::new(arena),
            root: None,
            cmp,
            len: 0,
            balancing: PhantomData,
        }
    }

    /// Inserts `value`, returning the new node.
    pub fn insert(&mut self, value: &str) -> Result<NodeRef<'a>, TreeError> {
        let (node, root) = B::insert(&mut self.pool, self.root, value, self.cmp)?;
        self.root = Some(root);
        self.len += 1;
        Ok(node)
    }

    /// Removes the node equal to `value`.
    pub fn remove(&mut self, value: &str) -> Result<(), TreeError> {
        self.root = B::delete(&mut self.pool, self.root, value, self.cmp)?;
        self.len -= 1;
        Ok(())
    }

    /// Returns true if a node equal to `value` is present.
    pub fn contains(&self, value: &str) -> bool {
        self.get(value).is_some()
    }

    /// Returns the node equal to `value`.
    pub fn get(&self, value: &str) -> Option<NodeRef<'a>> {
        search::find_equal(self.root, value, self.cmp)
    }

    /// Returns the node with the smallest value not less than `value`.
    pub fn find(&self, value: &str) -> Option<NodeRef<'a>> {
        search::find(self.root, value, self.cmp)
    }

    #[inline]
    pub fn root(&self) -> Option<NodeRef<'a>> {
        self.root
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Height of the tree; `-1` when empty.
    pub fn height(&self) -> isize {
        height(self.root)
    }

    /// Removes every node. Released nodes are reused by later inserts.
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            delete_subtree(&mut self.pool, root);
        }
        self.len = 0;
    }
}

impl Tree<'_, Avl> {
    /// Checks the link, ordering and balance invariants.
    pub fn validate(&self) -> Result<(), TreeError> {
        avl::validate(self.root, self.cmp)
    }
}
