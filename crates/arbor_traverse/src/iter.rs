//! Suspendable tree iterator.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use arbor_tree::{NodeRef, size};

use crate::cursor::Cursor;
use crate::{Direction, TraversalOptions, TraversalState, TraversalStyle};

/// A restartable iterator over the nodes of a tree.
///
/// Depth-first styles keep no stack: the position is a node plus a
/// [`TraversalState`], and the walk climbs back up through parent links.
/// Breadth-first uses a queue seeded with the root on the first call.
///
/// The tree must not be restructured while an iterator over it is in use.
/// The node count used by [`available`](Self::available) is computed once
/// and kept until the iterator is dropped.
///
/// # Example
///
/// ```rust
/// use arbor_traverse::{Direction, TraversalStyle, TreeIter};
/// use arbor_tree::{SearchTree, TreeArena};
///
/// let arena = TreeArena::new();
/// let mut tree = SearchTree::new(&arena);
/// for value in ["D", "B", "F", "A", "C", "E", "G"] {
///     tree.insert(value).unwrap();
/// }
///
/// let pre: Vec<_> = TreeIter::new(tree.root(), TraversalStyle::PreOrder, Direction::Forward)
///     .map(|n| n.value())
///     .collect();
/// assert_eq!(pre, ["D", "B", "A", "C", "F", "E", "G"]);
/// ```
#[derive(Debug, Clone)]
pub struct TreeIter<'a> {
    cursor: Cursor<'a>,
    style: TraversalStyle,
    visited: Option<NodeRef<'a>>,
    count: usize,
    size: Option<usize>,
    queue: VecDeque<NodeRef<'a>>,
    seeded: bool,
}

impl<'a> TreeIter<'a> {
    /// Creates an iterator over the subtree rooted at `root`.
    pub fn new(root: Option<NodeRef<'a>>, style: TraversalStyle, direction: Direction) -> Self {
        Self {
            cursor: Cursor::new(root, direction),
            style,
            visited: None,
            count: 0,
            size: None,
            queue: VecDeque::new(),
            seeded: false,
        }
    }

    /// Creates an iterator configured by `options`.
    pub fn with_options(root: Option<NodeRef<'a>>, options: TraversalOptions) -> Self {
        Self::new(root, options.style, options.direction)
    }

    /// Returns true if another node will be yielded.
    ///
    /// Does not move the iterator, except that an exhausted depth-first
    /// walk is committed to its end state.
    pub fn has_next(&mut self) -> bool {
        if self.style == TraversalStyle::BreadthFirst {
            return !self.queue.is_empty() || (!self.seeded && self.cursor.root().is_some());
        }

        let mut probe = self.cursor.clone();
        if next_depth_first(&mut probe, self.style).is_some() {
            return true;
        }
        self.cursor = probe;
        false
    }

    /// Rewinds to the start of the traversal.
    pub fn reset(&mut self) {
        self.cursor.rewind();
        self.visited = None;
        self.count = 0;
        self.queue.clear();
        self.seeded = false;
    }

    /// Number of nodes yielded since creation or the last reset.
    ///
    /// Named apart from [`Iterator::count`], which would consume the
    /// iterator.
    #[inline]
    pub fn yielded(&self) -> usize {
        self.count
    }

    /// Number of nodes still to be yielded.
    pub fn available(&mut self) -> usize {
        self.total().saturating_sub(self.count)
    }

    /// Returns true if nothing has been yielded since the last reset.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.count == 0
    }

    /// The node most recently yielded.
    #[inline]
    pub fn current(&self) -> Option<NodeRef<'a>> {
        self.visited
    }

    /// The value of the node most recently yielded.
    #[inline]
    pub fn current_value(&self) -> Option<&'a str> {
        self.visited.map(|node| node.value())
    }

    /// Replaces the value of the node most recently yielded. Returns false
    /// if nothing has been yielded yet.
    pub fn set_current_value(&self, value: &'a str) -> bool {
        match self.visited {
            Some(node) => {
                node.set_value(value);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn root(&self) -> Option<NodeRef<'a>> {
        self.cursor.root()
    }

    #[inline]
    pub fn style(&self) -> TraversalStyle {
        self.style
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.cursor.direction()
    }

    fn total(&mut self) -> usize {
        let root = self.cursor.root();
        *self.size.get_or_insert_with(|| size(root))
    }

    fn next_breadth_first(&mut self) -> Option<NodeRef<'a>> {
        if !self.seeded {
            self.seeded = true;
            self.queue.extend(self.cursor.root());
        }

        let node = self.queue.pop_front()?;
        let direction = self.cursor.direction();
        self.queue.extend(node.child(direction.first()));
        self.queue.extend(node.child(direction.second()));
        Some(node)
    }
}

/// Advances `cursor` to the next node `style` yields and returns it.
fn next_depth_first<'a>(cursor: &mut Cursor<'a>, style: TraversalStyle) -> Option<NodeRef<'a>> {
    let yield_state = match style {
        TraversalStyle::PreOrder => TraversalState::FromParent,
        TraversalStyle::InOrder => TraversalState::FromFirst,
        TraversalStyle::PostOrder => TraversalState::FromSecond,
        TraversalStyle::BreadthFirst => return None,
    };

    loop {
        let (node, state) = cursor.position()?;
        cursor.advance();
        if state == yield_state {
            return Some(node);
        }
    }
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = NodeRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = match self.style {
            TraversalStyle::BreadthFirst => self.next_breadth_first(),
            style => next_depth_first(&mut self.cursor, style),
        }?;
        self.visited = Some(node);
        self.count += 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.size {
            Some(total) => {
                let remaining = total.saturating_sub(self.count);
                (remaining, Some(remaining))
            }
            None => (0, None),
        }
    }
}

impl FusedIterator for TreeIter<'_> {}
