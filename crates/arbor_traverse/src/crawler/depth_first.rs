//! Depth-first crawler.

use std::ops::ControlFlow;

use arbor_tree::{NodeRef, size};
use tracing::debug;

use super::{CrawlContext, CrawlResult};
use crate::cursor::Cursor;
use crate::{Direction, TraversalState};

/// Calls back on every depth-first event: entering a node, returning from
/// its first subtree and returning from its second subtree.
///
/// Events fire for every node whether or not it has children, so the
/// callback can build prefix, infix or postfix output by looking at
/// [`CrawlContext::state`].
pub struct DepthFirstCrawler<'a, D, F> {
    cursor: Cursor<'a>,
    callback: F,
    data: D,
    count: usize,
    size: Option<usize>,
}

impl<'a, D, F> DepthFirstCrawler<'a, D, F>
where
    F: FnMut(&mut CrawlContext<'_, 'a, D>) -> CrawlResult,
{
    /// Creates a crawler over the subtree rooted at `root` with default
    /// callback data.
    pub fn new(root: Option<NodeRef<'a>>, callback: F) -> Self
    where
        D: Default,
    {
        Self::with_data(root, callback, D::default())
    }

    /// Creates a crawler over the subtree rooted at `root`.
    pub fn with_data(root: Option<NodeRef<'a>>, callback: F, data: D) -> Self {
        Self {
            cursor: Cursor::new(root, Direction::Forward),
            callback,
            data,
            count: 0,
            size: None,
        }
    }

    /// Visits right subtrees before left ones when `direction` is
    /// [`Direction::Backward`]. Rewinds the crawler.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.cursor = Cursor::new(self.cursor.root(), direction);
        self.count = 0;
        self
    }

    /// Crawls from the start without recursion. Returns true if the crawl
    /// completed, false if the callback stopped it.
    ///
    /// A stopped crawl can be continued with [`resume`](Self::resume).
    pub fn run_iterative(&mut self, data: D) -> bool {
        self.reset();
        self.data = data;
        self.resume()
    }

    /// Continues an iterative crawl after the event that stopped it.
    pub fn resume(&mut self) -> bool {
        while let Some((node, state)) = self.cursor.position() {
            if state == TraversalState::FromParent {
                self.count += 1;
            }
            let flow = self.fire(node, state);
            self.cursor.advance();
            if flow.is_break() {
                debug!(value = node.value(), ?state, count = self.count, "crawl stopped by callback");
                return false;
            }
        }
        true
    }

    /// Crawls from the start by recursion. Returns true if the crawl
    /// completed, false if the callback stopped it.
    ///
    /// Recursion depth is bounded by the height of the tree. A recursive
    /// crawl cannot be resumed; the crawler is left exhausted.
    pub fn run_recursive(&mut self, data: D) -> bool {
        self.reset();
        self.data = data;

        let root = self.cursor.root();
        let completed = self.crawl(root).is_continue();
        self.cursor.finish();
        if !completed {
            debug!(count = self.count, "recursive crawl stopped by callback");
        }
        completed
    }

    fn crawl(&mut self, node: Option<NodeRef<'a>>) -> CrawlResult {
        let Some(node) = node else {
            return ControlFlow::Continue(());
        };
        let direction = self.cursor.direction();

        self.count += 1;
        self.fire(node, TraversalState::FromParent)?;
        self.crawl(node.child(direction.first()))?;
        self.fire(node, TraversalState::FromFirst)?;
        self.crawl(node.child(direction.second()))?;
        self.fire(node, TraversalState::FromSecond)
    }

    fn fire(&mut self, node: NodeRef<'a>, state: TraversalState) -> CrawlResult {
        let mut ctx = CrawlContext::new(node, state, self.count, &mut self.data);
        (self.callback)(&mut ctx)
    }

    /// Rewinds to the root. Callback data is kept.
    pub fn reset(&mut self) {
        self.cursor.rewind();
        self.count = 0;
    }

    /// Returns true if the crawl has events left.
    #[inline]
    pub fn has_next(&self) -> bool {
        !self.cursor.is_done()
    }

    /// Number of nodes entered since the last reset.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of nodes not yet entered.
    pub fn available(&mut self) -> usize {
        let root = self.cursor.root();
        self.size.get_or_insert_with(|| size(root)).saturating_sub(self.count)
    }

    #[inline]
    pub fn root(&self) -> Option<NodeRef<'a>> {
        self.cursor.root()
    }

    #[inline]
    pub fn data(&self) -> &D {
        &self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut D {
        &mut self.data
    }

    pub fn set_data(&mut self, data: D) {
        self.data = data;
    }

    pub fn into_data(self) -> D {
        self.data
    }
}
