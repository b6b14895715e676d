//! Breadth-first crawler.

use arbor_tree::NodeRef;
use tracing::debug;

use super::{CrawlContext, CrawlResult};
use crate::{Direction, TraversalState, TraversalStyle, TreeIter};

/// Calls back once per node, level by level from the root.
pub struct BreadthFirstCrawler<'a, D, F> {
    iter: TreeIter<'a>,
    callback: F,
    data: D,
}

impl<'a, D, F> BreadthFirstCrawler<'a, D, F>
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
            iter: TreeIter::new(root, TraversalStyle::BreadthFirst, Direction::Forward),
            callback,
            data,
        }
    }

    /// Visits right children before left ones when `direction` is
    /// [`Direction::Backward`]. Rewinds the crawler.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.iter = TreeIter::new(self.iter.root(), TraversalStyle::BreadthFirst, direction);
        self
    }

    /// Crawls from the start. Returns true if the crawl completed, false if
    /// the callback stopped it.
    pub fn run(&mut self, data: D) -> bool {
        self.reset();
        self.data = data;
        self.resume()
    }

    /// Continues a crawl after the node that stopped it.
    pub fn resume(&mut self) -> bool {
        while let Some(node) = self.iter.next() {
            let mut ctx = CrawlContext::new(
                node,
                TraversalState::FromParent,
                self.iter.yielded(),
                &mut self.data,
            );
            if (self.callback)(&mut ctx).is_break() {
                debug!(value = node.value(), count = self.iter.yielded(), "crawl stopped by callback");
                return false;
            }
        }
        true
    }

    /// Rewinds to the root. Callback data is kept.
    pub fn reset(&mut self) {
        self.iter.reset();
    }

    /// Returns true if nodes are left to visit.
    pub fn has_next(&mut self) -> bool {
        self.iter.has_next()
    }

    /// Number of nodes visited since the last reset.
    #[inline]
    pub fn count(&self) -> usize {
        self.iter.yielded()
    }

    /// Number of nodes not yet visited.
    pub fn available(&mut self) -> usize {
        self.iter.available()
    }

    #[inline]
    pub fn root(&self) -> Option<NodeRef<'a>> {
        self.iter.root()
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
