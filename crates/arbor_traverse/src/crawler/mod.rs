//! Callback-driven traversals.
//!
//! A crawler walks a tree and hands each traversal event to a callback,
//! together with caller-owned data of type `D`. The callback returns
//! [`CrawlResult`]: `ControlFlow::Break(())` stops the crawl, and the run
//! reports `false`.
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//!
//! use arbor_traverse::{DepthFirstCrawler, TraversalState};
//! use arbor_tree::{Side, TreeArena, attach_child};
//!
//! let arena = TreeArena::new();
//! let minus = arena.node("-");
//! attach_child(arena.node("9"), minus, Side::Left).unwrap();
//! attach_child(arena.node("4"), minus, Side::Right).unwrap();
//!
//! // Infix rendering: operands at the leaves, operators between them.
//! let mut crawler = DepthFirstCrawler::<String, _>::new(Some(minus), |ctx| {
//!     let leaf = ctx.node().is_leaf();
//!     let value = ctx.value();
//!     let state = ctx.state();
//!     let out = ctx.data_mut();
//!     match state {
//!         TraversalState::FromParent if leaf => out.push_str(value),
//!         TraversalState::FromParent => out.push('('),
//!         TraversalState::FromFirst if !leaf => out.push_str(&format!(" {value} ")),
//!         TraversalState::FromSecond if !leaf => out.push(')'),
//!         _ => {}
//!     }
//!     ControlFlow::Continue(())
//! });
//!
//! assert!(crawler.run_iterative(String::new()));
//! assert_eq!(crawler.data(), "(9 - 4)");
//! ```

mod breadth_first;
mod depth_first;

use std::ops::ControlFlow;

use arbor_tree::NodeRef;

use crate::TraversalState;

pub use breadth_first::BreadthFirstCrawler;
pub use depth_first::DepthFirstCrawler;

/// Result of a crawler callback.
///
/// - `ControlFlow::Continue(())` - keep crawling
/// - `ControlFlow::Break(())` - stop the crawl
pub type CrawlResult = ControlFlow<()>;

/// The view of a crawl a callback receives for one event.
pub struct CrawlContext<'c, 'a, D> {
    node: NodeRef<'a>,
    state: TraversalState,
    count: usize,
    data: &'c mut D,
}

impl<'c, 'a, D> CrawlContext<'c, 'a, D> {
    pub(crate) fn new(
        node: NodeRef<'a>,
        state: TraversalState,
        count: usize,
        data: &'c mut D,
    ) -> Self {
        Self {
            node,
            state,
            count,
            data,
        }
    }

    /// The node this event is about.
    #[inline]
    pub fn node(&self) -> NodeRef<'a> {
        self.node
    }

    /// The value of the current node.
    #[inline]
    pub fn value(&self) -> &'a str {
        self.node.value()
    }

    /// Replaces the value of the current node.
    #[inline]
    pub fn set_value(&self, value: &'a str) {
        self.node.set_value(value);
    }

    /// How the crawl arrived at the current node. Breadth-first crawls
    /// always report [`TraversalState::FromParent`].
    #[inline]
    pub fn state(&self) -> TraversalState {
        self.state
    }

    /// Number of nodes entered so far, including the current one.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns true while the crawl is on the first node it entered.
    #[inline]
    pub fn is_first(&self) -> bool {
        self.count == 1
    }

    #[inline]
    pub fn data(&self) -> &D {
        self.data
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut D {
        self.data
    }
}
