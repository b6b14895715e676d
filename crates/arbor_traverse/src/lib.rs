//! # arbor_traverse
//!
//! Traversals over arbor trees.
//!
//! - [`TreeIter`]: a pull-based iterator in pre-, in-, post-order or
//!   breadth-first order that can be probed, paused and rewound
//! - [`DepthFirstCrawler`] and [`BreadthFirstCrawler`]: push-based walks
//!   that hand each event to a closure along with caller data
//! - [`visitor`]: the same events delivered to a trait implementation
//!
//! Depth-first traversals keep no stack. They climb back up through the
//! parent links of the tree, so trees of any height can be walked.
//!
//! ## Example
//!
//! ```rust
//! use arbor_traverse::{TraversalOptions, TreeIter};
//! use arbor_tree::{AvlTree, TreeArena};
//!
//! let arena = TreeArena::new();
//! let mut tree = AvlTree::new(&arena);
//! for value in ["N", "F", "U", "P", "X", "Z"] {
//!     tree.insert(value).unwrap();
//! }
//!
//! let options = TraversalOptions::from_json(r#"{ "style": "breadth-first" }"#).unwrap();
//! let order: Vec<_> = TreeIter::with_options(tree.root(), options)
//!     .map(|n| n.value())
//!     .collect();
//! assert_eq!(order, ["U", "N", "X", "F", "P", "Z"]);
//! ```

pub mod crawler;
mod cursor;
mod error;
mod iter;
mod options;
pub mod visitor;

#[cfg(test)]
mod test_support;

pub use crawler::{BreadthFirstCrawler, CrawlContext, CrawlResult, DepthFirstCrawler};
pub use error::TraverseError;
pub use iter::TreeIter;
pub use options::{Direction, TraversalOptions, TraversalState, TraversalStyle};

// Re-export commonly used visitor items for convenience
pub use visitor::{TreeVisitor, VisitResult, walk_breadth_first, walk_depth_first};
