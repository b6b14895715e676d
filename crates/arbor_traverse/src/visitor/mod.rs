//! Visitor pattern for tree walks.
//!
//! A trait-based alternative to the closure crawlers: implement the events
//! you need on a type that carries its own state.
//!
//! # Overview
//!
//! - [`TreeVisitor`] - Event hooks: `enter`, `between`, `exit`
//! - [`walk_depth_first`] - Drives all three hooks without recursion
//! - [`walk_breadth_first`] - Drives `enter` level by level
//!
//! # Examples
//!
//! ## Collecting Leaves
//!
//! ```rust
//! use std::ops::ControlFlow;
//!
//! use arbor_traverse::Direction;
//! use arbor_traverse::visitor::{TreeVisitor, VisitResult, walk_depth_first};
//! use arbor_tree::{NodeRef, Side, TreeArena, attach_child};
//!
//! struct LeafCollector<'a> {
//!     leaves: Vec<&'a str>,
//! }
//!
//! impl<'a> TreeVisitor<'a> for LeafCollector<'a> {
//!     fn enter(&mut self, node: NodeRef<'a>) -> VisitResult {
//!         if node.is_leaf() {
//!             self.leaves.push(node.value());
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let arena = TreeArena::new();
//! let minus = arena.node("-");
//! attach_child(arena.node("9"), minus, Side::Left).unwrap();
//! attach_child(arena.node("4"), minus, Side::Right).unwrap();
//!
//! let mut collector = LeafCollector { leaves: Vec::new() };
//! let _ = walk_depth_first(&mut collector, Some(minus), Direction::Forward);
//! assert_eq!(collector.leaves, vec!["9", "4"]);
//! ```
//!
//! ## Early Termination
//!
//! ```rust
//! use std::ops::ControlFlow;
//!
//! use arbor_traverse::visitor::{TreeVisitor, VisitResult};
//! use arbor_tree::NodeRef;
//!
//! struct FindValue<'a> {
//!     wanted: &'a str,
//!     found: Option<NodeRef<'a>>,
//! }
//!
//! impl<'a> TreeVisitor<'a> for FindValue<'a> {
//!     fn enter(&mut self, node: NodeRef<'a>) -> VisitResult {
//!         if node.value() == self.wanted {
//!             self.found = Some(node);
//!             return ControlFlow::Break(()); // Stop traversal
//!         }
//!         ControlFlow::Continue(())
//!     }
//! }
//! ```

mod visit;
mod walk;

pub use visit::{TreeVisitor, VisitResult};
pub use walk::{walk_breadth_first, walk_depth_first};
