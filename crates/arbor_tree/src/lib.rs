//! # arbor_tree
//!
//! Arena-allocated binary trees for arbor.
//!
//! This crate provides the node type, the structural primitives, an
//! unbalanced binary search tree and an AVL rebalancer built on it.
//!
//! ## Architecture
//!
//! - Uses `bumpalo` for arena allocation of nodes and their values
//! - Links are `Cell`s holding shared references, so trees are restructured
//!   through `&` references and parent links never own anything
//! - Removed nodes go back to a [`NodePool`] free list and are reused
//! - Left/right symmetric code is written once over [`Side`]
//!
//! ## Example
//!
//! ```rust
//! use arbor_tree::{AvlTree, TreeArena, render::prefix_with_balance};
//!
//! let arena = TreeArena::new();
//! let mut tree = AvlTree::new(&arena);
//!
//! for value in ["N", "F", "U", "P", "X", "Z"] {
//!     tree.insert(value).unwrap();
//! }
//!
//! assert_eq!(
//!     prefix_with_balance(tree.root()),
//!     "( U[0] ( N[0] F[0] P[0] ) ( X[1] Z[0] ) )"
//! );
//! ```

mod arena;
pub mod avl;
mod binary_tree;
mod error;
mod node;
pub mod render;
pub mod search;
mod tree;

pub use arena::{NodePool, TreeArena};
pub use binary_tree::{attach_child, delete_subtree, depth, detach, find_root, height, size};
pub use error::TreeError;
pub use node::{MAX_SERIALIZE_HEIGHT, NodeRef, Side, TreeNode};
pub use search::{Compare, Removal, natural_order};
pub use tree::{Avl, AvlTree, Balancing, SearchTree, Tree, Unbalanced};
