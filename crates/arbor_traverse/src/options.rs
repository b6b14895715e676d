//! Traversal configuration.

use std::fs;
use std::path::Path;

use arbor_tree::Side;
use serde::{Deserialize, Serialize};

use crate::TraverseError;

/// Order in which a [`TreeIter`](crate::TreeIter) yields nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalStyle {
    /// First subtree, node, second subtree.
    #[default]
    InOrder,
    /// Node before both subtrees.
    PreOrder,
    /// Node after both subtrees.
    PostOrder,
    /// Level by level from the root.
    BreadthFirst,
}

/// Which child is visited first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left before right.
    #[default]
    Forward,
    /// Right before left.
    Backward,
}

impl Direction {
    /// The child visited first.
    #[inline]
    pub const fn first(self) -> Side {
        match self {
            Direction::Forward => Side::Left,
            Direction::Backward => Side::Right,
        }
    }

    /// The child visited second.
    #[inline]
    pub const fn second(self) -> Side {
        self.first().opposite()
    }
}

/// Where a depth-first walk arrived at the current node from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalState {
    /// Entered from the parent; neither subtree visited yet.
    #[default]
    FromParent,
    /// Returned from the first subtree (or found it empty).
    FromFirst,
    /// Returned from the second subtree (or found it empty).
    FromSecond,
}

/// Traversal settings, loadable from JSON.
///
/// ```json
/// { "style": "pre-order", "direction": "backward" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraversalOptions {
    #[serde(default)]
    pub style: TraversalStyle,

    #[serde(default)]
    pub direction: Direction,
}

impl TraversalOptions {
    pub fn new(style: TraversalStyle, direction: Direction) -> Self {
        Self { style, direction }
    }

    /// Loads options from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TraverseError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TraverseError> {
        serde_json::from_str(json)
            .map_err(|e| TraverseError::config(format!("Invalid traversal options: {}", e)))
    }
}
