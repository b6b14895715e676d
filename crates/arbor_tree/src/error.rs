//! Tree error types.

use thiserror::Error;

use crate::Side;

/// Errors reported by tree operations.
///
/// None of these leave the tree in a modified state: a failed operation is
/// a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// The parent already has a child on the requested side.
    #[error("Slot occupied: parent already has a {side} child")]
    SlotOccupied {
        /// The side that was already linked.
        side: Side,
    },

    /// A node with an equal value is already in the tree.
    #[error("Duplicate value: {0}")]
    DuplicateValue(String),

    /// No node with the requested value is in the tree.
    #[error("Value not found: {0}")]
    NotFound(String),

    /// A structural or balance invariant does not hold.
    #[error("Invariant violated at {value}: {message}")]
    Invariant {
        /// Value of the node where the violation was detected.
        value: String,
        /// Description of the violation.
        message: String,
    },
}

impl TreeError {
    /// Creates a slot occupied error.
    pub fn slot_occupied(side: Side) -> Self {
        Self::SlotOccupied { side }
    }

    /// Creates a duplicate value error.
    pub fn duplicate(value: impl Into<String>) -> Self {
        Self::DuplicateValue(value.into())
    }

    /// Creates a not found error.
    pub fn not_found(value: impl Into<String>) -> Self {
        Self::NotFound(value.into())
    }

    /// Creates an invariant violation error.
    pub fn invariant(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invariant {
            value: value.into(),
            message: message.into(),
        }
    }
}
