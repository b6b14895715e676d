//! Traversal error types.

use thiserror::Error;

/// Errors that can occur while setting up a traversal.
#[derive(Debug, Error)]
pub enum TraverseError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TraverseError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
