//! Error types for roost-core

use thiserror::Error;

/// Result type alias using roost-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in roost-core operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Item not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Reorder indices outside the list
    #[error("Invalid reorder: cannot move {from} -> {to} in a list of {len}")]
    InvalidReorder { from: usize, to: usize, len: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
