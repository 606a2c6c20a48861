//! Error types for the numeric primitives
//!
//! Provides the error type shared by the stacked-stats crates.

use thiserror::Error;

/// Core error type for primitive operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Two sequences that must line up do not
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for an index that points past the end of a sequence
    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Self::InvalidInput(format!("index {index} out of bounds for length {len}"))
    }
}
