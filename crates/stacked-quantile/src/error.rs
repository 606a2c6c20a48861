//! Error types for stacked quantile estimation

use thiserror::Error;

/// Errors that can occur during stacked quantile estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Lengths or leading shapes of values and weights disagree, or an
    /// input is zero-dimensional
    #[error("Shape error: {0}")]
    Shape(String),

    /// No values, or none left after dropping zero-weight entries
    #[error("Cannot compute stacked quantile of empty data")]
    EmptyInput,

    /// A weight below zero
    #[error("Weights must be non-negative, got {weight} at index {index}")]
    NegativeWeight { index: usize, weight: f64 },

    /// Quantile outside [0, 1]
    #[error("Quantile {quantile} must be in interval [0, 1]")]
    QuantileRange { quantile: f64 },

    /// NaN or infinity in values or weights
    #[error("{what} contain NaN or infinite value at index {index}")]
    NonFinite { what: &'static str, index: usize },

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] stacked_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if quantile is in [0, 1]
    pub fn check_quantile(quantile: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&quantile) {
            return Err(Error::QuantileRange { quantile });
        }
        Ok(())
    }

    /// Check if values and weights line up
    pub fn check_lengths(values: usize, weights: usize) -> Result<()> {
        if values != weights {
            return Err(Error::Shape(format!(
                "values and weights must be the same length, got {values} and {weights}"
            )));
        }
        Ok(())
    }

    /// Check if there is anything to take a quantile of
    pub fn check_non_empty(len: usize) -> Result<()> {
        if len == 0 {
            return Err(Error::EmptyInput);
        }
        Ok(())
    }
}
