//! Stacked quantile estimation
//!
//! A stacked quantile treats weights as occurrence counts rather than as
//! probability mass to interpolate over. Values `(1, 2, 3)` with weights
//! `(4, 5, 6)` give the same quantiles as the list
//! `(1, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3)`, and a quantile that lands
//! exactly between two groups returns the plain average of the two values.
//!
//! # Features
//!
//! - **Scalar engine**: [`get_stacked_quantile`], [`get_stacked_median`]
//! - **Axis-wise batches**: [`get_stacked_quantiles`], [`get_stacked_medians`]
//!   over `ndarray` arrays of shape `(..., m)`
//! - **Reusable stacks**: [`WeightedStack`] sorts once for many quantiles
//! - **Median split**: [`median_split`] for a balanced partition around the
//!   median
//! - **Parallel columns**: enable the `parallel` feature and select
//!   [`ExecutionStrategy::Parallel`]
//!
//! # Example
//!
//! ```rust
//! use ndarray::array;
//! use stacked_quantile::{get_stacked_median, get_stacked_quantile, get_stacked_quantiles};
//!
//! let values = [1.0, 2.0, 3.0];
//! let weights = [4.0, 5.0, 6.0];
//! assert_eq!(get_stacked_median(&values, &weights).unwrap(), 2.0);
//! assert_eq!(get_stacked_quantile(&values, &weights, 1.0).unwrap(), 3.0);
//!
//! // All-zero weights mean "no weighting information"
//! assert_eq!(get_stacked_median(&[1.0, 2.0], &[0.0, 0.0]).unwrap(), 1.5);
//!
//! // One result per column of the trailing axis
//! let batch = array![[1.0, 5.0], [2.0, 6.0], [3.0, 7.0]];
//! let batch_weights = array![[1.0], [1.0], [1.0]];
//! let q = get_stacked_quantiles(&batch, &batch_weights, 0.5).unwrap();
//! assert_eq!(q, array![2.0, 6.0]);
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod estimator;
pub mod split;
pub mod stack;
pub mod validation;

// Re-export main types
pub use config::{ExecutionStrategy, StackedQuantileConfig};
pub use error::{Error, Result};
pub use estimator::{
    get_stacked_median, get_stacked_medians, get_stacked_quantile, get_stacked_quantiles,
    StackedQuantile,
};
pub use split::{median_split, MedianSplit};
pub use stack::WeightedStack;
pub use validation::{validate, ValidatedPair};

// Re-export from stacked-core
pub use stacked_core::{Numeric, Tolerance};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        get_stacked_median, get_stacked_medians, get_stacked_quantile, get_stacked_quantiles,
        Error, Result, StackedQuantile, StackedQuantileConfig, WeightedStack,
    };
}
