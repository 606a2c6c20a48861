//! Weighted quantiles that treat weights as occurrence counts
//!
//! This crate re-exports the workspace crates under one roof:
//!
//! - [`core`]: numeric traits, sort/scan/search primitives and tolerances
//! - [`quantile`]: the stacked quantile engine, its batch adapter and the
//!   median split
//!
//! # Example
//!
//! ```rust
//! use stacked_stats::prelude::*;
//!
//! let median = get_stacked_median(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
//! assert_eq!(median, 2.0);
//! ```

pub use stacked_core as core;
pub use stacked_quantile as quantile;

pub use stacked_core::{Numeric, Tolerance};
pub use stacked_quantile::{
    get_stacked_median, get_stacked_medians, get_stacked_quantile, get_stacked_quantiles,
    median_split, Error, ExecutionStrategy, MedianSplit, Result, StackedQuantile,
    StackedQuantileConfig, WeightedStack,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use stacked_quantile::prelude::*;
    pub use stacked_quantile::{median_split, ExecutionStrategy, MedianSplit};
}
