//! Core traits and primitives for stacked quantile estimation
//!
//! This crate provides the numeric foundation shared by the stacked-stats
//! crates:
//!
//! - [`Numeric`]: element types accepted as values and weights
//! - [`argsort_stable`], [`gather`], [`cumulative_sum`], [`search_sorted`]:
//!   the sort/scan/search operations a stacked quantile is built from
//! - [`Tolerance`]: approximate float equality
//!
//! # Example
//!
//! ```rust
//! use stacked_core::{argsort_stable, cumulative_sum, gather, search_sorted, Side};
//!
//! let values = [3.0, 1.0, 2.0];
//! let weights = [1.0, 2.0, 3.0];
//!
//! let perm = argsort_stable(&values);
//! let sorted_weights = gather(&weights, &perm).unwrap();
//! let cumulative = cumulative_sum(&sorted_weights);
//! assert_eq!(cumulative, vec![2.0, 5.0, 6.0]);
//!
//! // First cumulative weight strictly above half the total
//! assert_eq!(search_sorted(&cumulative, &3.0, Side::Right), 1);
//! ```

pub mod error;
pub mod numeric;
pub mod primitives;
pub mod tolerance;

pub use error::{Error, Result};
pub use numeric::Numeric;
pub use primitives::{argsort_stable, cumulative_sum, gather, search_sorted, Side};
pub use tolerance::Tolerance;
