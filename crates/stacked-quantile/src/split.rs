//! Balanced split around the stacked median
//!
//! Splitting on `value < median` alone is not robust: the median may be the
//! first or last value when it carries most of the weight. Here values
//! strictly below and strictly above the median form the two sides, and the
//! values equal to it join the lighter side.

use crate::stack::{fit_total, WeightedStack};
use crate::validation::validate;
use crate::Result;
use num_traits::Float;
use stacked_core::{Numeric, Tolerance};
use tracing::debug;

/// Indices of the input on either side of the stacked median
#[derive(Debug, Clone, PartialEq)]
pub struct MedianSplit<F> {
    /// Stacked median of the input
    pub median: F,
    /// Indices of values below the median, ascending
    pub lower: Vec<usize>,
    /// Indices of values above the median, ascending
    pub upper: Vec<usize>,
}

impl<F: Float> MedianSplit<F> {
    /// Split a value/weight pair around its stacked median
    ///
    /// Values equal to the median go to the side with less total weight, the
    /// lower side on a tie. Zero-weight entries belong to neither side unless
    /// every weight is zero.
    pub fn new<T, W>(values: &[T], weights: &[W], tolerance: Tolerance) -> Result<Self>
    where
        T: Numeric<Float = F>,
        W: Numeric<Float = F>,
    {
        let pair = validate(values, weights)?;
        let median = WeightedStack::from_validated(pair.clone(), tolerance)?.median();
        let side_weights = fit_total(pair.weights);

        let mut lower = Vec::new();
        let mut upper = Vec::new();
        let mut ties = Vec::new();
        let mut lower_weight = F::zero();
        let mut upper_weight = F::zero();

        for (i, (&v, &w)) in pair.values.iter().zip(&side_weights).enumerate() {
            if w.is_zero() {
                continue;
            }
            if v < median {
                lower.push(i);
                lower_weight = lower_weight + w;
            } else if v > median {
                upper.push(i);
                upper_weight = upper_weight + w;
            } else {
                ties.push(i);
            }
        }

        if !ties.is_empty() {
            let side = if lower_weight <= upper_weight { &mut lower } else { &mut upper };
            debug!(ties = ties.len(), "assigning values equal to the median");
            side.extend(ties);
            side.sort_unstable();
        }

        Ok(Self {
            median,
            lower,
            upper,
        })
    }
}

/// Split indices around the stacked median with the default tolerance
///
/// # Examples
///
/// ```rust
/// use stacked_quantile::median_split;
///
/// // the heavy first value is the median, yet both sides are populated
/// let split = median_split(&[1.0, 5.0, 5.0, 9.0], &[10.0, 1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(split.median, 1.0);
/// assert_eq!(split.lower, vec![0]);
/// assert_eq!(split.upper, vec![1, 2, 3]);
/// ```
pub fn median_split<T, W>(values: &[T], weights: &[W]) -> Result<MedianSplit<T::Float>>
where
    T: Numeric,
    W: Numeric<Float = T::Float>,
{
    MedianSplit::new(values, weights, Tolerance::default())
}
