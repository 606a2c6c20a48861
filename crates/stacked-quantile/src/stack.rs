//! Sorted value/cumulative-weight stack behind every stacked quantile
//!
//! Weights are read as occurrence counts: values `(1, 2, 3)` with weights
//! `(4, 5, 6)` behave like the list `(1, 1, 1, 1, 2, 2, 2, 2, 2, 3, ...)`.
//! A quantile that lands exactly on the boundary between two groups returns
//! the plain average of the two boundary values, the same convention as the
//! median of an even-length list. Non-integer weights behave as if scaled to
//! integers, up to the absolute part of the boundary [`Tolerance`]: weights
//! far below one can meet boundaries that their integer scaling would miss.
//! Weights whose total overflows are halved until the total is finite.
//!
//! Two consequences follow from reading weights as occurrences:
//!
//! 1. Different quantiles can return identical values (0.5, 0.6 and 0.7 may
//!    all land in one heavy group), so an interquartile range can be zero.
//! 2. The median can be the first or last value if it carries enough weight.
//!    See [`crate::split::median_split`] for a balanced split around it.

use crate::validation::{validate, ValidatedPair};
use crate::{Error, Result};
use num_traits::{Float, NumCast};
use stacked_core::{argsort_stable, cumulative_sum, gather, search_sorted, Numeric, Side, Tolerance};
use tracing::{debug, trace};

/// Values sorted ascending with the running total of their weights
///
/// Holds at least one entry and only strictly positive weights.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedStack<F> {
    values: Vec<F>,
    cumulative: Vec<F>,
    tolerance: Tolerance,
}

impl<F: Float> WeightedStack<F> {
    /// Validate a value/weight pair and build its stack
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stacked_core::Tolerance;
    /// use stacked_quantile::WeightedStack;
    ///
    /// let stack =
    ///     WeightedStack::new(&[3.0, 1.0, 2.0], &[1.0, 1.0, 0.0], Tolerance::default()).unwrap();
    /// assert_eq!(stack.sorted_values(), &[1.0, 3.0]);
    /// assert_eq!(stack.median(), 2.0);
    /// ```
    pub fn new<T, W>(values: &[T], weights: &[W], tolerance: Tolerance) -> Result<Self>
    where
        T: Numeric<Float = F>,
        W: Numeric<Float = F>,
    {
        Self::from_validated(validate(values, weights)?, tolerance)
    }

    /// Drop zero-weight entries, then sort by value
    pub fn from_validated(pair: ValidatedPair<F>, tolerance: Tolerance) -> Result<Self> {
        let total = pair.len();
        let (values, weights): (Vec<F>, Vec<F>) = pair
            .values
            .into_iter()
            .zip(pair.weights)
            .filter(|(_, w)| !w.is_zero())
            .unzip();
        if values.len() < total {
            debug!(dropped = total - values.len(), "dropped zero-weight entries");
        }
        Error::check_non_empty(values.len())?;
        let weights = fit_total(weights);

        let perm = argsort_stable(&values);
        let values = gather(&values, &perm)?;
        let weights = gather(&weights, &perm)?;
        let cumulative = cumulative_sum(&weights);

        Ok(Self {
            values,
            cumulative,
            tolerance,
        })
    }

    /// Number of entries with positive weight
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; a stack holds at least one entry
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in ascending order
    pub fn sorted_values(&self) -> &[F] {
        &self.values
    }

    /// Running total of weights in value order
    pub fn cumulative_weights(&self) -> &[F] {
        &self.cumulative
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> F {
        self.cumulative[self.cumulative.len() - 1]
    }

    /// Tolerance used for the boundary check
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Stacked quantile, `quantile` in [0, 1]
    ///
    /// The result is one of the values, or the average of two values adjacent
    /// in sorted order when the quantile lands on the boundary between them.
    pub fn quantile(&self, quantile: f64) -> Result<F> {
        Error::check_quantile(quantile)?;
        let q = <F as NumCast>::from(quantile).ok_or(Error::QuantileRange { quantile })?;
        Ok(self.select(q))
    }

    /// Several stacked quantiles over the same sort
    pub fn quantiles(&self, quantiles: &[f64]) -> Result<Vec<F>> {
        quantiles.iter().map(|&q| self.quantile(q)).collect()
    }

    /// Stacked median
    pub fn median(&self) -> F {
        let half = F::one() / (F::one() + F::one());
        self.select(half)
    }

    fn select(&self, quantile: F) -> F {
        let k = self.values.len();
        let target = self.total_weight() * quantile;
        let index = search_sorted(&self.cumulative, &target, Side::Right);
        trace!(k, index, "located target in cumulative weights");

        if index == 0 {
            return self.values[0];
        }
        if index == k {
            return self.values[k - 1];
        }
        if self.tolerance.is_close(self.cumulative[index - 1], target) {
            debug!(index, "quantile on group boundary, averaging neighbours");
            return midpoint(self.values[index - 1], self.values[index]);
        }
        self.values[index]
    }
}

/// Scale weights by a power of two so that their total is finite
///
/// Each weight is finite, so the total is at most `k * F::max_value()`;
/// halving `bits(k) + 1` times brings it below `F::max_value() / 2`.
/// Power-of-two scaling is exact and leaves every quantile unchanged.
pub(crate) fn fit_total<F: Float>(mut weights: Vec<F>) -> Vec<F> {
    let total = weights.iter().fold(F::zero(), |acc, &w| acc + w);
    if total.is_finite() {
        return weights;
    }

    let halvings = (usize::BITS - weights.len().leading_zeros() + 1) as i32;
    let half = F::one() / (F::one() + F::one());
    let scale = half.powi(halvings);
    debug!(halvings, "total weight overflows, rescaling weights");
    for w in weights.iter_mut() {
        *w = *w * scale;
    }
    weights
}

/// Mean of two values without overflowing near `F::max_value()`
fn midpoint<F: Float>(lower: F, upper: F) -> F {
    let two = F::one() + F::one();
    let sum = lower + upper;
    if sum.is_finite() {
        sum / two
    } else {
        lower / two + upper / two
    }
}
