//! Input validation for value/weight pairs

use crate::{Error, Result};
use num_traits::{Float, One, ToPrimitive};
use stacked_core::Numeric;
use tracing::debug;

/// Values and weights that passed [`validate`], converted to the float type
///
/// Both vectors have the caller's length and order. Every weight is finite
/// and non-negative; zero-weight entries are still present.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedPair<F> {
    pub values: Vec<F>,
    pub weights: Vec<F>,
}

impl<F: Float> ValidatedPair<F> {
    /// Number of entries, zero-weight ones included
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when there are no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Check a value/weight pair and convert it for computation
///
/// In order: lengths must agree, values must be non-empty, values and weights
/// must be finite, weights must be non-negative. If every weight is exactly
/// zero the returned weights are all ones, so the result is the unweighted
/// quantile.
///
/// # Examples
///
/// ```rust
/// use stacked_quantile::validation::validate;
///
/// let pair = validate(&[1.0, 2.0], &[0.0, 0.0]).unwrap();
/// assert_eq!(pair.weights, vec![1.0, 1.0]);
/// ```
pub fn validate<T, W>(values: &[T], weights: &[W]) -> Result<ValidatedPair<T::Float>>
where
    T: Numeric,
    W: Numeric<Float = T::Float>,
{
    Error::check_lengths(values.len(), weights.len())?;
    Error::check_non_empty(values.len())?;

    if let Some(index) = values.iter().position(|v| !v.is_finite()) {
        return Err(Error::NonFinite { what: "values", index });
    }
    if let Some(index) = weights.iter().position(|w| !w.is_finite()) {
        return Err(Error::NonFinite { what: "weights", index });
    }
    if let Some(index) = weights.iter().position(|w| w.is_negative()) {
        let weight = weights[index].to_float().to_f64().unwrap_or(f64::NAN);
        return Err(Error::NegativeWeight { index, weight });
    }

    let values: Vec<T::Float> = values.iter().map(|v| v.to_float()).collect();
    let weights: Vec<T::Float> = if weights.iter().all(|w| w.is_zero()) {
        debug!(len = weights.len(), "all weights are zero, weighting equally");
        vec![<T::Float as One>::one(); weights.len()]
    } else {
        weights.iter().map(|w| w.to_float()).collect()
    };

    Ok(ValidatedPair { values, weights })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_through_valid_input() {
        let pair = validate(&[3.0, 1.0, 2.0], &[1.0, 0.0, 2.5]).unwrap();
        assert_eq!(pair.values, vec![3.0, 1.0, 2.0]);
        assert_eq!(pair.weights, vec![1.0, 0.0, 2.5]);
        assert_eq!(pair.len(), 3);
    }

    #[test]
    fn test_all_zero_weights_become_ones() {
        let weights = [0.0, 0.0, -0.0];
        let pair = validate(&[5.0, 6.0, 7.0], &weights).unwrap();
        assert_eq!(pair.weights, vec![1.0, 1.0, 1.0]);
        // caller data untouched
        assert_eq!(weights, [0.0, 0.0, -0.0]);
    }

    #[test]
    fn test_mixed_integer_types() {
        let pair = validate(&[1i32, 2, 3], &[4u32, 5, 6]).unwrap();
        assert_eq!(pair.values, vec![1.0, 2.0, 3.0]);
        assert_eq!(pair.weights, vec![4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_length_mismatch() {
        let err = validate(&[1.0; 10], &[1.0; 11]).unwrap_err();
        assert!(matches!(err, Error::Shape(_)));
    }

    #[test]
    fn test_empty() {
        let empty: [f64; 0] = [];
        assert_eq!(validate(&empty, &empty), Err(Error::EmptyInput));
    }

    #[test]
    fn test_negative_weight() {
        let err = validate(&[1.0, 2.0, 3.0], &[1.0, -1.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::NegativeWeight { index: 1, weight: -1.0 });

        let err = validate(&[1, 2], &[3i64, -2]).unwrap_err();
        assert_eq!(err, Error::NegativeWeight { index: 1, weight: -2.0 });
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(
            validate(&[1.0, f64::NAN], &[1.0, 1.0]),
            Err(Error::NonFinite { what: "values", index: 1 })
        );
        assert_eq!(
            validate(&[1.0, 2.0], &[f64::INFINITY, 1.0]),
            Err(Error::NonFinite { what: "weights", index: 0 })
        );
    }

    #[test]
    fn test_length_checked_before_emptiness() {
        let empty: [f64; 0] = [];
        assert!(matches!(validate(&empty, &[1.0]), Err(Error::Shape(_))));
    }
}
