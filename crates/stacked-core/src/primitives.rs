//! Sort, scan and search primitives
//!
//! The small set of array operations the stacked quantile engine is built on:
//! a stable sort permutation, a gather by permutation, a prefix sum and an
//! insertion-point search over a sorted sequence.

use crate::{Error, Result};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which insertion point [`search_sorted`] returns when `target` ties with
/// existing elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Before every element equal to the target
    Left,
    /// After every element equal to the target
    Right,
}

/// Total order over `PartialOrd` elements with unordered elements (NaN) last
fn nan_last<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => {
            let a_unordered = a.partial_cmp(a).is_none();
            let b_unordered = b.partial_cmp(b).is_none();
            a_unordered.cmp(&b_unordered)
        }
    }
}

/// Stable ascending sort permutation
///
/// `values[perm[0]] <= values[perm[1]] <= ...`; equal elements keep their
/// original relative order. NaN values go after everything else.
///
/// # Examples
///
/// ```rust
/// use stacked_core::argsort_stable;
///
/// assert_eq!(argsort_stable(&[3.0, 1.0, 3.0, 2.0]), vec![1, 3, 0, 2]);
/// ```
pub fn argsort_stable<T: PartialOrd>(values: &[T]) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..values.len()).collect();
    perm.sort_by(|&a, &b| nan_last(&values[a], &values[b]));
    perm
}

/// Reorder `values` by a permutation of its indices
pub fn gather<T: Copy>(values: &[T], perm: &[usize]) -> Result<Vec<T>> {
    if perm.len() != values.len() {
        return Err(Error::size_mismatch(values.len(), perm.len(), "gather permutation"));
    }
    perm.iter()
        .map(|&i| {
            values
                .get(i)
                .copied()
                .ok_or_else(|| Error::index_out_of_bounds(i, values.len()))
        })
        .collect()
}

/// Running total of `values`
///
/// # Examples
///
/// ```rust
/// use stacked_core::cumulative_sum;
///
/// assert_eq!(cumulative_sum(&[1.0, 2.0, 3.0]), vec![1.0, 3.0, 6.0]);
/// ```
pub fn cumulative_sum<F: Float>(values: &[F]) -> Vec<F> {
    values
        .iter()
        .scan(F::zero(), |acc, &x| {
            *acc = *acc + x;
            Some(*acc)
        })
        .collect()
}

/// Insertion point of `target` in an ascending sequence
///
/// With [`Side::Left`] this is the first index whose element is `>= target`,
/// with [`Side::Right`] the first index whose element is `> target`. Returns
/// `sorted.len()` when no such element exists.
pub fn search_sorted<T: PartialOrd>(sorted: &[T], target: &T, side: Side) -> usize {
    match side {
        Side::Left => sorted.partition_point(|x| x < target),
        Side::Right => sorted.partition_point(|x| x <= target),
    }
}
