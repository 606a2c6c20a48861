//! Property-based tests for stacked quantiles
//!
//! These tests pin down the occurrence semantics: integer weights behave as
//! repetitions, weight scale and zero-weight entries do not matter, and the
//! batch adapter is a plain per-column loop.

use ndarray::{Array2, Array3};
use proptest::prelude::*;
use stacked_quantile::{
    get_stacked_median, get_stacked_quantile, get_stacked_quantiles, ExecutionStrategy,
    StackedQuantile, StackedQuantileConfig,
};

/// Equal-length integer values and positive integer weights
fn values_and_weights(max_len: usize) -> impl Strategy<Value = (Vec<i32>, Vec<u32>)> {
    (1..max_len).prop_flat_map(|n| {
        (
            prop::collection::vec(-1000i32..1000, n),
            prop::collection::vec(1u32..50, n),
        )
    })
}

fn expanded_median(values: &[i32], weights: &[u32]) -> f64 {
    let mut expanded: Vec<f64> = values
        .iter()
        .zip(weights)
        .flat_map(|(&v, &w)| std::iter::repeat(v as f64).take(w as usize))
        .collect();
    expanded.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let n = expanded.len();
    if n % 2 == 1 {
        expanded[n / 2]
    } else {
        (expanded[n / 2 - 1] + expanded[n / 2]) / 2.0
    }
}

proptest! {
    // Property: integer weights behave exactly like repeated values
    #[test]
    fn prop_median_matches_repeated_values((values, weights) in values_and_weights(30)) {
        let stacked = get_stacked_median(&values, &weights).unwrap();
        prop_assert_eq!(stacked, expanded_median(&values, &weights));
    }

    // Property: scaling every weight by a power of two changes nothing
    #[test]
    fn prop_weight_scale_invariance(
        (values, weights) in values_and_weights(30),
        exponent in 1i32..20,
        q in 0.0f64..=1.0,
    ) {
        let base: Vec<f64> = weights.iter().map(|&w| w as f64).collect();
        let scale = 2f64.powi(exponent);
        let scaled: Vec<f64> = base.iter().map(|w| w * scale).collect();
        prop_assert_eq!(
            get_stacked_quantile(&values, &base, q).unwrap(),
            get_stacked_quantile(&values, &scaled, q).unwrap()
        );
    }

    // Property: zero-weight entries never affect the result
    #[test]
    fn prop_zero_weight_entries_ignored(
        (values, weights) in values_and_weights(20),
        noise in prop::collection::vec(-1000i32..1000, 1..10),
        q in 0.0f64..=1.0,
    ) {
        let mut padded_values = values.clone();
        let mut padded_weights = weights.clone();
        for (i, &v) in noise.iter().enumerate() {
            let at = (i * 7) % (padded_values.len() + 1);
            padded_values.insert(at, v);
            padded_weights.insert(at, 0);
        }
        prop_assert_eq!(
            get_stacked_quantile(&values, &weights, q).unwrap(),
            get_stacked_quantile(&padded_values, &padded_weights, q).unwrap()
        );
    }

    // Property: the result is an input value or the mean of two neighbours
    #[test]
    fn prop_result_is_value_or_neighbour_mean(
        values in prop::collection::vec(-1000.0f64..1000.0, 1..30),
        q in 0.0f64..=1.0,
    ) {
        let weights: Vec<f64> = (0..values.len()).map(|i| (i % 4) as f64).collect();
        let result = get_stacked_quantile(&values, &weights, q).unwrap();

        let mut kept: Vec<f64> = values
            .iter()
            .zip(&weights)
            .filter(|&(_, &w)| w > 0.0)
            .map(|(&v, _)| v)
            .collect();
        if kept.is_empty() {
            kept = values.clone();
        }
        kept.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let is_value = kept.contains(&result);
        let is_mean = kept.windows(2).any(|pair| (pair[0] + pair[1]) / 2.0 == result);
        prop_assert!(is_value || is_mean, "{} not derived from {:?}", result, kept);
    }

    // Property: pure function, bit-identical on repeat
    #[test]
    fn prop_idempotent(
        values in prop::collection::vec(-1e6f64..1e6, 1..30),
        q in 0.0f64..=1.0,
    ) {
        let weights: Vec<f64> = values.iter().map(|v| v.abs().sqrt()).collect();
        let first = get_stacked_quantile(&values, &weights, q).unwrap();
        let second = get_stacked_quantile(&values, &weights, q).unwrap();
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    // Property: every batch column equals the scalar engine on that column
    #[test]
    fn prop_batch_is_per_column(
        rows in 1usize..12,
        width in 1usize..6,
        seed in any::<u64>(),
        q in 0.0f64..=1.0,
    ) {
        let values = Array2::from_shape_fn((rows, width), |(r, c)| {
            ((seed.wrapping_add((r * 31 + c * 17) as u64)) % 97) as f64
        });
        let weights = Array2::from_shape_fn((rows, 1), |(r, _)| {
            ((seed >> 3).wrapping_add(r as u64) % 5) as f64
        });
        let flat_weights: Vec<f64> = weights.iter().copied().collect();

        let results = get_stacked_quantiles(&values, &weights, q).unwrap();
        prop_assert_eq!(results.len(), width);
        for (j, &result) in results.iter().enumerate() {
            let column = values.column(j).to_vec();
            prop_assert_eq!(result, get_stacked_quantile(&column, &flat_weights, q).unwrap());
        }
    }

    // Property: splitting the leading axis does not change the results
    #[test]
    fn prop_reshape_invariance(
        outer in 1usize..4,
        inner in 1usize..4,
        width in 1usize..5,
        data in prop::collection::vec(0u32..100, 48),
        weight_data in prop::collection::vec(0u32..10, 16),
        q in 0.0f64..=1.0,
    ) {
        let rows = outer * inner;
        let cells = data[..rows * width].to_vec();
        let row_weights = weight_data[..rows].to_vec();
        let flat = Array2::from_shape_vec((rows, width), cells.clone()).unwrap();
        let flat_weights = Array2::from_shape_vec((rows, 1), row_weights.clone()).unwrap();
        let nested = Array3::from_shape_vec((outer, inner, width), cells).unwrap();
        let nested_weights = Array3::from_shape_vec((outer, inner, 1), row_weights).unwrap();

        prop_assert_eq!(
            get_stacked_quantiles(&flat, &flat_weights, q).unwrap(),
            get_stacked_quantiles(&nested, &nested_weights, q).unwrap()
        );
    }

    // Property: column parallelism does not change the output
    #[test]
    fn prop_parallel_matches_sequential(
        rows in 1usize..20,
        width in 1usize..8,
        q in 0.0f64..=1.0,
    ) {
        let values = Array2::from_shape_fn((rows, width), |(r, c)| ((r * 13 + c * 7) % 23) as f64);
        let weights = Array2::from_shape_fn((rows, 1), |(r, _)| (r % 3) as f64);

        let sequential = StackedQuantile::default();
        let parallel = StackedQuantile::new(
            StackedQuantileConfig::default().with_strategy(ExecutionStrategy::Parallel),
        );
        prop_assert_eq!(
            sequential.quantiles(&values, &weights, q).unwrap(),
            parallel.quantiles(&values, &weights, q).unwrap()
        );
    }
}
