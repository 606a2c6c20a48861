//! Naive reference implementation of the stacked quantile
//!
//! Expands integer weights into literal repetitions and reads the quantile off
//! the expanded, sorted list. Intentionally simple and slow; it exists to
//! check the cumulative-weight engine against the occurrence definition.
//!
//! DO NOT USE IN PRODUCTION - these are for testing and debugging only!

/// Occurrence-expanding stacked quantile
pub struct NaiveStackedQuantile;

impl NaiveStackedQuantile {
    /// Repeat every value by its weight and sort
    pub fn expand(values: &[f64], weights: &[usize]) -> Vec<f64> {
        assert_eq!(values.len(), weights.len(), "values and weights must be the same length");

        let mut expanded: Vec<f64> = values
            .iter()
            .zip(weights)
            .flat_map(|(&v, &w)| std::iter::repeat(v).take(w))
            .collect();
        expanded.sort_by(|a, b| a.partial_cmp(b).unwrap());
        expanded
    }

    /// Quantile of the expanded list
    ///
    /// With `n` occurrences the target position is `t = n * p`. When `t`
    /// lands on a whole number strictly inside the list the two occurrences
    /// either side of it are averaged; otherwise the occurrence containing
    /// `t` is returned.
    pub fn quantile(values: &[f64], weights: &[usize], p: f64) -> f64 {
        assert!((0.0..=1.0).contains(&p), "Probability must be in [0, 1]");

        let weights: Vec<usize> = if weights.iter().all(|&w| w == 0) {
            vec![1; weights.len()]
        } else {
            weights.to_vec()
        };
        let sorted = Self::expand(values, &weights);
        assert!(!sorted.is_empty(), "Cannot compute quantile of empty data");

        let n = sorted.len();
        let t = n as f64 * p;
        let whole = t.floor();

        // Same boundary slack as the engine
        const EPS: f64 = 1e-9;
        if whole as usize >= n {
            return sorted[n - 1];
        }
        let position = whole as usize;
        if position > 0 && t - whole <= EPS + EPS * t {
            return (sorted[position - 1] + sorted[position]) / 2.0;
        }
        sorted[position]
    }

    /// Median of the expanded list
    pub fn median(values: &[f64], weights: &[usize]) -> f64 {
        Self::quantile(values, weights, 0.5)
    }

    /// Classical median of an unweighted list
    pub fn unweighted_median(data: &[f64]) -> f64 {
        assert!(!data.is_empty(), "Cannot compute median of empty data");

        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let n = sorted.len();
        if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        }
    }
}
