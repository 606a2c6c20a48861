//! Stacked quantile estimator and the free-function API

use crate::batch::ColumnBatch;
use crate::config::{ExecutionStrategy, StackedQuantileConfig};
use crate::split::MedianSplit;
use crate::stack::WeightedStack;
use crate::{Error, Result};
use ndarray::{Array1, ArrayBase, Data, Dimension, RemoveAxis};
use stacked_core::Numeric;
use tracing::{instrument, trace};

/// Stacked quantile estimator with a fixed configuration
///
/// # Example
///
/// ```rust
/// use ndarray::array;
/// use stacked_quantile::{StackedQuantile, StackedQuantileConfig};
///
/// let estimator = StackedQuantile::new(StackedQuantileConfig::default());
///
/// // 1 1 1 1 2 2 2 2 2 3 3 3 3 3 3
/// let median = estimator.median(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(median, 2.0);
///
/// let values = array![[1.0, 10.0], [2.0, 20.0]];
/// let weights = array![[1.0], [1.0]];
/// let medians = estimator.medians(&values, &weights).unwrap();
/// assert_eq!(medians, array![1.5, 15.0]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StackedQuantile {
    config: StackedQuantileConfig,
}

impl StackedQuantile {
    /// Create an estimator
    pub fn new(config: StackedQuantileConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &StackedQuantileConfig {
        &self.config
    }

    /// Validated, sorted stack for repeated queries over one pair
    pub fn stack<T, W>(&self, values: &[T], weights: &[W]) -> Result<WeightedStack<T::Float>>
    where
        T: Numeric,
        W: Numeric<Float = T::Float>,
    {
        WeightedStack::new(values, weights, self.config.tolerance)
    }

    /// Stacked quantile of one vector
    ///
    /// The quantile is checked before the inputs.
    pub fn quantile<T, W>(&self, values: &[T], weights: &[W], quantile: f64) -> Result<T::Float>
    where
        T: Numeric,
        W: Numeric<Float = T::Float>,
    {
        Error::check_quantile(quantile)?;
        self.stack(values, weights)?.quantile(quantile)
    }

    /// Stacked median of one vector
    pub fn median<T, W>(&self, values: &[T], weights: &[W]) -> Result<T::Float>
    where
        T: Numeric,
        W: Numeric<Float = T::Float>,
    {
        self.quantile(values, weights, 0.5)
    }

    /// Axis-wise stacked quantile of an array of vectors
    ///
    /// `values` has shape `(..., m)` and `weights` shape `(..., 1)` with the
    /// same leading shape. Returns one result per trailing-axis index, each
    /// computed independently over all leading positions.
    #[instrument(
        level = "debug",
        skip(self, values, weights),
        fields(values_shape = ?values.shape(), weights_shape = ?weights.shape())
    )]
    pub fn quantiles<T, W, S1, S2, D1, D2>(
        &self,
        values: &ArrayBase<S1, D1>,
        weights: &ArrayBase<S2, D2>,
        quantile: f64,
    ) -> Result<Array1<T::Float>>
    where
        T: Numeric,
        W: Numeric<Float = T::Float>,
        S1: Data<Elem = T>,
        S2: Data<Elem = W>,
        D1: RemoveAxis,
        D2: Dimension,
    {
        let batch = ColumnBatch::from_arrays(values, weights)?;
        Error::check_quantile(quantile)?;
        let results = match self.config.strategy {
            ExecutionStrategy::Sequential => self.columns_sequential(&batch, quantile)?,
            ExecutionStrategy::Parallel => self.columns_parallel(&batch, quantile)?,
        };
        Ok(Array1::from_vec(results))
    }

    /// Axis-wise stacked median of an array of vectors
    pub fn medians<T, W, S1, S2, D1, D2>(
        &self,
        values: &ArrayBase<S1, D1>,
        weights: &ArrayBase<S2, D2>,
    ) -> Result<Array1<T::Float>>
    where
        T: Numeric,
        W: Numeric<Float = T::Float>,
        S1: Data<Elem = T>,
        S2: Data<Elem = W>,
        D1: RemoveAxis,
        D2: Dimension,
    {
        self.quantiles(values, weights, 0.5)
    }

    /// Split indices around the stacked median
    pub fn median_split<T, W>(&self, values: &[T], weights: &[W]) -> Result<MedianSplit<T::Float>>
    where
        T: Numeric,
        W: Numeric<Float = T::Float>,
    {
        MedianSplit::new(values, weights, self.config.tolerance)
    }

    fn columns_sequential<T, W>(
        &self,
        batch: &ColumnBatch<T, W>,
        quantile: f64,
    ) -> Result<Vec<T::Float>>
    where
        T: Numeric,
        W: Numeric<Float = T::Float>,
    {
        batch
            .columns()
            .iter()
            .enumerate()
            .map(|(j, column)| {
                trace!(column = j, "evaluating column");
                self.quantile(column, batch.weights(), quantile)
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn columns_parallel<T, W>(
        &self,
        batch: &ColumnBatch<T, W>,
        quantile: f64,
    ) -> Result<Vec<T::Float>>
    where
        T: Numeric,
        W: Numeric<Float = T::Float>,
    {
        use rayon::prelude::*;

        batch
            .columns()
            .par_iter()
            .map(|column| self.quantile(column, batch.weights(), quantile))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn columns_parallel<T, W>(
        &self,
        batch: &ColumnBatch<T, W>,
        quantile: f64,
    ) -> Result<Vec<T::Float>>
    where
        T: Numeric,
        W: Numeric<Float = T::Float>,
    {
        self.columns_sequential(batch, quantile)
    }
}

/// Stacked quantile of a vector of values
///
/// Weights are read as occurrence counts; see [`WeightedStack`].
///
/// # Errors
///
/// - [`Error::QuantileRange`] if `quantile` is not in [0, 1]
/// - [`Error::Shape`] if values and weights differ in length
/// - [`Error::EmptyInput`] if there are no values
/// - [`Error::NonFinite`] if a value or weight is NaN or infinite
/// - [`Error::NegativeWeight`] if a weight is below zero
pub fn get_stacked_quantile<T, W>(values: &[T], weights: &[W], quantile: f64) -> Result<T::Float>
where
    T: Numeric,
    W: Numeric<Float = T::Float>,
{
    StackedQuantile::default().quantile(values, weights, quantile)
}

/// Axis-wise stacked quantile of an array of vectors
///
/// `values` has shape `(..., m)`; `weights` has shape `(..., 1)` where the
/// leading shapes match. Note the weights carry a trailing axis of length
/// one rather than being one scalar per vector.
pub fn get_stacked_quantiles<T, W, S1, S2, D1, D2>(
    values: &ArrayBase<S1, D1>,
    weights: &ArrayBase<S2, D2>,
    quantile: f64,
) -> Result<Array1<T::Float>>
where
    T: Numeric,
    W: Numeric<Float = T::Float>,
    S1: Data<Elem = T>,
    S2: Data<Elem = W>,
    D1: RemoveAxis,
    D2: Dimension,
{
    StackedQuantile::default().quantiles(values, weights, quantile)
}

/// Stacked median of a vector of values
pub fn get_stacked_median<T, W>(values: &[T], weights: &[W]) -> Result<T::Float>
where
    T: Numeric,
    W: Numeric<Float = T::Float>,
{
    get_stacked_quantile(values, weights, 0.5)
}

/// Axis-wise stacked median of an array of vectors
pub fn get_stacked_medians<T, W, S1, S2, D1, D2>(
    values: &ArrayBase<S1, D1>,
    weights: &ArrayBase<S2, D2>,
) -> Result<Array1<T::Float>>
where
    T: Numeric,
    W: Numeric<Float = T::Float>,
    S1: Data<Elem = T>,
    S2: Data<Elem = W>,
    D1: RemoveAxis,
    D2: Dimension,
{
    get_stacked_quantiles(values, weights, 0.5)
}
