//! Column split for n-dimensional value arrays
//!
//! Values of shape `(..., m)` become `m` columns of length `N`, where `N` is
//! the product of the leading dimensions. Weights of shape `(..., 1)` are
//! flattened once and shared by every column.

use crate::{Error, Result};
use ndarray::{ArrayBase, Axis, Data, Dimension, RemoveAxis};
use stacked_core::Numeric;

/// Trailing-axis columns of a value array with their shared weights
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBatch<T, W> {
    columns: Vec<Vec<T>>,
    weights: Vec<W>,
}

impl<T: Numeric, W: Numeric> ColumnBatch<T, W> {
    /// Split `values` into columns and flatten `weights`
    ///
    /// Both arrays must be at least one-dimensional and agree on every axis
    /// but the last. Elements are read in logical (row-major) order, so any
    /// memory layout gives the same columns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ndarray::array;
    /// use stacked_quantile::batch::ColumnBatch;
    ///
    /// let values = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
    /// let weights = array![[1.0], [2.0], [3.0]];
    /// let batch = ColumnBatch::from_arrays(&values, &weights).unwrap();
    /// assert_eq!(batch.columns(), &[vec![1.0, 2.0, 3.0], vec![10.0, 20.0, 30.0]]);
    /// assert_eq!(batch.weights(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_arrays<S1, S2, D1, D2>(
        values: &ArrayBase<S1, D1>,
        weights: &ArrayBase<S2, D2>,
    ) -> Result<Self>
    where
        S1: Data<Elem = T>,
        S2: Data<Elem = W>,
        D1: RemoveAxis,
        D2: Dimension,
    {
        if values.ndim() == 0 {
            return Err(Error::Shape(
                "values must be at least one-dimensional".to_string(),
            ));
        }
        if weights.ndim() == 0 {
            return Err(Error::Shape(
                "weights must be at least one-dimensional".to_string(),
            ));
        }

        let values_lead = &values.shape()[..values.ndim() - 1];
        let weights_lead = &weights.shape()[..weights.ndim() - 1];
        if values_lead != weights_lead {
            return Err(Error::Shape(format!(
                "values and weights must match up to the last axis, got {:?} and {:?}",
                values.shape(),
                weights.shape()
            )));
        }

        let axis = Axis(values.ndim() - 1);
        let columns = (0..values.len_of(axis))
            .map(|j| values.index_axis(axis, j).iter().copied().collect())
            .collect();
        let weights = weights.iter().copied().collect();

        Ok(Self { columns, weights })
    }

    /// One vector per trailing-axis index
    pub fn columns(&self) -> &[Vec<T>] {
        &self.columns
    }

    /// Flattened weights shared by all columns
    pub fn weights(&self) -> &[W] {
        &self.weights
    }

    /// Number of columns (`m`)
    pub fn width(&self) -> usize {
        self.columns.len()
    }
}
