//! Configuration for stacked quantile estimation

use serde::{Deserialize, Serialize};
use stacked_core::Tolerance;

/// How the columns of a batch are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStrategy {
    /// One column after another
    Sequential,

    /// Columns spread over the rayon thread pool
    ///
    /// Without the `parallel` feature this runs sequentially.
    Parallel,
}

impl Default for ExecutionStrategy {
    fn default() -> Self {
        Self::Sequential
    }
}

/// Settings shared by every stacked quantile computation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StackedQuantileConfig {
    /// When a cumulative weight counts as landing on the target
    pub tolerance: Tolerance,

    /// Column evaluation for batches
    pub strategy: ExecutionStrategy,
}

impl StackedQuantileConfig {
    /// Default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the boundary tolerance
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replace the batch execution strategy
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
