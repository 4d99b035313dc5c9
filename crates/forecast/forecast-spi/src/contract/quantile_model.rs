//! Trait for models with a fixed native quantile grid

use crate::error::Result;

/// A forecasting model that always emits the same set of quantile rows.
///
/// Which quantile each row holds is not part of this trait; an adapter
/// pairs the model with an explicit quantile-to-row table.
pub trait QuantileModel: Send + Sync {
    /// Model name
    fn name(&self) -> &str;

    /// Number of rows `forecast` returns
    fn row_count(&self) -> usize;

    /// Forecast every native row, each `prediction_length` steps long
    fn forecast(&self, context: &[f64], prediction_length: usize) -> Result<Vec<Vec<f64>>>;
}
