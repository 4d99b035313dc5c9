//! Trait for quantile forecasting oracles

use crate::error::Result;
use crate::model::ForecastResult;

/// A black-box probabilistic forecaster.
///
/// Given a context of past values, an oracle returns one row of
/// `prediction_length` values per requested quantile. Rows carry their
/// quantile labels in [`ForecastResult::quantile_index`]; callers must not
/// assume the rows come back in request order.
///
/// # Example
///
/// ```rust,ignore
/// let result = oracle.predict(&context, 24, &[0.1, 0.5, 0.9])?;
/// if let Some(median) = result.row_for(0.5) {
///     println!("next step median: {}", median[0]);
/// }
/// ```
pub trait QuantileOracle: Send + Sync {
    /// Oracle name, used in logs and readiness output
    fn name(&self) -> &str;

    /// Forecast `prediction_length` steps past the end of `context`
    fn predict(
        &self,
        context: &[f64],
        prediction_length: usize,
        quantiles: &[f64],
    ) -> Result<ForecastResult>;

    /// Quantiles this oracle can serve. `None` means any value in `[0, 1]`.
    fn supported_quantiles(&self) -> Option<Vec<f64>> {
        None
    }
}
