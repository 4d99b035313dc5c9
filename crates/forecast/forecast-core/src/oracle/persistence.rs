//! Seasonal-naive model with Gaussian quantile bands
//!
//! The point path repeats the last seasonal cycle of the context. Spread
//! comes from the lag-`season` differences of the context and widens with
//! the square root of the number of cycles ahead.

use forecast_spi::{ForecastError, QuantileModel, Result};
use statrs::distribution::{ContinuousCDF, Normal};

/// One day at 15-minute cadence.
pub const DEFAULT_SEASON: usize = 96;

/// Seasonal-naive forecaster over a fixed native quantile grid.
#[derive(Debug, Clone, PartialEq)]
pub struct NaivePersistenceModel {
    season: usize,
    grid: Vec<f64>,
}

impl NaivePersistenceModel {
    /// `season` of 0 or 1 means plain last-value persistence. Grid
    /// quantiles must lie strictly inside `(0, 1)`.
    pub fn new(season: usize, grid: Vec<f64>) -> Result<Self> {
        if grid.is_empty() {
            return Err(ForecastError::config("quantile_grid", "grid is empty"));
        }
        if let Some(q) = grid.iter().find(|q| !(**q > 0.0 && **q < 1.0)) {
            return Err(ForecastError::config(
                "quantile_grid",
                format!("{} is outside (0, 1)", q),
            ));
        }
        Ok(Self { season, grid })
    }

    /// Lag actually used for a context of `n` samples; falls back to 1 when
    /// the context does not hold a full cycle plus one.
    fn lag_for(&self, n: usize) -> usize {
        if self.season > 1 && n > self.season {
            self.season
        } else {
            1
        }
    }
}

impl Default for NaivePersistenceModel {
    fn default() -> Self {
        Self {
            season: DEFAULT_SEASON,
            grid: vec![0.1, 0.5, 0.9],
        }
    }
}

/// Population standard deviation of `context[i] - context[i - lag]`.
fn lag_spread(context: &[f64], lag: usize) -> f64 {
    let diffs: Vec<f64> = (lag..context.len())
        .map(|i| context[i] - context[i - lag])
        .collect();
    if diffs.len() < 2 {
        return 0.0;
    }
    let n = diffs.len() as f64;
    let mean = diffs.iter().sum::<f64>() / n;
    let variance = diffs.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

impl QuantileModel for NaivePersistenceModel {
    fn name(&self) -> &str {
        "naive_persistence"
    }

    fn row_count(&self) -> usize {
        self.grid.len()
    }

    fn forecast(&self, context: &[f64], prediction_length: usize) -> Result<Vec<Vec<f64>>> {
        if context.is_empty() {
            return Err(ForecastError::oracle("context is empty"));
        }
        if context.iter().any(|v| !v.is_finite()) {
            return Err(ForecastError::oracle("context contains non-finite values"));
        }

        let standard = Normal::new(0.0, 1.0).map_err(|e| ForecastError::oracle(e.to_string()))?;
        let n = context.len();
        let lag = self.lag_for(n);
        let sigma = lag_spread(context, lag);
        let last_cycle = &context[n - lag..];

        let rows = self
            .grid
            .iter()
            .map(|&q| {
                let z = standard.inverse_cdf(q);
                (0..prediction_length)
                    .map(|step| {
                        let cycles_ahead = (step / lag + 1) as f64;
                        last_cycle[step % lag] + z * sigma * cycles_ahead.sqrt()
                    })
                    .collect()
            })
            .collect();
        Ok(rows)
    }
}
