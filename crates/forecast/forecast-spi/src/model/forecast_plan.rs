//! Window sizes and quantiles for one forecast

use sensor_spi::MAX_INTERVAL_COUNT;
use serde::{Deserialize, Serialize};

use super::QuantileSet;
use crate::error::{ForecastError, Result};

/// Longest horizon a plan may request: one week of 15-minute steps.
pub const MAX_PREDICTION_LENGTH: usize = 7 * 96;

/// How much history to feed the oracle, how much to show, how far to
/// forecast and at which quantiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPlan {
    /// Trailing samples passed to the oracle
    pub context_length: usize,
    /// Trailing samples returned as `actual`
    pub display_length: usize,
    /// Future steps per quantile row
    pub prediction_length: usize,
    /// Requested quantiles, in row order
    pub quantiles: QuantileSet,
}

impl ForecastPlan {
    pub fn new(
        context_length: usize,
        display_length: usize,
        prediction_length: usize,
        quantiles: QuantileSet,
    ) -> Self {
        Self {
            context_length,
            display_length,
            prediction_length,
            quantiles,
        }
    }

    /// Check that every length is positive and within its limit.
    pub fn validate(&self) -> Result<()> {
        for (name, value, limit) in [
            ("context_length", self.context_length, MAX_INTERVAL_COUNT),
            ("display_length", self.display_length, MAX_INTERVAL_COUNT),
            ("prediction_length", self.prediction_length, MAX_PREDICTION_LENGTH),
        ] {
            if value == 0 {
                return Err(ForecastError::config(name, "must be positive"));
            }
            if value > limit {
                return Err(ForecastError::config(
                    name,
                    format!("{} exceeds the limit of {}", value, limit),
                ));
            }
        }
        Ok(())
    }

    /// Check the plan against a series of `series_len` samples.
    pub fn validate_for(&self, series_len: usize) -> Result<()> {
        self.validate()?;
        if self.required_history() <= series_len {
            return Ok(());
        }
        for (name, value) in [
            ("context_length", self.context_length),
            ("display_length", self.display_length),
        ] {
            if value > series_len {
                return Err(ForecastError::config(
                    name,
                    format!("{} exceeds series length {}", value, series_len),
                ));
            }
        }
        Ok(())
    }

    /// Samples a series needs so that both windows fit
    pub fn required_history(&self) -> usize {
        self.context_length.max(self.display_length)
    }
}
