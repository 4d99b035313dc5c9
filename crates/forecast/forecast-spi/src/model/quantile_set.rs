//! Requested quantile levels

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// Two quantile labels closer than this are the same quantile.
pub const QUANTILE_TOLERANCE: f64 = 1e-9;

/// Compare quantile labels with [`QUANTILE_TOLERANCE`].
pub fn same_quantile(a: f64, b: f64) -> bool {
    (a - b).abs() <= QUANTILE_TOLERANCE
}

/// A non-empty, duplicate-free list of quantiles in `[0, 1]`.
///
/// Order is preserved: forecast rows are returned in this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct QuantileSet(Vec<f64>);

impl QuantileSet {
    pub fn new(quantiles: Vec<f64>) -> Result<Self> {
        if quantiles.is_empty() {
            return Err(ForecastError::config("quantiles", "at least one quantile is required"));
        }
        for (i, &q) in quantiles.iter().enumerate() {
            if !q.is_finite() || !(0.0..=1.0).contains(&q) {
                return Err(ForecastError::config(
                    "quantiles",
                    format!("{} is outside [0, 1]", q),
                ));
            }
            if quantiles[..i].iter().any(|&p| same_quantile(p, q)) {
                return Err(ForecastError::config(
                    "quantiles",
                    format!("{} is requested twice", q),
                ));
            }
        }
        Ok(Self(quantiles))
    }

    /// Just the median.
    pub fn median() -> Self {
        Self(vec![0.5])
    }

    /// 10th, 50th and 90th percentiles.
    pub fn three_point() -> Self {
        Self(vec![0.1, 0.5, 0.9])
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl Default for QuantileSet {
    fn default() -> Self {
        Self::median()
    }
}

impl TryFrom<Vec<f64>> for QuantileSet {
    type Error = ForecastError;

    fn try_from(quantiles: Vec<f64>) -> Result<Self> {
        Self::new(quantiles)
    }
}

impl From<QuantileSet> for Vec<f64> {
    fn from(set: QuantileSet) -> Self {
        set.0
    }
}

impl FromStr for QuantileSet {
    type Err = ForecastError;

    /// Parse a comma-separated list such as `"0.1,0.5,0.9"`.
    fn from_str(s: &str) -> Result<Self> {
        let quantiles = s
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<f64>().map_err(|_| {
                    ForecastError::config("quantiles", format!("'{}' is not a number", part))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(quantiles)
    }
}
