//! Quantile to row-index tables

use forecast_spi::{same_quantile, ForecastError, Result};

/// Which native row of a [`QuantileModel`](forecast_spi::QuantileModel)
/// holds which quantile.
///
/// The table belongs to the adapter for one specific model. It has to be
/// rebuilt for any model with a different output layout.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileMap {
    entries: Vec<(f64, usize)>,
}

impl QuantileMap {
    pub fn new(entries: Vec<(f64, usize)>) -> Result<Self> {
        if entries.is_empty() {
            return Err(ForecastError::config("quantile_map", "map is empty"));
        }
        for (i, &(q, row)) in entries.iter().enumerate() {
            if !q.is_finite() || !(0.0..=1.0).contains(&q) {
                return Err(ForecastError::config(
                    "quantile_map",
                    format!("{} is outside [0, 1]", q),
                ));
            }
            if entries[..i]
                .iter()
                .any(|&(p, r)| same_quantile(p, q) || r == row)
            {
                return Err(ForecastError::config(
                    "quantile_map",
                    format!("entry {} -> {} repeats a quantile or row", q, row),
                ));
            }
        }
        Ok(Self { entries })
    }

    /// `{0.1: 0, 0.5: 1, 0.9: 2}`
    pub fn three_point() -> Self {
        Self {
            entries: vec![(0.1, 0), (0.5, 1), (0.9, 2)],
        }
    }

    /// Native row holding quantile `q`
    pub fn row_of(&self, q: f64) -> Option<usize> {
        self.entries
            .iter()
            .find(|&&(p, _)| same_quantile(p, q))
            .map(|&(_, row)| row)
    }

    /// Mapped quantiles, in table order
    pub fn quantiles(&self) -> Vec<f64> {
        self.entries.iter().map(|&(q, _)| q).collect()
    }

    /// Highest row index referenced by the table
    pub fn max_row(&self) -> usize {
        self.entries.iter().map(|&(_, row)| row).max().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QuantileMap {
    fn default() -> Self {
        Self::three_point()
    }
}
