//! Adapter from a fixed-grid model to the quantile oracle contract

use forecast_spi::{ForecastError, ForecastResult, QuantileModel, QuantileOracle, Result};
use tracing::debug;

use super::QuantileMap;

/// Serves requested quantiles from a [`QuantileModel`] through an explicit
/// [`QuantileMap`].
///
/// Rows come back in the model's native row order, each labeled with its
/// quantile. Reordering into request order is the assembler's job.
#[derive(Debug, Clone)]
pub struct QuantileIndexedOracle<M> {
    pub(super) model: M,
    pub(super) map: QuantileMap,
}

impl<M: QuantileModel> QuantileIndexedOracle<M> {
    /// Pair `model` with `map`, checking that every mapped row exists.
    pub fn new(model: M, map: QuantileMap) -> Result<Self> {
        if map.max_row() >= model.row_count() {
            return Err(ForecastError::config(
                "quantile_map",
                format!(
                    "row {} is out of range for '{}' with {} rows",
                    map.max_row(),
                    model.name(),
                    model.row_count()
                ),
            ));
        }
        Ok(Self { model, map })
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn map(&self) -> &QuantileMap {
        &self.map
    }
}

impl<M: QuantileModel> QuantileOracle for QuantileIndexedOracle<M> {
    fn name(&self) -> &str {
        self.model.name()
    }

    fn predict(
        &self,
        context: &[f64],
        prediction_length: usize,
        quantiles: &[f64],
    ) -> Result<ForecastResult> {
        let mut wanted = quantiles
            .iter()
            .map(|&q| {
                self.map.row_of(q).map(|row| (row, q)).ok_or_else(|| {
                    ForecastError::config(
                        "quantiles",
                        format!("{} is not served by '{}'", q, self.model.name()),
                    )
                })
            })
            .collect::<Result<Vec<_>>>()?;
        wanted.sort_by_key(|&(row, _)| row);

        let mut rows = self.model.forecast(context, prediction_length)?;
        if rows.len() != self.model.row_count() {
            return Err(ForecastError::oracle(format!(
                "'{}' returned {} rows, expected {}",
                self.model.name(),
                rows.len(),
                self.model.row_count()
            )));
        }
        debug!(
            model = self.model.name(),
            rows = wanted.len(),
            prediction_length,
            "Model forecast ready"
        );

        let quantile_index = wanted.iter().map(|&(_, q)| q).collect();
        let matrix = wanted
            .iter()
            .map(|&(row, _)| std::mem::take(&mut rows[row]))
            .collect();
        Ok(ForecastResult::new(quantile_index, matrix))
    }

    fn supported_quantiles(&self) -> Option<Vec<f64>> {
        Some(self.map.quantiles())
    }
}
