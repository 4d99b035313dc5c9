//! Forecast assembly
//!
//! Selects the windows, calls the oracle with the context values, and packs
//! the display window plus the oracle rows into a [`ForecastResponse`].
//! Rows are matched to requested quantiles by label, so an oracle that
//! stores quantiles in a different order still yields `forecast[k]` for
//! `quantiles[k]`.

use std::sync::Arc;

use forecast_spi::{
    same_quantile, ForecastError, ForecastPlan, ForecastRequest, ForecastResponse,
    ForecastResult, QuantileOracle, QuantileSet, Result,
};
use sensor_spi::Series;
use tracing::{debug, warn};

use crate::window::select;

/// Owns a shared oracle handle and turns series into responses.
#[derive(Clone)]
pub struct ForecastAssembler {
    oracle: Arc<dyn QuantileOracle>,
}

impl ForecastAssembler {
    pub fn new(oracle: Arc<dyn QuantileOracle>) -> Self {
        Self { oracle }
    }

    pub fn oracle(&self) -> &Arc<dyn QuantileOracle> {
        &self.oracle
    }

    /// Build the response for `series` under `plan`.
    pub fn assemble(&self, series: &Series, plan: &ForecastPlan) -> Result<ForecastResponse> {
        assemble(series, self.oracle.as_ref(), plan)
    }
}

impl std::fmt::Debug for ForecastAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForecastAssembler")
            .field("oracle", &self.oracle.name())
            .finish()
    }
}

/// Assemble with a borrowed oracle.
pub fn assemble(
    series: &Series,
    oracle: &dyn QuantileOracle,
    plan: &ForecastPlan,
) -> Result<ForecastResponse> {
    plan.validate()?;
    check_supported(oracle, &plan.quantiles)?;

    let (context, shown) = select(series, plan.context_length, plan.display_length)?;
    let request = ForecastRequest::new(context, plan.prediction_length, &plan.quantiles);

    let result = oracle
        .predict(
            &request.context_values(),
            request.prediction_length,
            request.quantiles.as_slice(),
        )
        .map_err(|e| {
            warn!(oracle = oracle.name(), error = %e, "Oracle call failed");
            e
        })?;
    let forecast = remap(result, request.quantiles, request.prediction_length)?;

    debug!(
        oracle = oracle.name(),
        context = context.len(),
        display = shown.len(),
        rows = forecast.len(),
        "Forecast assembled"
    );

    Ok(ForecastResponse {
        timestamps: shown.timestamps(),
        actual: shown.values(),
        forecast,
    })
}

/// Reject quantiles the oracle has declared it cannot serve.
fn check_supported(oracle: &dyn QuantileOracle, quantiles: &QuantileSet) -> Result<()> {
    let Some(supported) = oracle.supported_quantiles() else {
        return Ok(());
    };
    match quantiles
        .iter()
        .find(|&q| !supported.iter().any(|&s| same_quantile(s, q)))
    {
        Some(q) => Err(ForecastError::config(
            "quantiles",
            format!("{} is not served by '{}'", q, oracle.name()),
        )),
        None => Ok(()),
    }
}

/// Put oracle rows into request order, looking each one up by its label.
fn remap(
    result: ForecastResult,
    quantiles: &QuantileSet,
    prediction_length: usize,
) -> Result<Vec<Vec<f64>>> {
    result.check_shape(prediction_length)?;
    if result.matrix.len() != quantiles.len() {
        return Err(ForecastError::oracle(format!(
            "{} rows for {} requested quantiles",
            result.matrix.len(),
            quantiles.len()
        )));
    }

    quantiles
        .iter()
        .map(|q| {
            result
                .row_for(q)
                .map(<[f64]>::to_vec)
                .ok_or_else(|| ForecastError::oracle(format!("no row for quantile {}", q)))
        })
        .collect()
}
