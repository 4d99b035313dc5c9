//! Forecast Service Provider Interface
//!
//! Defines the window and response models that sit between the sensor
//! series and a forecasting oracle, and the contracts oracles implement.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{QuantileModel, QuantileOracle};
pub use error::{ForecastError, Result};
pub use model::{
    same_quantile, ForecastPlan, ForecastRequest, ForecastResponse, ForecastResult,
    QuantileSet, Window, MAX_PREDICTION_LENGTH, QUANTILE_TOLERANCE,
};
