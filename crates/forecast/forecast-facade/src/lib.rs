//! Forecast Facade
//!
//! High-level API for water-heater forecasts. Re-exports all public types
//! from the forecast stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use forecast_api::*;

// Explicit re-exports for documentation
pub use forecast_api::prelude;

// Re-export core constants
pub use forecast_core::oracle::DEFAULT_SEASON;

// Re-export SPI helpers not covered by the API crate
pub use forecast_spi::{same_quantile, ForecastRequest, QUANTILE_TOLERANCE};
