//! Forecast Consumer API
//!
//! Consumer configurations for the forecast pipeline.
//!
//! This crate provides:
//! - [`Preset`] bundles matching the known deployment shapes
//! - [`ServiceConfig`] pairing generation settings with a forecast plan
//! - [`ForecastOverrides`] for per-request adjustments
//! - Re-exports from SPI and core for convenience

mod config;

pub use config::{ForecastOverrides, Preset, ServiceConfig};

// Re-export from core
pub use forecast_core::{
    assembler, oracle, pipeline, window, assemble, default_oracle, select, ForecastAssembler,
    ForecastPipeline, NaivePersistenceModel, QuantileIndexedOracle, QuantileMap,
};

// Re-export traits from SPI
pub use forecast_spi::{
    ForecastError, ForecastPlan, ForecastResponse, ForecastResult, QuantileModel, QuantileOracle,
    QuantileSet, Result, Window,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{ForecastOverrides, Preset, ServiceConfig};
    pub use forecast_core::{default_oracle, ForecastAssembler, ForecastPipeline};
    pub use forecast_spi::{
        ForecastError, ForecastPlan, ForecastResponse, ForecastResult, QuantileOracle,
        QuantileSet, Result,
    };
    pub use sensor_api::{GenerationConfig, GenerationConfigBuilder, SynthesisProfile};
}
