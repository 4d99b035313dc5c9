//! Forecast Core
//!
//! Core implementations for turning a synthesized series into a forecast
//! response: window selection, the assembler that calls the oracle and
//! remaps its rows, the quantile-map oracle adapter with a built-in
//! persistence model, and the end-to-end pipeline.

pub mod assembler;
pub mod oracle;
pub mod pipeline;
pub mod window;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    ForecastError, ForecastPlan, ForecastRequest, ForecastResponse, ForecastResult, QuantileModel,
    QuantileOracle, QuantileSet, Result, Window,
};

// Re-export main types
pub use assembler::{assemble, ForecastAssembler};
pub use oracle::{default_oracle, NaivePersistenceModel, QuantileIndexedOracle, QuantileMap};
pub use pipeline::ForecastPipeline;
pub use window::select;
