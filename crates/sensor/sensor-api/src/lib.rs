//! Sensor Consumer API
//!
//! Configuration builders for synthetic sensor series.
//!
//! This crate provides:
//! - [`GenerationConfigBuilder`] for validated generation configs
//! - Re-exports from SPI and core for convenience

mod config;

pub use config::GenerationConfigBuilder;

// Re-export from core
pub use sensor_core::{calendar, clamp, synthesizer, timeline, SafetyClamp};

// Re-export from SPI
pub use sensor_spi::{
    GenerationConfig, Result, Sample, SensorError, Series, SeriesGenerator, SynthesisProfile,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::GenerationConfigBuilder;
    pub use sensor_core::{classify, synthesize, SafetyClamp};
    pub use sensor_spi::{
        CalendarContext, GenerationConfig, Result, Sample, SensorError, Series, SeriesGenerator,
        SynthesisProfile,
    };
}
