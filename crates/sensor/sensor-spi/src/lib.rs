//! Sensor Series Service Provider Interface
//!
//! Defines the sample/series model of a water-heater temperature stream,
//! the generation configuration, and the contract for series generators.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesGenerator;
pub use error::{Result, SensorError};
pub use model::{
    CalendarContext, GenerationConfig, Sample, Series, SynthesisProfile, DEFAULT_BASE_TEMPERATURE,
    DEFAULT_CADENCE_MINUTES, DEFAULT_INTERVAL_COUNT, MAX_INTERVAL_COUNT,
};

// ============================================================================
// Tests
// ============================================================================
