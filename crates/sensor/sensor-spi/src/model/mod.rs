//! Data models for sensor series.

mod calendar;
mod generation_config;
mod series;

pub use calendar::CalendarContext;
pub use generation_config::{
    GenerationConfig, SynthesisProfile, DEFAULT_BASE_TEMPERATURE, DEFAULT_CADENCE_MINUTES,
    DEFAULT_INTERVAL_COUNT, MAX_INTERVAL_COUNT,
};
pub use series::{Sample, Series};
