//! Sensor Core
//!
//! Implementations for the synthetic water-heater temperature stream:
//! calendar classification, the two synthesis profiles, and the safety
//! clamp applied before any windowing.

pub mod calendar;
pub mod clamp;
pub mod synthesizer;
pub mod timeline;

// Re-export SPI types for implementations
pub use sensor_spi::{
    CalendarContext, GenerationConfig, Result, Sample, SensorError, Series, SeriesGenerator,
    SynthesisProfile,
};

// Re-export main types
pub use calendar::classify;
pub use clamp::{clamp, SafetyClamp, MAX_SAFE_TEMPERATURE, MIN_SAFE_TEMPERATURE};
pub use synthesizer::{
    rng_for, synthesize, synthesize_with, synthesizer_for, CalendarSynthesizer,
    ScheduledSynthesizer,
};
