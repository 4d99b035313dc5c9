//! Sensor Facade
//!
//! Unified re-exports for the sensor module.
//!
//! This facade provides a single entry point for all sensor series functionality:
//! - `sensor_spi` - Models, errors and the generator contract
//! - `sensor_api` - Configuration builders
//! - `sensor_core` - Calendar classifier, synthesizers and safety clamp
//!
//! # Example
//!
//! ```rust,ignore
//! use sensor_facade::{clamp, synthesize, GenerationConfigBuilder};
//!
//! let config = GenerationConfigBuilder::new()
//!     .interval_count(96)
//!     .base_temperature(58.0)
//!     .seed(42)
//!     .build()?;
//!
//! let series = clamp(synthesize(&config)?);
//! println!("Got {} samples", series.len());
//! ```

// Re-export everything from SPI
pub use sensor_spi::*;

// Re-export everything from API
pub use sensor_api::{prelude, GenerationConfigBuilder};

// Re-export everything from Core
pub use sensor_core::*;
