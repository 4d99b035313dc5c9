//! Error types for sensor series generation.
//!
//! This module contains error types and the Result alias.

mod sensor_error;

pub use sensor_error::{Result, SensorError};
