//! Contract definitions for sensor series generation.
//!
//! This module contains trait definitions that generators must implement.

mod series_generator;

pub use series_generator::SeriesGenerator;
