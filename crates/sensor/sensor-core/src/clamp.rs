//! Physical safety bounds of the tank model.
//!
//! Clamping is the last step applied to a synthesized series before any
//! window is taken.

use sensor_spi::{Result, SensorError, Series};

/// Lowest temperature the tank can report (°C).
pub const MIN_SAFE_TEMPERATURE: f64 = 45.0;
/// Highest temperature the tank can report (°C).
pub const MAX_SAFE_TEMPERATURE: f64 = 75.0;

/// Elementwise clamp to an inclusive temperature range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafetyClamp {
    min: f64,
    max: f64,
}

impl SafetyClamp {
    /// Create a clamp with custom bounds.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SensorError::invalid("clamp", "bounds must be finite"));
        }
        if min > max {
            return Err(SensorError::invalid(
                "clamp",
                format!("lower bound {} exceeds upper bound {}", min, max),
            ));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp every value of the series, leaving timestamps untouched.
    pub fn apply(&self, series: Series) -> Series {
        let (min, max) = (self.min, self.max);
        series.map_values(|v| v.clamp(min, max))
    }
}

impl Default for SafetyClamp {
    fn default() -> Self {
        Self {
            min: MIN_SAFE_TEMPERATURE,
            max: MAX_SAFE_TEMPERATURE,
        }
    }
}

/// Clamp a series to `[45.0, 75.0]`.
pub fn clamp(series: Series) -> Series {
    SafetyClamp::default().apply(series)
}
