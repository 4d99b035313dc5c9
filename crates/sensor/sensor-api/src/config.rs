//! Generation config builder.

use chrono::NaiveDateTime;
use sensor_spi::{GenerationConfig, Result, SensorError, SynthesisProfile};

/// Builder for [`GenerationConfig`].
///
/// Unset fields fall back to [`GenerationConfig::default`]; `build` runs
/// the same validation as [`GenerationConfig::validate`].
#[derive(Debug, Default)]
pub struct GenerationConfigBuilder {
    interval_count: Option<usize>,
    cadence_minutes: Option<u32>,
    base_temperature: Option<f64>,
    seed: Option<u64>,
    profile: Option<SynthesisProfile>,
    noise_std: Option<f64>,
    end_at: Option<NaiveDateTime>,
    /// First setter failure, reported by `build`
    error: Option<SensorError>,
}

impl GenerationConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing config.
    pub fn from_config(config: &GenerationConfig) -> Self {
        Self {
            interval_count: Some(config.interval_count),
            cadence_minutes: Some(config.cadence_minutes),
            base_temperature: Some(config.base_temperature),
            seed: config.seed,
            profile: Some(config.profile),
            noise_std: config.noise_std,
            end_at: config.end_at,
            error: None,
        }
    }

    /// Set the number of samples.
    pub fn interval_count(mut self, count: usize) -> Self {
        self.interval_count = Some(count);
        self
    }

    /// Set the number of samples as whole days of history.
    pub fn days(mut self, days: usize) -> Self {
        let cadence = self
            .cadence_minutes
            .unwrap_or(sensor_spi::DEFAULT_CADENCE_MINUTES) as usize;
        match days.checked_mul(24 * 60) {
            Some(minutes) => self.interval_count = Some(minutes / cadence.max(1)),
            None => {
                self.error.get_or_insert(SensorError::invalid(
                    "interval_count",
                    format!("{} days overflows the interval count", days),
                ));
            }
        }
        self
    }

    /// Set the sample cadence.
    pub fn cadence_minutes(mut self, minutes: u32) -> Self {
        self.cadence_minutes = Some(minutes);
        self
    }

    /// Set the tank setpoint.
    pub fn base_temperature(mut self, celsius: f64) -> Self {
        self.base_temperature = Some(celsius);
        self
    }

    /// Set the random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the seed only when one is given.
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Set the perturbation profile.
    pub fn profile(mut self, profile: SynthesisProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Override the profile's noise level.
    pub fn noise_std(mut self, std: f64) -> Self {
        self.noise_std = Some(std);
        self
    }

    /// Pin the timestamp of the last sample.
    pub fn end_at(mut self, end: NaiveDateTime) -> Self {
        self.end_at = Some(end);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<GenerationConfig> {
        if let Some(error) = self.error {
            return Err(error);
        }
        let defaults = GenerationConfig::default();
        let config = GenerationConfig {
            interval_count: self.interval_count.unwrap_or(defaults.interval_count),
            cadence_minutes: self.cadence_minutes.unwrap_or(defaults.cadence_minutes),
            base_temperature: self.base_temperature.unwrap_or(defaults.base_temperature),
            seed: self.seed,
            profile: self.profile.unwrap_or(defaults.profile),
            noise_std: self.noise_std,
            end_at: self.end_at,
        };
        config.validate()?;
        Ok(config)
    }
}
