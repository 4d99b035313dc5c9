//! Generation configuration for synthetic sensor series.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SensorError};

/// One day of 15-minute intervals.
pub const DEFAULT_INTERVAL_COUNT: usize = 96;
/// Sensor sampling cadence in minutes.
pub const DEFAULT_CADENCE_MINUTES: u32 = 15;
/// Tank setpoint in standby (°C).
pub const DEFAULT_BASE_TEMPERATURE: f64 = 58.0;
/// Longest series a single config may request: eight weeks of 15-minute intervals.
pub const MAX_INTERVAL_COUNT: usize = 8 * 7 * DEFAULT_INTERVAL_COUNT;

/// Perturbation model applied on top of the baseline temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisProfile {
    /// Weekday/weekend demand bands, reheat recovery and night cooling
    #[default]
    Calendar,
    /// Linear heating trend with fixed-index demand dips
    Scheduled,
}

impl SynthesisProfile {
    /// Sensor noise standard deviation used when the config does not override it.
    pub fn default_noise_std(&self) -> f64 {
        match self {
            SynthesisProfile::Calendar => 0.25,
            SynthesisProfile::Scheduled => 0.3,
        }
    }
}

impl std::fmt::Display for SynthesisProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SynthesisProfile::Calendar => "calendar",
            SynthesisProfile::Scheduled => "scheduled",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for SynthesisProfile {
    type Err = SensorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calendar" => Ok(SynthesisProfile::Calendar),
            "scheduled" => Ok(SynthesisProfile::Scheduled),
            other => Err(SensorError::invalid(
                "profile",
                format!("unknown profile '{}'", other),
            )),
        }
    }
}

/// Parameters of one synthetic series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Number of samples to produce
    pub interval_count: usize,
    /// Spacing between samples in minutes
    pub cadence_minutes: u32,
    /// Tank setpoint (°C)
    pub base_temperature: f64,
    /// Seed for reproducible runs; entropy-seeded when absent
    pub seed: Option<u64>,
    /// Perturbation model
    #[serde(default)]
    pub profile: SynthesisProfile,
    /// Override of the profile's noise standard deviation
    #[serde(default)]
    pub noise_std: Option<f64>,
    /// Timestamp of the last sample; local wall clock when absent
    #[serde(default)]
    pub end_at: Option<NaiveDateTime>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            interval_count: DEFAULT_INTERVAL_COUNT,
            cadence_minutes: DEFAULT_CADENCE_MINUTES,
            base_temperature: DEFAULT_BASE_TEMPERATURE,
            seed: None,
            profile: SynthesisProfile::default(),
            noise_std: None,
            end_at: None,
        }
    }
}

impl GenerationConfig {
    /// Create a config with the given length and setpoint, other fields default.
    pub fn new(interval_count: usize, base_temperature: f64) -> Self {
        Self {
            interval_count,
            base_temperature,
            ..Self::default()
        }
    }

    /// Noise standard deviation in effect for this config.
    pub fn effective_noise_std(&self) -> f64 {
        self.noise_std
            .unwrap_or_else(|| self.profile.default_noise_std())
    }

    /// Check every parameter, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.interval_count == 0 {
            return Err(SensorError::invalid("interval_count", "must be positive"));
        }
        if self.interval_count > MAX_INTERVAL_COUNT {
            return Err(SensorError::invalid(
                "interval_count",
                format!("{} exceeds the limit of {}", self.interval_count, MAX_INTERVAL_COUNT),
            ));
        }
        if self.cadence_minutes == 0 {
            return Err(SensorError::invalid("cadence_minutes", "must be positive"));
        }
        if !self.base_temperature.is_finite() {
            return Err(SensorError::invalid("base_temperature", "must be finite"));
        }
        if let Some(std) = self.noise_std {
            if !std.is_finite() || std < 0.0 {
                return Err(SensorError::invalid(
                    "noise_std",
                    format!("must be finite and non-negative, got {}", std),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_noise_defaults() {
        assert_eq!(SynthesisProfile::Calendar.default_noise_std(), 0.25);
        assert_eq!(SynthesisProfile::Scheduled.default_noise_std(), 0.3);
    }

    #[test]
    fn test_profile_from_str() {
        assert_eq!(
            "Scheduled".parse::<SynthesisProfile>().unwrap(),
            SynthesisProfile::Scheduled
        );
        assert!("hourly".parse::<SynthesisProfile>().is_err());
    }

    #[test]
    fn test_effective_noise_override() {
        let mut config = GenerationConfig::new(48, 58.0);
        assert_eq!(config.effective_noise_std(), 0.25);
        config.noise_std = Some(0.0);
        assert_eq!(config.effective_noise_std(), 0.0);
    }

    #[test]
    fn test_validate_rejects_zero_intervals() {
        let config = GenerationConfig::new(0, 58.0);
        assert!(matches!(
            config.validate(),
            Err(SensorError::InvalidParameter { ref name, .. }) if name == "interval_count"
        ));
    }

    #[test]
    fn test_validate_interval_limit() {
        assert!(GenerationConfig::new(MAX_INTERVAL_COUNT, 58.0).validate().is_ok());
        let config = GenerationConfig::new(MAX_INTERVAL_COUNT + 1, 58.0);
        assert!(matches!(
            config.validate(),
            Err(SensorError::InvalidParameter { ref name, .. }) if name == "interval_count"
        ));
    }

    #[test]
    fn test_validate_rejects_negative_noise() {
        let config = GenerationConfig {
            noise_std: Some(-0.1),
            ..GenerationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_nan_base() {
        let config = GenerationConfig::new(96, f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_defaults_for_optional_fields() {
        let json = r#"{"interval_count":48,"cadence_minutes":15,"base_temperature":60.0,"seed":7}"#;
        let config: GenerationConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.profile, SynthesisProfile::Calendar);
        assert!(config.noise_std.is_none());
        assert!(config.end_at.is_none());
    }
}
