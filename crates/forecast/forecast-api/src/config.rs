//! Service presets and per-request overrides.

use std::fmt;
use std::str::FromStr;

use forecast_spi::{ForecastError, ForecastPlan, QuantileSet, Result};
use serde::{Deserialize, Serialize};
use sensor_spi::{GenerationConfig, SynthesisProfile, DEFAULT_CADENCE_MINUTES};

/// Named generation and window defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    /// Half a day of scheduled-profile history, 10/50/90 bands
    Compact,
    /// A week of calendar-profile history, median only, seed 42
    #[default]
    Weekly,
    /// A week of history, all of it fed to the oracle
    LongContext,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Weekly => "weekly",
            Self::LongContext => "long_context",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "compact" => Ok(Self::Compact),
            "weekly" => Ok(Self::Weekly),
            "long_context" => Ok(Self::LongContext),
            other => Err(ForecastError::config(
                "preset",
                format!("unknown preset '{}'", other),
            )),
        }
    }
}

const WEEK_OF_INTERVALS: usize = 7 * 24 * 60 / DEFAULT_CADENCE_MINUTES as usize;

/// Everything one forecast run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub generation: GenerationConfig,
    pub plan: ForecastPlan,
}

impl ServiceConfig {
    pub fn preset(preset: Preset) -> Self {
        let defaults = GenerationConfig::default();
        match preset {
            Preset::Compact => Self {
                generation: GenerationConfig {
                    interval_count: 48,
                    profile: SynthesisProfile::Scheduled,
                    seed: None,
                    ..defaults
                },
                plan: ForecastPlan::new(48, 48, 24, QuantileSet::three_point()),
            },
            Preset::Weekly => Self {
                generation: GenerationConfig {
                    interval_count: WEEK_OF_INTERVALS,
                    seed: Some(42),
                    ..defaults
                },
                plan: ForecastPlan::new(48, 48, 24, QuantileSet::median()),
            },
            Preset::LongContext => Self {
                generation: GenerationConfig {
                    interval_count: WEEK_OF_INTERVALS,
                    seed: Some(42),
                    ..defaults
                },
                plan: ForecastPlan::new(WEEK_OF_INTERVALS, 48, 24, QuantileSet::median()),
            },
        }
    }

    /// Check generation settings and that both windows fit the series.
    pub fn validate(&self) -> Result<()> {
        self.generation.validate()?;
        self.plan.validate_for(self.generation.interval_count)
    }

    /// Copy of this config with `overrides` applied and validated.
    pub fn apply(&self, overrides: &ForecastOverrides) -> Result<Self> {
        let mut config = self.clone();

        if let Some(intervals) = overrides.intervals {
            config.generation.interval_count = intervals;
        }
        if let Some(base) = overrides.base_temperature {
            config.generation.base_temperature = base;
        }
        if let Some(seed) = overrides.seed {
            config.generation.seed = Some(seed);
        }
        if let Some(profile) = overrides.profile {
            config.generation.profile = profile;
        }
        if let Some(std) = overrides.noise_std {
            config.generation.noise_std = Some(std);
        }
        if let Some(context) = overrides.context {
            config.plan.context_length = context;
        }
        if let Some(display) = overrides.display {
            config.plan.display_length = display;
        }
        if let Some(prediction) = overrides.prediction {
            config.plan.prediction_length = prediction;
        }
        if let Some(quantiles) = &overrides.quantiles {
            config.plan.quantiles = quantiles.parse()?;
        }

        config.validate()?;
        Ok(config)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

/// Optional per-request adjustments, read from the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastOverrides {
    /// Samples to synthesize
    pub intervals: Option<usize>,
    /// Context window length
    pub context: Option<usize>,
    /// Display window length
    pub display: Option<usize>,
    /// Forecast horizon
    pub prediction: Option<usize>,
    /// Comma-separated quantiles, e.g. `0.1,0.5,0.9`
    pub quantiles: Option<String>,
    pub base_temperature: Option<f64>,
    pub seed: Option<u64>,
    pub profile: Option<SynthesisProfile>,
    pub noise_std: Option<f64>,
}

impl ForecastOverrides {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
