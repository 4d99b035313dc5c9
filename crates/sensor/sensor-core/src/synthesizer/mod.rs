//! Synthetic sensor series generation.
//!
//! Two profiles share the timestamp and validation plumbing here:
//! - [`CalendarSynthesizer`] - weekday demand bands, reheat recovery, night cooling
//! - [`ScheduledSynthesizer`] - linear heating trend with fixed-index demand dips

mod calendar_driven;
mod scheduled;

pub use calendar_driven::{demand_band, CalendarSynthesizer, DemandBand, WEEKDAY_DEMAND_BANDS};
pub use scheduled::{ScheduledSynthesizer, SCHEDULED_DIP_INDICES};

use chrono::NaiveDateTime;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use rand_distr::Normal;
use sensor_spi::{
    GenerationConfig, Result, Sample, SensorError, Series, SeriesGenerator, SynthesisProfile,
};
use tracing::debug;

use crate::timeline::{resolve_end, timeline};

/// Generator implementing the given profile.
pub fn synthesizer_for(profile: SynthesisProfile) -> Box<dyn SeriesGenerator> {
    match profile {
        SynthesisProfile::Calendar => Box::new(CalendarSynthesizer::new()),
        SynthesisProfile::Scheduled => Box::new(ScheduledSynthesizer::new()),
    }
}

/// Random source for a config: seeded when `seed` is set, entropy otherwise.
pub fn rng_for(config: &GenerationConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Synthesize a series using the config's own seed.
pub fn synthesize(config: &GenerationConfig) -> Result<Series> {
    let mut rng = rng_for(config);
    synthesize_with(config, &mut rng)
}

/// Synthesize a series drawing from the given random source.
pub fn synthesize_with(config: &GenerationConfig, rng: &mut dyn RngCore) -> Result<Series> {
    let generator = synthesizer_for(config.profile);
    let series = generator.generate(config, rng)?;
    debug!(
        generator = generator.name(),
        samples = series.len(),
        seeded = config.seed.is_some(),
        "Synthesized sensor series"
    );
    Ok(series)
}

/// Validate the config and lay out its timestamps.
pub(crate) fn prepare(config: &GenerationConfig) -> Result<Vec<NaiveDateTime>> {
    config.validate()?;
    timeline(
        resolve_end(config),
        config.interval_count,
        config.cadence_minutes,
    )
}

pub(crate) fn noise_distribution(config: &GenerationConfig) -> Result<Normal<f64>> {
    let std = config.effective_noise_std();
    Normal::new(0.0, std).map_err(|e| SensorError::invalid("noise_std", e.to_string()))
}

/// Zip timestamps and values into a series and check its length.
pub(crate) fn finish(
    config: &GenerationConfig,
    timestamps: Vec<NaiveDateTime>,
    values: Vec<f64>,
) -> Result<Series> {
    if timestamps.len() != values.len() {
        return Err(SensorError::InvariantViolation(format!(
            "{} timestamps but {} values",
            timestamps.len(),
            values.len()
        )));
    }

    let samples: Vec<Sample> = timestamps
        .into_iter()
        .zip(values)
        .map(|(ts, v)| Sample::new(ts, v))
        .collect();
    let series = Series::from_samples(samples, config.cadence_minutes)?;

    if series.len() != config.interval_count {
        return Err(SensorError::InvariantViolation(format!(
            "expected {} samples, got {}",
            config.interval_count,
            series.len()
        )));
    }
    Ok(series)
}
