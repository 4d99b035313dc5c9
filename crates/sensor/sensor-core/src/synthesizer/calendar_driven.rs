//! Calendar-driven synthesis profile.
//!
//! Each sample starts at the setpoint and is pushed around by occupancy:
//! weekends draw less hot water, weekday usage peaks cause short dips that
//! the thermostat pulls back toward setpoint, and the heater idles at night.

use rand::{Rng, RngCore};
use sensor_spi::{CalendarContext, GenerationConfig, Result, Series, SeriesGenerator};

use super::{finish, noise_distribution, prepare};
use crate::calendar::classify;

/// A weekday time-of-day window with its uniform temperature drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandBand {
    pub start_hour: f64,
    pub end_hour: f64,
    pub min_drop: f64,
    pub max_drop: f64,
}

/// Morning arrival, lunch and mid-afternoon usage peaks.
pub static WEEKDAY_DEMAND_BANDS: [DemandBand; 3] = [
    DemandBand {
        start_hour: 8.0,
        end_hour: 9.0,
        min_drop: 2.0,
        max_drop: 4.0,
    },
    DemandBand {
        start_hour: 12.0,
        end_hour: 13.0,
        min_drop: 3.0,
        max_drop: 5.0,
    },
    DemandBand {
        start_hour: 15.0,
        end_hour: 16.0,
        min_drop: 1.5,
        max_drop: 3.5,
    },
];

const WEEKEND_DROP: (f64, f64) = (1.0, 2.0);
const NIGHT_DROP: (f64, f64) = (0.5, 1.5);
const RECOVERY_STEP: (f64, f64) = (0.5, 1.5);
/// Reheat kicks in once the tank is this far below setpoint.
const RECOVERY_THRESHOLD: f64 = 1.0;
/// Reheat never overshoots setpoint by more than this.
const RECOVERY_OVERSHOOT: f64 = 1.5;

/// Demand band containing the sample's time of day, if any.
pub fn demand_band(ctx: &CalendarContext) -> Option<&'static DemandBand> {
    WEEKDAY_DEMAND_BANDS
        .iter()
        .find(|band| ctx.within(band.start_hour, band.end_hour))
}

/// Calendar-aware water-heater profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarSynthesizer;

impl CalendarSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Value of one sample before sensor noise.
    ///
    /// `previous` is the recorded value of the preceding sample; reheat
    /// recovery builds on it, never on the current sample's dipped value.
    pub fn perturb(
        &self,
        ctx: CalendarContext,
        previous: Option<f64>,
        base: f64,
        rng: &mut dyn RngCore,
    ) -> f64 {
        let mut value = base;

        if !ctx.is_weekday {
            value -= rng.gen_range(WEEKEND_DROP.0..WEEKEND_DROP.1);
        } else {
            if let Some(band) = demand_band(&ctx) {
                value -= rng.gen_range(band.min_drop..band.max_drop);
            }

            if let Some(previous) = previous {
                if value < base - RECOVERY_THRESHOLD {
                    let recovery = rng.gen_range(RECOVERY_STEP.0..RECOVERY_STEP.1);
                    value = (previous + recovery).min(base + RECOVERY_OVERSHOOT);
                }
            }
        }

        if ctx.is_night() {
            value -= rng.gen_range(NIGHT_DROP.0..NIGHT_DROP.1);
        }

        value
    }
}

impl SeriesGenerator for CalendarSynthesizer {
    fn name(&self) -> &str {
        "calendar"
    }

    fn generate(&self, config: &GenerationConfig, rng: &mut dyn RngCore) -> Result<Series> {
        let timestamps = prepare(config)?;
        let noise = noise_distribution(config)?;

        let mut values: Vec<f64> = Vec::with_capacity(timestamps.len());
        for &timestamp in &timestamps {
            let ctx = classify(timestamp);
            let previous = values.last().copied();
            let value = self.perturb(ctx, previous, config.base_temperature, rng)
                + rng.sample(noise);
            values.push(value);
        }

        finish(config, timestamps, values)
    }
}
