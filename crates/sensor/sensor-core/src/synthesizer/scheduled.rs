//! Scheduled synthesis profile.
//!
//! A simpler model: the tank warms linearly over the window, idles before
//! 06:00, and loses heat at three fixed interval offsets from the start of
//! the series (roughly 08:00, 12:30 and 15:00 for a day that starts at
//! midnight).

use rand::{Rng, RngCore};
use sensor_spi::{GenerationConfig, Result, Series, SeriesGenerator};

use super::{finish, noise_distribution, prepare};
use crate::calendar::classify;

/// Interval offsets, from the first sample, where a demand dip starts.
pub const SCHEDULED_DIP_INDICES: [usize; 3] = [32, 50, 60];

/// Intervals covered by each dip (45 minutes at 15-minute cadence).
const DIP_SPAN: usize = 3;
/// Temperature lost by the last interval of a dip.
const DIP_DEPTH: f64 = 5.0;
/// Total heating trend across the series.
const TREND_RISE: f64 = 4.5;
/// Idle-hours drop applied before 06:00.
const IDLE_DROP: f64 = 2.0;
const IDLE_END_HOUR: f64 = 6.0;

/// `n` evenly spaced points from `start` to `end`, both inclusive.
fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Trend-plus-fixed-dips water-heater profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduledSynthesizer;

impl ScheduledSynthesizer {
    pub fn new() -> Self {
        Self
    }
}

impl SeriesGenerator for ScheduledSynthesizer {
    fn name(&self) -> &str {
        "scheduled"
    }

    fn generate(&self, config: &GenerationConfig, rng: &mut dyn RngCore) -> Result<Series> {
        let timestamps = prepare(config)?;
        let noise = noise_distribution(config)?;
        let n = timestamps.len();

        // Noise is drawn for the whole window before any event is applied.
        let jitter: Vec<f64> = (0..n).map(|_| rng.sample(noise)).collect();
        let trend = linspace(0.0, TREND_RISE, n);

        let mut values: Vec<f64> = trend
            .iter()
            .zip(&jitter)
            .map(|(t, e)| config.base_temperature + t + e)
            .collect();

        for (value, &timestamp) in values.iter_mut().zip(&timestamps) {
            if classify(timestamp).hour_fraction < IDLE_END_HOUR {
                *value -= IDLE_DROP;
            }
        }

        for &start in SCHEDULED_DIP_INDICES.iter().filter(|&&i| i < n) {
            let end = (start + DIP_SPAN).min(n);
            let drops = linspace(0.0, DIP_DEPTH, end - start);
            for (value, drop) in values[start..end].iter_mut().zip(drops) {
                *value -= drop;
            }
        }

        finish(config, timestamps, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quiet_config(interval_count: usize, end_at: NaiveDateTime) -> GenerationConfig {
        GenerationConfig {
            interval_count,
            noise_std: Some(0.0),
            end_at: Some(end_at),
            profile: sensor_spi::SynthesisProfile::Scheduled,
            ..GenerationConfig::default()
        }
    }

    fn day_end() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(23, 45, 0)
            .unwrap()
    }

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 5.0, 3), vec![0.0, 2.5, 5.0]);
        assert_eq!(linspace(0.0, 5.0, 1), vec![0.0]);
        assert!(linspace(0.0, 5.0, 0).is_empty());
    }

    #[test]
    fn test_full_day_shape() {
        let config = quiet_config(96, day_end());
        let mut rng = StdRng::seed_from_u64(0);
        let values = ScheduledSynthesizer::new()
            .generate(&config, &mut rng)
            .unwrap()
            .values();

        let trend = linspace(0.0, TREND_RISE, 96);
        // 00:00 is idle, 06:00 onward follows the trend
        assert!((values[0] - (58.0 - IDLE_DROP)).abs() < 1e-9);
        assert!((values[24] - (58.0 + trend[24])).abs() < 1e-9);
        // dip at 32 ramps 0, 2.5, 5
        assert!((values[32] - (58.0 + trend[32])).abs() < 1e-9);
        assert!((values[33] - (58.0 + trend[33] - 2.5)).abs() < 1e-9);
        assert!((values[34] - (58.0 + trend[34] - 5.0)).abs() < 1e-9);
        assert!((values[95] - (58.0 + TREND_RISE)).abs() < 1e-9);
    }

    #[test]
    fn test_dip_truncated_at_series_end() {
        let config = quiet_config(52, day_end());
        let mut rng = StdRng::seed_from_u64(0);
        let values = ScheduledSynthesizer::new()
            .generate(&config, &mut rng)
            .unwrap()
            .values();
        let trend = linspace(0.0, TREND_RISE, 52);

        // dip at 50 only has two intervals left: drops 0 and 5
        assert!((values[50] - (58.0 + trend[50])).abs() < 1e-9);
        assert!((values[51] - (58.0 + trend[51] - 5.0)).abs() < 1e-9);
    }

    #[test]
    fn test_short_series_has_no_dips() {
        let config = quiet_config(12, day_end());
        let mut rng = StdRng::seed_from_u64(0);
        let series = ScheduledSynthesizer::new().generate(&config, &mut rng).unwrap();
        let trend = linspace(0.0, TREND_RISE, 12);
        for (value, t) in series.values().iter().zip(trend) {
            assert!((value - (58.0 + t)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_noise_default_is_point_three() {
        let config = GenerationConfig {
            profile: sensor_spi::SynthesisProfile::Scheduled,
            ..GenerationConfig::default()
        };
        assert_eq!(config.effective_noise_std(), 0.3);
    }
}
