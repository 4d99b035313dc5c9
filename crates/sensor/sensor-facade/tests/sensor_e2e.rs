//! End-to-end tests for the sensor stack
//!
//! Generate, clamp and inspect complete series the way the forecast
//! service consumes them.

use chrono::{NaiveDate, NaiveDateTime};
use sensor_facade::prelude::*;
use sensor_facade::{clamp, synthesizer_for};

fn friday_evening() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 8)
        .unwrap()
        .and_hms_opt(18, 0, 0)
        .unwrap()
}

#[test]
fn e2e_week_of_history() {
    let config = GenerationConfigBuilder::new()
        .days(7)
        .base_temperature(58.0)
        .seed(42)
        .end_at(friday_evening())
        .build()
        .unwrap();

    let series = clamp(synthesize(&config).unwrap());

    assert_eq!(series.len(), 672);
    assert_eq!(series.last().unwrap().timestamp, friday_evening());

    let values = series.values();
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    assert!(mean > 50.0 && mean < 60.0, "unexpected mean {}", mean);
}

#[test]
fn e2e_reproducible_with_pinned_end() {
    let config = GenerationConfigBuilder::new()
        .interval_count(96)
        .seed(42)
        .end_at(friday_evening())
        .build()
        .unwrap();

    let a = clamp(synthesize(&config).unwrap());
    let b = clamp(synthesize(&config).unwrap());
    assert_eq!(a, b);
}

#[test]
fn e2e_scheduled_profile_day() {
    let config = GenerationConfigBuilder::new()
        .interval_count(48)
        .profile(SynthesisProfile::Scheduled)
        .end_at(friday_evening())
        .build()
        .unwrap();

    let series = clamp(synthesize(&config).unwrap());
    assert_eq!(series.len(), 48);
    assert!(series
        .values()
        .iter()
        .all(|&v| (45.0..=75.0).contains(&v)));
}

#[test]
fn e2e_generator_trait_objects() {
    let config = GenerationConfigBuilder::new()
        .interval_count(16)
        .seed(8)
        .end_at(friday_evening())
        .build()
        .unwrap();

    for profile in [SynthesisProfile::Calendar, SynthesisProfile::Scheduled] {
        let generator = synthesizer_for(profile);
        let mut rng = sensor_facade::rng_for(&config);
        let series = generator.generate(&config, &mut rng).unwrap();
        assert_eq!(series.len(), 16);
        assert_eq!(generator.name(), profile.to_string());
    }
}

#[test]
fn e2e_invalid_configs_fail_fast() {
    assert!(GenerationConfigBuilder::new().interval_count(0).build().is_err());
    assert!(GenerationConfigBuilder::new().noise_std(f64::INFINITY).build().is_err());
    assert!(GenerationConfigBuilder::new()
        .base_temperature(f64::NAN)
        .build()
        .is_err());
}
