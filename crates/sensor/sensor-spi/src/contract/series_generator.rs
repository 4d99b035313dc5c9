//! Series generator trait definition.

use rand::RngCore;

use crate::error::Result;
use crate::model::{GenerationConfig, Series};

/// Trait for sources that produce a temperature series.
///
/// All randomness comes from the `rng` handle so callers control
/// reproducibility. Implementations must return exactly
/// `config.interval_count` samples at `config.cadence_minutes` spacing.
pub trait SeriesGenerator: Send + Sync {
    /// Generator name.
    fn name(&self) -> &str;

    /// Generate a series ending at the configured end instant.
    fn generate(&self, config: &GenerationConfig, rng: &mut dyn RngCore) -> Result<Series>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sample;
    use chrono::{Duration, NaiveDate};
    use rand::rngs::mock::StepRng;

    /// Mock implementation: constant series at the base temperature
    struct FlatGenerator;

    impl SeriesGenerator for FlatGenerator {
        fn name(&self) -> &str {
            "flat"
        }

        fn generate(&self, config: &GenerationConfig, _rng: &mut dyn RngCore) -> Result<Series> {
            let start = NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap();
            let samples = (0..config.interval_count)
                .map(|i| {
                    let offset = Duration::minutes(i as i64 * config.cadence_minutes as i64);
                    Sample::new(start + offset, config.base_temperature)
                })
                .collect();
            Series::from_samples(samples, config.cadence_minutes)
        }
    }

    #[test]
    fn test_generator_as_trait_object() {
        let generator: Box<dyn SeriesGenerator> = Box::new(FlatGenerator);
        let mut rng = StepRng::new(0, 1);
        let config = GenerationConfig::default();
        let series = generator.generate(&config, &mut rng).unwrap();

        assert_eq!(generator.name(), "flat");
        assert_eq!(series.len(), config.interval_count);
        assert!(series.values().iter().all(|&v| v == config.base_temperature));
    }
}
