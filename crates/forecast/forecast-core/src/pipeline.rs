//! End-to-end forecast pipeline
//!
//! Synthesize, clamp, select and assemble in one call. The oracle is
//! injected once and shared read-only by every run.

use std::sync::Arc;

use forecast_spi::{ForecastPlan, ForecastResponse, QuantileOracle, Result};
use rand::RngCore;
use sensor_core::{rng_for, synthesize_with, SafetyClamp};
use sensor_spi::{GenerationConfig, Series};

use crate::assembler::ForecastAssembler;

/// Synthesis plus assembly around one shared oracle.
#[derive(Debug, Clone)]
pub struct ForecastPipeline {
    assembler: ForecastAssembler,
    clamp: SafetyClamp,
}

impl ForecastPipeline {
    pub fn new(oracle: Arc<dyn QuantileOracle>) -> Self {
        Self {
            assembler: ForecastAssembler::new(oracle),
            clamp: SafetyClamp::default(),
        }
    }

    /// Replace the default `[45, 75]` clamp.
    pub fn with_clamp(mut self, clamp: SafetyClamp) -> Self {
        self.clamp = clamp;
        self
    }

    pub fn oracle(&self) -> &Arc<dyn QuantileOracle> {
        self.assembler.oracle()
    }

    pub fn clamp(&self) -> SafetyClamp {
        self.clamp
    }

    /// Synthesize and clamp a series without forecasting.
    pub fn series(&self, generation: &GenerationConfig, rng: &mut dyn RngCore) -> Result<Series> {
        let series = synthesize_with(generation, rng)?;
        Ok(self.clamp.apply(series))
    }

    /// Run with the random source implied by `generation.seed`.
    pub fn run(&self, generation: &GenerationConfig, plan: &ForecastPlan) -> Result<ForecastResponse> {
        let mut rng = rng_for(generation);
        self.run_with_rng(generation, plan, &mut rng)
    }

    /// Run drawing from `rng`.
    ///
    /// Window lengths are checked against `interval_count` before anything
    /// is synthesized.
    pub fn run_with_rng(
        &self,
        generation: &GenerationConfig,
        plan: &ForecastPlan,
        rng: &mut dyn RngCore,
    ) -> Result<ForecastResponse> {
        generation.validate()?;
        plan.validate_for(generation.interval_count)?;

        let series = self.series(generation, rng)?;
        self.assembler.assemble(&series, plan)
    }
}
