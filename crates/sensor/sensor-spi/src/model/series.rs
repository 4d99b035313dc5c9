//! Sample and series types.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SensorError};

/// A single temperature reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Wall-clock time of the reading
    pub timestamp: NaiveDateTime,
    /// Tank temperature (°C)
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Ordered samples at a fixed cadence with no gaps or duplicates.
///
/// The invariant is checked on construction; afterwards the series is
/// read-only except through [`Series::map_values`], which keeps timestamps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    samples: Vec<Sample>,
    cadence_minutes: u32,
}

impl Series {
    /// Build a series, verifying that consecutive timestamps are exactly
    /// `cadence_minutes` apart.
    pub fn from_samples(samples: Vec<Sample>, cadence_minutes: u32) -> Result<Self> {
        let step = Duration::minutes(cadence_minutes as i64);
        if let Some((i, pair)) = samples
            .windows(2)
            .enumerate()
            .find(|(_, pair)| pair[1].timestamp - pair[0].timestamp != step)
        {
            return Err(SensorError::InvariantViolation(format!(
                "samples {} and {} are {} minutes apart, expected {}",
                i,
                i + 1,
                (pair[1].timestamp - pair[0].timestamp).num_minutes(),
                cadence_minutes
            )));
        }

        Ok(Self {
            samples,
            cadence_minutes,
        })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn cadence_minutes(&self) -> u32 {
        self.cadence_minutes
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Sample values in time order.
    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    /// Sample timestamps in time order.
    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.samples.iter().map(|s| s.timestamp).collect()
    }

    /// Transform every value, leaving timestamps and order untouched.
    pub fn map_values<F>(self, mut f: F) -> Self
    where
        F: FnMut(f64) -> f64,
    {
        let samples = self
            .samples
            .into_iter()
            .map(|s| Sample::new(s.timestamp, f(s.value)))
            .collect();
        Self {
            samples,
            cadence_minutes: self.cadence_minutes,
        }
    }
}
