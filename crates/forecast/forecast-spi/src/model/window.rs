//! Contiguous views into a series

use chrono::NaiveDateTime;
use sensor_spi::{Sample, Series};

use crate::error::{ForecastError, Result};

/// A contiguous, borrowed slice of a [`Series`].
///
/// Windows never copy samples; `values` and `timestamps` allocate only
/// when asked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window<'a> {
    series: &'a Series,
    start: usize,
    len: usize,
}

impl<'a> Window<'a> {
    /// View `len` samples starting at `start`.
    pub fn new(series: &'a Series, start: usize, len: usize) -> Result<Self> {
        let end = start.checked_add(len).ok_or_else(|| {
            ForecastError::config("window", format!("{} + {} overflows", start, len))
        })?;
        if end > series.len() {
            return Err(ForecastError::config(
                "window",
                format!(
                    "samples {}..{} exceed series of {}",
                    start,
                    end,
                    series.len()
                ),
            ));
        }
        Ok(Self { series, start, len })
    }

    /// The last `len` samples of `series`.
    ///
    /// `name` labels the error when `len` is zero or longer than the series.
    pub fn trailing(series: &'a Series, len: usize, name: &str) -> Result<Self> {
        if len == 0 {
            return Err(ForecastError::config(name, "must be positive"));
        }
        if len > series.len() {
            return Err(ForecastError::config(
                name,
                format!("{} exceeds series length {}", len, series.len()),
            ));
        }
        Self::new(series, series.len() - len, len)
    }

    /// Offset of the first sample within the parent series
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn samples(&self) -> &'a [Sample] {
        &self.series.samples()[self.start..self.start + self.len]
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples().iter().map(|s| s.value).collect()
    }

    pub fn timestamps(&self) -> Vec<NaiveDateTime> {
        self.samples().iter().map(|s| s.timestamp).collect()
    }
}
