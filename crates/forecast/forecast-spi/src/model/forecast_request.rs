//! Oracle input

use super::{QuantileSet, Window};

/// Everything an oracle call needs, borrowed from the series and plan.
#[derive(Debug, Clone, Copy)]
pub struct ForecastRequest<'a> {
    pub context: Window<'a>,
    pub prediction_length: usize,
    pub quantiles: &'a QuantileSet,
}

impl<'a> ForecastRequest<'a> {
    pub fn new(context: Window<'a>, prediction_length: usize, quantiles: &'a QuantileSet) -> Self {
        Self {
            context,
            prediction_length,
            quantiles,
        }
    }

    pub fn context_values(&self) -> Vec<f64> {
        self.context.values()
    }
}
