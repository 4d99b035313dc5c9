//! Labeled oracle output

use serde::{Deserialize, Serialize};

use super::same_quantile;
use crate::error::{ForecastError, Result};

/// Quantile rows as returned by an oracle.
///
/// `matrix[i]` holds the forecast for `quantile_index[i]`. The index need
/// not match request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub quantile_index: Vec<f64>,
    pub matrix: Vec<Vec<f64>>,
}

impl ForecastResult {
    pub fn new(quantile_index: Vec<f64>, matrix: Vec<Vec<f64>>) -> Self {
        Self {
            quantile_index,
            matrix,
        }
    }

    /// Row labeled `q`, looked up by label rather than position.
    pub fn row_for(&self, q: f64) -> Option<&[f64]> {
        self.quantile_index
            .iter()
            .position(|&label| same_quantile(label, q))
            .and_then(|i| self.matrix.get(i))
            .map(Vec::as_slice)
    }

    /// Check that labels and rows line up and every row is
    /// `prediction_length` finite values.
    pub fn check_shape(&self, prediction_length: usize) -> Result<()> {
        if self.quantile_index.len() != self.matrix.len() {
            return Err(ForecastError::oracle(format!(
                "{} labels for {} rows",
                self.quantile_index.len(),
                self.matrix.len()
            )));
        }
        for (label, row) in self.quantile_index.iter().zip(&self.matrix) {
            if row.len() != prediction_length {
                return Err(ForecastError::oracle(format!(
                    "row for quantile {} has {} values, expected {}",
                    label,
                    row.len(),
                    prediction_length
                )));
            }
            if let Some(bad) = row.iter().find(|v| !v.is_finite()) {
                return Err(ForecastError::oracle(format!(
                    "row for quantile {} contains {}",
                    label, bad
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reversed() -> ForecastResult {
        ForecastResult::new(
            vec![0.9, 0.5, 0.1],
            vec![vec![3.0, 3.0], vec![2.0, 2.0], vec![1.0, 1.0]],
        )
    }

    #[test]
    fn test_row_for_uses_labels() {
        let result = reversed();
        assert_eq!(result.row_for(0.1), Some(&[1.0, 1.0][..]));
        assert_eq!(result.row_for(0.9), Some(&[3.0, 3.0][..]));
        assert_eq!(result.row_for(0.3), None);
    }

    #[test]
    fn test_check_shape() {
        assert!(reversed().check_shape(2).is_ok());
        assert!(matches!(
            reversed().check_shape(3),
            Err(ForecastError::OracleFailure(_))
        ));
    }

    #[test]
    fn test_check_shape_label_mismatch() {
        let result = ForecastResult::new(vec![0.5], vec![vec![1.0], vec![2.0]]);
        assert!(result.check_shape(1).is_err());
    }

    #[test]
    fn test_check_shape_non_finite() {
        let result = ForecastResult::new(vec![0.5], vec![vec![1.0, f64::NAN]]);
        assert!(result.check_shape(2).is_err());
    }
}
