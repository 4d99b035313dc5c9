//! Response body for the forecast endpoint

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Display window plus forecast rows.
///
/// `timestamps` and `actual` are parallel; `forecast` has one row per
/// requested quantile, in request order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub timestamps: Vec<NaiveDateTime>,
    pub actual: Vec<f64>,
    pub forecast: Vec<Vec<f64>>,
}

impl ForecastResponse {
    /// Steps per forecast row, or `None` when there are no rows
    pub fn horizon(&self) -> Option<usize> {
        self.forecast.first().map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_json_shape() {
        let ts = NaiveDate::from_ymd_opt(2024, 3, 4)
            .unwrap()
            .and_hms_opt(8, 15, 0)
            .unwrap();
        let response = ForecastResponse {
            timestamps: vec![ts],
            actual: vec![57.5],
            forecast: vec![vec![58.0, 58.5]],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["timestamps"][0], "2024-03-04T08:15:00");
        assert_eq!(json["actual"][0], 57.5);
        assert_eq!(json["forecast"][0][1], 58.5);
        assert_eq!(response.horizon(), Some(2));
    }
}
