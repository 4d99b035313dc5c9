//! Forecast error types

use sensor_spi::SensorError;
use thiserror::Error;

/// Errors that can occur while shaping or producing a forecast
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Invalid window length, quantile or generation parameter
    #[error("Configuration error in '{name}': {reason}")]
    Configuration { name: String, reason: String },

    /// Oracle raised or returned malformed output
    #[error("Oracle failure: {0}")]
    OracleFailure(String),

    /// Synthesized series broke its length or cadence guarantee
    #[error("Generation invariant violated: {0}")]
    GenerationInvariant(String),
}

impl ForecastError {
    /// Shorthand for [`ForecastError::Configuration`].
    pub fn config(name: &str, reason: impl Into<String>) -> Self {
        Self::Configuration {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`ForecastError::OracleFailure`].
    pub fn oracle(message: impl Into<String>) -> Self {
        Self::OracleFailure(message.into())
    }

    /// Whether the caller can fix this by changing the request.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

impl From<SensorError> for ForecastError {
    fn from(error: SensorError) -> Self {
        match error {
            SensorError::InvalidParameter { name, reason } => Self::Configuration { name, reason },
            SensorError::InvariantViolation(message) => Self::GenerationInvariant(message),
        }
    }
}

/// Result type for forecast operations
pub type Result<T> = std::result::Result<T, ForecastError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_configuration_error_message() {
        let error = ForecastError::config("context_length", "must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error in 'context_length': must be positive"
        );
    }

    #[test]
    fn test_configuration_error_fields() {
        let error = ForecastError::config("quantiles", "0.3 is not supported");
        if let ForecastError::Configuration { name, reason } = error {
            assert_eq!(name, "quantiles");
            assert_eq!(reason, "0.3 is not supported");
        } else {
            panic!("Expected Configuration variant");
        }
    }

    #[test]
    fn test_oracle_failure_message() {
        let error = ForecastError::oracle("expected 3 rows, got 2");
        assert_eq!(error.to_string(), "Oracle failure: expected 3 rows, got 2");
    }

    #[test]
    fn test_generation_invariant_message() {
        let error = ForecastError::GenerationInvariant("gap at sample 4".to_string());
        assert_eq!(
            error.to_string(),
            "Generation invariant violated: gap at sample 4"
        );
    }

    #[test]
    fn test_from_sensor_invalid_parameter() {
        let error: ForecastError = SensorError::invalid("interval_count", "must be positive").into();
        assert!(error.is_configuration());
        assert_eq!(
            error,
            ForecastError::config("interval_count", "must be positive")
        );
    }

    #[test]
    fn test_from_sensor_invariant_violation() {
        let error: ForecastError = SensorError::InvariantViolation("short".to_string()).into();
        assert_eq!(error, ForecastError::GenerationInvariant("short".to_string()));
        assert!(!error.is_configuration());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn Error> = Box::new(ForecastError::oracle("boom"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_all_variants_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ForecastError>();
    }

    #[test]
    fn test_error_downcast() {
        let error: Box<dyn Error> = Box::new(ForecastError::oracle("x"));
        let downcasted = error.downcast_ref::<ForecastError>();
        assert!(matches!(downcasted, Some(ForecastError::OracleFailure(_))));
    }
}
