//! Sensor series error types.

use thiserror::Error;

/// Sensor series errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SensorError {
    /// A generation parameter is out of range
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Synthesized series broke its length or cadence guarantee
    #[error("Generation invariant violated: {0}")]
    InvariantViolation(String),
}

impl SensorError {
    /// Shorthand for [`SensorError::InvalidParameter`].
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for sensor operations.
pub type Result<T> = std::result::Result<T, SensorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let error = SensorError::invalid("interval_count", "must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'interval_count': must be positive"
        );
    }

    #[test]
    fn test_invalid_parameter_fields() {
        let error = SensorError::invalid("noise_std", "must be finite");
        if let SensorError::InvalidParameter { name, reason } = error {
            assert_eq!(name, "noise_std");
            assert_eq!(reason, "must be finite");
        } else {
            panic!("Expected InvalidParameter variant");
        }
    }

    #[test]
    fn test_invariant_violation_display() {
        let error = SensorError::InvariantViolation("expected 96 samples, got 95".to_string());
        assert_eq!(
            error.to_string(),
            "Generation invariant violated: expected 96 samples, got 95"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error: Box<dyn std::error::Error> =
            Box::new(SensorError::InvariantViolation("gap".to_string()));
        assert!(!error.to_string().is_empty());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SensorError>();
    }
}
