//! Error types for structured error handling.
//!
//! This module provides:
//! - `IntegrationError`: Errors from integrator construction and evaluation
//! - `IntegrationResult`: Result alias used throughout the crate

use thiserror::Error;

/// Result alias for integration operations.
pub type IntegrationResult<T> = Result<T, IntegrationError>;

/// Categorised integration errors.
///
/// Every failure surfaces directly to the caller. The integrator performs no
/// retry, substitution or partial-result recovery.
///
/// # Variants
/// - `InvalidDomain`: The problem instance cannot be discretised
/// - `FunctionEvaluation`: The integrand produced a non-finite value
/// - `InvalidSampleCount`: Monte Carlo was asked for zero samples
/// - `NumericConversion`: A constant could not be represented in the float type
///
/// # Examples
/// ```
/// use quadra_core::types::IntegrationError;
///
/// let err = IntegrationError::InvalidDomain("interval count must be at least 1".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Invalid domain: interval count must be at least 1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntegrationError {
    /// Interval or discretisation is not usable (zero intervals, non-finite
    /// or reversed bounds).
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// The integrand returned NaN or an infinity.
    #[error("Function evaluation failed at x = {x}: got {value}")]
    FunctionEvaluation {
        /// Abscissa where the evaluation failed
        x: f64,
        /// The non-finite value returned by the integrand
        value: f64,
    },

    /// Monte Carlo sample count outside the valid range.
    #[error("Invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(usize),

    /// A numeric constant could not be converted into the working float type.
    #[error("Numeric conversion failed: {0}")]
    NumericConversion(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_domain_display() {
        let err = IntegrationError::InvalidDomain("bounds reversed".to_string());
        assert_eq!(format!("{}", err), "Invalid domain: bounds reversed");
    }

    #[test]
    fn test_function_evaluation_display() {
        let err = IntegrationError::FunctionEvaluation {
            x: 0.0,
            value: f64::INFINITY,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("x = 0"));
        assert!(msg.contains("inf"));
    }

    #[test]
    fn test_invalid_sample_count_display() {
        let err = IntegrationError::InvalidSampleCount(0);
        assert!(err.to_string().contains("Invalid sample count 0"));
    }

    #[test]
    fn test_error_is_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&IntegrationError::NumericConversion("0.5".to_string()));
    }

    #[test]
    fn test_error_clone_eq() {
        let err = IntegrationError::InvalidSampleCount(0);
        assert_eq!(err.clone(), err);
    }
}
