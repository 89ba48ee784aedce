//! Error types and result utilities for spectral descriptor operations.
//!
//! Errors are organised hierarchically: [`DescriptorError`] is the top level type
//! returned by every fallible operation, wrapping the more specific
//! [`ParameterError`] and [`ConfigurationError`] categories.
//!
//! Out-of-range and absent-vector accesses are not part of this
//! hierarchy. They are routed through an [`AccessPolicy`](crate::AccessPolicy)
//! instead, see [`crate::policy`].

use thiserror::Error;

/// Convenience type alias for results that may contain a [`DescriptorError`].
pub type DescriptorResult<T> = Result<T, DescriptorError>;

/// Error types that can occur while building or running spectral descriptors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DescriptorError {
    /// An argument was outside the range the operation accepts.
    #[error("Invalid parameter: {0}")]
    Parameter(#[from] ParameterError),

    /// A descriptor could not be configured.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Two buffers that must share a length did not.
    #[error("Dimension mismatch: expected length {expected}, got {actual}")]
    DimensionMismatch {
        /// The length the operation required.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },
}

impl DescriptorError {
    /// Creates a [`DescriptorError::DimensionMismatch`].
    pub const fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        DescriptorError::DimensionMismatch { expected, actual }
    }
}

/// Errors describing an invalid argument.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter value is not acceptable.
    #[error("invalid value for '{parameter}': {reason}")]
    InvalidValue {
        /// Name of the offending parameter.
        parameter: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A numeric parameter fell outside its permitted range.
    #[error("'{parameter}' = {value} is outside the range {min}..={max}")]
    OutOfRange {
        /// Name of the offending parameter.
        parameter: String,
        /// The supplied value.
        value: f64,
        /// Lower bound (inclusive).
        min: f64,
        /// Upper bound (inclusive).
        max: f64,
    },
}

impl ParameterError {
    /// Creates a [`ParameterError::InvalidValue`].
    pub fn invalid_value(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        ParameterError::InvalidValue {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Creates a [`ParameterError::OutOfRange`].
    pub fn out_of_range(parameter: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        ParameterError::OutOfRange {
            parameter: parameter.into(),
            value,
            min,
            max,
        }
    }
}

/// Errors raised while constructing a descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The requested descriptor name does not match any known mode.
    #[error("unknown spectral descriptor mode '{0}'")]
    UnknownMode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let err: DescriptorError = ConfigurationError::UnknownMode("foo".to_string()).into();
        assert!(matches!(
            err,
            DescriptorError::Configuration(ConfigurationError::UnknownMode(ref name))
                if name == "foo"
        ));
        assert!(err.to_string().contains("foo"));

        let err: DescriptorError =
            ParameterError::invalid_value("window_size", "must be > 0").into();
        assert!(err.to_string().contains("window_size"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = DescriptorError::dimension_mismatch(513, 512);
        assert_eq!(
            err.to_string(),
            "Dimension mismatch: expected length 513, got 512"
        );
    }
}
