//! Error types for accuracy confidence planning
//!
//! Provides a unified error type for all planner crates.

use thiserror::Error;

/// Core error type for interval estimation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A numeric argument lies outside its valid domain
    #[error("Domain error: {parameter} = {value} must be {expected}")]
    Domain {
        parameter: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Arguments that are individually valid but do not fit the requested method
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Method name outside the supported set
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a domain error for a named parameter
    pub fn domain(parameter: &'static str, value: f64, expected: &'static str) -> Self {
        Self::Domain {
            parameter,
            value,
            expected,
        }
    }

    /// Create an error for an empty input sequence
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Whether the error was caused by an out-of-domain argument
    ///
    /// Everything except [`Error::UnsupportedMethod`] and
    /// [`Error::Computation`] counts as a domain error.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::Domain { .. } | Self::InsufficientData { .. } | Self::InvalidInput(_)
        )
    }
}
