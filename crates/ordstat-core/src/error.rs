//! Error types for ordstat numeric primitives
//!
//! Provides the shared error type used by the exact decimal type and the
//! numeric conversions that sit underneath the quantile engine.

use thiserror::Error;

/// Core error type for numeric conversions and parsing
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for text that is not a decimal number
    pub fn parse_decimal(text: &str) -> Self {
        Self::InvalidInput(format!("'{text}' is not a valid decimal number"))
    }
}
