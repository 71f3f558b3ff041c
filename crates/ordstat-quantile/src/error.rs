//! Error types for quantile computation

use crate::Interpolation;
use thiserror::Error;

/// Errors that can occur while building or computing a quantile request
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid quantile fraction
    #[error("Quantile fraction {fraction} must be in [0.0, 1.0]")]
    InvalidFraction { fraction: f64 },

    /// Interpolation needs arithmetic the element type does not have
    #[error("{interpolation} interpolation is not available for {type_name}")]
    UnsupportedInterpolation {
        interpolation: Interpolation,
        type_name: String,
    },

    /// Interpolation name that matches no mode
    #[error("Unknown interpolation: {0}")]
    UnknownInterpolation(String),

    /// Element type cannot be ranked
    #[error("Element type {0} has no total order")]
    UnsupportedType(String),

    /// Malformed configuration
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// Core computation error
    #[error("Core computation error: {0}")]
    Core(#[from] ordstat_core::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions
impl Error {
    /// Check if a fraction is valid
    pub fn check_fraction(fraction: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(Error::InvalidFraction { fraction });
        }
        Ok(())
    }

    /// Error for a mode the element type cannot interpolate with
    pub fn unsupported(interpolation: Interpolation, type_name: impl Into<String>) -> Self {
        Error::UnsupportedInterpolation {
            interpolation,
            type_name: type_name.into(),
        }
    }
}
