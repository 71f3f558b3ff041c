//! Core types for exact order-statistic computations
//!
//! This crate provides the numeric foundation shared by the ordstat crates:
//!
//! - **[`Numeric`]**: machine-width numbers with a total order and an exact
//!   aggregate type for sums and differences
//! - **[`Number`]**: a number whose concrete width is only known at runtime
//! - **[`Decimal`]**: an exact base-10 decimal backed by an arbitrary-precision
//!   integer
//! - **[`Error`]**: the error type for conversions and parsing
//!
//! # Example
//!
//! ```rust
//! use ordstat_core::{Decimal, Numeric};
//!
//! // Differences of i64 values are formed in i128 before conversion
//! assert_eq!(i64::span(i64::MIN, i64::MAX), 2f64.powi(64));
//!
//! // Decimal arithmetic is exact
//! let a: Decimal = "0.1".parse().unwrap();
//! let b: Decimal = "0.2".parse().unwrap();
//! assert_eq!((a + b).to_string(), "0.3");
//! ```

pub mod decimal;
pub mod error;
pub mod numeric;
pub mod utils;

// Re-export core types
pub use decimal::Decimal;
pub use error::{Error, Result};
pub use numeric::{Number, Numeric};

// Arbitrary-precision integers are part of the public API
pub use num_bigint::BigInt;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{BigInt, Decimal, Error, Number, Numeric, Result};
}
