//! Order-statistic quantiles
//!
//! This crate computes quantiles of in-memory collections with a choice of
//! interpolation policy, picking the arithmetic from the element type:
//! machine numbers interpolate in `f64` with exact intermediate sums,
//! arbitrary-precision numbers interpolate exactly, and values without
//! arithmetic can still yield their lower, higher or nearest order
//! statistic.
//!
//! # Features
//!
//! - **Five interpolation modes**: linear, lower, higher, nearest, midpoint
//! - **Tier-aware validation**: out-of-range fractions and modes the element
//!   type cannot support are rejected before any data is touched
//! - **Sort or select**: one sort amortized over several fractions, linear
//!   selection for a single one
//! - **Explicit ownership**: owned buffers may be reordered, borrowed slices
//!   only by selection
//!
//! # Example
//!
//! ```rust
//! use ordstat_quantile::{DecimalQuantiles, FixedWidthQuantiles, Interpolation};
//! use ordstat_core::Decimal;
//!
//! let median = FixedWidthQuantiles::<i32>::median(Interpolation::Linear)?;
//! assert_eq!(median.compute(vec![1i32, 2, 3, 4])?, vec![Some(2.5)]);
//!
//! let exact = DecimalQuantiles::single(0.5, Interpolation::Midpoint)?;
//! let data: Vec<Decimal> = vec!["0.1".parse::<Decimal>()?, "0.2".parse::<Decimal>()?];
//! assert_eq!(exact.compute(data)?[0].as_ref().map(|d| d.to_string()), Some("0.15".into()));
//! # Ok::<(), ordstat_quantile::Error>(())
//! ```

pub mod config;
pub mod dynamic;
pub mod error;
pub mod estimator;
mod interpolation;
pub mod kernels;
pub mod provider;
pub mod rank;
pub mod request;
pub mod tier;

// Re-export main types
pub use config::QuantileConfig;
pub use dynamic::{compute_sample, QuantileValue, Sample};
pub use error::{Error, Result};
pub use estimator::{
    BigIntegerQuantiles, DecimalQuantiles, FixedWidthQuantiles, OrderedQuantiles,
    PolymorphicQuantiles, Quantiles,
};
pub use kernels::{
    BigIntegerKernel, DecimalKernel, FixedWidthKernel, OrderedKernel, PolymorphicKernel,
    QuantileKernel,
};
pub use provider::{ComputationContext, Storage, Strategy};
pub use rank::RankPosition;
pub use request::QuantileRequest;
pub use tier::{classify, ElementTier, Interpolation, TypeTag};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        compute_sample, Error, FixedWidthQuantiles, Interpolation, QuantileConfig, QuantileValue,
        Quantiles, Result, Sample, Storage,
    };
}
