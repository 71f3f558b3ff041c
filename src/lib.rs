//! Order-statistic quantiles with selectable interpolation
//!
//! This crate re-exports the ordstat workspace:
//!
//! - `ordstat-core`: numeric foundations ([`Numeric`], [`Number`], exact
//!   [`Decimal`])
//! - `ordstat-quantile`: tier classification, validated requests, the
//!   sort/select provider and the [`Quantiles`] engine
//!
//! # Example
//!
//! ```rust
//! use ordstat::prelude::*;
//!
//! let config = QuantileConfig::quartiles();
//! let quartiles = config.quantiles::<FixedWidthKernel<u16>>()?;
//! assert_eq!(
//!     quartiles.compute(vec![1u16, 2, 3, 4, 5])?,
//!     vec![Some(2.0), Some(3.0), Some(4.0)]
//! );
//!
//! let text = Sample::Text(vec!["b".into(), "a".into(), "c".into()]);
//! let median = compute_sample(&[0.5], Interpolation::Lower, text)?;
//! assert_eq!(median, vec![Some(QuantileValue::Text("b".into()))]);
//! # Ok::<(), ordstat::Error>(())
//! ```

pub use ordstat_core::{BigInt, Decimal, Number, Numeric};
pub use ordstat_quantile::{
    classify, compute_sample, ElementTier, Error, Interpolation, QuantileConfig, QuantileKernel,
    QuantileRequest, QuantileValue, Quantiles, Result, Sample, Storage, TypeTag,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use ordstat_core::{BigInt, Decimal, Number};
    pub use ordstat_quantile::kernels::{
        BigIntegerKernel, DecimalKernel, FixedWidthKernel, OrderedKernel, PolymorphicKernel,
    };
    pub use ordstat_quantile::{
        compute_sample, BigIntegerQuantiles, DecimalQuantiles, Error, FixedWidthQuantiles,
        Interpolation, OrderedQuantiles, PolymorphicQuantiles, QuantileConfig, QuantileValue,
        Quantiles, Result, Sample,
    };
}
