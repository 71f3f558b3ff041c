//! Per-tier ordering and interpolation arithmetic
//!
//! A [`QuantileKernel`] carries everything tier-specific: how elements are
//! ordered, what the result type is, and which arithmetic the tier can do.
//! The engine is generic over the kernel, so the tier is resolved once at
//! compile time (or once per request on the dynamic path) instead of being
//! inspected per element.

mod arbitrary;
mod fixed_width;
mod ordered;
mod polymorphic;

pub use arbitrary::{BigIntegerKernel, DecimalKernel};
pub use fixed_width::FixedWidthKernel;
pub use ordered::OrderedKernel;
pub use polymorphic::PolymorphicKernel;

use crate::{ElementTier, Error, Interpolation, Result};
use std::cmp::Ordering;

/// `lower + (higher - lower) * fraction` in `f64`
///
/// `span` is `higher - lower`, which may already be exact in a wider type.
/// When it overflows, the weighted form is used instead so the result stays
/// between `lower` and `higher`.
pub(crate) fn lerp(lower: f64, higher: f64, span: f64, fraction: f64) -> f64 {
    if span.is_finite() {
        lower + span * fraction
    } else {
        lower * (1.0 - fraction) + higher * fraction
    }
}

/// `(lower + higher) / 2` in `f64`, given `sum = lower + higher`
pub(crate) fn halve(lower: f64, higher: f64, sum: f64) -> f64 {
    if sum.is_finite() {
        sum / 2.0
    } else {
        lower / 2.0 + higher / 2.0
    }
}

/// Tier-specific operations used by the quantile engine
pub trait QuantileKernel {
    /// Element type of the input collection
    type Item: Clone;

    /// Result type of one quantile
    type Output;

    /// Tier this kernel implements
    const TIER: ElementTier;

    /// Name of the element type, used in error messages
    fn type_name() -> &'static str {
        std::any::type_name::<Self::Item>()
    }

    /// Total order over elements
    fn compare(a: &Self::Item, b: &Self::Item) -> Ordering;

    /// Sort a buffer into ascending order
    fn sort(items: &mut [Self::Item]) {
        items.sort_by(Self::compare);
    }

    /// A single order statistic as a result
    fn value(item: &Self::Item) -> Result<Self::Output>;

    /// `lower + (higher - lower) * fraction`
    fn linear(lower: &Self::Item, higher: &Self::Item, fraction: f64) -> Result<Self::Output> {
        let _ = (lower, higher, fraction);
        Err(Error::unsupported(Interpolation::Linear, Self::type_name()))
    }

    /// `(lower + higher) / 2`
    fn midpoint(lower: &Self::Item, higher: &Self::Item) -> Result<Self::Output> {
        let _ = (lower, higher);
        Err(Error::unsupported(Interpolation::Midpoint, Self::type_name()))
    }
}
