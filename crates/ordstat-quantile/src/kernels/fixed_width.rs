//! Machine-width numbers
//!
//! Differences and sums are formed exactly in the type's aggregate width and
//! converted to `f64` last. Integers whose magnitude exceeds 2^53 can still
//! lose precision in that final conversion under LINEAR and MIDPOINT.
//! `f64` has no wider type, so an overflowing span or sum falls back to
//! weighting each end separately.

use super::{halve, lerp, QuantileKernel};
use crate::{ElementTier, Result};
use ordstat_core::Numeric;
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Kernel for `i8` through `u64`, `f32` and `f64`
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWidthKernel<T>(PhantomData<T>);

impl<T: Numeric> QuantileKernel for FixedWidthKernel<T> {
    type Item = T;
    type Output = f64;

    const TIER: ElementTier = ElementTier::FixedWidthNumber;

    fn type_name() -> &'static str {
        T::NAME
    }

    fn compare(a: &T, b: &T) -> Ordering {
        a.order(b)
    }

    fn value(item: &T) -> Result<f64> {
        Ok(item.to_f64())
    }

    fn linear(lower: &T, higher: &T, fraction: f64) -> Result<f64> {
        Ok(lerp(lower.to_f64(), higher.to_f64(), T::span(*lower, *higher), fraction))
    }

    fn midpoint(lower: &T, higher: &T) -> Result<f64> {
        Ok(halve(lower.to_f64(), higher.to_f64(), T::sum(*lower, *higher)))
    }
}
