//! Numbers of mixed width
//!
//! A collection of [`Number`] may hold an `i64` next to an `f32`, so the
//! variants cannot be compared natively. Every element is ordered through its
//! `f64` key and results are `f64`.

use super::{halve, lerp, QuantileKernel};
use crate::{ElementTier, Result};
use ordstat_core::Number;
use std::cmp::Ordering;

/// Kernel for [`Number`] elements
#[derive(Debug, Clone, Copy, Default)]
pub struct PolymorphicKernel;

impl QuantileKernel for PolymorphicKernel {
    type Item = Number;
    type Output = f64;

    const TIER: ElementTier = ElementTier::PolymorphicNumber;

    fn type_name() -> &'static str {
        "Number"
    }

    fn compare(a: &Number, b: &Number) -> Ordering {
        a.key().cmp(&b.key())
    }

    fn sort(items: &mut [Number]) {
        items.sort_by_cached_key(Number::key);
    }

    fn value(item: &Number) -> Result<f64> {
        Ok(item.to_f64())
    }

    fn linear(lower: &Number, higher: &Number, fraction: f64) -> Result<f64> {
        let (lower, higher) = (lower.to_f64(), higher.to_f64());
        Ok(lerp(lower, higher, higher - lower, fraction))
    }

    fn midpoint(lower: &Number, higher: &Number) -> Result<f64> {
        let (lower, higher) = (lower.to_f64(), higher.to_f64());
        Ok(halve(lower, higher, lower + higher))
    }
}
