//! Totally ordered values without arithmetic
//!
//! Only LOWER, HIGHER and NEAREST can be answered; the result is one of the
//! input elements, returned unchanged. This kernel also gives an exact
//! alternative for machine integers, where the fixed-width kernel would
//! convert to `f64`.

use super::QuantileKernel;
use crate::{ElementTier, Result};
use std::cmp::Ordering;
use std::marker::PhantomData;

/// Kernel for any `Ord + Clone` element type
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderedKernel<T>(PhantomData<T>);

impl<T: Ord + Clone> QuantileKernel for OrderedKernel<T> {
    type Item = T;
    type Output = T;

    const TIER: ElementTier = ElementTier::GenericOrderedValue;

    fn compare(a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    fn value(item: &T) -> Result<T> {
        Ok(item.clone())
    }
}
