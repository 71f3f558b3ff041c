//! Arbitrary-precision integers and decimals
//!
//! Both tiers produce exact [`Decimal`] results. The interpolation fraction is
//! converted to the exact decimal expansion of its `f64` value before it is
//! multiplied in, so no step rounds.

use super::QuantileKernel;
use crate::{ElementTier, Result};
use ordstat_core::{BigInt, Decimal};
use std::cmp::Ordering;

/// Kernel for [`BigInt`] elements
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntegerKernel;

impl QuantileKernel for BigIntegerKernel {
    type Item = BigInt;
    type Output = Decimal;

    const TIER: ElementTier = ElementTier::ArbitraryPrecisionInteger;

    fn type_name() -> &'static str {
        "BigInt"
    }

    fn compare(a: &BigInt, b: &BigInt) -> Ordering {
        a.cmp(b)
    }

    fn value(item: &BigInt) -> Result<Decimal> {
        Ok(Decimal::from(item))
    }

    fn linear(lower: &BigInt, higher: &BigInt, fraction: f64) -> Result<Decimal> {
        let span = Decimal::from(higher - lower);
        let fraction = Decimal::from_f64(fraction)?;
        Ok(&Decimal::from(lower) + &(&span * &fraction))
    }

    fn midpoint(lower: &BigInt, higher: &BigInt) -> Result<Decimal> {
        Ok(Decimal::from(lower + higher).half())
    }
}

/// Kernel for [`Decimal`] elements
#[derive(Debug, Clone, Copy, Default)]
pub struct DecimalKernel;

impl QuantileKernel for DecimalKernel {
    type Item = Decimal;
    type Output = Decimal;

    const TIER: ElementTier = ElementTier::ArbitraryPrecisionDecimal;

    fn type_name() -> &'static str {
        "Decimal"
    }

    fn compare(a: &Decimal, b: &Decimal) -> Ordering {
        a.cmp(b)
    }

    fn value(item: &Decimal) -> Result<Decimal> {
        Ok(item.clone())
    }

    fn linear(lower: &Decimal, higher: &Decimal, fraction: f64) -> Result<Decimal> {
        let fraction = Decimal::from_f64(fraction)?;
        Ok(lower + &(&(higher - lower) * &fraction))
    }

    fn midpoint(lower: &Decimal, higher: &Decimal) -> Result<Decimal> {
        Ok((lower + higher).half())
    }
}
