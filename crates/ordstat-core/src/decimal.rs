//! Exact base-10 decimal numbers
//!
//! A [`Decimal`] is an arbitrary-precision integer paired with a base-10
//! scale: `value = unscaled * 10^-scale`. Addition, subtraction,
//! multiplication and halving are exact, and conversion from a finite `f64`
//! reproduces the binary value digit for digit, so interpolating between
//! arbitrary-precision values never goes through floating point.
//!
//! Values are kept normalized (no trailing fractional zeros), which makes the
//! derived representation canonical; comparisons are value based regardless.

use crate::{Error, Result};
use num_bigint::{BigInt, Sign};
use num_traits::{pow, Float, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};
use std::str::FromStr;

/// Largest power of ten [`Decimal::from_str`] will scale by
///
/// Inputs whose exponent moves the decimal point further than this, in
/// either direction, are rejected instead of materializing that many digits.
pub const MAX_PARSE_SCALE: u32 = 100_000;

/// Exact decimal number
#[derive(Debug, Clone)]
pub struct Decimal {
    unscaled: BigInt,
    scale: u32,
}

fn ten_pow(exponent: u32) -> BigInt {
    pow(BigInt::from(10u8), exponent as usize)
}

impl Decimal {
    /// Build a decimal from an unscaled value and a base-10 scale
    pub fn new(unscaled: BigInt, scale: u32) -> Self {
        Self { unscaled, scale }.normalized()
    }

    /// The value zero
    pub fn zero() -> Self {
        Self {
            unscaled: BigInt::zero(),
            scale: 0,
        }
    }

    /// Exact decimal expansion of a finite `f64`
    ///
    /// `0.1` becomes `0.1000000000000000055511151231257827021181583404541015625`,
    /// the value the double actually holds.
    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::non_finite("decimal conversion"));
        }
        let (mantissa, exponent, sign) = Float::integer_decode(value);
        let mut unscaled = BigInt::from(mantissa);
        if sign < 0 {
            unscaled = -unscaled;
        }
        let decimal = if exponent >= 0 {
            Self {
                unscaled: unscaled << (exponent as usize),
                scale: 0,
            }
        } else {
            // m / 2^k == m * 5^k / 10^k
            let k = u32::from(exponent.unsigned_abs());
            Self {
                unscaled: unscaled * pow(BigInt::from(5u8), k as usize),
                scale: k,
            }
        };
        Ok(decimal.normalized())
    }

    /// Unscaled integer value
    pub fn unscaled(&self) -> &BigInt {
        &self.unscaled
    }

    /// Number of fractional digits
    pub fn scale(&self) -> u32 {
        self.scale
    }

    pub fn is_zero(&self) -> bool {
        self.unscaled.is_zero()
    }

    /// Exactly half of this value
    pub fn half(&self) -> Self {
        Self {
            unscaled: &self.unscaled * BigInt::from(5u8),
            scale: self.scale + 1,
        }
        .normalized()
    }

    /// Nearest `f64`; may round
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse().unwrap_or(f64::NAN)
    }

    fn unscaled_at(&self, scale: u32) -> BigInt {
        debug_assert!(scale >= self.scale);
        &self.unscaled * ten_pow(scale - self.scale)
    }

    fn normalized(mut self) -> Self {
        if self.unscaled.is_zero() {
            self.scale = 0;
            return self;
        }
        let ten = BigInt::from(10u8);
        while self.scale > 0 && (&self.unscaled % &ten).is_zero() {
            self.unscaled = &self.unscaled / &ten;
            self.scale -= 1;
        }
        self
    }
}

impl Default for Decimal {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<BigInt> for Decimal {
    fn from(value: BigInt) -> Self {
        Self {
            unscaled: value,
            scale: 0,
        }
    }
}

impl From<&BigInt> for Decimal {
    fn from(value: &BigInt) -> Self {
        Self::from(value.clone())
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            fn from(value: $t) -> Self {
                Self::from(BigInt::from(value))
            }
        }
    )*};
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

impl TryFrom<f64> for Decimal {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_f64(value)
    }
}

impl<'a> Add<&'a Decimal> for &'a Decimal {
    type Output = Decimal;

    fn add(self, rhs: &'a Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal::new(self.unscaled_at(scale) + rhs.unscaled_at(scale), scale)
    }
}

impl<'a> Sub<&'a Decimal> for &'a Decimal {
    type Output = Decimal;

    fn sub(self, rhs: &'a Decimal) -> Decimal {
        let scale = self.scale.max(rhs.scale);
        Decimal::new(self.unscaled_at(scale) - rhs.unscaled_at(scale), scale)
    }
}

impl<'a> Mul<&'a Decimal> for &'a Decimal {
    type Output = Decimal;

    fn mul(self, rhs: &'a Decimal) -> Decimal {
        Decimal::new(&self.unscaled * &rhs.unscaled, self.scale + rhs.scale)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, rhs: Decimal) -> Decimal {
        &self + &rhs
    }
}

impl Sub for Decimal {
    type Output = Decimal;

    fn sub(self, rhs: Decimal) -> Decimal {
        &self - &rhs
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Decimal {
        &self * &rhs
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let scale = self.scale.max(other.scale);
        self.unscaled_at(scale).cmp(&other.unscaled_at(scale))
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Decimal {}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.unscaled.sign() == Sign::Minus { "-" } else { "" };
        let digits = self.unscaled.magnitude().to_string();
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        let padded = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{integer}.{fraction}")
    }
}

impl FromStr for Decimal {
    type Err = Error;

    /// Parses `[+-]digits[.digits][(e|E)[+-]digits]`
    fn from_str(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let (mantissa, exponent) = match body.split_once(|c: char| c == 'e' || c == 'E') {
            Some((mantissa, exponent)) => {
                let exponent: i64 = exponent.parse().map_err(|_| Error::parse_decimal(text))?;
                (mantissa, exponent)
            }
            None => (body, 0),
        };
        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if (integer.is_empty() && fraction.is_empty()) || !all_digits(integer) || !all_digits(fraction) {
            return Err(Error::parse_decimal(text));
        }

        let digits = format!("{integer}{fraction}");
        let mut unscaled =
            BigInt::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| Error::parse_decimal(text))?;
        if negative {
            unscaled = -unscaled;
        }

        let scale = i64::try_from(fraction.len())
            .ok()
            .and_then(|digits| digits.checked_sub(exponent))
            .ok_or_else(|| Error::parse_decimal(text))?;
        let magnitude = u32::try_from(scale.unsigned_abs())
            .ok()
            .filter(|&magnitude| magnitude <= MAX_PARSE_SCALE)
            .ok_or_else(|| Error::parse_decimal(text))?;
        if scale >= 0 {
            Ok(Self::new(unscaled, magnitude))
        } else {
            Ok(Self::new(unscaled * ten_pow(magnitude), 0))
        }
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
