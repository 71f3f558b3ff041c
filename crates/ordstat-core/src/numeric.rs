//! Numeric type hierarchy for fixed-width order statistics
//!
//! This module provides the type foundation for the fixed-width tier: every
//! machine number knows how to order itself totally and which wider type holds
//! exact sums and differences of two of its values.
//!
//! # Design Philosophy
//!
//! - **Exact as long as possible**: differences and sums are formed in the
//!   narrowest wider type (`i32` pairs in `i64`, `i64` pairs in `i128`) and
//!   only the final result is converted to `f64`
//! - **Total order**: floats order NaN after every other value
//! - **Extensible**: new widths only need an `Aggregate` type

use num_traits::{AsPrimitive, Num};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Base trait for machine-width numbers with a natural order
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync + AsPrimitive<f64> + 'static {
    /// Type that represents the sum or difference of two values exactly
    type Aggregate: Num + Copy + From<Self> + AsPrimitive<f64>;

    /// Name used in diagnostics
    const NAME: &'static str;

    /// Total order over all values of the type
    fn order(&self, other: &Self) -> Ordering;

    /// Convert to f64 for statistical operations
    fn to_f64(self) -> f64 {
        self.as_()
    }

    /// `higher - lower`, formed exactly before conversion
    fn span(lower: Self, higher: Self) -> f64 {
        (Self::Aggregate::from(higher) - Self::Aggregate::from(lower)).as_()
    }

    /// `a + b`, formed exactly before conversion
    fn sum(a: Self, b: Self) -> f64 {
        (Self::Aggregate::from(a) + Self::Aggregate::from(b)).as_()
    }
}

macro_rules! impl_integer {
    ($($t:ty => $wide:ty),* $(,)?) => {$(
        impl Numeric for $t {
            type Aggregate = $wide;

            const NAME: &'static str = stringify!($t);

            fn order(&self, other: &Self) -> Ordering {
                self.cmp(other)
            }
        }
    )*};
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {$(
        impl Numeric for $t {
            type Aggregate = f64;

            const NAME: &'static str = stringify!($t);

            fn order(&self, other: &Self) -> Ordering {
                OrderedFloat(*self).cmp(&OrderedFloat(*other))
            }
        }
    )*};
}

impl_integer!(
    i8 => i16,
    i16 => i32,
    i32 => i64,
    i64 => i128,
    u8 => i16,
    u16 => i32,
    u32 => i64,
    u64 => i128,
);

impl_float!(f32, f64);

macro_rules! number {
    ($($variant:ident($t:ty)),* $(,)?) => {
        /// A number whose concrete width is only known at runtime
        ///
        /// Values of different variants must not be compared natively; order
        /// them through [`Number::key`].
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        pub enum Number {
            $($variant($t)),*
        }

        impl Number {
            /// Convert to f64, the common representation of all variants
            pub fn to_f64(self) -> f64 {
                match self {
                    $(Number::$variant(v) => Numeric::to_f64(v)),*
                }
            }

            /// Name of the concrete type held
            pub fn type_name(&self) -> &'static str {
                match self {
                    $(Number::$variant(_) => <$t as Numeric>::NAME),*
                }
            }
        }

        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::$variant(value)
                }
            }
        )*
    };
}

number!(
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
);

impl Number {
    /// Ordering key shared by every variant
    pub fn key(&self) -> OrderedFloat<f64> {
        OrderedFloat(self.to_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_span_does_not_overflow() {
        assert_eq!(i8::span(i8::MIN, i8::MAX), 255.0);
        assert_eq!(u8::span(u8::MAX, 0), -255.0);
        assert_eq!(i32::span(i32::MIN, i32::MAX), 4_294_967_295.0);
        assert_eq!(<i64 as Numeric>::sum(i64::MAX, i64::MAX), 2.0 * i64::MAX as f64);
    }

    #[test]
    fn test_float_order_puts_nan_last() {
        assert_eq!(f64::NAN.order(&1.0), Ordering::Greater);
        assert_eq!(1.0f64.order(&f64::NAN), Ordering::Less);
        assert_eq!(f32::NEG_INFINITY.order(&-1.0), Ordering::Less);
        assert_eq!(2.5f64.order(&2.5), Ordering::Equal);
    }

    #[test]
    fn test_to_f64_and_names() {
        assert_eq!(Numeric::to_f64(7u16), 7.0);
        assert_eq!(Numeric::to_f64(1.5f32), 1.5);
        assert_eq!(<u64 as Numeric>::NAME, "u64");
        assert_eq!(<f32 as Numeric>::NAME, "f32");
    }

    #[test]
    fn test_number_key_orders_across_variants() {
        let mut values = vec![
            Number::from(3.5f64),
            Number::from(2i8),
            Number::from(10u64),
            Number::from(-1i32),
        ];
        values.sort_by_key(Number::key);
        let keys: Vec<f64> = values.iter().map(|n| n.to_f64()).collect();
        assert_eq!(keys, vec![-1.0, 2.0, 3.5, 10.0]);
        assert_eq!(values[0].type_name(), "i32");
    }
}
