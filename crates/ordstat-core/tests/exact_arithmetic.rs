//! Integration tests for exact decimal conversion and fixed-width aggregates

mod common;

use common::*;
use ordstat_core::{BigInt, Decimal, Number, Numeric};

#[test]
fn test_special_values_convert_exactly() {
    for value in special_values() {
        let decimal = Decimal::from_f64(value).unwrap();
        assert_eq!(decimal.to_f64(), value, "value {value:e}");
    }
}

#[test]
fn test_subnormal_expansion_is_exact() {
    // 2^-1074 has 1074 fractional digits
    let tiny = Decimal::from_f64(f64::from_bits(1)).unwrap();
    assert_eq!(tiny.scale(), 1074);
    assert_eq!(tiny.half().scale(), 1075);
    assert!(tiny > Decimal::zero());
}

#[test]
fn test_interpolation_step_by_hand() {
    // lower + (higher - lower) * fraction, entirely in decimal
    let lower: Decimal = "1.1".parse().unwrap();
    let higher: Decimal = "2.2".parse().unwrap();
    let fraction = Decimal::from_f64(0.25).unwrap();
    let result = &lower + &(&(&higher - &lower) * &fraction);
    assert_eq!(result.to_string(), "1.375");
    assert_relative_eq!(result.to_f64(), 1.375, epsilon = EPSILON);
}

#[test]
fn test_big_integer_to_decimal() {
    let value = BigInt::parse_bytes(b"-98765432109876543210", 10).unwrap();
    let decimal = Decimal::from(&value);
    assert_eq!(decimal.unscaled(), &value);
    assert_eq!(decimal.scale(), 0);
    assert_eq!((&decimal + &Decimal::from(10)).to_string(), "-98765432109876543200");
}

#[test]
fn test_aggregates_stay_exact() {
    assert_eq!(u64::span(0, u64::MAX), u64::MAX as f64);
    assert_eq!(<u32 as Numeric>::sum(u32::MAX, u32::MAX), 2.0 * u32::MAX as f64);
    assert_eq!(i16::span(i16::MAX, i16::MIN), -65535.0);
    assert_eq!(<f32 as Numeric>::sum(f32::MAX, f32::MAX), 2.0 * f32::MAX as f64);
}

#[test]
fn test_number_keys_order_mixed_widths() {
    let mut numbers = vec![
        Number::U64(u64::MAX),
        Number::I8(-128),
        Number::F32(0.5),
        Number::I64(i64::MIN),
    ];
    numbers.sort_by_key(Number::key);
    let names: Vec<&str> = numbers.iter().map(Number::type_name).collect();
    assert_eq!(names, vec!["i64", "i8", "f32", "u64"]);
}
