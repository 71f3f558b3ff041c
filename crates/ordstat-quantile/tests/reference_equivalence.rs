//! Equivalence tests comparing the engine with the naive reference
//! implementation

mod common;

use common::*;
use ordstat_quantile::{FixedWidthQuantiles, Interpolation, PolymorphicQuantiles, Strategy};
use ordstat_core::Number;

// Import naive reference implementation
#[path = "../src/naive_reference.rs"]
mod naive_reference;

use naive_reference::{NaiveMode, NaiveQuantile};

fn naive_mode(mode: Interpolation) -> NaiveMode {
    match mode {
        Interpolation::Linear => NaiveMode::Linear,
        Interpolation::Lower => NaiveMode::Lower,
        Interpolation::Higher => NaiveMode::Higher,
        Interpolation::Nearest => NaiveMode::Nearest,
        Interpolation::Midpoint => NaiveMode::Midpoint,
    }
}

#[test]
fn test_batch_sort_equivalence() {
    init_tracing();
    let fractions = test_fractions();

    for (name, data) in generate_test_datasets() {
        for mode in modes() {
            let quantiles = FixedWidthQuantiles::<f64>::new(fractions.clone(), mode).unwrap();
            assert_eq!(quantiles.request().strategy(), Strategy::Sort);

            let expected = NaiveQuantile::quantiles(&data, &fractions, naive_mode(mode));
            let actual = quantiles.compute(data.clone()).unwrap();
            assert_results_equal(&actual, &expected, &format!("{name} {mode}"));
        }
    }
}

#[test]
fn test_single_select_equivalence() {
    for (name, data) in generate_test_datasets() {
        for mode in modes() {
            for &q in &test_fractions() {
                let quantile = FixedWidthQuantiles::<f64>::single(q, mode).unwrap();
                assert_eq!(quantile.request().strategy(), Strategy::Select);

                // Selection reorders the borrowed copy in place
                let mut data_copy = data.clone();
                let actual = quantile.compute(&mut data_copy).unwrap();
                let expected = NaiveQuantile::quantile(&data, q, naive_mode(mode));
                assert_results_equal(&actual, &[expected], &format!("{name} {mode} q={q}"));
            }
        }
    }
}

#[test]
fn test_presorted_equivalence() {
    for (name, data) in generate_test_datasets() {
        let mut sorted = data.clone();
        sorted.sort_by(f64::total_cmp);
        for mode in modes() {
            let quantiles = FixedWidthQuantiles::<f64>::new(test_fractions(), mode).unwrap();
            let from_sorted = quantiles.compute_sorted(&sorted).unwrap();
            let from_unsorted = quantiles.compute(data.clone()).unwrap();
            assert_results_equal(&from_sorted, &from_unsorted, &format!("{name} {mode}"));
        }
    }
}

#[test]
fn test_integer_equivalence_across_lengths() {
    for (seed, len) in edge_case_lengths().into_iter().enumerate() {
        let data = generate_integers(len, 50, seed as u64);
        let as_f64: Vec<f64> = data.iter().map(|&v| v as f64).collect();
        for mode in modes() {
            let quantiles = FixedWidthQuantiles::<i64>::new(test_fractions(), mode).unwrap();
            let actual = quantiles.compute(data.clone()).unwrap();
            let expected = NaiveQuantile::quantiles(&as_f64, &test_fractions(), naive_mode(mode));
            assert_results_equal(&actual, &expected, &format!("len={len} {mode}"));
        }
    }
}

#[test]
fn test_polymorphic_equivalence() {
    let data = generate_normal(257, 10.0, 3.0, 11);
    // Alternate widths so native comparisons across variants would be wrong
    let mixed: Vec<Number> = data
        .iter()
        .enumerate()
        .map(|(i, &v)| match i % 3 {
            0 => Number::F64(v),
            1 => Number::I64(v.round() as i64),
            _ => Number::F32(v as f32),
        })
        .collect();
    let keys: Vec<f64> = mixed.iter().map(|n| n.to_f64()).collect();

    for mode in modes() {
        let quantiles = PolymorphicQuantiles::new(test_fractions(), mode).unwrap();
        let actual = quantiles.compute(mixed.clone()).unwrap();
        let expected = NaiveQuantile::quantiles(&keys, &test_fractions(), naive_mode(mode));
        assert_results_equal(&actual, &expected, &format!("polymorphic {mode}"));
    }
}
