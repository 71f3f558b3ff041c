//! Shared utilities for integration tests

#![allow(dead_code)]

use ordstat_quantile::Interpolation;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-12;

/// Fractions that hit exact ranks, ties and arbitrary positions
pub fn test_fractions() -> Vec<f64> {
    vec![
        0.0, 0.001, 0.1, 0.123, 0.25, 0.333, 0.5, 0.666, 0.75, 0.9, 0.999, 1.0,
    ]
}

/// Collection sizes around the small cases where rank arithmetic is fragile
pub fn edge_case_lengths() -> Vec<usize> {
    vec![1, 2, 3, 4, 5, 7, 8, 16, 17, 100, 101, 1000]
}

/// Generate normal distribution data
pub fn generate_normal(n: usize, mean: f64, std_dev: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, std_dev).unwrap();
    (0..n).map(|_| normal.sample(&mut rng)).collect()
}

/// Generate integers with many duplicates
pub fn generate_integers(n: usize, max: i64, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-max..=max)).collect()
}

/// Named datasets with various characteristics
pub fn generate_test_datasets() -> Vec<(&'static str, Vec<f64>)> {
    vec![
        ("single", vec![42.0]),
        ("pair", vec![2.0, 1.0]),
        ("small", vec![5.0, 3.0, 1.0, 4.0, 2.0]),
        ("duplicates", vec![1.0, 1.0, 2.0, 2.0, 3.0, 3.0]),
        ("constant", vec![7.5; 10]),
        ("descending", (0..100).rev().map(|x| x as f64).collect()),
        ("random_normal", generate_normal(1000, 0.0, 1.0, 42)),
        ("with_outliers", {
            let mut data = generate_normal(100, 0.0, 1.0, 7);
            data[0] = -1e9;
            data[99] = 1e9;
            data
        }),
        ("negative_zero", vec![0.0, -0.0, 1.0, -1.0]),
    ]
}

/// Install a test subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Assert two result vectors are equal within tolerance
pub fn assert_results_equal(actual: &[Option<f64>], expected: &[Option<f64>], context: &str) {
    assert_eq!(actual.len(), expected.len(), "length mismatch for {}", context);
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        match (a, e) {
            (Some(a), Some(e)) => assert_relative_eq!(*a, *e, epsilon = EPSILON, max_relative = EPSILON),
            (None, None) => {}
            _ => panic!("presence mismatch at {} for {}: {:?} vs {:?}", i, context, a, e),
        }
    }
}

/// All modes paired with their reference counterparts
pub fn modes() -> Vec<Interpolation> {
    Interpolation::ALL.to_vec()
}
