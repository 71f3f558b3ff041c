//! Naive reference implementation of order-statistic quantiles
//!
//! This implementation is intentionally simple and unoptimized. It serves as
//! a reference for verifying the selection and sort paths of the engine.
//!
//! DO NOT USE IN PRODUCTION - this is for testing and debugging only!

/// Interpolation modes understood by the reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NaiveMode {
    Linear,
    Lower,
    Higher,
    Nearest,
    Midpoint,
}

/// Naive quantile computation over `f64` data
///
/// This implementation:
/// - Sorts a fresh copy of the data for every call
/// - Recomputes the rank for every fraction
/// - Works in `f64` throughout
pub struct NaiveQuantile;

impl NaiveQuantile {
    /// Compute a single quantile using the naive approach
    ///
    /// # Arguments
    /// * `data` - The data sample (will be sorted internally)
    /// * `q` - The fraction (0.0 to 1.0)
    pub fn quantile(data: &[f64], q: f64, mode: NaiveMode) -> Option<f64> {
        assert!((0.0..=1.0).contains(&q), "Fraction must be in [0, 1]");
        if data.is_empty() {
            return None;
        }

        // Sort the data
        let mut sorted = data.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let n = sorted.len();
        let position = (n - 1) as f64 * q;
        let lower = position.floor() as usize;
        let higher = (position.ceil() as usize).min(n - 1);
        let fraction = position - lower as f64;

        let value = match mode {
            NaiveMode::Lower => sorted[lower],
            NaiveMode::Higher => sorted[higher],
            NaiveMode::Nearest => {
                if fraction < 0.5 {
                    sorted[lower]
                } else {
                    sorted[higher]
                }
            }
            NaiveMode::Linear => {
                if lower == higher {
                    sorted[lower]
                } else {
                    sorted[lower] + (sorted[higher] - sorted[lower]) * fraction
                }
            }
            NaiveMode::Midpoint => {
                if lower == higher {
                    sorted[lower]
                } else {
                    (sorted[lower] + sorted[higher]) / 2.0
                }
            }
        };
        Some(value)
    }

    /// Compute several quantiles, one naive call each
    pub fn quantiles(data: &[f64], fractions: &[f64], mode: NaiveMode) -> Vec<Option<f64>> {
        fractions
            .iter()
            .map(|&q| Self::quantile(data, q, mode))
            .collect()
    }
}
