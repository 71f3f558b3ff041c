//! Validated quantile requests

use crate::provider::Strategy;
use crate::{ElementTier, Error, Interpolation, Result};

/// Fractions, interpolation mode and element tier of one computation
///
/// A request can only be built through its validating constructors: every
/// fraction lies in `[0, 1]` and the mode is legal for the tier. The
/// provider strategy is fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileRequest {
    fractions: Vec<f64>,
    interpolation: Interpolation,
    tier: ElementTier,
    strategy: Strategy,
}

impl QuantileRequest {
    /// Validate and build a request
    ///
    /// Fractions are checked first, in order, and the first one outside
    /// `[0, 1]` (or NaN) is reported. The mode is then checked against the
    /// tier.
    pub fn new(
        fractions: impl Into<Vec<f64>>,
        interpolation: Interpolation,
        tier: ElementTier,
    ) -> Result<Self> {
        Self::for_type(fractions.into(), interpolation, tier, &tier.to_string())
    }

    /// Request for a single fraction
    pub fn single(fraction: f64, interpolation: Interpolation, tier: ElementTier) -> Result<Self> {
        Self::new(vec![fraction], interpolation, tier)
    }

    /// Like [`QuantileRequest::new`], naming `type_name` in mode errors
    pub(crate) fn for_type(
        fractions: Vec<f64>,
        interpolation: Interpolation,
        tier: ElementTier,
        type_name: &str,
    ) -> Result<Self> {
        for &fraction in &fractions {
            Error::check_fraction(fraction)?;
        }
        if !tier.supports(interpolation) {
            return Err(Error::unsupported(interpolation, type_name));
        }
        let strategy = Strategy::choose(fractions.len(), tier);
        Ok(Self {
            fractions,
            interpolation,
            tier,
            strategy,
        })
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn tier(&self) -> ElementTier {
        self.tier
    }

    /// Provider strategy chosen for this request
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}
