//! Serializable quantile configuration
//!
//! A [`QuantileConfig`] names the fractions and interpolation mode of a
//! computation, so it can be loaded from JSON and turned into a validated
//! request or a typed engine. Without a mode, each tier uses
//! [`Interpolation::default_for`].
//!
//! ```rust
//! use ordstat_quantile::{FixedWidthKernel, Interpolation, QuantileConfig};
//!
//! let config = QuantileConfig::from_json(r#"{"fractions": [0.1, 0.9], "interpolation": "nearest"}"#)?;
//! assert_eq!(config.interpolation, Some(Interpolation::Nearest));
//!
//! let deciles = config.quantiles::<FixedWidthKernel<u32>>()?;
//! let result = deciles.compute((0..=10u32).collect::<Vec<_>>())?;
//! assert_eq!(result, vec![Some(1.0), Some(9.0)]);
//! # Ok::<(), ordstat_quantile::Error>(())
//! ```

use crate::dynamic::{compute_sample, QuantileValue, Sample};
use crate::kernels::QuantileKernel;
use crate::{classify, ElementTier, Error, Interpolation, QuantileRequest, Quantiles, Result};
use serde::{Deserialize, Serialize};

/// Fractions and interpolation mode of a quantile computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuantileConfig {
    /// Fractions in `[0, 1]`, in result order
    pub fractions: Vec<f64>,
    /// Mode for every tier; `None` picks each tier's default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpolation: Option<Interpolation>,
}

impl Default for QuantileConfig {
    fn default() -> Self {
        Self {
            fractions: vec![0.5],
            interpolation: None,
        }
    }
}

impl QuantileConfig {
    pub fn new(fractions: impl Into<Vec<f64>>, interpolation: Interpolation) -> Self {
        Self {
            fractions: fractions.into(),
            interpolation: Some(interpolation),
        }
    }

    /// Lower quartile, median and upper quartile
    pub fn quartiles() -> Self {
        Self {
            fractions: vec![0.25, 0.5, 0.75],
            interpolation: None,
        }
    }

    /// Fractions given on the percent scale, e.g. `[5.0, 95.0]`
    pub fn percentiles(percents: &[f64]) -> Result<Self> {
        let config = Self {
            fractions: percents.iter().map(|p| p / 100.0).collect(),
            interpolation: None,
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields take their defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = Some(interpolation);
        self
    }

    /// Mode applied to elements of `tier`
    pub fn interpolation_for(&self, tier: ElementTier) -> Interpolation {
        self.interpolation
            .unwrap_or_else(|| Interpolation::default_for(tier))
    }

    /// Check every fraction lies in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        self.fractions
            .iter()
            .try_for_each(|&fraction| Error::check_fraction(fraction))
    }

    /// Validated request for elements of `tier`
    pub fn request(&self, tier: ElementTier) -> Result<QuantileRequest> {
        QuantileRequest::new(self.fractions.clone(), self.interpolation_for(tier), tier)
    }

    /// Typed engine for kernel `K`
    pub fn quantiles<K: QuantileKernel>(&self) -> Result<Quantiles<K>> {
        Quantiles::new(self.fractions.clone(), self.interpolation_for(K::TIER))
    }

    /// Quantiles of a dynamically typed column
    ///
    /// The mode is resolved from the column's tier before dispatch.
    pub fn compute(&self, sample: Sample) -> Result<Vec<Option<QuantileValue>>> {
        let tier = classify(&sample.type_tag())?;
        compute_sample(&self.fractions, self.interpolation_for(tier), sample)
    }
}
