//! Quantile computation over typed collections
//!
//! [`Quantiles`] binds a validated [`QuantileRequest`] to a kernel. It holds
//! no data, so one instance can be reused across calls and threads; every
//! call builds its own [`ComputationContext`].
//!
//! # Example
//!
//! ```rust
//! use ordstat_quantile::{FixedWidthQuantiles, Interpolation};
//!
//! let quartiles = FixedWidthQuantiles::<i32>::new([0.25, 0.5, 0.75], Interpolation::Linear)?;
//! let result = quartiles.compute(vec![7i32, 1, 5, 3, 9])?;
//! assert_eq!(result, vec![Some(3.0), Some(5.0), Some(7.0)]);
//! # Ok::<(), ordstat_quantile::Error>(())
//! ```

use crate::interpolation::interpolate;
use crate::kernels::{
    BigIntegerKernel, DecimalKernel, FixedWidthKernel, OrderedKernel, PolymorphicKernel,
    QuantileKernel,
};
use crate::provider::{ComputationContext, Storage};
use crate::rank::RankPosition;
use crate::{Interpolation, QuantileRequest, Result};
use ordstat_core::utils::is_sorted_by;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

/// Quantiles of collections whose elements are handled by kernel `K`
pub struct Quantiles<K: QuantileKernel> {
    request: QuantileRequest,
    _kernel: PhantomData<fn() -> K>,
}

impl<K: QuantileKernel> Quantiles<K> {
    /// Quantiles at `fractions` under `interpolation`
    ///
    /// Fails if a fraction lies outside `[0, 1]` or if the mode needs
    /// arithmetic the element type lacks.
    pub fn new(fractions: impl Into<Vec<f64>>, interpolation: Interpolation) -> Result<Self> {
        let request =
            QuantileRequest::for_type(fractions.into(), interpolation, K::TIER, K::type_name())?;
        Ok(Self::from_request(request))
    }

    /// Engine for a request already validated against `K`'s tier
    pub(crate) fn from_request(request: QuantileRequest) -> Self {
        debug_assert_eq!(request.tier(), K::TIER);
        Self {
            request,
            _kernel: PhantomData,
        }
    }

    /// A single quantile
    pub fn single(fraction: f64, interpolation: Interpolation) -> Result<Self> {
        Self::new(vec![fraction], interpolation)
    }

    /// The median
    pub fn median(interpolation: Interpolation) -> Result<Self> {
        Self::single(0.5, interpolation)
    }

    pub fn request(&self) -> &QuantileRequest {
        &self.request
    }

    /// Compute every requested quantile of `data`
    ///
    /// Accepts an owned `Vec` or a mutable caller slice (see [`Storage`]).
    /// Returns one entry per fraction, in request order, each `None` when the
    /// collection is empty.
    pub fn compute<'a, S>(&self, data: S) -> Result<Vec<Option<K::Output>>>
    where
        S: Into<Storage<'a, K::Item>>,
        K::Item: 'a,
    {
        let storage = data.into();
        if storage.is_empty() {
            return Ok(self.absent());
        }
        let strategy = self.request.strategy();
        debug!(
            "Computing {} quantiles of {} {} values by {}",
            self.request.fractions().len(),
            storage.len(),
            K::type_name(),
            strategy
        );
        self.evaluate(ComputationContext::prepare(storage, strategy))
    }

    /// Compute every requested quantile of data sorted ascending by the
    /// kernel's order
    ///
    /// The data is indexed directly, never copied or reordered.
    pub fn compute_sorted(&self, sorted: &[K::Item]) -> Result<Vec<Option<K::Output>>> {
        debug_assert!(
            is_sorted_by(sorted, K::compare),
            "compute_sorted requires ascending data"
        );
        if sorted.is_empty() {
            return Ok(self.absent());
        }
        debug!(
            "Computing {} quantiles of {} presorted {} values",
            self.request.fractions().len(),
            sorted.len(),
            K::type_name()
        );
        self.evaluate(ComputationContext::presorted(sorted))
    }

    /// Transform each item, then compute quantiles of the results
    pub fn compute_of<I, F>(&self, items: I, transform: F) -> Result<Vec<Option<K::Output>>>
    where
        I: IntoIterator,
        F: FnMut(I::Item) -> K::Item,
    {
        let values: Vec<K::Item> = items.into_iter().map(transform).collect();
        self.compute(values)
    }

    fn evaluate(&self, mut ctx: ComputationContext<'_, K>) -> Result<Vec<Option<K::Output>>> {
        let len = ctx.len();
        let interpolation = self.request.interpolation();
        self.request
            .fractions()
            .iter()
            .map(|&fraction| {
                let rank = RankPosition::new(len, fraction);
                trace!(
                    "q={} position={} lower={} higher={}",
                    fraction,
                    rank.position,
                    rank.lower,
                    rank.higher
                );
                interpolate(&mut ctx, &rank, interpolation).map(Some)
            })
            .collect()
    }

    fn absent(&self) -> Vec<Option<K::Output>> {
        self.request.fractions().iter().map(|_| None).collect()
    }
}

impl<K: QuantileKernel> Clone for Quantiles<K> {
    fn clone(&self) -> Self {
        Self {
            request: self.request.clone(),
            _kernel: PhantomData,
        }
    }
}

impl<K: QuantileKernel> fmt::Debug for Quantiles<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantiles")
            .field("element", &K::type_name())
            .field("request", &self.request)
            .finish()
    }
}

/// Quantiles of machine-width numbers, as `f64`
pub type FixedWidthQuantiles<T> = Quantiles<FixedWidthKernel<T>>;

/// Exact quantiles of arbitrary-precision integers
pub type BigIntegerQuantiles = Quantiles<BigIntegerKernel>;

/// Exact quantiles of decimals
pub type DecimalQuantiles = Quantiles<DecimalKernel>;

/// Quantiles of mixed-width numbers, as `f64`
pub type PolymorphicQuantiles = Quantiles<PolymorphicKernel>;

/// Order statistics of any totally ordered type
pub type OrderedQuantiles<T> = Quantiles<OrderedKernel<T>>;
