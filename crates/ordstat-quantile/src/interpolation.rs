//! Combining bracketing order statistics into one quantile

use crate::kernels::QuantileKernel;
use crate::provider::ComputationContext;
use crate::rank::RankPosition;
use crate::{Interpolation, Result};

/// Quantile at `rank` under `interpolation`
///
/// LINEAR and MIDPOINT return the element itself when the rank falls exactly
/// on one. Otherwise the provider is consulted twice, and the lower element
/// is cloned first because the second selection may move it.
pub(crate) fn interpolate<K: QuantileKernel>(
    ctx: &mut ComputationContext<'_, K>,
    rank: &RankPosition,
    interpolation: Interpolation,
) -> Result<K::Output> {
    match interpolation {
        Interpolation::Lower => K::value(ctx.element_at(rank.lower)),
        Interpolation::Higher => K::value(ctx.element_at(rank.higher)),
        Interpolation::Nearest => K::value(ctx.element_at(rank.nearest())),
        Interpolation::Linear | Interpolation::Midpoint => {
            if rank.is_exact() {
                return K::value(ctx.element_at(rank.lower));
            }
            let lower = ctx.element_at(rank.lower).clone();
            let higher = ctx.element_at(rank.higher);
            if interpolation == Interpolation::Linear {
                K::linear(&lower, higher, rank.fraction)
            } else {
                K::midpoint(&lower, higher)
            }
        }
    }
}
