use super::pruning::FeasibleSet;
use crate::config::MutationPolicy;
use crate::consts::ADAPTIVE_MUTATION_DIVISOR;
use crate::geometry::Position;
use fastrand::Rng;
use tracing::warn;

/// Overwrites one random gene with a random feasible position.
#[inline(always)]
pub fn mutate(chromosome: &mut [Position], feasible: &FeasibleSet, rng: &mut Rng) {
    let gene = rng.usize(0..chromosome.len());
    chromosome[gene] = feasible.get(rng.usize(0..feasible.len()));
}

impl MutationPolicy {
    /// Per-breeding mutation probability, clamped to `[0, 1]`.
    pub fn effective_rate(&self, rate: f64, feasible_len: usize) -> f64 {
        let raw = match self {
            MutationPolicy::Fixed => rate,
            MutationPolicy::Adaptive => feasible_len as f64 / ADAPTIVE_MUTATION_DIVISOR,
        };

        if !(0.0..=1.0).contains(&raw) {
            warn!(
                "⚠️  {} mutation rate {:.3} outside [0, 1], clamping.",
                self, raw
            );
        }
        if raw.is_nan() {
            return 0.0;
        }
        raw.clamp(0.0, 1.0)
    }
}
