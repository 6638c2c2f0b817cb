use crate::core_types::Chromosome;
use crate::geometry::Position;
use fastrand::Rng;

/// Single-point crossover at `point`.
///
/// `child1` takes `p1[..point]` then `p2[point..]`; `child2` is the
/// complementary swap.
pub fn crossover_single_point(p1: &[Position], p2: &[Position], point: usize) -> (Chromosome, Chromosome) {
    let mut child1 = Vec::with_capacity(p1.len());
    child1.extend_from_slice(&p1[..point]);
    child1.extend_from_slice(&p2[point..]);

    let mut child2 = Vec::with_capacity(p2.len());
    child2.extend_from_slice(&p2[..point]);
    child2.extend_from_slice(&p1[point..]);

    (child1, child2)
}

/// Uniform cut in `[0, len - 1)`, or 0 for single-gene chromosomes.
#[inline(always)]
pub fn random_cut_point(len: usize, rng: &mut Rng) -> usize {
    if len < 2 {
        0
    } else {
        rng.usize(0..len - 1)
    }
}

/// Returns both parents followed by their two children.
pub fn crossover(p1: Chromosome, p2: Chromosome, rng: &mut Rng) -> [Chromosome; 4] {
    let point = random_cut_point(p1.len(), rng);
    let (child1, child2) = crossover_single_point(&p1, &p2, point);
    [p1, p2, child1, child2]
}
