use super::pruning::FeasibleSet;
use crate::config::SeedingStrategy;
use crate::consts::MIN_POPULATION;
use crate::core_types::{Chromosome, Population};
use crate::geometry::Position;
use fastrand::Rng;

/// Builds generation 0. Every chromosome has `len` feasible genes and the
/// population size is even. Returns an empty population only when the
/// feasible set is empty or `len` is zero.
pub fn seed_population(
    strategy: SeedingStrategy,
    feasible: &FeasibleSet,
    len: usize,
    pool_limit: usize,
    rng: &mut Rng,
) -> Population {
    if feasible.is_empty() || len == 0 {
        return Vec::new();
    }

    match strategy {
        SeedingStrategy::Chunked => {
            let pool = seed_pool(feasible, pool_limit, rng);
            chunked(&pool, len)
        }
        SeedingStrategy::Random => {
            let pool_len = match pool_limit {
                0 => feasible.len(),
                n => n.min(feasible.len()),
            };
            let count = pool_len.div_ceil(len).max(MIN_POPULATION);
            random(feasible, len, count, rng)
        }
    }
}

/// Copy of the feasible positions, down-sampled to `limit` when it is
/// non-zero and smaller than the set.
fn seed_pool(feasible: &FeasibleSet, limit: usize, rng: &mut Rng) -> Vec<Position> {
    let mut pool = feasible.as_slice().to_vec();
    if limit > 0 && pool.len() > limit {
        rng.shuffle(&mut pool);
        pool.truncate(limit);
    }
    pool
}

/// Consecutive chunks of `len`; a short tail wraps around to the start of
/// the pool.
pub fn chunked(pool: &[Position], len: usize) -> Population {
    let mut population: Population = pool
        .chunks(len)
        .map(|chunk| {
            let mut chromosome = chunk.to_vec();
            let missing = len - chromosome.len();
            chromosome.extend(pool.iter().cycle().take(missing));
            chromosome
        })
        .collect();

    make_even(&mut population);
    population
}

/// `count` chromosomes sampled uniformly with replacement, rounded up to even.
pub fn random(feasible: &FeasibleSet, len: usize, count: usize, rng: &mut Rng) -> Population {
    let count = count + count % 2;
    (0..count)
        .map(|_| -> Chromosome {
            (0..len)
                .map(|_| feasible.get(rng.usize(0..feasible.len())))
                .collect()
        })
        .collect()
}

/// Duplicates the first chromosome when the size is odd.
pub fn make_even(population: &mut Population) {
    if population.len() % 2 != 0 {
        let first = population[0].clone();
        population.push(first);
    }
}
