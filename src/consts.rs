/// Fixed number of generations the controller runs.
pub const DEFAULT_MAX_GENERATIONS: usize = 200;

/// Probability that a breeding operation mutates its two children.
pub const DEFAULT_MUTATION_RATE: f64 = 0.1;

/// Population size above which the sorted population is cut to its top half.
pub const DEFAULT_POPULATION_CAP: usize = 100;

/// Maximum number of feasible positions copied into the chunked seed pool.
/// Zero disables the limit.
pub const DEFAULT_SEED_POOL_LIMIT: usize = 100;

/// Divisor of the adaptive mutation policy (rate = feasible / divisor).
pub const ADAPTIVE_MUTATION_DIVISOR: f64 = 100.0;

/// Smallest legal population (one breeding pair).
pub const MIN_POPULATION: usize = 2;
