use super::crossover::crossover;
use super::initialization::{make_even, seed_population};
use super::mutation::mutate;
use super::pruning::FeasibleSet;
use crate::config::{Config, MutationPolicy, SeedingStrategy};
use crate::consts::MIN_POPULATION;
use crate::core_types::{Chromosome, FitnessScore, GenerationRecord, OptimizationResult, Population};
use crate::error::{CfResult, CoverForgeError};
use crate::geometry::Position;
use crate::scorer::Scorer;
use fastrand::Rng;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info};

pub struct OptimizationOptions {
    pub max_generations: usize,
    pub population_cap: usize,
    pub mutation_policy: MutationPolicy,
    pub mutation_rate: f64,
    pub seeding: SeedingStrategy,
    pub seed_pool_limit: usize,
    pub seed: Option<u64>,
}

impl From<&Config> for OptimizationOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            max_generations: cfg.search.max_generations,
            population_cap: cfg.search.population_cap,
            mutation_policy: cfg.search.mutation_policy,
            mutation_rate: cfg.search.mutation_rate,
            seeding: cfg.search.seeding,
            seed_pool_limit: cfg.search.seed_pool_limit,
            seed: cfg.search.seed,
        }
    }
}

impl Default for OptimizationOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// Receives the best survivor at each generation boundary.
/// Returning `false` stops the run before the next breeding step.
pub trait ProgressCallback: Send + Sync {
    fn on_generation(&self, generation: usize, best_score: FitnessScore, best: &[Position]) -> bool;
}

/// Callback that never interrupts.
pub struct Silent;

impl ProgressCallback for Silent {
    fn on_generation(&self, _: usize, _: FitnessScore, _: &[Position]) -> bool {
        true
    }
}

pub type Ranked = Vec<(FitnessScore, Chromosome)>;

/// Descending by fitness.
pub fn by_fitness_desc(a: &(FitnessScore, Chromosome), b: &(FitnessScore, Chromosome)) -> Ordering {
    b.0.cmp(&a.0)
}

/// Cuts a ranked population to its top half when it exceeds `cap`, then
/// restores even size by duplicating the leader.
pub fn truncate_survivors(ranked: &mut Ranked, cap: usize) {
    if ranked.len() > cap {
        ranked.truncate(ranked.len() / 2);
        if ranked.len() % 2 != 0 {
            let leader = ranked[0].clone();
            ranked.push(leader);
        }
    }
}

/// Crossover plus the mutation event: with probability `rate` both
/// children are mutated, the parents never are.
pub fn breed(
    p1: Chromosome,
    p2: Chromosome,
    feasible: &FeasibleSet,
    rate: f64,
    rng: &mut Rng,
) -> [Chromosome; 4] {
    let mut quartet = crossover(p1, p2, rng);
    if rng.f64() < rate {
        let [_, _, child1, child2] = &mut quartet;
        mutate(child1, feasible, rng);
        mutate(child2, feasible, rng);
    }
    quartet
}

pub struct Optimizer {
    scorer: Arc<Scorer>,
    feasible: FeasibleSet,
    options: OptimizationOptions,
}

impl Optimizer {
    /// Refuses to build when no valid chromosome could exist.
    pub fn new(scorer: Arc<Scorer>, feasible: FeasibleSet, options: OptimizationOptions) -> CfResult<Self> {
        if scorer.antenna_count() == 0 {
            return Err(CoverForgeError::Precondition(
                "scenario has no antennas to place".to_string(),
            ));
        }
        if feasible.is_empty() {
            return Err(CoverForgeError::Precondition(
                "no grid position is within range of any building".to_string(),
            ));
        }
        if options.population_cap < MIN_POPULATION {
            return Err(CoverForgeError::Config(format!(
                "population_cap must be at least {}",
                MIN_POPULATION
            )));
        }

        Ok(Self {
            scorer,
            feasible,
            options,
        })
    }

    /// Scores every chromosome in parallel, then sorts on this thread.
    fn rank(&self, population: Population) -> Ranked {
        let mut ranked: Ranked = population
            .into_par_iter()
            .map(|c| (self.scorer.evaluate(&c), c))
            .collect();
        ranked.sort_by(by_fitness_desc);
        ranked
    }

    pub fn run<CB: ProgressCallback>(&self, callback: CB) -> OptimizationResult {
        let opts = &self.options;
        let mut rng = match opts.seed {
            Some(s) => Rng::with_seed(s),
            None => Rng::new(),
        };

        let rate = opts
            .mutation_policy
            .effective_rate(opts.mutation_rate, self.feasible.len());

        let mut population = seed_population(
            opts.seeding,
            &self.feasible,
            self.scorer.antenna_count(),
            opts.seed_pool_limit,
            &mut rng,
        );
        make_even(&mut population);

        info!(
            "Seeded {} chromosomes ({}) from {} feasible positions, mutation rate {:.3}",
            population.len(),
            opts.seeding,
            self.feasible.len(),
            rate
        );

        let mut history = GenerationRecord::with_capacity(opts.max_generations);

        for generation in 0..opts.max_generations {
            let mut ranked = self.rank(population);
            let before = ranked.len();
            truncate_survivors(&mut ranked, opts.population_cap);
            debug_assert!(ranked.len() % 2 == 0);

            let (best_score, best) = &ranked[0];
            history.push(generation, *best_score);
            debug!(
                "Gen {:4} | Pop {} -> {} | Best {}",
                generation,
                before,
                ranked.len(),
                best_score
            );

            if !callback.on_generation(generation, *best_score, best) {
                info!("Stopped by callback at generation {}", generation);
                population = ranked.into_iter().map(|(_, c)| c).collect();
                break;
            }

            let mut next = Vec::with_capacity(ranked.len() * 2);
            let mut survivors = ranked.into_iter().map(|(_, c)| c);
            while let (Some(p1), Some(p2)) = (survivors.next(), survivors.next()) {
                next.extend(breed(p1, p2, &self.feasible, rate, &mut rng));
            }
            population = next;
        }

        let (score, best) = self
            .rank(population)
            .into_iter()
            .next()
            .unwrap_or_default();

        info!("Finished with best score {}", score);

        OptimizationResult {
            best,
            score,
            history,
        }
    }
}
