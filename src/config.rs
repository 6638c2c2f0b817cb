use crate::consts::{
    DEFAULT_MAX_GENERATIONS, DEFAULT_MUTATION_RATE, DEFAULT_POPULATION_CAP,
    DEFAULT_SEED_POOL_LIMIT, MIN_POPULATION,
};
use crate::error::{CfResult, CoverForgeError};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
}

/// How the per-breeding mutation probability is derived.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MutationPolicy {
    /// Use `mutation_rate` as given.
    Fixed,
    /// Feasible-set size divided by 100, clamped to 1.
    Adaptive,
}

/// How generation 0 is built from the feasible positions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SeedingStrategy {
    /// Consecutive chunks of the ordered seed pool, wrapped at the end.
    Chunked,
    /// Uniform sampling with replacement.
    Random,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    #[arg(short = 'g', long, default_value_t = DEFAULT_MAX_GENERATIONS)]
    pub max_generations: usize,

    #[arg(long, default_value_t = MutationPolicy::Fixed)]
    pub mutation_policy: MutationPolicy,

    #[arg(short = 'm', long, default_value_t = DEFAULT_MUTATION_RATE)]
    pub mutation_rate: f64,

    // Survivor selection kicks in above this size
    #[arg(long, default_value_t = DEFAULT_POPULATION_CAP)]
    pub population_cap: usize,

    #[arg(long, default_value_t = SeedingStrategy::Chunked)]
    pub seeding: SeedingStrategy,

    #[arg(long, default_value_t = DEFAULT_SEED_POOL_LIMIT)]
    pub seed_pool_limit: usize,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_generations: DEFAULT_MAX_GENERATIONS,
            mutation_policy: MutationPolicy::Fixed,
            mutation_rate: DEFAULT_MUTATION_RATE,
            population_cap: DEFAULT_POPULATION_CAP,
            seeding: SeedingStrategy::Chunked,
            seed_pool_limit: DEFAULT_SEED_POOL_LIMIT,
            seed: None,
        }
    }
}

impl SearchParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let params: SearchParams = serde_json::from_str(&content)?;
        Ok(params)
    }

    /// Overwrites fields the user typed explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(max_generations);
        update_if_present!(mutation_policy);
        update_if_present!(mutation_rate);
        update_if_present!(population_cap);
        update_if_present!(seeding);
        update_if_present!(seed_pool_limit);
        update_if_present!(seed);
    }

    pub fn validate(&self) -> CfResult<()> {
        if self.population_cap < MIN_POPULATION {
            return Err(CoverForgeError::Config(format!(
                "population_cap must be at least {}, got {}",
                MIN_POPULATION, self.population_cap
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(CoverForgeError::Config(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_policy_names_round_trip() {
        assert_eq!(MutationPolicy::from_str("adaptive").unwrap(), MutationPolicy::Adaptive);
        assert_eq!(SeedingStrategy::Random.to_string(), "random");
        assert!(SeedingStrategy::from_str("shuffled").is_err());
    }

    #[test]
    fn test_validate_rejects_small_cap() {
        let params = SearchParams {
            population_cap: 1,
            ..Default::default()
        };
        assert!(matches!(params.validate(), Err(CoverForgeError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_nan_rate() {
        let params = SearchParams {
            mutation_rate: f64::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
