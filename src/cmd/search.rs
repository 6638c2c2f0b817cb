use crate::reports;
use clap::{ArgMatches, Args};
use coverforge::api;
use coverforge::config::{Config, SearchParams};
use coverforge::core_types::FitnessScore;
use coverforge::error::CfResult;
use coverforge::geometry::Position;
use coverforge::optimizer::ProgressCallback;
use coverforge::scenario;
use coverforge::scorer::Scorer;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// Scenario file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Solution file (defaults to the input path with an `.out` extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write the per-generation best scores as JSON
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// JSON file with search parameters; explicit flags win
    #[arg(long = "config")]
    pub config_file: Option<PathBuf>,

    #[arg(long, default_value_t = 10)]
    pub report_interval: usize,
}

struct LogProgress {
    interval: usize,
    total: usize,
}

impl ProgressCallback for LogProgress {
    fn on_generation(&self, generation: usize, best_score: FitnessScore, _best: &[Position]) -> bool {
        if generation % self.interval.max(1) == 0 || generation + 1 == self.total {
            info!("Gen {:5}/{} | Best: {}", generation, self.total, best_score);
        }
        true
    }
}

fn resolve_params(args: &SearchArgs, matches: Option<&ArgMatches>) -> CfResult<SearchParams> {
    let Some(path) = &args.config_file else {
        return Ok(args.config.search.clone());
    };

    info!("⚖️  Loading search parameters from: {}", path.display());
    let mut params = SearchParams::load_from_file(path)?;
    if let Some(m) = matches {
        params.merge_from_cli(&args.config.search, m);
    }
    Ok(params)
}

pub fn run(args: &SearchArgs, matches: Option<&ArgMatches>) -> CfResult<()> {
    let scenario = api::load_scenario(&args.input)?;
    let params = resolve_params(args, matches)?;

    info!(
        "🧬 Evolving for {} generations (cap {}, {} seeding, {} mutation)",
        params.max_generations, params.population_cap, params.seeding, params.mutation_policy
    );

    let callback = LogProgress {
        interval: args.report_interval,
        total: params.max_generations,
    };
    let result = api::solve(&scenario, &params, callback)?;

    let scorer = Scorer::from_scenario(&scenario);
    reports::print_placement_table(&scenario.antennas, &result.best);
    reports::print_score_report(&[("OPTIMIZED".to_string(), scorer.score_debug(&result.best))]);
    reports::print_convergence_report(&result.history, 12);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("out"));
    scenario::save_solution_file(&output, &result.best)?;
    info!("💾 Solution written to {}", output.display());

    if let Some(path) = &args.history {
        fs::write(path, serde_json::to_string_pretty(&result.history)?)?;
        info!("📈 History written to {}", path.display());
    }

    println!("\n=== 🏆 FINAL RESULT ===");
    println!("Score: {}", result.score);
    Ok(())
}
