use crate::reports;
use clap::Args;
use coverforge::api;
use coverforge::error::CfResult;
use coverforge::scenario;
use std::path::PathBuf;
use tracing::warn;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Scenario file
    #[arg(short, long)]
    pub input: PathBuf,

    /// Solution file to score
    #[arg(short, long)]
    pub solution: PathBuf,
}

pub fn run(args: &ValidateArgs) -> CfResult<()> {
    let scenario = api::load_scenario(&args.input)?;
    let placement = scenario::load_solution_file(&args.solution, scenario.antennas.len())?;
    let audit = api::audit_solution(&scenario, &placement)?;

    println!("\n🔎 === SOLUTION AUDIT === 🔎");
    reports::print_placement_table(&scenario.antennas, &placement);

    let name = args
        .solution
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "solution".to_string());
    reports::print_score_report(&[(name, audit.score)]);

    if !audit.is_legal() {
        warn!("⚠️  Antennas placed outside the grid: {:?}", audit.off_grid);
    }

    println!("Score: {}", audit.score.total);
    Ok(())
}
