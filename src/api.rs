use crate::config::{Config, SearchParams};
use crate::core_types::OptimizationResult;
use crate::error::{CfResult, CoverForgeError};
use crate::geometry::Position;
use crate::optimizer::{FeasibleSet, OptimizationOptions, Optimizer, ProgressCallback};
use crate::scenario::{self, Scenario};
use crate::scorer::{ScoreDetails, Scorer};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AuditResult {
    pub score: ScoreDetails,
    /// Slots placed outside the grid.
    pub off_grid: Vec<usize>,
}

impl AuditResult {
    pub fn is_legal(&self) -> bool {
        self.off_grid.is_empty()
    }
}

/// Service: Load a scenario file.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> CfResult<Scenario> {
    let scenario = scenario::load_scenario_file(&path)?;
    info!(
        "📂 Loaded {}: {} buildings, {} antennas",
        path.as_ref().display(),
        scenario.buildings.len(),
        scenario.antennas.len()
    );
    Ok(scenario)
}

/// Service: Run the genetic search on a scenario.
pub fn solve<CB: ProgressCallback>(
    scenario: &Scenario,
    params: &SearchParams,
    callback: CB,
) -> CfResult<OptimizationResult> {
    params.validate()?;

    let scorer = Arc::new(Scorer::from_scenario(scenario));
    let feasible = FeasibleSet::for_scorer(&scorer, &scenario.grid);
    info!("✂️  {} feasible positions", feasible.len());

    let config = Config {
        search: params.clone(),
    };
    let optimizer = Optimizer::new(scorer, feasible, OptimizationOptions::from(&config))?;
    Ok(optimizer.run(callback))
}

/// Service: Score an existing placement.
pub fn audit_solution(scenario: &Scenario, chromosome: &[Position]) -> CfResult<AuditResult> {
    if chromosome.len() != scenario.antennas.len() {
        return Err(CoverForgeError::Precondition(format!(
            "placement has {} antennas, scenario has {}",
            chromosome.len(),
            scenario.antennas.len()
        )));
    }

    let scorer = Scorer::from_scenario(scenario);
    let off_grid = chromosome
        .iter()
        .enumerate()
        .filter(|(_, p)| !scenario.grid.contains(**p))
        .map(|(i, _)| i)
        .collect();

    Ok(AuditResult {
        score: scorer.score_debug(chromosome),
        off_grid,
    })
}
