pub mod engine;
pub mod types;

pub use self::types::ScoreDetails;
use crate::core_types::FitnessScore;
use crate::geometry::{AntennaSpec, Building, Position};
use crate::scenario::Scenario;

/// Read-only scoring context shared by every chromosome of a run.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub buildings: Vec<Building>,
    pub specs: Vec<AntennaSpec>,
    pub reward: FitnessScore,
}

impl Scorer {
    pub fn new(buildings: Vec<Building>, specs: Vec<AntennaSpec>, reward: FitnessScore) -> Self {
        Self {
            buildings,
            specs,
            reward,
        }
    }

    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(
            scenario.buildings.clone(),
            scenario.antennas.clone(),
            scenario.reward,
        )
    }

    pub fn antenna_count(&self) -> usize {
        self.specs.len()
    }

    /// Largest range across all antenna slots.
    pub fn max_range(&self) -> Option<i64> {
        self.specs.iter().map(|s| s.range).max()
    }

    /// Fitness used by the search loop.
    #[inline(always)]
    pub fn evaluate(&self, chromosome: &[Position]) -> FitnessScore {
        engine::evaluate(&self.buildings, chromosome, &self.specs, self.reward)
    }

    /// Same score with its breakdown, for reports.
    pub fn score_debug(&self, chromosome: &[Position]) -> ScoreDetails {
        engine::score_debug(&self.buildings, chromosome, &self.specs, self.reward)
    }
}
