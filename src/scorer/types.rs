use crate::core_types::FitnessScore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDetails {
    // Top-line
    pub total: FitnessScore,

    // Components (total = connection_score + reward_bonus)
    pub connection_score: FitnessScore,
    pub reward_bonus: FitnessScore,

    // Coverage
    pub connected_buildings: usize,
    pub unconnected_buildings: usize,
}

impl ScoreDetails {
    pub fn fully_connected(&self) -> bool {
        self.unconnected_buildings == 0
    }
}
