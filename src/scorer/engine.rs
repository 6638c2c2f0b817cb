use super::ScoreDetails;
use crate::core_types::FitnessScore;
use crate::geometry::{distance, AntennaSpec, Building, Position};

/// Best connection score for one building, or `None` when no antenna reaches it.
///
/// Starts the running maximum at zero, so a connected building never
/// contributes a negative amount.
#[inline(always)]
fn best_connection(building: &Building, chromosome: &[Position], specs: &[AntennaSpec]) -> Option<FitnessScore> {
    let mut connected = false;
    let mut best = 0;

    for (pos, spec) in chromosome.iter().zip(specs) {
        let d = distance(building.position, *pos);
        if d > spec.range {
            continue;
        }
        connected = true;

        // Saturates instead of wrapping on extreme inputs
        let score = building
            .speed_score
            .saturating_mul(spec.speed)
            .saturating_sub(building.latency_score.saturating_mul(d));
        if score > best {
            best = score;
        }
    }

    connected.then_some(best)
}

/// Fitness of a placement. Pure and deterministic.
pub fn evaluate(
    buildings: &[Building],
    chromosome: &[Position],
    specs: &[AntennaSpec],
    reward: FitnessScore,
) -> FitnessScore {
    let mut score: FitnessScore = 0;
    let mut all_connected = true;

    for building in buildings {
        match best_connection(building, chromosome, specs) {
            Some(s) => score = score.saturating_add(s),
            None => all_connected = false,
        }
    }

    if all_connected {
        score = score.saturating_add(reward);
    }
    score
}

pub fn score_debug(
    buildings: &[Building],
    chromosome: &[Position],
    specs: &[AntennaSpec],
    reward: FitnessScore,
) -> ScoreDetails {
    let mut d = ScoreDetails::default();

    for building in buildings {
        match best_connection(building, chromosome, specs) {
            Some(s) => {
                d.connection_score = d.connection_score.saturating_add(s);
                d.connected_buildings += 1;
            }
            None => d.unconnected_buildings += 1,
        }
    }

    if d.unconnected_buildings == 0 {
        d.reward_bonus = reward;
    }
    d.total = d.connection_score.saturating_add(d.reward_bonus);
    d
}
