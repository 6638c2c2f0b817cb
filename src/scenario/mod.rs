pub mod loader;
pub mod writer;

pub use self::loader::{load_scenario_file, parse_scenario};
pub use self::writer::{load_solution_file, parse_solution, save_solution_file, write_solution};

use crate::core_types::FitnessScore;
use crate::geometry::{AntennaSpec, Building, Grid};
use serde::{Deserialize, Serialize};

/// Typed problem input: grid, buildings to serve, antenna slots, and the
/// bonus for serving every building.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub grid: Grid,
    pub buildings: Vec<Building>,
    pub antennas: Vec<AntennaSpec>,
    pub reward: FitnessScore,
}
