#![allow(dead_code)]

use coverforge::geometry::{AntennaSpec, Building, Grid, Position};
use coverforge::scenario::Scenario;

/// 5x5 grid, one building at (2,2) (speed 10, latency 1), one antenna
/// (range 2, speed 5), reward 100.
pub const SINGLE_TOWER: &str = "5 5\n1 1 100\n2 2 1 10\n2 5\n";

/// Builder for scenarios to clean up tests
pub struct ScenarioBuilder {
    scenario: Scenario,
}

impl ScenarioBuilder {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            scenario: Scenario {
                grid: Grid::new(width, height),
                buildings: Vec::new(),
                antennas: Vec::new(),
                reward: 0,
            },
        }
    }

    pub fn building(mut self, x: i64, y: i64, speed_score: i64, latency_score: i64) -> Self {
        self.scenario
            .buildings
            .push(Building::new(Position::new(x, y), speed_score, latency_score));
        self
    }

    pub fn antenna(mut self, range: i64, speed: i64) -> Self {
        self.scenario.antennas.push(AntennaSpec::new(range, speed));
        self
    }

    pub fn reward(mut self, reward: i64) -> Self {
        self.scenario.reward = reward;
        self
    }

    pub fn build(self) -> Scenario {
        self.scenario
    }
}

/// Renders a scenario in the input file format.
pub fn to_input(s: &Scenario) -> String {
    let mut out = format!(
        "{} {}\n{} {} {}\n",
        s.grid.width,
        s.grid.height,
        s.buildings.len(),
        s.antennas.len(),
        s.reward
    );
    for b in &s.buildings {
        out.push_str(&format!(
            "{} {} {} {}\n",
            b.position.x, b.position.y, b.latency_score, b.speed_score
        ));
    }
    for a in &s.antennas {
        out.push_str(&format!("{} {}\n", a.range, a.speed));
    }
    out
}

pub fn single_tower() -> Scenario {
    ScenarioBuilder::new(5, 5)
        .building(2, 2, 10, 1)
        .antenna(2, 5)
        .reward(100)
        .build()
}

/// A small city: several buildings spread over a 30x20 grid.
pub fn small_city() -> Scenario {
    ScenarioBuilder::new(30, 20)
        .building(2, 3, 20, 2)
        .building(6, 15, 5, 1)
        .building(14, 9, 40, 3)
        .building(22, 4, 10, 10)
        .building(27, 18, 15, 2)
        .building(18, 17, 8, 1)
        .antenna(4, 10)
        .antenna(6, 6)
        .antenna(2, 20)
        .antenna(8, 3)
        .reward(500)
        .build()
}
