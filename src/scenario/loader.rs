use super::Scenario;
use crate::error::{CfResult, CoverForgeError};
use crate::geometry::{AntennaSpec, Building, Grid, Position};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One non-empty input line, already split into integers.
struct Line {
    number: usize,
    values: Vec<i64>,
}

impl Line {
    fn expect_len(&self, n: usize, what: &str) -> CfResult<()> {
        if self.values.len() != n {
            return Err(CoverForgeError::parse(
                self.number,
                format!("{} expects {} values, found {}", what, n, self.values.len()),
            ));
        }
        Ok(())
    }

    fn non_negative(&self, idx: usize, name: &str) -> CfResult<i64> {
        let v = self.values[idx];
        if v < 0 {
            return Err(CoverForgeError::parse(
                self.number,
                format!("{} must be non-negative, got {}", name, v),
            ));
        }
        Ok(v)
    }
}

fn read_lines<R: Read>(reader: R) -> CfResult<Vec<Line>> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut lines = Vec::new();
    for result in rdr.records() {
        let rec = result?;
        let number = rec.position().map(|p| p.line() as usize).unwrap_or(0);

        // Repeated spaces yield empty fields
        let mut values = Vec::with_capacity(rec.len());
        for field in rec.iter().filter(|f| !f.is_empty()) {
            let v: i64 = field.parse().map_err(|_| {
                CoverForgeError::parse(number, format!("'{}' is not an integer", field))
            })?;
            values.push(v);
        }

        if !values.is_empty() {
            lines.push(Line { number, values });
        }
    }
    Ok(lines)
}

/// Parses the line-oriented scenario format:
///
/// ```text
/// W H
/// N M R
/// x y latency speed   (N times)
/// range speed         (M times)
/// ```
pub fn parse_scenario<R: Read>(reader: R) -> CfResult<Scenario> {
    let lines = read_lines(reader)?;
    let mut it = lines.iter();
    let last_line = lines.last().map(|l| l.number).unwrap_or(0);
    let mut next = |what: &str| {
        it.next()
            .ok_or_else(|| CoverForgeError::parse(last_line + 1, format!("missing {}", what)))
    };

    let header = next("grid size")?;
    header.expect_len(2, "grid size")?;
    let (width, height) = (header.values[0], header.values[1]);
    if width <= 0 || height <= 0 {
        return Err(CoverForgeError::parse(
            header.number,
            format!("grid must be non-empty, got {}x{}", width, height),
        ));
    }
    let grid = Grid::new(width, height);

    let counts = next("counts line")?;
    counts.expect_len(3, "counts line")?;
    let building_count = counts.non_negative(0, "building count")? as usize;
    let antenna_count = counts.non_negative(1, "antenna count")? as usize;
    let reward = counts.non_negative(2, "reward")?;

    // Declared counts are untrusted until the records are actually read
    let mut buildings = Vec::with_capacity(building_count.min(lines.len()));
    for i in 0..building_count {
        let line = next(&format!("building #{}", i))?;
        line.expect_len(4, "building")?;
        let position = Position::new(line.values[0], line.values[1]);
        if !grid.contains(position) {
            return Err(CoverForgeError::parse(
                line.number,
                format!("building ({}, {}) lies outside the grid", position.x, position.y),
            ));
        }
        let latency_score = line.non_negative(2, "latency score")?;
        let speed_score = line.non_negative(3, "speed score")?;
        buildings.push(Building::new(position, speed_score, latency_score));
    }

    let mut antennas = Vec::with_capacity(antenna_count.min(lines.len()));
    for i in 0..antenna_count {
        let line = next(&format!("antenna #{}", i))?;
        line.expect_len(2, "antenna")?;
        let range = line.non_negative(0, "antenna range")?;
        let speed = line.non_negative(1, "antenna speed")?;
        antennas.push(AntennaSpec::new(range, speed));
    }

    if let Some(extra) = it.next() {
        return Err(CoverForgeError::parse(extra.number, "unexpected trailing data"));
    }

    debug!(
        "Parsed scenario: {}x{} grid, {} buildings, {} antennas, reward {}",
        width, height, building_count, antenna_count, reward
    );

    Ok(Scenario {
        grid,
        buildings,
        antennas,
        reward,
    })
}

pub fn load_scenario_file<P: AsRef<Path>>(path: P) -> CfResult<Scenario> {
    debug!("Loading scenario from: {}", path.as_ref().display());
    let file = File::open(path)?;
    parse_scenario(file)
}
