use crate::core_types::Chromosome;
use crate::error::{CfResult, CoverForgeError};
use crate::geometry::Position;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

/// Writes `antennaCount` followed by one `id x y` line per slot.
pub fn write_solution<W: Write>(writer: W, chromosome: &[Position]) -> CfResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_writer(writer);

    wtr.write_record([chromosome.len().to_string()])?;
    for (id, pos) in chromosome.iter().enumerate() {
        wtr.write_record([id.to_string(), pos.x.to_string(), pos.y.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn save_solution_file<P: AsRef<Path>>(path: P, chromosome: &[Position]) -> CfResult<()> {
    debug!("Writing solution to: {}", path.as_ref().display());
    let file = File::create(path)?;
    write_solution(file, chromosome)
}

/// Reads a solution back into a chromosome for `antenna_count` slots.
/// Every slot must be placed exactly once.
pub fn parse_solution<R: Read>(reader: R, antenna_count: usize) -> CfResult<Chromosome> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut slots: Vec<Option<Position>> = vec![None; antenna_count];
    let mut declared: Option<usize> = None;
    let mut placed = 0;

    for result in rdr.records() {
        let rec = result?;
        let line = rec.position().map(|p| p.line() as usize).unwrap_or(0);
        let fields: Vec<&str> = rec.iter().filter(|f| !f.is_empty()).collect();
        if fields.is_empty() {
            continue;
        }

        let parse = |s: &str| -> CfResult<i64> {
            s.parse()
                .map_err(|_| CoverForgeError::parse(line, format!("'{}' is not an integer", s)))
        };

        let Some(count) = declared else {
            if fields.len() != 1 {
                return Err(CoverForgeError::parse(line, "expected antenna count"));
            }
            let count = parse(fields[0])?;
            if count != antenna_count as i64 {
                return Err(CoverForgeError::parse(
                    line,
                    format!("solution places {} antennas, scenario has {}", count, antenna_count),
                ));
            }
            declared = Some(count as usize);
            continue;
        };

        if fields.len() != 3 {
            return Err(CoverForgeError::parse(line, "expected 'id x y'"));
        }
        if placed == count {
            return Err(CoverForgeError::parse(line, "more placements than declared"));
        }

        let id = parse(fields[0])?;
        let slot = usize::try_from(id)
            .ok()
            .filter(|&i| i < antenna_count)
            .ok_or_else(|| CoverForgeError::parse(line, format!("unknown antenna id {}", id)))?;
        if slots[slot].is_some() {
            return Err(CoverForgeError::parse(line, format!("antenna {} placed twice", id)));
        }

        slots[slot] = Some(Position::new(parse(fields[1])?, parse(fields[2])?));
        placed += 1;
    }

    if declared.is_none() {
        return Err(CoverForgeError::parse(1, "empty solution"));
    }

    slots
        .into_iter()
        .enumerate()
        .map(|(id, p)| {
            p.ok_or_else(|| CoverForgeError::parse(0, format!("antenna {} was not placed", id)))
        })
        .collect()
}

pub fn load_solution_file<P: AsRef<Path>>(path: P, antenna_count: usize) -> CfResult<Chromosome> {
    let file = File::open(path)?;
    parse_solution(file, antenna_count)
}
