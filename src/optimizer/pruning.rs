use crate::geometry::{manhattan_ball, Building, Grid, Position};
use crate::scorer::Scorer;
use std::collections::BTreeSet;
use tracing::debug;

/// Every grid cell within the global maximum antenna range of at least one
/// building, in x-major order. The only legal gene values of a run.
///
/// Built once and never mutated; seeding copies out of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeasibleSet {
    positions: Vec<Position>,
}

impl FeasibleSet {
    pub fn build(buildings: &[Building], max_range: i64, grid: &Grid) -> Self {
        let mut cells = BTreeSet::new();
        for b in buildings {
            cells.extend(manhattan_ball(b.position, max_range, grid));
        }

        debug!(
            "Pruned {}x{} grid to {} feasible positions (max range {})",
            grid.width,
            grid.height,
            cells.len(),
            max_range
        );

        Self {
            positions: cells.into_iter().collect(),
        }
    }

    /// Uses the largest range across the scorer's antenna slots.
    /// With no antennas the set is empty.
    pub fn for_scorer(scorer: &Scorer, grid: &Grid) -> Self {
        match scorer.max_range() {
            Some(r) => Self::build(&scorer.buildings, r, grid),
            None => Self {
                positions: Vec::new(),
            },
        }
    }

    pub fn as_slice(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn contains(&self, p: &Position) -> bool {
        self.positions.binary_search(p).is_ok()
    }

    pub fn get(&self, idx: usize) -> Position {
        self.positions[idx]
    }
}
