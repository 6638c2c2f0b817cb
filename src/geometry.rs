use serde::{Deserialize, Serialize};

/// A cell on the grid. Ordered x-major, then y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

impl From<(i64, i64)> for Position {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Building {
    pub position: Position,
    /// Sensitivity to antenna throughput.
    pub speed_score: i64,
    /// Sensitivity to distance from the serving antenna.
    pub latency_score: i64,
}

impl Building {
    pub fn new(position: Position, speed_score: i64, latency_score: i64) -> Self {
        Self {
            position,
            speed_score,
            latency_score,
        }
    }
}

/// One antenna slot. Chromosome index `i` is the position of `specs[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AntennaSpec {
    pub range: i64,
    pub speed: i64,
}

impl AntennaSpec {
    pub fn new(range: i64, speed: i64) -> Self {
        Self { range, speed }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i64,
    pub height: i64,
}

impl Grid {
    pub fn new(width: i64, height: i64) -> Self {
        Self { width, height }
    }

    #[inline(always)]
    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height
    }
}

/// Manhattan distance, saturating at `i64::MAX` for far-apart points.
#[inline(always)]
pub fn distance(a: Position, b: Position) -> i64 {
    let d = a.x.abs_diff(b.x).saturating_add(a.y.abs_diff(b.y));
    i64::try_from(d).unwrap_or(i64::MAX)
}

/// Cells of the Manhattan ball of `radius` around `center`, clipped to `grid`.
///
/// Walks the x offsets of the bounding box and derives the matching y span
/// for each column, so cost is proportional to the ball, not the grid.
pub fn manhattan_ball(center: Position, radius: i64, grid: &Grid) -> impl Iterator<Item = Position> {
    // No in-grid cell lies further away than this
    let reach = distance(center, Position::new(0, 0))
        .saturating_add(grid.width)
        .saturating_add(grid.height);
    let radius = radius.min(reach).max(-1);
    let height = grid.height;
    let x_lo = center.x.saturating_sub(radius).max(0);
    let x_hi = center.x.saturating_add(radius).min(grid.width - 1);

    (x_lo..=x_hi).flat_map(move |x| {
        let slack = radius.saturating_sub(distance(Position::new(x, center.y), center));
        let y_lo = center.y.saturating_sub(slack).max(0);
        let y_hi = center.y.saturating_add(slack).min(height - 1);
        (y_lo..=y_hi).map(move |y| Position::new(x, y))
    })
}
