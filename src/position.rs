//! Grid coordinates.

use core::fmt;

/// A zero-based grid coordinate: `x` is the row, `y` the column.
///
/// Coordinates are signed so that any pair a player can name is
/// representable; bounds are checked by the grid, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Converts a 1-based `(row, column)` pair as typed by a player.
    ///
    /// A zero in either component yields a negative, out-of-bounds position.
    pub fn from_one_based(row: u32, col: u32) -> Self {
        let shift = |v: u32| i32::try_from(v).unwrap_or(i32::MAX).saturating_sub(1);
        Self::new(shift(row), shift(col))
    }

    /// Whether the position lies inside an `n×n` grid.
    pub fn in_bounds(&self, n: usize) -> bool {
        let inside = |v: i32| v >= 0 && (v as usize) < n;
        inside(self.x) && inside(self.y)
    }

    /// Offsets the position, saturating at the `i32` limits.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }

    /// The eight surrounding positions, in row-major order. Not bounds-checked.
    pub fn neighbours(self) -> impl Iterator<Item = Position> {
        (-1..=1)
            .flat_map(|dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| self.offset(dx, dy))
    }

    /// The 1-based `(row, column)` pair shown to players.
    pub fn one_based(&self) -> (i64, i64) {
        (i64::from(self.x) + 1, i64::from(self.y) + 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
