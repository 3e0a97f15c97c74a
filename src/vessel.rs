//! Vessel definitions: origin, length, orientation and hit points.

use crate::common::PlacementError;
use crate::position::Position;

/// Direction a vessel extends from its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Cells step along `x`.
    Horizontal,
    /// Cells step along `y`.
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// A vessel: a straight line of `length` cells starting at `origin`.
///
/// The vessel only tracks its remaining hit points. Whether a cell may be
/// credited as a hit is decided by the grid, which remembers targeted cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    origin: Position,
    length: usize,
    orientation: Orientation,
    hit_points: usize,
}

impl Vessel {
    /// Create an undamaged vessel. Fails for zero-length vessels.
    pub fn new(
        origin: Position,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, PlacementError> {
        if length == 0 {
            return Err(PlacementError::EmptyVessel);
        }
        Ok(Self {
            origin,
            length,
            orientation,
            hit_points: length,
        })
    }

    /// Cells covered by the vessel, starting at the origin.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Position> {
        let origin = self.origin;
        let (dx, dy) = self.orientation.step();
        (0..self.length).map(move |i| {
            let i = i32::try_from(i).unwrap_or(i32::MAX);
            origin.offset(dx.saturating_mul(i), dy.saturating_mul(i))
        })
    }

    /// Whether a shot at `pos` lands on this vessel.
    pub fn is_hit_by(&self, pos: Position) -> bool {
        self.occupied_cells().any(|cell| cell == pos)
    }

    /// Removes one hit point; never goes below zero.
    pub(crate) fn take_hit(&mut self) {
        self.hit_points = self.hit_points.saturating_sub(1);
    }

    pub fn is_sunk(&self) -> bool {
        self.hit_points == 0
    }

    pub fn hit_points(&self) -> usize {
        self.hit_points
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
