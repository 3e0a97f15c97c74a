//! Grid state: vessel placement with touch buffers, shot resolution and
//! text rendering.

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::BitBoard;
use crate::common::{PlacementError, ShotError, ShotOutcome};
use crate::config::BOARD_SIZE;
use crate::position::Position;
use crate::vessel::Vessel;

type Mask<const N: usize> = BitBoard<u128, N>;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
    /// Reserved around a vessel so that no other vessel can touch it.
    Buffer,
}

impl Cell {
    /// Glyph used by the text rendering. Concealed grids draw ships as water.
    pub fn glyph(self, concealed: bool) -> char {
        match self {
            Cell::Ship if !concealed => '■',
            Cell::Empty | Cell::Ship | Cell::Buffer => 'O',
            Cell::Hit => 'X',
            Cell::Miss => '.',
        }
    }
}

/// One side's N×N grid.
///
/// `occupied` holds vessel cells and their buffers and is never cleared;
/// `targeted` remembers shots (and cells revealed by sinks) and is reset
/// once when play begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const N: usize = BOARD_SIZE> {
    concealed: bool,
    vessels: Vec<Vessel>,
    occupied: Mask<N>,
    targeted: Mask<N>,
    cells: [[Cell; N]; N],
    sunk: usize,
}

impl<const N: usize> Grid<N> {
    const FITS: () = assert!(N > 0 && N * N <= u128::BITS as usize, "grid must fit in 128 cells");

    /// Create an empty, revealed grid.
    pub fn new() -> Self {
        let () = Self::FITS;
        Self {
            concealed: false,
            vessels: Vec::new(),
            occupied: Mask::new(),
            targeted: Mask::new(),
            cells: [[Cell::Empty; N]; N],
            sunk: 0,
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        N
    }

    /// Place a vessel, reserving its surrounding cells.
    ///
    /// Fails without touching the grid if any vessel cell is off the board or
    /// already occupied by another vessel or its buffer.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), PlacementError> {
        let invalid = PlacementError::PlacementInvalid {
            origin: vessel.origin(),
        };
        let body = Mask::<N>::from_positions(vessel.occupied_cells()).map_err(|_| invalid)?;
        if !(self.occupied & body).is_empty() {
            return Err(invalid);
        }

        for cell in body.iter() {
            self.set_cell(cell, Cell::Ship);
        }
        self.occupied |= body;
        self.vessels.push(vessel);

        let buffer = Self::buffer_of(&vessel);
        for cell in buffer.iter() {
            if self.cell(cell) == Some(Cell::Empty) {
                self.set_cell(cell, Cell::Buffer);
            }
        }
        self.occupied |= buffer;
        Ok(())
    }

    /// Fire at `pos`.
    pub fn resolve_shot(&mut self, pos: Position) -> Result<ShotOutcome, ShotError> {
        let seen = self
            .targeted
            .contains(pos)
            .map_err(|_| ShotError::OutOfBounds(pos))?;
        if seen {
            return Err(ShotError::AlreadyTargeted(pos));
        }
        self.targeted
            .insert(pos)
            .map_err(|_| ShotError::OutOfBounds(pos))?;

        let Some(vessel) = self.vessels.iter_mut().find(|v| v.is_hit_by(pos)) else {
            self.set_cell(pos, Cell::Miss);
            return Ok(ShotOutcome::Missed);
        };
        vessel.take_hit();
        let vessel = *vessel;
        self.set_cell(pos, Cell::Hit);

        if vessel.is_sunk() {
            self.sunk += 1;
            self.reveal_buffer(&vessel);
            Ok(ShotOutcome::Sunk)
        } else {
            Ok(ShotOutcome::HitNotSunk)
        }
    }

    /// Forget every targeted cell. Placement reservations are kept.
    pub fn reset_targeting_memory(&mut self) {
        self.targeted.clear_all();
    }

    /// Hide or show ship cells in the text rendering.
    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    /// Number of vessels with no hit points left.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Placed vessels in placement order.
    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// State of the cell at `pos`, or `None` off the board.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        let (x, y) = Self::index(pos)?;
        Some(self.cells[x][y])
    }

    /// Whether `pos` holds a vessel or a buffer.
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.occupied.contains(pos).unwrap_or(false)
    }

    /// Whether a shot at `pos` would be refused as a repeat.
    pub fn is_targeted(&self, pos: Position) -> bool {
        self.targeted.contains(pos).unwrap_or(false)
    }

    /// Text rendering with 1-based row and column labels.
    pub fn to_display_string(&self) -> alloc::string::String {
        alloc::format!("{}", self)
    }

    // Sunk vessels open up their surroundings: remaining water turns into
    // misses and cannot be shot again.
    fn reveal_buffer(&mut self, vessel: &Vessel) {
        let buffer = Self::buffer_of(vessel);
        for cell in buffer.iter() {
            if matches!(self.cell(cell), Some(Cell::Empty | Cell::Buffer)) {
                self.set_cell(cell, Cell::Miss);
            }
        }
        self.targeted |= buffer;
    }

    // In-bounds 8-neighbourhood of a vessel, excluding its own cells.
    fn buffer_of(vessel: &Vessel) -> Mask<N> {
        let mut buffer = Mask::<N>::new();
        for cell in vessel.occupied_cells() {
            for near in cell.neighbours().filter(|n| !vessel.is_hit_by(*n)) {
                // off-board neighbours are simply skipped
                let _ = buffer.insert(near);
            }
        }
        buffer
    }

    fn set_cell(&mut self, pos: Position, state: Cell) {
        if let Some((x, y)) = Self::index(pos) {
            self.cells[x][y] = state;
        }
    }

    fn index(pos: Position) -> Option<(usize, usize)> {
        if !pos.in_bounds(N) {
            return None;
        }
        Some((usize::try_from(pos.x).ok()?, usize::try_from(pos.y).ok()?))
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for Grid<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 1..=N {
            write!(f, "|{}", col)?;
        }
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "\n{}|", r + 1)?;
            for cell in row {
                write!(f, "{}|", cell.glyph(self.concealed))?;
            }
        }
        Ok(())
    }
}
