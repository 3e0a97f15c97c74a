//! Common types for sea battle: shot outcomes and the error kinds raised by
//! placement, shooting and the match loop.

use thiserror::Error;

use crate::position::Position;

/// Result of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// No vessel at the target.
    Missed,
    /// A vessel was hit and still floats.
    HitNotSunk,
    /// The shot took the last hit point of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// Hits and sinks give the shooter another move.
    pub fn grants_extra_turn(self) -> bool {
        !matches!(self, ShotOutcome::Missed)
    }
}

/// Shots the grid refuses. Both are recoverable by choosing another target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShotError {
    /// Target lies outside the grid.
    #[error("shot at {0} is off the board")]
    OutOfBounds(Position),
    /// Target was already shot, or revealed as empty after a sink.
    #[error("cell {0} was already targeted")]
    AlreadyTargeted(Position),
}

/// Errors returned by vessel placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// Vessel would leave the grid, overlap another vessel or touch one.
    #[error("vessel at {origin} leaves the grid or touches another vessel")]
    PlacementInvalid { origin: Position },
    /// Vessels must be at least one cell long.
    #[error("vessel length must be at least 1")]
    EmptyVessel,
    /// Random setup could not fit the fleet on any fresh board.
    #[error("fleet did not fit after {restarts} fresh boards")]
    FleetDoesNotFit { restarts: usize },
}

/// Errors that end a match early.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error(transparent)]
    Placement(#[from] PlacementError),
    /// The human input source reached end of file.
    #[error("player input closed")]
    InputClosed,
    /// Reading the human input source failed for a reason other than end of file.
    #[error("reading player input failed")]
    InputFailed,
    /// A turn was requested before setup.
    #[error("match has not been set up")]
    NotStarted,
    /// A turn was requested after the match ended.
    #[error("match is already finished")]
    Finished,
}
