//! Notification hooks through which the match reports progress and the
//! recoverable conditions it retries on. Formatting for people happens in the
//! implementors, never in the engine.

use crate::{
    common::{PlacementError, ShotError, ShotOutcome},
    game::Side,
    grid::Grid,
    position::Position,
};

/// Receives match events. Every hook defaults to doing nothing.
pub trait Observer {
    /// A random placement was refused during setup.
    fn placement_rejected(&mut self, _side: Side, _error: PlacementError) {}

    /// A board ran out of placement attempts and setup starts it over.
    fn board_discarded(&mut self, _side: Side, _restarts: usize) {}

    /// `side` is about to move. Grids are given as (human, automated).
    fn turn_started<const N: usize>(&mut self, _side: Side, _human: &Grid<N>, _automated: &Grid<N>) {}

    /// `side` picked a target, before the grid judged it.
    fn target_chosen(&mut self, _side: Side, _target: Position) {}

    /// The enemy grid refused a target; `side` will choose again.
    fn shot_rejected(&mut self, _side: Side, _error: ShotError) {}

    /// A shot by `side` landed.
    fn shot_resolved(&mut self, _side: Side, _target: Position, _outcome: ShotOutcome) {}

    fn match_finished(&mut self, _winner: Side) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl Observer for NullObserver {}

/// Observer that forwards events to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn placement_rejected(&mut self, side: Side, error: PlacementError) {
        log::trace!("{side:?} placement rejected: {error}");
    }

    fn board_discarded(&mut self, side: Side, restarts: usize) {
        log::debug!("{side:?} board discarded after too many attempts (restart {restarts})");
    }

    fn shot_rejected(&mut self, side: Side, error: ShotError) {
        log::trace!("{side:?} shot rejected: {error}");
    }

    fn shot_resolved(&mut self, side: Side, target: Position, outcome: ShotOutcome) {
        log::debug!("{side:?} fired at {target}: {outcome:?}");
    }

    fn match_finished(&mut self, winner: Side) {
        log::info!("{winner:?} side wins");
    }
}
