use rand::rngs::SmallRng;

use crate::{common::MatchError, position::Position};

/// Target selection strategy, implemented by the human console player and
/// the automated opponent.
pub trait Player {
    /// Choose the next cell to fire at on an enemy grid of side `board_size`.
    ///
    /// The position need not be valid: the grid rejects off-board and repeated
    /// targets and the caller asks again.
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: usize,
    ) -> Result<Position, MatchError>;
}
