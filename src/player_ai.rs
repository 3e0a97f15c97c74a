use rand::{rngs::SmallRng, Rng};

use crate::{common::MatchError, player::Player, position::Position};

/// Automated opponent that fires at uniformly random cells.
///
/// It keeps no memory of earlier shots, so it may pick a cell it already
/// targeted; the grid refuses such shots and the turn asks again.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutomatedPlayer;

impl AutomatedPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AutomatedPlayer {
    fn choose_target(
        &mut self,
        rng: &mut SmallRng,
        board_size: usize,
    ) -> Result<Position, MatchError> {
        let bound = i32::try_from(board_size).unwrap_or(i32::MAX).max(1);
        Ok(Position::new(
            rng.random_range(0..bound),
            rng.random_range(0..bound),
        ))
    }
}
