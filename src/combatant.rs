use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    common::MatchError, config::BOARD_SIZE, game::Side, grid::Grid, observer::Observer,
    player::Player,
};

/// One side of a match: the grid it defends and the strategy it attacks with.
pub struct Combatant<const N: usize = BOARD_SIZE> {
    side: Side,
    grid: Grid<N>,
    player: Box<dyn Player>,
    shots: usize,
}

impl<const N: usize> Combatant<N> {
    pub fn new(side: Side, grid: Grid<N>, player: Box<dyn Player>) -> Self {
        Self {
            side,
            grid,
            player,
            shots: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// The grid this side defends.
    pub fn grid(&self) -> &Grid<N> {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid<N> {
        &mut self.grid
    }

    /// Accepted shots fired so far.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Play one move against `enemy`, asking the strategy again after every
    /// refused target. Returns `true` when the shot hit and the side moves
    /// again.
    pub fn take_turn<O: Observer>(
        &mut self,
        enemy: &mut Grid<N>,
        rng: &mut SmallRng,
        observer: &mut O,
    ) -> Result<bool, MatchError> {
        loop {
            let target = self.player.choose_target(rng, N)?;
            observer.target_chosen(self.side, target);
            match enemy.resolve_shot(target) {
                Ok(outcome) => {
                    self.shots += 1;
                    observer.shot_resolved(self.side, target, outcome);
                    return Ok(outcome.grants_extra_turn());
                }
                Err(err) => observer.shot_rejected(self.side, err),
            }
        }
    }
}

impl<const N: usize> core::fmt::Debug for Combatant<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Combatant")
            .field("side", &self.side)
            .field("shots", &self.shots)
            .field("grid", &self.grid)
            .finish_non_exhaustive()
    }
}
