//! Match flow: randomized setup of both grids, then alternating turns until
//! one side has lost its whole fleet.

use alloc::boxed::Box;
use rand::{rngs::SmallRng, Rng};

use crate::{
    combatant::Combatant,
    common::{MatchError, PlacementError},
    config::{BOARD_SIZE, FLEET, FLEET_SIZE, MAX_BOARD_RESTARTS, MAX_PLACEMENT_ATTEMPTS},
    grid::Grid,
    observer::Observer,
    player::Player,
    position::Position,
    vessel::{Orientation, Vessel},
};

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Side {
    Human,
    Automated,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Automated,
            Side::Automated => Side::Human,
        }
    }
}

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Grids not placed yet.
    Setup,
    Playing,
    /// Terminal; no further turns are accepted.
    Finished { winner: Side },
}

/// End-of-match figures, serializable for the simulator output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct MatchSummary {
    pub winner: Option<Side>,
    pub turns: usize,
    pub human_shots: usize,
    pub automated_shots: usize,
    /// Vessels lost by the human side.
    pub human_sunk: usize,
    /// Vessels lost by the automated side.
    pub automated_sunk: usize,
}

/// A human-versus-automated match on two `N×N` grids.
#[derive(Debug)]
pub struct Match<const N: usize = BOARD_SIZE> {
    human: Combatant<N>,
    automated: Combatant<N>,
    active: Side,
    state: MatchState,
    turns: usize,
    rng: SmallRng,
}

impl<const N: usize> Match<N> {
    /// Create a match in the `Setup` state. The human side moves first.
    pub fn new(human: Box<dyn Player>, automated: Box<dyn Player>, rng: SmallRng) -> Self {
        Self {
            human: Combatant::new(Side::Human, Grid::new(), human),
            automated: Combatant::new(Side::Automated, Grid::new(), automated),
            active: Side::Human,
            state: MatchState::Setup,
            turns: 0,
            rng,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Side that moves next.
    pub fn active_side(&self) -> Side {
        self.active
    }

    pub fn combatant(&self, side: Side) -> &Combatant<N> {
        match side {
            Side::Human => &self.human,
            Side::Automated => &self.automated,
        }
    }

    /// Grid defended by the human side.
    pub fn human_grid(&self) -> &Grid<N> {
        self.human.grid()
    }

    /// Grid defended by the automated side.
    pub fn automated_grid(&self) -> &Grid<N> {
        self.automated.grid()
    }

    /// Turns played so far; a hit and the extra move it grants count as two.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Place both fleets at random, conceal the automated grid and start play.
    pub fn setup<O: Observer>(&mut self, observer: &mut O) -> Result<(), MatchError> {
        match self.state {
            MatchState::Setup => {}
            MatchState::Playing => return Ok(()),
            MatchState::Finished { .. } => return Err(MatchError::Finished),
        }

        let mut human = random_grid::<N, O>(Side::Human, &mut self.rng, observer)?;
        let mut automated = random_grid::<N, O>(Side::Automated, &mut self.rng, observer)?;
        automated.set_concealed(true);
        human.reset_targeting_memory();
        automated.reset_targeting_memory();
        *self.human.grid_mut() = human;
        *self.automated.grid_mut() = automated;

        self.state = MatchState::Playing;
        log::info!("match set up on a {}x{} grid, {} vessels each", N, N, FLEET_SIZE);
        Ok(())
    }

    /// Let the active side move once, then check for a winner.
    pub fn play_turn<O: Observer>(&mut self, observer: &mut O) -> Result<MatchState, MatchError> {
        match self.state {
            MatchState::Playing => {}
            MatchState::Setup => return Err(MatchError::NotStarted),
            MatchState::Finished { .. } => return Err(MatchError::Finished),
        }

        observer.turn_started(self.active, self.human.grid(), self.automated.grid());
        let (attacker, defender) = match self.active {
            Side::Human => (&mut self.human, &mut self.automated),
            Side::Automated => (&mut self.automated, &mut self.human),
        };
        let extra_turn = attacker.take_turn(defender.grid_mut(), &mut self.rng, observer)?;
        self.turns += 1;

        if let Some(winner) = self.winner() {
            log::info!("{winner:?} wins after {} turns", self.turns);
            self.state = MatchState::Finished { winner };
            observer.match_finished(winner);
        } else if !extra_turn {
            self.active = self.active.opponent();
        }
        Ok(self.state)
    }

    /// Set up if needed and play until one side wins.
    pub fn run<O: Observer>(&mut self, observer: &mut O) -> Result<Side, MatchError> {
        self.setup(observer)?;
        loop {
            if let MatchState::Finished { winner } = self.play_turn(observer)? {
                return Ok(winner);
            }
        }
    }

    pub fn summary(&self) -> MatchSummary {
        MatchSummary {
            winner: match self.state {
                MatchState::Finished { winner } => Some(winner),
                _ => None,
            },
            turns: self.turns,
            human_shots: self.human.shots(),
            automated_shots: self.automated.shots(),
            human_sunk: self.human.grid().sunk_count(),
            automated_sunk: self.automated.grid().sunk_count(),
        }
    }

    fn winner(&self) -> Option<Side> {
        if self.automated.grid().sunk_count() == FLEET_SIZE {
            Some(Side::Human)
        } else if self.human.grid().sunk_count() == FLEET_SIZE {
            Some(Side::Automated)
        } else {
            None
        }
    }
}

/// Place the standard fleet at random, starting over on a fresh board
/// whenever one runs out of attempts.
pub fn random_grid<const N: usize, O: Observer>(
    side: Side,
    rng: &mut SmallRng,
    observer: &mut O,
) -> Result<Grid<N>, PlacementError> {
    for restart in 1..=MAX_BOARD_RESTARTS {
        if let Some(grid) = place_fleet(side, rng, observer)? {
            return Ok(grid);
        }
        observer.board_discarded(side, restart);
    }
    Err(PlacementError::FleetDoesNotFit {
        restarts: MAX_BOARD_RESTARTS,
    })
}

// Attempts are counted across the whole fleet, not per vessel.
fn place_fleet<const N: usize, O: Observer>(
    side: Side,
    rng: &mut SmallRng,
    observer: &mut O,
) -> Result<Option<Grid<N>>, PlacementError> {
    let mut grid = Grid::<N>::new();
    let mut attempts = 0;
    for &length in FLEET.iter() {
        loop {
            attempts += 1;
            if attempts > MAX_PLACEMENT_ATTEMPTS {
                return Ok(None);
            }
            let vessel = random_vessel(rng, length, N)?;
            match grid.place_vessel(vessel) {
                Ok(()) => break,
                Err(err @ PlacementError::PlacementInvalid { .. }) => {
                    observer.placement_rejected(side, err)
                }
                Err(err) => return Err(err),
            }
        }
    }
    Ok(Some(grid))
}

/// A vessel of `length` at a uniformly random origin and orientation.
pub fn random_vessel<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    board_size: usize,
) -> Result<Vessel, PlacementError> {
    let bound = i32::try_from(board_size).unwrap_or(i32::MAX).max(1);
    let origin = Position::new(rng.random_range(0..bound), rng.random_range(0..bound));
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Vessel::new(origin, length, orientation)
}
