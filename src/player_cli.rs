#![cfg(feature = "std")]
//! Console glue: the human player reading coordinates from a line-based
//! input, and an observer printing boards and messages to stdout.

use std::fmt::Display;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use std::str;

use rand::rngs::SmallRng;
use thiserror::Error;

use crate::{
    common::{MatchError, ShotError, ShotOutcome},
    game::Side,
    grid::Grid,
    observer::Observer,
    player::Player,
    position::Position,
};

const RULE: &str = "--------------------";

/// Why a line typed by the player was not accepted as coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputRejection {
    #[error("Enter 2 coordinates!")]
    WrongTokenCount,
    #[error("Enter numbers!")]
    NotANumber,
}

/// Parse `"row col"` (1-based, whitespace separated) into a zero-based
/// position. Bounds are left to the grid, so digit strings too large for a
/// `u32` saturate and end up off the board.
pub fn parse_coords(line: &str) -> Result<Position, InputRejection> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputRejection::WrongTokenCount);
    };
    let number = |t: &str| {
        if t.chars().all(|c| c.is_ascii_digit()) {
            Ok(t.parse::<u32>().unwrap_or(u32::MAX))
        } else {
            Err(InputRejection::NotANumber)
        }
    };
    Ok(Position::from_one_based(number(*row)?, number(*col)?))
}

/// Human player prompting on `output` and reading from `input`.
pub struct HumanPlayer<R, W> {
    input: R,
    output: W,
}

impl HumanPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output sink, e.g. to inspect prompts in tests.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_target(&mut self) -> io::Result<Option<Position>> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            let parsed = str::from_utf8(&line)
                .map_err(|_| InputRejection::NotANumber)
                .and_then(parse_coords);
            match parsed {
                Ok(pos) => return Ok(Some(pos)),
                Err(rejection) => writeln!(self.output, " {} ", rejection)?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_target(
        &mut self,
        _rng: &mut SmallRng,
        _board_size: usize,
    ) -> Result<Position, MatchError> {
        match self.read_target() {
            Ok(Some(pos)) => Ok(pos),
            Ok(None) => Err(MatchError::InputClosed),
            Err(err) => {
                log::warn!("reading player input failed: {err}");
                Err(MatchError::InputFailed)
            }
        }
    }
}

/// Message shown after a shot lands.
pub fn outcome_message(outcome: ShotOutcome) -> &'static str {
    match outcome {
        ShotOutcome::Missed => "Miss!",
        ShotOutcome::HitNotSunk => "Ship hit!",
        ShotOutcome::Sunk => "Ship destroyed!",
    }
}

/// Message shown when a target is refused.
pub fn rejection_message(error: ShotError) -> &'static str {
    match error {
        ShotError::OutOfBounds(_) => "Shot missed the board!",
        ShotError::AlreadyTargeted(_) => "That cell has already been shot!",
    }
}

/// Print the opening banner and input help.
pub fn greet() {
    println!("{RULE}");
    println!("     Welcome to     ");
    println!("     sea battle     ");
    println!("{RULE}");
    println!(" input format: x y  ");
    println!(" x - row number     ");
    println!(" y - column number  ");
}

/// Observer printing the match for a human opponent, to stdout by default.
#[derive(Debug)]
pub struct ConsoleObserver<W = Stdout> {
    out: W,
}

impl ConsoleObserver<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn say(&mut self, text: impl Display) {
        if let Err(err) = writeln!(self.out, "{text}") {
            log::warn!("console output failed: {err}");
        }
    }
}

impl<W: Write> Observer for ConsoleObserver<W> {
    fn turn_started<const N: usize>(&mut self, side: Side, human: &Grid<N>, automated: &Grid<N>) {
        self.say(RULE);
        self.say("Your board:");
        self.say(human);
        self.say(RULE);
        self.say("Computer board:");
        self.say(automated);
        self.say(RULE);
        match side {
            Side::Human => self.say("Your move!"),
            Side::Automated => self.say("Computer's move!"),
        }
    }

    fn target_chosen(&mut self, side: Side, target: Position) {
        if side == Side::Automated {
            let (row, col) = target.one_based();
            self.say(format_args!("Computer fires at: {row} {col}"));
        }
    }

    fn shot_rejected(&mut self, _side: Side, error: ShotError) {
        self.say(rejection_message(error));
    }

    fn shot_resolved(&mut self, _side: Side, _target: Position, outcome: ShotOutcome) {
        self.say(outcome_message(outcome));
    }

    fn match_finished(&mut self, winner: Side) {
        self.say(RULE);
        match winner {
            Side::Human => self.say("You win!"),
            Side::Automated => self.say("The computer wins!"),
        }
    }
}
