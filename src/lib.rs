#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod combatant;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod observer;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
mod position;
mod vessel;

pub use bitboard::{BitBoard, BitBoardError};
pub use combatant::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use observer::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use position::*;
pub use vessel::*;
