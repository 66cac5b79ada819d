#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod cellset;
mod common;
mod config;
mod coordinate;
pub mod game;
mod generator;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
#[cfg(feature = "std")]
pub mod ui;
mod vessel;

pub use cellset::{CellSet, CellSetError};
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use game::{EventSink, GameEvent, Match, Side, TurnOrder, TurnReport};
pub use generator::{random_grid, try_place_fleet};
pub use grid::{Cell, Grid, Phase};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::Player;
pub use player_ai::AiPlayer;
#[cfg(feature = "std")]
pub use player_cli::{parse_target, CliPlayer, TargetParseError};
pub use vessel::{Orientation, Vessel};
