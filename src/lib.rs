#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod common;
mod config;
mod coord;
pub mod fleet;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod player_cli;
pub mod render;
mod ship;

pub use common::*;
pub use config::*;
pub use coord::Coordinate;
pub use fleet::{place_fleet, random_grid};
pub use game::*;
pub use grid::{Cell, Grid, GridState};
#[cfg(feature = "std")]
pub use logging::{init_logging, resolve_level, DEFAULT_LOG_LEVEL, LOG_ENV};
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use player_cli::*;
pub use render::render_grid;
pub use ship::{Orientation, Ship};
