#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod bitboard;
mod common;
mod config;
#[cfg(feature = "std")]
mod console;
mod coordinate;
mod game;
mod grid;
#[cfg(feature = "std")]
pub mod health;
#[cfg(feature = "std")]
mod logging;
mod placement;
mod player;
mod player_ai;
pub mod prelude;

pub use bitboard::{BitBoard, BitBoardError, SetBits};
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use console::*;
pub use coordinate::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, parse_level, LOG_ENV};
pub use placement::*;
pub use player::*;
pub use player_ai::*;
