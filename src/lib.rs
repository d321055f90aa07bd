#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
mod scoreboard;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod persist;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod timer;
#[cfg(feature = "std")]
mod ui;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use scoreboard::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use persist::*;
#[cfg(feature = "std")]
pub use session::*;
#[cfg(feature = "std")]
pub use timer::*;
#[cfg(feature = "std")]
pub use ui::*;
