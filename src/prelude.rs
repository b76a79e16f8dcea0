//! Commonly used types and utilities for ease of import.

pub use crate::{run, AutoPlayer, BoardSize, Fleet, Game, GameStats, GameStatus, Player};

#[cfg(feature = "std")]
pub use crate::{init_logging, print_board, CliPlayer};
