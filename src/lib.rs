#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(any(test, feature = "std"))]
extern crate std;

mod board;
mod common;
mod config;
mod fleet;
mod game;
mod guess;
mod player;
mod player_auto;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;
mod sampler;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
pub use guess::*;
pub use player::*;
pub use player_auto::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use player_cli::*;
pub use sampler::*;
pub use ship::*;
