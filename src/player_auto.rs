use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use anyhow::anyhow;
use rand::Rng;

use crate::{
    board::{Board, Marker},
    config::BoardSize,
    guess::Guess,
    player::Player,
};

/// Player that answers every prompt itself by picking a random cell that is
/// still unknown. Drives simulations and end-to-end tests.
pub struct AutoPlayer<R> {
    rng: R,
    size: BoardSize,
}

impl<R: Rng> AutoPlayer<R> {
    pub fn new(rng: R, size: BoardSize) -> Self {
        Self { rng, size }
    }
}

impl<R: Rng> Player for AutoPlayer<R> {
    fn choose_board_size(&mut self) -> anyhow::Result<BoardSize> {
        Ok(self.size)
    }

    fn prompt_guess(&mut self, board: &Board) -> anyhow::Result<String> {
        let size = board.size();
        let open: Vec<Guess> = board
            .rows()
            .enumerate()
            .flat_map(|(r, (_, row))| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &m)| m == Marker::Unknown)
                    .filter_map(move |(c, _)| Guess::from_cell((r, c), size))
            })
            .collect();
        if open.is_empty() {
            return Err(anyhow!("no unknown cells left to guess"));
        }
        let pick = open[self.rng.random_range(0..open.len())];
        Ok(format!("{}", pick))
    }
}
