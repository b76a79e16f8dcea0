use alloc::string::String;

use crate::{
    board::Board,
    common::{GuessError, GuessResult},
    config::BoardSize,
    guess::{GameStats, Guess},
};

/// Interface implemented by whatever sits in front of the game: a terminal,
/// a script, a test double.
///
/// The game loop only needs two answers from it, a board size and raw guess
/// strings. The `handle_*` hooks are notifications and default to no-ops.
pub trait Player {
    /// Pick the board size for a new game.
    fn choose_board_size(&mut self) -> anyhow::Result<BoardSize>;

    /// Ask for the next guess. The string is passed to validation untouched.
    fn prompt_guess(&mut self, board: &Board) -> anyhow::Result<String>;

    /// Told when a raw guess was turned away; nothing on the board changed.
    fn handle_rejected_guess(&mut self, _raw: &str, _error: &GuessError) {}

    /// Told the outcome of an accepted guess.
    fn handle_guess_result(&mut self, _guess: Guess, _result: GuessResult) {}

    /// Told once every ship cell has been found.
    fn handle_game_over(&mut self, _board: &Board, _stats: GameStats) {}
}
