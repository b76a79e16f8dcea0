use rand::Rng;

use crate::{
    board::Board,
    common::{GuessError, GuessResult},
    config::BoardSize,
    fleet::Fleet,
    guess::{resolve_guess, GameStats, Guess, GuessHistory},
    player::Player,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Everything one game owns: the hidden fleet, the visible board, the
/// counters and the accepted guesses.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    fleet: Fleet,
    stats: GameStats,
    history: GuessHistory,
}

impl Game {
    /// Start a game on a fresh board with a randomly generated fleet.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, size: BoardSize) -> Self {
        Self::with_fleet(Fleet::generate(rng, size))
    }

    /// Start a game against a known fleet.
    pub fn with_fleet(fleet: Fleet) -> Self {
        Self {
            board: Board::new(fleet.size()),
            fleet,
            stats: GameStats::default(),
            history: GuessHistory::new(),
        }
    }

    pub fn size(&self) -> BoardSize {
        self.fleet.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn stats(&self) -> GameStats {
        self.stats
    }

    pub fn history(&self) -> &GuessHistory {
        &self.history
    }

    /// Ship cells not yet found.
    pub fn remaining(&self) -> usize {
        self.fleet.total_cells().saturating_sub(self.stats.correct)
    }

    pub fn status(&self) -> GameStatus {
        if self.stats.correct >= self.fleet.total_cells() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Validate, deduplicate and resolve one raw guess.
    ///
    /// A rejected guess leaves board, counters and history untouched.
    pub fn submit(&mut self, raw: &str) -> Result<(Guess, GuessResult), GuessError> {
        let guess = Guess::parse(raw, self.size())?;
        self.history.check(&guess)?;
        let result = resolve_guess(&mut self.board, &self.fleet, guess, &mut self.stats)
            .ok_or(GuessError::InvalidRow(guess.row_letter()))?;
        self.history.record(guess);
        Ok((guess, result))
    }
}

/// Play one full game with `player`: pick a size, hide a fleet, then take
/// guesses until every ship cell is found. Returns the final counters.
pub fn run<P, R>(player: &mut P, rng: &mut R) -> anyhow::Result<GameStats>
where
    P: Player + ?Sized,
    R: Rng + ?Sized,
{
    let size = player.choose_board_size()?;
    let mut game = Game::new(rng, size);
    log::info!(
        "new {} game, {} ships covering {} cells",
        size,
        game.fleet().ships().len(),
        game.fleet().total_cells()
    );

    while game.status() == GameStatus::InProgress {
        let raw = player.prompt_guess(game.board())?;
        match game.submit(&raw) {
            Ok((guess, result)) => player.handle_guess_result(guess, result),
            Err(e) => {
                log::debug!("rejected {:?}: {}", raw, e);
                player.handle_rejected_guess(&raw, &e);
            }
        }
    }

    let stats = game.stats();
    log::info!("game won: {}", stats);
    player.handle_game_over(game.board(), stats);
    Ok(stats)
}
