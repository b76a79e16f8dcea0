//! Guess intake and resolution.
//!
//! Raw input becomes a [`Guess`] only after it names a real cell; the
//! history then filters repeats, and [`resolve_guess`] turns what is left
//! into exactly one board update and one counter increment.

use alloc::collections::BTreeSet;
use core::fmt;

use crate::board::{Board, Marker};
use crate::common::{GuessError, GuessResult};
use crate::config::BoardSize;
use crate::fleet::Fleet;
use crate::ship::Cell;

/// A validated coordinate: a row letter on the board and a column digit below its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Guess {
    row_letter: char,
    col: usize,
}

impl Guess {
    /// Parse two characters, letter then digit. The letter is upper-cased
    /// first, so `b3` and `B3` name the same cell.
    pub fn parse(raw: &str, size: BoardSize) -> Result<Self, GuessError> {
        let mut chars = raw.chars();
        let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GuessError::InvalidLength(raw.chars().count()));
        };
        let row_letter = letter.to_ascii_uppercase();
        if size.row_index(row_letter).is_none() {
            return Err(GuessError::InvalidRow(letter));
        }
        let col = digit
            .to_digit(10)
            .map(|d| d as usize)
            .filter(|&d| d < size.get())
            .ok_or(GuessError::InvalidColumn(digit))?;
        Ok(Guess { row_letter, col })
    }

    /// Build a guess from board indices, if they are on a board of `size`.
    pub fn from_cell((row, col): Cell, size: BoardSize) -> Option<Self> {
        let row_letter = size.row_letter(row)?;
        (col < size.get()).then_some(Guess { row_letter, col })
    }

    pub fn row_letter(&self) -> char {
        self.row_letter
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// The `(row, col)` index pair on a board of `size`, if the guess names
    /// one of its cells.
    pub fn cell(&self, size: BoardSize) -> Option<Cell> {
        let row = size.row_index(self.row_letter)?;
        (self.col < size.get()).then_some((row, self.col))
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_letter, self.col)
    }
}

/// Guesses accepted so far. Order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessHistory {
    accepted: BTreeSet<Guess>,
}

impl GuessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, guess: &Guess) -> bool {
        self.accepted.contains(guess)
    }

    /// Refuse `guess` if it was accepted before.
    pub fn check(&self, guess: &Guess) -> Result<(), GuessError> {
        if self.contains(guess) {
            Err(GuessError::AlreadyGuessed([guess.row_letter, digit_char(guess.col)]))
        } else {
            Ok(())
        }
    }

    /// Remember `guess`. Returns `false` if it was already there.
    pub fn record(&mut self, guess: Guess) -> bool {
        self.accepted.insert(guess)
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

fn digit_char(col: usize) -> char {
    char::from_digit(col as u32, 10).unwrap_or('?')
}

/// Running hit and miss counts. Only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct GameStats {
    pub correct: usize,
    pub incorrect: usize,
}

impl GameStats {
    pub fn total(&self) -> usize {
        self.correct + self.incorrect
    }
}

impl fmt::Display for GameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Correct: {} | Incorrect: {}", self.correct, self.incorrect)
    }
}

/// Classify `guess` against `fleet`, mark the board, and bump one counter.
///
/// A hit shows the ship's marker and counts as correct; anything else shows
/// the miss marker and counts as incorrect. Duplicate filtering is the
/// caller's job: resolving the same cell again classifies it the same way.
///
/// Returns `None`, touching nothing, when `guess` does not name a cell of
/// `board` (it was parsed against a larger board).
pub fn resolve_guess(
    board: &mut Board,
    fleet: &Fleet,
    guess: Guess,
    stats: &mut GameStats,
) -> Option<GuessResult> {
    let Some(cell) = guess.cell(board.size()) else {
        log::warn!("{} is not on the {} board", guess, board.size());
        return None;
    };
    let result = match fleet.ship_at(cell).map(|ship| ship.class()) {
        Some(class) => {
            board.set_cell(guess.row_letter, guess.col, Marker::Ship(class));
            stats.correct += 1;
            GuessResult::Hit(class)
        }
        None => {
            board.set_cell(guess.row_letter, guess.col, Marker::Miss);
            stats.incorrect += 1;
            GuessResult::Miss
        }
    };
    log::debug!("{} -> {:?} ({})", guess, result, stats);
    Some(result)
}
