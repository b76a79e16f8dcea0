//! Common types: guess outcomes and the errors surfaced by board setup and guess intake.

use crate::ship::ShipClass;

/// Outcome of a resolved guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GuessResult {
    /// Guess landed on a cell of a ship of this class.
    Hit(ShipClass),
    /// Guess missed all ships.
    Miss,
}

impl GuessResult {
    pub fn is_hit(self) -> bool {
        matches!(self, GuessResult::Hit(_))
    }
}

/// Errors returned while setting up a board or fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Board size outside the playable range.
    InvalidSize(usize),
    /// A ship cell lies outside the board.
    ShipOutOfBounds { row: usize, col: usize },
    /// Two ships claim the same cell.
    ShipOverlaps { row: usize, col: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidSize(n) => write!(
                f,
                "Board size {} is not supported (expected {}..={})",
                n,
                crate::config::MIN_BOARD_SIZE,
                crate::config::MAX_BOARD_SIZE
            ),
            BoardError::ShipOutOfBounds { row, col } => {
                write!(f, "Ship cell ({}, {}) is out of bounds", row, col)
            }
            BoardError::ShipOverlaps { row, col } => {
                write!(f, "Ship cell ({}, {}) overlaps another ship", row, col)
            }
        }
    }
}

/// Reasons a raw guess is turned away before it reaches the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// Input is not exactly two characters.
    InvalidLength(usize),
    /// First character is not one of the board's row letters.
    InvalidRow(char),
    /// Second character is not a digit below the board size.
    InvalidColumn(char),
    /// The same coordinate was already accepted.
    AlreadyGuessed([char; 2]),
}

impl core::fmt::Display for GuessError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GuessError::InvalidLength(n) => {
                write!(f, "Expected a letter and a digit, got {} characters", n)
            }
            GuessError::InvalidRow(c) => write!(f, "'{}' is not a row on this board", c),
            GuessError::InvalidColumn(c) => write!(f, "'{}' is not a column on this board", c),
            GuessError::AlreadyGuessed([r, c]) => write!(f, "{}{} has already been guessed!", r, c),
        }
    }
}

impl GuessError {
    /// Whether the input was malformed, as opposed to a valid repeat.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, GuessError::AlreadyGuessed(_))
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for GuessError {}
