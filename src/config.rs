//! Game tables: board sizes, row alphabet, markers and fleet composition.

use crate::common::BoardError;
use crate::ship::ShipClass;
use core::fmt;

/// Row letters, in order. A board of size `n` uses the first `n`.
pub const ROW_LETTERS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Smallest playable board. A 3-cell ship needs at least this much room.
pub const MIN_BOARD_SIZE: usize = 4;
/// Largest board addressable with a single column digit.
pub const MAX_BOARD_SIZE: usize = 10;

/// Sizes offered by the interactive menu, with their labels.
pub const BOARD_SIZE_OPTIONS: [(&str, usize); 3] = [("4x4", 4), ("5x5", 5), ("6x6", 6)];

pub const UNKNOWN_SYMBOL: &str = "-";
pub const MISS_SYMBOL: &str = "❗";
pub const SMALL_SHIP_SYMBOL: &str = "🟠";
pub const LARGE_SHIP_SYMBOL: &str = "🔵";

use ShipClass::{Large, Small};

const FLEET_4: [ShipClass; 2] = [Small, Large];
const FLEET_5: [ShipClass; 3] = [Small, Small, Large];
const FLEET_6: [ShipClass; 4] = [Small, Small, Large, Large];

/// Side length of a square board, validated to `MIN_BOARD_SIZE..=MAX_BOARD_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
#[cfg_attr(feature = "std", serde(into = "usize"))]
pub struct BoardSize(usize);

impl BoardSize {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if (MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            Ok(Self(size))
        } else {
            Err(BoardError::InvalidSize(size))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// Row letters in use on this board.
    pub fn row_letters(self) -> &'static [char] {
        &ROW_LETTERS[..self.0]
    }

    /// Position of `letter` among this board's rows.
    pub fn row_index(self, letter: char) -> Option<usize> {
        self.row_letters().iter().position(|&l| l == letter)
    }

    /// Letter naming row `index`, if it is on the board.
    pub fn row_letter(self, index: usize) -> Option<char> {
        self.row_letters().get(index).copied()
    }

    /// Ships to place on a board of this size, in placement order.
    ///
    /// Sizes without an entry of their own get the 4x4 fleet.
    pub fn fleet_composition(self) -> &'static [ShipClass] {
        match self.0 {
            5 => &FLEET_5,
            6 => &FLEET_6,
            _ => &FLEET_4,
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> usize {
        size.0
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_bounds() {
        assert_eq!(BoardSize::new(3), Err(BoardError::InvalidSize(3)));
        assert_eq!(BoardSize::new(11), Err(BoardError::InvalidSize(11)));
        assert_eq!(BoardSize::new(4).map(BoardSize::get), Ok(4));
        assert_eq!(BoardSize::new(10).map(BoardSize::get), Ok(10));
    }

    #[test]
    fn composition_table() {
        let comp = |n| BoardSize::new(n).unwrap().fleet_composition();
        assert_eq!(comp(4), &[Small, Large]);
        assert_eq!(comp(5), &[Small, Small, Large]);
        assert_eq!(comp(6), &[Small, Small, Large, Large]);
        assert_eq!(comp(7), &[Small, Large]);
        assert_eq!(comp(10), &[Small, Large]);
    }

    #[test]
    fn row_letters_follow_size() {
        let size = BoardSize::new(5).unwrap();
        assert_eq!(size.row_letters(), &['A', 'B', 'C', 'D', 'E']);
        assert_eq!(size.row_index('C'), Some(2));
        assert_eq!(size.row_index('F'), None);
        assert_eq!(size.row_letter(4), Some('E'));
        assert_eq!(size.row_letter(5), None);
    }

    #[test]
    fn menu_options_are_valid_sizes() {
        for (label, n) in BOARD_SIZE_OPTIONS {
            let size = BoardSize::new(n).unwrap();
            assert_eq!(std::format!("{}", size), label);
        }
    }
}
