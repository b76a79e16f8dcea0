//! The player's view of the grid: one marker per cell, addressed by row letter and column.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::config::{BoardSize, MISS_SYMBOL, UNKNOWN_SYMBOL};
use crate::ship::ShipClass;

/// What the player currently knows about a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Marker {
    #[default]
    Unknown,
    Miss,
    Ship(ShipClass),
}

impl Marker {
    pub fn symbol(self) -> &'static str {
        match self {
            Marker::Unknown => UNKNOWN_SYMBOL,
            Marker::Miss => MISS_SYMBOL,
            Marker::Ship(class) => class.symbol(),
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A `size`×`size` grid of markers, starting all unknown. Never resized.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Board {
    size: BoardSize,
    rows: Vec<Vec<Marker>>,
}

impl Board {
    pub fn new(size: BoardSize) -> Self {
        let n = size.get();
        Board {
            size,
            rows: vec![vec![Marker::Unknown; n]; n],
        }
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Overwrite one cell. Coordinates are validated by the caller; an
    /// address off the board changes nothing.
    pub fn set_cell(&mut self, row_letter: char, col: usize, marker: Marker) {
        let slot = self
            .size
            .row_index(row_letter)
            .and_then(|r| self.rows.get_mut(r))
            .and_then(|row| row.get_mut(col));
        match slot {
            Some(slot) => *slot = marker,
            None => log::warn!("ignoring write to {}{} outside the board", row_letter, col),
        }
    }

    pub fn cell(&self, row_letter: char, col: usize) -> Option<Marker> {
        let r = self.size.row_index(row_letter)?;
        self.rows.get(r)?.get(col).copied()
    }

    /// Rows paired with their letters, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = (char, &[Marker])> + '_ {
        self.size
            .row_letters()
            .iter()
            .copied()
            .zip(self.rows.iter().map(Vec::as_slice))
    }

    /// Count of cells showing `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.rows.iter().flatten().filter(|&&m| m == marker).count()
    }
}
