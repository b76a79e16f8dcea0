//! Ship definitions and the cells a placed ship occupies.

use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config::{BoardSize, LARGE_SHIP_SYMBOL, SMALL_SHIP_SYMBOL};

/// A board coordinate as `(row, col)`.
pub type Cell = (usize, usize);

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    /// Cells share a row; the column changes.
    Horizontal,
    /// Cells share a column; the row changes.
    Vertical,
}

/// Which way a ship extends from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Growth {
    Increasing,
    Decreasing,
}

/// The two kinds of ship. They differ only in length and marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShipClass {
    /// Two cells long.
    Small,
    /// Three cells long.
    Large,
}

impl ShipClass {
    pub const fn length(self) -> usize {
        match self {
            ShipClass::Small => 2,
            ShipClass::Large => 3,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            ShipClass::Small => SMALL_SHIP_SYMBOL,
            ShipClass::Large => LARGE_SHIP_SYMBOL,
        }
    }
}

/// A ship placed on a board. Immutable once built.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Ship {
    class: ShipClass,
    orientation: Orientation,
    growth: Growth,
    anchor: Cell,
    cells: Vec<Cell>,
}

/// The cell `step` places away from `anchor`, or `None` if it would go below zero.
fn step_from(anchor: Cell, orientation: Orientation, growth: Growth, step: usize) -> Option<Cell> {
    let advance = |v: usize| match growth {
        Growth::Increasing => v.checked_add(step),
        Growth::Decreasing => v.checked_sub(step),
    };
    let (row, col) = anchor;
    match orientation {
        Orientation::Horizontal => Some((row, advance(col)?)),
        Orientation::Vertical => Some((advance(row)?, col)),
    }
}

impl Ship {
    /// Place a ship of `class` at `anchor`, extending along `orientation` in
    /// the `growth` direction. Fails if any cell falls off a board of `size`.
    pub fn new(
        class: ShipClass,
        orientation: Orientation,
        growth: Growth,
        anchor: Cell,
        size: BoardSize,
    ) -> Result<Self, BoardError> {
        let n = size.get();
        let mut cells = Vec::with_capacity(class.length());
        for step in 0..class.length() {
            let (row, col) = step_from(anchor, orientation, growth, step).ok_or(
                BoardError::ShipOutOfBounds {
                    row: anchor.0,
                    col: anchor.1,
                },
            )?;
            if row >= n || col >= n {
                return Err(BoardError::ShipOutOfBounds { row, col });
            }
            cells.push((row, col));
        }
        Ok(Ship {
            class,
            orientation,
            growth,
            anchor,
            cells,
        })
    }

    pub fn class(&self) -> ShipClass {
        self.class
    }

    pub fn length(&self) -> usize {
        self.class.length()
    }

    pub fn symbol(&self) -> &'static str {
        self.class.symbol()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn growth(&self) -> Growth {
        self.growth
    }

    /// Cell the other cells are computed from.
    pub fn anchor(&self) -> Cell {
        self.anchor
    }

    /// Occupied cells, starting at the anchor.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ class: {:?}, anchor: {:?}, orientation: {:?}, growth: {:?}, cells: {:?} }}",
            self.class, self.anchor, self.orientation, self.growth, self.cells,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec;
    use Growth::{Decreasing, Increasing};
    use Orientation::{Horizontal, Vertical};
    use ShipClass::{Large, Small};

    /// Place on a 4x4 board.
    fn place(class: ShipClass, o: Orientation, g: Growth, anchor: Cell) -> Result<Ship, BoardError>
    {
        Ship::new(class, o, g, anchor, BoardSize::new(4).unwrap())
    }

    #[test]
    fn cells_follow_orientation_and_growth() {
        let s = place(Large, Horizontal, Increasing, (1, 0)).unwrap();
        assert_eq!(s.cells(), &[(1, 0), (1, 1), (1, 2)]);

        let s = place(Large, Vertical, Decreasing, (3, 2)).unwrap();
        assert_eq!(s.cells(), &[(3, 2), (2, 2), (1, 2)]);

        let s = place(Small, Horizontal, Decreasing, (0, 1)).unwrap();
        assert_eq!(s.cells(), vec![(0, 1), (0, 0)].as_slice());
    }

    #[test]
    fn rejects_cells_off_the_board() {
        assert_eq!(
            place(Large, Horizontal, Increasing, (0, 2)),
            Err(BoardError::ShipOutOfBounds { row: 0, col: 4 })
        );
        assert_eq!(
            place(Small, Vertical, Decreasing, (0, 3)),
            Err(BoardError::ShipOutOfBounds { row: 0, col: 3 })
        );
        // perpendicular axis is checked too
        assert!(place(Small, Horizontal, Increasing, (4, 0)).is_err());
    }

    #[test]
    fn class_determines_length_and_symbol() {
        assert_eq!(Small.length(), 2);
        assert_eq!(Large.length(), 3);
        assert_ne!(Small.symbol(), Large.symbol());
    }
}
