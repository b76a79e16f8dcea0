//! Fleet generation by rejection sampling.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;

use crate::common::BoardError;
use crate::config::BoardSize;
use crate::sampler::{random_growth, random_orientation, sample_anchor};
use crate::ship::{Cell, Ship, ShipClass};

/// The ships hidden on one board. Fixed after setup.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Fleet {
    size: BoardSize,
    ships: Vec<Ship>,
}

/// Draw one candidate for `class` and keep it only if every cell is on the
/// board and unclaimed.
fn try_place<R: Rng + ?Sized>(
    rng: &mut R,
    size: BoardSize,
    class: ShipClass,
    claimed: &BTreeSet<Cell>,
) -> Option<Ship> {
    let orientation = random_orientation(rng);
    let growth = random_growth(rng);
    let anchor = sample_anchor(rng, size, class.length(), growth);
    let ship = match Ship::new(class, orientation, growth, anchor, size) {
        Ok(ship) => ship,
        Err(e) => {
            log::trace!("rejected {:?} at {:?}: {}", class, anchor, e);
            return None;
        }
    };
    if let Some(cell) = ship.cells().iter().find(|c| claimed.contains(*c)) {
        log::trace!("rejected {:?} at {:?}: overlap at {:?}", class, anchor, cell);
        return None;
    }
    Some(ship)
}

impl Fleet {
    /// Generate the fleet for `size`, placing ships in composition order.
    ///
    /// Each ship is resampled until a candidate fits. There is no retry cap:
    /// the supported sizes always leave room, so the loop ends with
    /// probability one, usually within a handful of draws.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, size: BoardSize) -> Self {
        let composition = size.fleet_composition();
        let mut claimed = BTreeSet::new();
        let mut ships = Vec::with_capacity(composition.len());
        for &class in composition {
            let mut attempts = 1usize;
            let ship = loop {
                if let Some(ship) = try_place(rng, size, class, &claimed) {
                    break ship;
                }
                attempts += 1;
            };
            log::debug!("placed {:?} after {} attempt(s)", ship, attempts);
            claimed.extend(ship.cells().iter().copied());
            ships.push(ship);
        }
        Fleet { size, ships }
    }

    /// Build a fleet from ships placed by hand, checking bounds and overlap.
    pub fn from_ships(size: BoardSize, ships: Vec<Ship>) -> Result<Self, BoardError> {
        let n = size.get();
        let mut claimed = BTreeSet::new();
        for ship in &ships {
            for &(row, col) in ship.cells() {
                if row >= n || col >= n {
                    return Err(BoardError::ShipOutOfBounds { row, col });
                }
                if !claimed.insert((row, col)) {
                    return Err(BoardError::ShipOverlaps { row, col });
                }
            }
        }
        Ok(Fleet { size, ships })
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship occupying `cell`, if any.
    pub fn ship_at(&self, cell: Cell) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(cell))
    }

    /// Number of cells a player has to find to win.
    pub fn total_cells(&self) -> usize {
        self.ships.iter().map(Ship::length).sum()
    }
}
