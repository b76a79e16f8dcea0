//! Random candidate placements for a single ship.
//!
//! A sample is only a candidate: the anchor range keeps the far end of the
//! ship on the board along its own axis, but the fleet builder still has to
//! check the full cell list for bounds and overlap before accepting it.

use rand::Rng;

use crate::config::BoardSize;
use crate::ship::{Cell, Growth, Orientation};

/// Pick horizontal or vertical with equal probability.
pub fn random_orientation<R: Rng + ?Sized>(rng: &mut R) -> Orientation {
    if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    }
}

/// Pick increasing or decreasing growth with equal probability.
pub fn random_growth<R: Rng + ?Sized>(rng: &mut R) -> Growth {
    if rng.random() {
        Growth::Increasing
    } else {
        Growth::Decreasing
    }
}

/// Draw an anchor for a ship of `length` cells growing in `growth` direction.
///
/// Both coordinates come from the same range whatever the orientation:
/// `[0, size - length]` when increasing, `[length - 1, size - 1]` when
/// decreasing. `length` must not exceed the board size.
pub fn sample_anchor<R: Rng + ?Sized>(
    rng: &mut R,
    size: BoardSize,
    length: usize,
    growth: Growth,
) -> Cell {
    let n = size.get();
    let (lo, hi) = match growth {
        Growth::Increasing => (0, n - length),
        Growth::Decreasing => (length - 1, n - 1),
    };
    (rng.random_range(lo..=hi), rng.random_range(lo..=hi))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn increasing_anchor_leaves_room_ahead() {
        let mut rng = SmallRng::seed_from_u64(7);
        let size = BoardSize::new(5).unwrap();
        for _ in 0..500 {
            let (r, c) = sample_anchor(&mut rng, size, 3, Growth::Increasing);
            assert!(r <= 2 && c <= 2);
        }
    }

    #[test]
    fn decreasing_anchor_leaves_room_behind() {
        let mut rng = SmallRng::seed_from_u64(7);
        let size = BoardSize::new(4).unwrap();
        for _ in 0..500 {
            let (r, c) = sample_anchor(&mut rng, size, 3, Growth::Decreasing);
            assert!((2..=3).contains(&r) && (2..=3).contains(&c));
        }
    }

    #[test]
    fn coin_flips_produce_both_sides() {
        let mut rng = SmallRng::seed_from_u64(99);
        let flips: std::vec::Vec<_> = (0..64).map(|_| random_orientation(&mut rng)).collect();
        assert!(flips.contains(&Orientation::Horizontal));
        assert!(flips.contains(&Orientation::Vertical));
        let flips: std::vec::Vec<_> = (0..64).map(|_| random_growth(&mut rng)).collect();
        assert!(flips.contains(&Growth::Increasing));
        assert!(flips.contains(&Growth::Decreasing));
    }
}
