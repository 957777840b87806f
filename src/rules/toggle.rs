//! The fixed toggle-rule table.
//!
//! Clicking a tile flips itself plus a fixed neighborhood. Roughly:
//! corners flip themselves and their two orthogonal edge neighbors,
//! the center flips itself and all four edges. That summary is only
//! approximate; the nine-entry table below is the rule.
//!
//! The table is a static immutable lookup indexed by position. It is
//! the whole rules system: applying a click is one XOR against the
//! clicked tile's mask.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{GridPos, Lights};

/// The set of tiles flipped by clicking one position.
///
/// Every mask includes the clicked tile itself and flips at most five
/// tiles. Masks are precomputed once and immutable for the program's
/// lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ToggleMask(Lights);

impl ToggleMask {
    const fn new(bits: u16) -> Self {
        Self(Lights::from_bits(bits))
    }

    /// The flip set as a board-shaped bit-vector.
    #[must_use]
    pub const fn flips(self) -> Lights {
        self.0
    }

    /// Check whether this mask flips a tile.
    #[must_use]
    pub fn includes(self, pos: GridPos) -> bool {
        self.0.is_lit(pos)
    }

    /// Flipped tiles in row-major order.
    #[must_use]
    pub fn positions(self) -> SmallVec<[GridPos; 5]> {
        GridPos::all().filter(|&p| self.includes(p)).collect()
    }
}

/// Per-position flip sets, indexed by row-major tile index.
///
/// Bit i is tile i; the literals group bits by row with the bottom row
/// leftmost. Each entry lists its flipped tiles.
static TOGGLE_MASKS: [ToggleMask; 9] = [
    ToggleMask::new(0b000_001_011), // 0: {0, 1, 3}
    ToggleMask::new(0b000_000_111), // 1: {0, 1, 2}
    ToggleMask::new(0b000_110_110), // 2: {1, 2, 4, 5}
    ToggleMask::new(0b001_001_001), // 3: {0, 3, 6}
    ToggleMask::new(0b010_111_010), // 4: {1, 3, 4, 5, 7}
    ToggleMask::new(0b100_100_100), // 5: {2, 5, 8}
    ToggleMask::new(0b011_011_000), // 6: {3, 4, 6, 7}
    ToggleMask::new(0b111_000_000), // 7: {6, 7, 8}
    ToggleMask::new(0b110_110_000), // 8: {4, 5, 7, 8}
];

/// Get the toggle mask for a position.
///
/// Pure, total, immutable for the program's lifetime.
#[must_use]
pub fn mask_for(pos: GridPos) -> ToggleMask {
    TOGGLE_MASKS[pos.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The literal flip sets, position by position.
    #[test]
    fn test_table_flip_sets() {
        let expected: [&[u8]; 9] = [
            &[0, 1, 3],
            &[0, 1, 2],
            &[1, 2, 4, 5],
            &[0, 3, 6],
            &[1, 3, 4, 5, 7],
            &[2, 5, 8],
            &[3, 4, 6, 7],
            &[6, 7, 8],
            &[4, 5, 7, 8],
        ];

        for pos in GridPos::all() {
            let flips: Vec<u8> = mask_for(pos)
                .positions()
                .iter()
                .map(|p| p.index() as u8)
                .collect();
            assert_eq!(flips, expected[pos.index()], "flip set for {pos}");
        }
    }

    #[test]
    fn test_every_mask_flips_its_own_tile() {
        for pos in GridPos::all() {
            assert!(mask_for(pos).includes(pos), "{pos} must flip itself");
        }
    }

    #[test]
    fn test_masks_fit_smallvec_inline() {
        for pos in GridPos::all() {
            let count = mask_for(pos).positions().len();
            assert!((3..=5).contains(&count), "{pos} flips {count} tiles");
        }
    }

    #[test]
    fn test_corner_masks_as_decimals() {
        // The worked values the transition fixtures build on.
        assert_eq!(mask_for(GridPos::new(0)).flips().bits(), 11);
        assert_eq!(mask_for(GridPos::new(1)).flips().bits(), 7);
    }

    #[test]
    fn test_mask_serde_roundtrip() {
        let mask = mask_for(GridPos::new(4));
        let json = serde_json::to_string(&mask).unwrap();
        let back: ToggleMask = serde_json::from_str(&json).unwrap();

        assert_eq!(mask, back);
    }
}
