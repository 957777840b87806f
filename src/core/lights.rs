//! The lit/unlit configuration of the board, packed into a bit-vector.
//!
//! Bit *i* (least significant first) holds tile *i*'s lit flag, so the
//! whole board fits in nine bits of a `u16` and a click is a single XOR
//! against the clicked tile's toggle mask. Toggling is linear over
//! GF(2): applying the same mask twice cancels, and distinct masks
//! commute, so only the multiset of clicks (reduced mod 2) determines
//! the resulting pattern.
//!
//! ## Usage
//!
//! ```
//! use lights_out::core::{GridPos, Lights};
//!
//! let board = Lights::from_bits(0b000_001_011);
//! assert!(board.is_lit(GridPos::new(0)));
//! assert!(board.is_lit(GridPos::new(1)));
//! assert!(board.is_lit(GridPos::new(3)));
//! assert_eq!(board.lit_count(), 3);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::position::{GridPos, TILE_COUNT};

/// Bitmask covering all nine tile bits.
const BOARD_BITS: u16 = (1 << TILE_COUNT) - 1;

/// Lit/unlit state of the whole board.
///
/// Invariant: no bit at or above position 9 is ever set. The checked
/// constructor enforces it; all operations preserve it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lights(u16);

impl Lights {
    /// The solved pattern: every light out.
    pub const DARK: Lights = Lights(0);

    /// Create a board state from raw bits.
    ///
    /// Panics if any bit above position 8 is set.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        assert!(bits <= BOARD_BITS, "lights value out of range");
        Self(bits)
    }

    /// Get the raw bit-vector value (0..512).
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Check whether a tile is lit.
    #[must_use]
    pub fn is_lit(self, pos: GridPos) -> bool {
        self.0 & (1 << pos.index()) != 0
    }

    /// Check whether every light is out.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        self.0 == 0
    }

    /// Flip the tiles selected by `mask`.
    ///
    /// XOR over GF(2): self-inverse, order-independent.
    #[must_use]
    pub const fn toggled(self, mask: Lights) -> Lights {
        Lights(self.0 ^ mask.0)
    }

    /// Number of lit tiles.
    #[must_use]
    pub const fn lit_count(self) -> u32 {
        self.0.count_ones()
    }

    /// Lit tiles in row-major order.
    #[must_use]
    pub fn lit_positions(self) -> SmallVec<[GridPos; 9]> {
        GridPos::all().filter(|&p| self.is_lit(p)).collect()
    }
}

impl std::fmt::Display for Lights {
    /// Renders the board as three rows of `#` (lit) and `.` (unlit).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..3 {
                let ch = if self.is_lit(GridPos::at(row, col)) { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
