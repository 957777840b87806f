//! Grid position identification.
//!
//! The board is a 3×3 grid indexed in row-major order:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! ## Usage
//!
//! ```
//! use lights_out::core::GridPos;
//!
//! let center = GridPos::new(4);
//! assert_eq!(center.row(), 1);
//! assert_eq!(center.col(), 1);
//!
//! let all: Vec<_> = GridPos::all().collect();
//! assert_eq!(all.len(), 9);
//! ```

use serde::{Deserialize, Serialize};

/// Number of tiles on the board.
pub const TILE_COUNT: usize = 9;

/// Board side length in tiles.
pub const GRID_SIDE: u8 = 3;

/// Row-major tile index on the 3×3 board.
///
/// Indices 0..9 are the only valid values. Out-of-range construction is
/// a caller bug, not a runtime condition, and panics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos(u8);

impl GridPos {
    /// Create a position from a row-major index.
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn new(index: u8) -> Self {
        assert!((index as usize) < TILE_COUNT, "tile index out of range: {index}");
        Self(index)
    }

    /// Create a position from row and column coordinates.
    ///
    /// Panics if either coordinate is outside 0..3.
    #[must_use]
    pub fn at(row: u8, col: u8) -> Self {
        assert!(row < GRID_SIDE && col < GRID_SIDE, "cell ({row}, {col}) out of range");
        Self(row * GRID_SIDE + col)
    }

    /// Get the raw row-major index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row of this tile (0 = top).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.0 / GRID_SIDE
    }

    /// Column of this tile (0 = left).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.0 % GRID_SIDE
    }

    /// Iterate over all tiles in row-major order.
    ///
    /// ```
    /// use lights_out::core::GridPos;
    ///
    /// let tiles: Vec<_> = GridPos::all().collect();
    /// assert_eq!(tiles[0], GridPos::new(0));
    /// assert_eq!(tiles[8], GridPos::new(8));
    /// ```
    pub fn all() -> impl Iterator<Item = GridPos> {
        (0..TILE_COUNT as u8).map(GridPos)
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile {}", self.0)
    }
}
