//! # rust-lightsout
//!
//! A single-player Lights Out puzzle engine on a 3×3 grid.
//!
//! ## Design Principles
//!
//! 1. **Closed domain**: 9 tiles, 512 light patterns. Inputs are
//!    range-checked at type construction; out-of-range values are
//!    caller bugs and panic rather than surfacing as `Result`s.
//!
//! 2. **Pure transitions**: `new_game` and `click` return the next
//!    session. The hosting event loop owns the single writable
//!    instance; the engine has no global mutable state.
//!
//! 3. **GF(2) encoding**: the board is a 9-bit vector and a click is
//!    one XOR against a fixed toggle mask, so clicks self-cancel and
//!    commute.
//!
//! ## Architecture
//!
//! - **Deterministic RNG**: puzzle draws go through a seedable,
//!   forkable ChaCha8 wrapper so tests can reproduce every game.
//!
//! - **Persistent history**: the click history is an `im` vector;
//!   transitions and no-op clones are O(1) in its length.
//!
//! ## Modules
//!
//! - `core`: grid positions, the lights bitboard, click records, RNG
//! - `rules`: the fixed toggle-mask table
//! - `engine`: session state, transitions, win detection
//! - `board`: UI boundary (pixel geometry, input dispatch, scenes)

pub mod board;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ClickRecord, GameRng, GameRngState, GridPos, Lights, GRID_SIDE, TILE_COUNT,
};

pub use crate::rules::{mask_for, ToggleMask};

pub use crate::engine::Session;

pub use crate::board::{dispatch, BoardGeometry, CellFill, InputEvent, Scene, INSTRUCTIONS};
