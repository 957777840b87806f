//! Core engine types: grid positions, the lights bitboard, click
//! records, RNG.
//!
//! This module contains the fundamental building blocks the rest of the
//! engine composes. Nothing here knows about toggle rules or sessions.

pub mod click;
pub mod lights;
pub mod position;
pub mod rng;

pub use click::ClickRecord;
pub use lights::Lights;
pub use position::{GridPos, GRID_SIDE, TILE_COUNT};
pub use rng::{GameRng, GameRngState};
