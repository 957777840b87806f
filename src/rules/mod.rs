//! Toggle rules: which tiles a click flips.
//!
//! The rules are a fixed nine-entry lookup, not behavior games can
//! swap out. The session layer calls `mask_for` and XORs the result
//! into the board.

pub mod toggle;

pub use toggle::{mask_for, ToggleMask};
