//! Click history records.
//!
//! Every effective click (one that actually flipped lights) is recorded
//! in the session history. Because toggling is XOR, the history is also
//! a replay script: reapplying the recorded positions to the starting
//! pattern reproduces every intermediate board.

use serde::{Deserialize, Serialize};

use super::lights::Lights;
use super::position::GridPos;

/// A recorded click with the board it produced.
///
/// Used for:
/// - Replay/debugging
/// - Move counting in a host UI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickRecord {
    /// The tile that was clicked.
    pub pos: GridPos,

    /// Sequence number within the game (0-based, for ordering).
    pub sequence: u32,

    /// Board state after the click resolved.
    pub lights_after: Lights,
}

impl ClickRecord {
    /// Create a new click record.
    #[must_use]
    pub fn new(pos: GridPos, sequence: u32, lights_after: Lights) -> Self {
        Self {
            pos,
            sequence,
            lights_after,
        }
    }
}
