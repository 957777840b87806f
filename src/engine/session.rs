//! Session state and the pure transition functions that drive a game.
//!
//! ## Session
//!
//! One playthrough of the puzzle, from process start onward:
//! - whether the player has started a first game (before that the host
//!   shows the instructions screen and clicks are ignored)
//! - the current lights pattern
//! - the click history for the current game
//!
//! ## Transitions
//!
//! `new_game` and `click` never mutate; they return the next session.
//! The hosting event loop holds the single writable instance and
//! replaces it on every event, so no hidden shared state exists
//! anywhere in the engine.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{ClickRecord, GameRng, GridPos, Lights};
use crate::rules::mask_for;

/// State of one player session.
///
/// Created at program start with the instructions screen pending and a
/// vacuously solved dark board the player never sees. The `im::Vector`
/// history makes the no-op clone path and every transition O(1) in the
/// history length.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    instructions_seen: bool,
    lights: Lights,
    history: Vector<ClickRecord>,
    sequence: u32,
}

impl Session {
    /// Start-of-process state: instructions pending, board dark.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a first game has been started.
    #[must_use]
    pub fn instructions_seen(&self) -> bool {
        self.instructions_seen
    }

    /// The current lights pattern.
    #[must_use]
    pub fn lights(&self) -> Lights {
        self.lights
    }

    /// Clicks applied to the current game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ClickRecord> {
        &self.history
    }

    /// Number of effective clicks this game.
    #[must_use]
    pub fn moves(&self) -> usize {
        self.history.len()
    }

    /// Check if the puzzle is won.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.lights.is_dark()
    }

    /// Start a fresh game.
    ///
    /// Marks the instructions as seen, clears the history, and draws a
    /// pattern uniformly from [1, 512) so the new board is never
    /// already solved. Works from any state, silently abandoning a
    /// puzzle in progress.
    #[must_use]
    pub fn new_game(&self, rng: &mut GameRng) -> Self {
        Self {
            instructions_seen: true,
            lights: Lights::from_bits(rng.gen_range(1..512)),
            history: Vector::new(),
            sequence: 0,
        }
    }

    /// Apply a click to a tile.
    ///
    /// Clicks before the first game and clicks after winning are
    /// defined no-ops, not errors; the session comes back unchanged.
    /// Otherwise the clicked tile's toggle mask is XORed into the
    /// lights and the click is recorded.
    #[must_use]
    pub fn click(&self, pos: GridPos) -> Self {
        if !self.instructions_seen || self.is_solved() {
            return self.clone();
        }

        let lights = self.lights.toggled(mask_for(pos).flips());
        let mut history = self.history.clone();
        history.push_back(ClickRecord::new(pos, self.sequence, lights));

        Self {
            instructions_seen: true,
            lights,
            history,
            sequence: self.sequence + 1,
        }
    }
}
