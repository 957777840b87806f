//! Input events and their dispatch into the engine.
//!
//! The host event loop translates its toolkit's raw input into
//! `InputEvent` and calls `dispatch` once per discrete event on a
//! single logical thread. Dispatch is the only seam between the UI and
//! the engine: it resolves pointer coordinates through the geometry,
//! applies the matching transition, and hands back the next session for
//! the host to store.

use serde::{Deserialize, Serialize};

use super::geometry::BoardGeometry;
use crate::core::GameRng;
use crate::engine::Session;

/// Key that starts a new game.
const NEW_GAME_KEY: char = ' ';

/// A discrete input event from the host UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// A key press, carrying the typed character.
    KeyPress(char),
    /// A pointer click at pixel coordinates (origin top-left).
    PointerClick { x: u32, y: u32 },
}

/// Apply one input event and return the next session.
///
/// - Space starts a new game from any state, silently abandoning a
///   puzzle in progress; other keys are ignored.
/// - Pointer clicks inside the play area become tile clicks; clicks
///   outside it are dropped without reaching the engine.
#[must_use]
pub fn dispatch(
    session: &Session,
    rng: &mut GameRng,
    geometry: &BoardGeometry,
    event: InputEvent,
) -> Session {
    match event {
        InputEvent::KeyPress(NEW_GAME_KEY) => session.new_game(rng),
        InputEvent::KeyPress(_) => session.clone(),
        InputEvent::PointerClick { x, y } => match geometry.pos_at(x, y) {
            Some(pos) => session.click(pos),
            None => session.clone(),
        },
    }
}
