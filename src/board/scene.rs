//! Renderer-agnostic frame description.
//!
//! `Scene::of` projects a session onto what the host should paint this
//! frame: the instructions screen before the first game, or the 3×3
//! grid of cell fills with a solved flag afterwards. The host owns
//! fonts, colors beyond the two fills, and the actual drawing.

use serde::{Deserialize, Serialize};

use crate::core::{GridPos, Lights, TILE_COUNT};
use crate::engine::Session;

/// Text block shown before the first game.
pub const INSTRUCTIONS: &str = "LIGHTS OUT\n\n\
    Click a tile to flip it and its neighbors.\n\
    Turn every light off to win.\n\n\
    Press space to start a new game.";

/// Fill of one cell: white when lit, black when unlit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellFill {
    White,
    Black,
}

impl CellFill {
    fn for_tile(lights: Lights, pos: GridPos) -> Self {
        if lights.is_lit(pos) {
            CellFill::White
        } else {
            CellFill::Black
        }
    }
}

/// What the host paints for one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scene {
    /// The fixed instructional text block.
    Instructions,
    /// The grid, one fill per tile in row-major order. `solved` asks
    /// the host to overlay the SOLVED banner.
    Board {
        cells: [CellFill; TILE_COUNT],
        solved: bool,
    },
}

impl Scene {
    /// Project a session onto its frame description.
    #[must_use]
    pub fn of(session: &Session) -> Self {
        if !session.instructions_seen() {
            return Scene::Instructions;
        }

        let lights = session.lights();
        let mut cells = [CellFill::Black; TILE_COUNT];
        for pos in GridPos::all() {
            cells[pos.index()] = CellFill::for_tile(lights, pos);
        }

        Scene::Board {
            cells,
            solved: session.is_solved(),
        }
    }
}
