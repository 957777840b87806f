//! The UI boundary: pixel geometry, input dispatch, render model.
//!
//! Everything here is thin glue between a host toolkit and the engine.
//! The host translates raw input into `InputEvent`, calls `dispatch`,
//! stores the returned session, and paints `Scene::of` each frame.

pub mod event;
pub mod geometry;
pub mod scene;

pub use event::{dispatch, InputEvent};
pub use geometry::BoardGeometry;
pub use scene::{CellFill, Scene, INSTRUCTIONS};
