//! The puzzle engine: session state, transitions, win detection.

pub mod session;

pub use session::Session;
