//! User interface and presentation
//!
//! Presenters format game state for the player, keeping text layout out of
//! the engine and session logic.

pub mod presenters;
