//! Domain models
//!
//! Players, cells, the board and the small enums describing game progress.
//! Models are plain data with the minimal logic needed to keep the board valid.

pub mod board;
pub mod constants;
pub mod errors;
pub mod player;
pub mod status;
