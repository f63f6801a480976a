//! Game services
//!
//! The interactive session that drives a GameEngine through prompts.

pub mod session;
