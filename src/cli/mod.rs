//! Command-line parsing

pub mod args;

pub use args::{parse, Args, HELP};
