//! Tic Tac Toe
//!
//! A console game of tic tac toe: the player plays X against a computer that
//! picks a random empty cell for O.
//!
//! # Modules
//!
//! - [`game_engine`] - Board state machine and win/draw detection
//! - [`models`] - Domain models (Board, Cell, Player, Status)
//! - [`services`] - The interactive session driving the engine
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of the board and messages
//! - [`cli`] - Command-line arguments
//! - [`logging`] - Diagnostic logging setup
//!
//! # Example
//!
//! ```rust,no_run
//! use tictactoe::io::TerminalIO;
//! use tictactoe::{GameEngine, Session};
//!
//! let mut input = TerminalIO;
//! let mut output = TerminalIO;
//! let mut session = Session::new(GameEngine::new(42), &mut input, &mut output);
//! session.run();
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod logging;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::GameEngine;
pub use models::board::{Board, Cell};
pub use models::errors::{BoardError, GameError, GameResult};
pub use models::player::Player;
pub use models::status::{Outcome, Status};
pub use services::session::{Session, SessionEnd};
