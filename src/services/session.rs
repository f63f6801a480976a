use std::io;

use tracing::{debug, info};

use crate::game_engine::GameEngine;
use crate::io::{InputReader, OutputWriter};
use crate::models::constants::NUM_CELLS;
use crate::models::errors::{BoardError, GameError, GameResult};
use crate::models::player::Player;
use crate::models::status::{Outcome, Status};
use crate::ui::presenters::{BoardPresenter, GamePresenter};

/// How a session came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player answered N to the replay prompt.
    Declined,
    /// The input stream ran out.
    InputExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Replay {
    Again,
    Quit,
}

/// Runs rounds against the computer until the player declines or input ends.
pub struct Session<'a> {
    engine: GameEngine,
    io: &'a mut dyn InputReader,
    output: &'a mut dyn OutputWriter,
}

impl<'a> Session<'a> {
    pub fn new(
        engine: GameEngine,
        io: &'a mut dyn InputReader,
        output: &'a mut dyn OutputWriter,
    ) -> Self {
        Session { engine, io, output }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut GameEngine {
        &mut self.engine
    }

    pub fn run(&mut self) -> SessionEnd {
        GamePresenter::show_welcome(self.output);

        let end = loop {
            if self.acquire_name().is_err() {
                break SessionEnd::InputExhausted;
            }

            while self.engine.status() == Status::Running {
                if let Err(err) = self.process_turn() {
                    if err.is_end_of_input() {
                        return self.end(SessionEnd::InputExhausted);
                    }
                }
            }

            match self.prompt_replay() {
                Ok(Replay::Again) => continue,
                Ok(Replay::Quit) => break SessionEnd::Declined,
                Err(_) => break SessionEnd::InputExhausted,
            }
        };
        self.end(end)
    }

    fn end(&self, end: SessionEnd) -> SessionEnd {
        info!(?end, "session ended");
        end
    }

    /// Reads the player's name and starts a round.
    ///
    /// Any line that can be read is a valid name, including an empty one.
    /// On failure the engine stays idle.
    pub fn acquire_name(&mut self) -> GameResult<()> {
        let name = match self.io.read_line("ENTER YOUR NAME:") {
            Ok(name) => name,
            Err(err) => {
                debug!(%err, "name not read");
                self.output.writeln(&GameError::InvalidName.to_string());
                return Err(GameError::InvalidName);
            }
        };

        let player = Player::human(name);
        GamePresenter::show_turn(&player, self.output);
        self.engine.begin_round(player);
        BoardPresenter::show_board(self.engine.board(), self.output);
        Ok(())
    }

    /// Reads and plays one human move.
    ///
    /// Unusable input prints "Invalid Number." and leaves the board as it
    /// was. The returned error is `Io` when the input has run out. A taken
    /// cell is not an error: it is reported and the human moves again.
    pub fn process_turn(&mut self) -> GameResult<()> {
        let index = match self.read_move() {
            Ok(index) => index,
            Err(err) => return Err(self.reject_move(err)),
        };

        match self.engine.play_turn(index) {
            Ok(Some(outcome)) => self.conclude(outcome),
            Ok(None) => BoardPresenter::show_board(self.engine.board(), self.output),
            Err(BoardError::CellTaken(_)) => GamePresenter::show_cell_taken(self.output),
            Err(BoardError::OutOfRange(_)) => {
                return Err(self.reject_move(GameError::InvalidNumber));
            }
        }
        Ok(())
    }

    fn reject_move(&mut self, err: GameError) -> GameError {
        self.output.writeln(&GameError::InvalidNumber.to_string());
        err
    }

    fn read_move(&mut self) -> GameResult<usize> {
        match self.io.read_line("YOUR MOVE (0-8):") {
            Ok(input) => parse_cell(&input),
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => Err(err.into()),
            Err(err) => {
                debug!(%err, "move not read");
                Err(GameError::InvalidNumber)
            }
        }
    }

    fn conclude(&mut self, outcome: Outcome) {
        BoardPresenter::show_board(self.engine.board(), self.output);
        if let Some(human) = self.engine.human() {
            GamePresenter::show_outcome(outcome, human, self.output);
        }
        self.engine.finish();
    }

    /// Asks whether to play again, retrying until a usable answer is read.
    fn prompt_replay(&mut self) -> GameResult<Replay> {
        loop {
            let answer = self.io.read_line("PLAY AGAIN? (Y/N)");
            if let Some(choice) = answer.as_deref().ok().and_then(parse_replay) {
                debug!(?choice, "replay answered");
                return Ok(choice);
            }

            self.output.writeln(&GameError::InvalidOption.to_string());
            match answer {
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => return Err(err.into()),
                _ => continue,
            }
        }
    }
}

/// Parses a move as a board index in `0..=8`. Padding is not stripped.
pub fn parse_cell(input: &str) -> GameResult<usize> {
    match input.parse::<i64>() {
        Ok(n) if (0..NUM_CELLS as i64).contains(&n) => Ok(n as usize),
        _ => Err(GameError::InvalidNumber),
    }
}

/// Y anywhere in the answer means play again, checked before N.
///
/// This is a containment check on the uppercased line, so "maybe" counts
/// as yes even though it reads like a non-answer.
fn parse_replay(input: &str) -> Option<Replay> {
    let answer = input.to_uppercase();
    if answer.contains('Y') {
        Some(Replay::Again)
    } else if answer.contains('N') {
        Some(Replay::Quit)
    } else {
        None
    }
}
