//! Game state machine
//!
//! The GameEngine owns the board, the round status and the human player, and
//! applies moves, the computer's reply and win/draw detection. It performs no
//! I/O; the session layer decides what to show and when to prompt.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::models::board::Board;
use crate::models::constants::{COMPUTER_SYMBOL, HUMAN_SYMBOL, WINNING_LINES};
use crate::models::errors::BoardError;
use crate::models::player::Player;
use crate::models::status::{Outcome, Status};

/// Core game engine that manages board state and win/draw conditions
pub struct GameEngine {
    board: Board,
    status: Status,
    human: Option<Player>,
    computer: Player,
    rng: StdRng,
}

impl GameEngine {
    /// Creates an idle engine with an empty board
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the computer's move selection
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            status: Status::Idle,
            human: None,
            computer: Player::computer(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// The human player of the current round, once a name has been entered.
    pub fn human(&self) -> Option<&Player> {
        self.human.as_ref()
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// Starts a round for `player` on a fresh board.
    pub fn begin_round(&mut self, player: Player) {
        debug!(name = player.name(), "round started");
        self.board.reset();
        self.human = Some(player);
        self.status = Status::Running;
    }

    /// Plays the human's mark at `index`, then the computer's reply, then
    /// evaluates the board.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(outcome))` if the round ended; status is then `GameOver`
    /// * `Ok(None)` if play continues, or no round is running
    /// * `Err(BoardError::CellTaken)` if the cell is filled; nothing else happens
    pub fn play_turn(&mut self, index: usize) -> Result<Option<Outcome>, BoardError> {
        let running = self.status == Status::Running;
        let Some(human) = self.human.as_ref().filter(|_| running) else {
            warn!(index, status = ?self.status, "move ignored, no round running");
            return Ok(None);
        };

        self.board.place(index, human)?;
        debug!(index, "human placed mark");

        self.computer_move();
        Ok(self.evaluate_outcome())
    }

    /// Fills a uniformly random empty cell for the computer.
    ///
    /// Returns the chosen index, or `None` when the board is full. A failed
    /// placement is logged and the round carries on.
    pub fn computer_move(&mut self) -> Option<usize> {
        let empty = self.board.empty_indices();
        let index = *empty.choose(&mut self.rng)?;

        match self.board.place(index, &self.computer) {
            Ok(()) => {
                debug!(index, "computer placed mark");
                Some(index)
            }
            Err(err) => {
                warn!(%err, "computer move failed");
                None
            }
        }
    }

    /// Checks the board for a finished round.
    ///
    /// Lines are scanned in `WINNING_LINES` order and, within each line, the
    /// human is checked before the computer; the first match decides. With
    /// no winner, a full board while running is a draw. A detected outcome
    /// moves the status to `GameOver`.
    pub fn evaluate_outcome(&mut self) -> Option<Outcome> {
        let xs = self.board.indices_marked(HUMAN_SYMBOL);
        let os = self.board.indices_marked(COMPUTER_SYMBOL);

        let winner = WINNING_LINES.iter().find_map(|line| {
            if line.iter().all(|i| xs.contains(i)) {
                Some(Outcome::Won)
            } else if line.iter().all(|i| os.contains(i)) {
                Some(Outcome::Lost)
            } else {
                None
            }
        });

        let outcome = match winner {
            Some(outcome) => outcome,
            None if self.board.is_full() && self.status == Status::Running => Outcome::Draw,
            None => return None,
        };

        info!(?outcome, "round over");
        self.status = Status::GameOver;
        Some(outcome)
    }

    /// Clears the board and returns to `Idle` after a round ends.
    pub fn finish(&mut self) {
        self.board.reset();
        self.status = Status::Idle;
    }
}
