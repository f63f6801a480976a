use std::collections::HashSet;

use super::constants::{BOARD_SIZE, EMPTY_PLACEHOLDER, NUM_CELLS};
use super::errors::BoardError;
use super::player::Player;

/// One board position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Player),
}

impl Cell {
    /// Character shown for this cell when the board is rendered.
    pub fn placeholder(&self) -> char {
        match self {
            Cell::Empty => EMPTY_PLACEHOLDER,
            Cell::Filled(player) => player.symbol(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// The 3x3 grid, stored row-major: indices 0-2 are the top row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; NUM_CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cells(&self) -> &[Cell; NUM_CELLS] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Mark an empty cell for `player`. A cell is only ever filled once per round.
    pub fn place(&mut self, index: usize, player: &Player) -> Result<(), BoardError> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(BoardError::OutOfRange(index))?;
        if !cell.is_empty() {
            return Err(BoardError::CellTaken(index));
        }
        *cell = Cell::Filled(player.clone());
        Ok(())
    }

    /// Indices of all empty cells, ascending.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Indices of the cells carrying `symbol`.
    pub fn indices_marked(&self, symbol: char) -> HashSet<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| matches!(cell, Cell::Filled(p) if p.symbol() == symbol))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn reset(&mut self) {
        self.cells = Default::default();
    }

    /// Placeholders of one row (0-based).
    pub fn row(&self, row: usize) -> [char; BOARD_SIZE] {
        let start = row * BOARD_SIZE;
        std::array::from_fn(|col| self.cells[start + col].placeholder())
    }
}
