pub const BOARD_SIZE: usize = 3;
pub const NUM_CELLS: usize = BOARD_SIZE * BOARD_SIZE;

pub const HUMAN_SYMBOL: char = 'X';
pub const COMPUTER_SYMBOL: char = 'O';
pub const COMPUTER_NAME: &str = "Computer";
pub const EMPTY_PLACEHOLDER: char = '_';

/// Winning lines as board index triples, in scan order:
/// rows, then columns, then the two diagonals.
pub const WINNING_LINES: [[usize; BOARD_SIZE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];
