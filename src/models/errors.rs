use thiserror::Error;

/// Recoverable input errors. The display text is what the player sees.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Invalid Name.")]
    InvalidName,
    #[error("Invalid Number.")]
    InvalidNumber,
    #[error("Wrong option, type either 'Y' of 'N'")]
    InvalidOption,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

/// Reasons a mark could not be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell {0} is outside the board")]
    OutOfRange(usize),
    #[error("cell {0} is already taken")]
    CellTaken(usize),
}

impl GameError {
    /// True when the underlying input stream has no more lines.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, GameError::Io(err) if err.kind() == std::io::ErrorKind::UnexpectedEof)
    }
}
