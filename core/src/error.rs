use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    EmptyBoard,
    #[error("Board needs at least one mine")]
    NoMines,
    #[error("Too many mines, the first click needs a 3x3 safe area")]
    TooManyMines,
    #[error("Unknown difficulty, expected one of: easy, medium, hard")]
    UnknownDifficulty,
}

impl GameError {
    /// Whether this error was caused by an unplayable board configuration.
    pub const fn is_config_error(self) -> bool {
        matches!(self, Self::EmptyBoard | Self::NoMines | Self::TooManyMines)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
