use crate::Player;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TicTacToeError>;

#[derive(Error, Debug)]
pub enum TicTacToeError {
    #[error("'{input}' is not a cell number (expected 0-8)")]
    InvalidInput { input: String },

    #[error("position {position} is out of range (must be 0-8)")]
    PositionOutOfRange { position: usize },

    #[error("cell {position} is already taken")]
    CellOccupied { position: usize },

    #[error("invalid cell value {value} (expected -1, 0 or 1)")]
    InvalidCellValue { value: i8 },

    #[error("the game is already over")]
    GameOver,

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: Player },

    #[error("the game is still in progress")]
    GameUnfinished,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("no moves available")]
    NoMovesAvailable,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
