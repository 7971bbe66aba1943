use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Row or column outside `0..3`.
    InvalidCell { row: usize, col: usize },
    CellOccupied { row: usize, col: usize },
    /// A placement asked for `Mark::Empty`, or a side was assigned no mark.
    InvalidMark,
    /// The move selector was asked to move on a full board.
    NoLegalMove,
    GameAlreadyOver,
    NotYourTurn,
    InvalidBoard(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidCell { row, col } => {
                write!(f, "Cell ({}, {}) is outside the 3x3 board", row, col)
            }
            EngineError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already marked", row, col)
            }
            EngineError::InvalidMark => write!(f, "Mark must be X or O"),
            EngineError::NoLegalMove => write!(f, "No legal move: board is full"),
            EngineError::GameAlreadyOver => write!(f, "Game is already over"),
            EngineError::NotYourTurn => write!(f, "Not your turn"),
            EngineError::InvalidBoard(reason) => write!(f, "Invalid board: {}", reason),
        }
    }
}

impl std::error::Error for EngineError {}
