use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size must be at least 1")]
    EmptyBoard,
    #[error("Too many mines: {mines} requested but a {size}x{size} board fits at most {max}")]
    TooManyMines {
        size: Coord,
        mines: CellCount,
        max: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
}

impl GameError {
    /// Whether the error rejects a board configuration rather than a position.
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::EmptyBoard | Self::TooManyMines { .. })
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
