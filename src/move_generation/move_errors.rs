use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::{Color, Square};

pub type MoveResult<T> = Result<T, MoveError>;

/// Why a commit or undo was refused. The game state is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    NoPieceAtSource(Square),
    NotSideToMove { square: Square, color: Color },
    IllegalDestination { from: Square, to: Square },
    EmptyHistory,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAtSource(square) => {
                write!(f, "no piece on ({}, {})", square.row(), square.col())
            }
            MoveError::NotSideToMove { square, color } => write!(
                f,
                "piece on ({}, {}) belongs to {color}, who is not to move",
                square.row(),
                square.col()
            ),
            MoveError::IllegalDestination { from, to } => write!(
                f,
                "({}, {}) -> ({}, {}) is not a legal move",
                from.row(),
                from.col(),
                to.row(),
                to.col()
            ),
            MoveError::EmptyHistory => write!(f, "no move to undo"),
        }
    }
}

impl Error for MoveError {}
