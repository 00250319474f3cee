//! Human-readable game status.

use std::fmt;

use crate::game_state::chess_types::{Color, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Checkmate { winner: Color },
    Stalemate,
    Check { side: Color },
    ToMove { side: Color },
}

impl GameStatus {
    /// Derive the status from the outcome flags. After checkmate the turn has
    /// already passed to the mated side, so the winner is the other color.
    pub fn from_state(state: &GameState) -> Self {
        if state.checkmate {
            GameStatus::Checkmate {
                winner: state.side_to_move.opposite(),
            }
        } else if state.stalemate {
            GameStatus::Stalemate
        } else if state.in_check {
            GameStatus::Check {
                side: state.side_to_move,
            }
        } else {
            GameStatus::ToMove {
                side: state.side_to_move,
            }
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Checkmate { winner } => write!(f, "{winner} wins by checkmate!"),
            GameStatus::Stalemate => write!(f, "Game drawn by stalemate!"),
            GameStatus::Check { side } => write!(f, "{side} is in check!"),
            GameStatus::ToMove { side } => write!(f, "{side} to move"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkmate_names_the_side_not_to_move() {
        let mut state = GameState::new_game();
        state.side_to_move = Color::White;
        state.in_check = true;
        state.checkmate = true;
        state.game_over = true;
        let status = GameStatus::from_state(&state);
        assert_eq!(status, GameStatus::Checkmate { winner: Color::Black });
        assert_eq!(status.to_string(), "Black wins by checkmate!");
        assert!(status.is_terminal());
    }

    #[test]
    fn quiet_position_reports_side_to_move() {
        let mut state = GameState::new_game();
        assert_eq!(GameStatus::from_state(&state).to_string(), "White to move");
        state.side_to_move = Color::Black;
        state.in_check = true;
        assert_eq!(GameStatus::from_state(&state).to_string(), "Black is in check!");
        state.in_check = false;
        state.stalemate = true;
        assert_eq!(GameStatus::from_state(&state).to_string(), "Game drawn by stalemate!");
    }
}
