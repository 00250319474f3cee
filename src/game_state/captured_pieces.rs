//! Captured-piece lists kept for display, grouped by capturing color.

use crate::game_state::chess_types::{Color, Piece};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    by_white: Vec<Piece>,
    by_black: Vec<Piece>,
}

impl CapturedPieces {
    /// Pieces taken by `capturer`, oldest first.
    #[inline]
    pub fn captured_by(&self, capturer: Color) -> &[Piece] {
        match capturer {
            Color::White => &self.by_white,
            Color::Black => &self.by_black,
        }
    }

    #[inline]
    pub fn push(&mut self, capturer: Color, piece: Piece) {
        self.list_mut(capturer).push(piece);
    }

    /// Drop the most recent entry equal to `piece`. Returns whether one was found.
    pub fn remove_last(&mut self, capturer: Color, piece: Piece) -> bool {
        let list = self.list_mut(capturer);
        match list.iter().rposition(|p| *p == piece) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    fn list_mut(&mut self, capturer: Color) -> &mut Vec<Piece> {
        match capturer {
            Color::White => &mut self.by_white,
            Color::Black => &mut self.by_black,
        }
    }
}
