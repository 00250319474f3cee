//! Flat 64-square mailbox board.
//!
//! `Board` is `Copy`, so move simulation works on a cheap local copy that
//! never aliases the live board.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard opening layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().copied().enumerate() {
            let col = col as u8;
            for color in [Color::White, Color::Black] {
                let pawn_row = (color.home_row() as i8 + color.forward()) as u8;
                if let Some(sq) = Square::new(color.home_row(), col) {
                    board.set(sq, Some(Piece::new(kind, color)));
                }
                if let Some(sq) = Square::new(pawn_row, col) {
                    board.set(sq, Some(Piece::new(PieceKind::Pawn, color)));
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.index()] = piece;
    }

    /// Remove and return whatever stands on `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// Move the occupant of `from` onto `to`, returning what was on `to`.
    #[inline]
    pub fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.take(from);
        let captured = self.take(to);
        self.set(to, moving);
        captured
    }

    pub fn clear(&mut self) {
        self.squares = [None; 64];
    }

    /// Every occupied square with its piece, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(index, piece)| Some((Square::from_index(index as u8)?, (*piece)?)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn occupancy_all(&self) -> u64 {
        self.pieces().fold(0u64, |acc, (sq, _)| acc | sq.mask())
    }

    pub fn occupancy(&self, color: Color) -> u64 {
        self.pieces_of(color).fold(0u64, |acc, (sq, _)| acc | sq.mask())
    }

    /// First king of `color` in index order, if any.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}
