//! Core value types shared by every part of the rules engine.
//!
//! Squares use `(row, col)` coordinates where row 0 is Black's back rank and
//! row 7 is White's. The flat index `row * 8 + col` is used for bit masks.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;
pub use crate::game_state::move_record::MoveRecord;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step. White advances toward row 0.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row holding this color's king and rooks at the start.
    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece is a plain value; copying it never shares identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }
}

/// Board coordinate. Both fields are always in `0..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Returns `None` for coordinates off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Signed variant of [`Square::new`], convenient for caller-supplied input.
    #[inline]
    pub fn try_from_coords(row: i32, col: i32) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Self {
                row: index / 8,
                col: index % 8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub const fn index(self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }

    #[inline]
    pub const fn mask(self) -> u64 {
        1u64 << self.index()
    }

    /// Step by a row/column delta, staying on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row < 0 || row > 7 || col < 0 || col > 7 {
            None
        } else {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        }
    }
}

/// Iterate the squares of a bit mask, lowest index first.
pub fn squares_in(mask: u64) -> impl Iterator<Item = Square> {
    let mut remaining = mask;
    std::iter::from_fn(move || {
        if remaining == 0 {
            return None;
        }
        let index = remaining.trailing_zeros() as u8;
        remaining &= remaining - 1;
        Square::from_index(index)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

/// Four independent castling flags packed into one byte.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_ALL: CastlingRights = 0b1111;

#[inline]
pub const fn castling_right(color: Color, side: CastlingSide) -> CastlingRights {
    match (color, side) {
        (Color::White, CastlingSide::Kingside) => CASTLE_WHITE_KINGSIDE,
        (Color::White, CastlingSide::Queenside) => CASTLE_WHITE_QUEENSIDE,
        (Color::Black, CastlingSide::Kingside) => CASTLE_BLACK_KINGSIDE,
        (Color::Black, CastlingSide::Queenside) => CASTLE_BLACK_QUEENSIDE,
    }
}

#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    castling_right(color, CastlingSide::Kingside) | castling_right(color, CastlingSide::Queenside)
}
