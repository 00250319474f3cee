//! Canonical chess-rule constants.
//!
//! Starting position, promotion piece, and the fixed files used by castling.

use crate::game_state::chess_types::{CastlingSide, PieceKind};

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Pawns reaching the last row always become this piece.
pub const PROMOTION_PIECE: PieceKind = PieceKind::Queen;

pub const KING_HOME_COL: u8 = 4;

/// Back-rank layout shared by both colors, indexed by column.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Column the king lands on when castling.
#[inline]
pub const fn castling_king_target_col(side: CastlingSide) -> u8 {
    match side {
        CastlingSide::Kingside => 6,
        CastlingSide::Queenside => 2,
    }
}

/// Rook `(from, to)` columns for a castling move.
#[inline]
pub const fn castling_rook_cols(side: CastlingSide) -> (u8, u8) {
    match side {
        CastlingSide::Kingside => (7, 5),
        CastlingSide::Queenside => (0, 3),
    }
}

/// Columns strictly between king and rook; all must be empty.
#[inline]
pub const fn castling_empty_cols(side: CastlingSide) -> &'static [u8] {
    match side {
        CastlingSide::Kingside => &[5, 6],
        CastlingSide::Queenside => &[1, 2, 3],
    }
}

/// Columns the king stands on, crosses, or lands on; none may be attacked.
#[inline]
pub const fn castling_safe_cols(side: CastlingSide) -> &'static [u8] {
    match side {
        CastlingSide::Kingside => &[4, 5, 6],
        CastlingSide::Queenside => &[4, 3, 2],
    }
}
