use crate::game_state::chess_types::{CastlingSide, Square};

/// A candidate move produced by generation, before or after legality filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveDescription {
    pub from: Square,
    pub to: Square,
    pub is_en_passant: bool,
    pub castling: Option<CastlingSide>,
}

impl MoveDescription {
    #[inline]
    pub const fn quiet(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            is_en_passant: false,
            castling: None,
        }
    }

    #[inline]
    pub const fn en_passant(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            is_en_passant: true,
            castling: None,
        }
    }

    #[inline]
    pub const fn castle(from: Square, to: Square, side: CastlingSide) -> Self {
        Self {
            from,
            to,
            is_en_passant: false,
            castling: Some(side),
        }
    }
}
