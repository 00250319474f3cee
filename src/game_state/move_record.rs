use crate::game_state::chess_types::*;

/// One committed move, pushed onto the history stack before the board changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Snapshot taken before the move, so a promoted pawn is still a pawn here.
    pub moved_piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Piece standing on `to` before the move. En passant captures leave this empty.
    pub captured_piece: Option<Piece>,
    pub is_en_passant: bool,
    pub castling: Option<CastlingSide>,

    // Back-annotated once the opponent's status is known.
    pub was_check: bool,
    pub was_checkmate: bool,
}
