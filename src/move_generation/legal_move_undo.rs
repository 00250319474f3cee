//! Reverting the most recent committed move.
//!
//! Board occupancy and the side to move are restored exactly. Castling rights
//! and the en passant target keep their post-move values, and the outcome
//! flags are cleared rather than recomputed; history records do not carry the
//! prior values, so undo cannot bring them back.

use crate::game_state::chess_rules::castling_rook_cols;
use crate::game_state::chess_types::*;

/// Put the pieces of `record` back. Returns the pawn restored after an en
/// passant capture so the caller can update its captured list.
pub fn revert_move(game_state: &mut GameState, record: &MoveRecord) -> Option<Piece> {
    let mover = record.moved_piece.color;
    let board = &mut game_state.board;

    board.set(record.from, Some(record.moved_piece));
    board.set(record.to, record.captured_piece);

    let mut restored_pawn = None;
    if record.is_en_passant {
        if let Some(passed) = record.to.offset(-mover.forward(), 0) {
            let pawn = Piece::new(PieceKind::Pawn, mover.opposite());
            board.set(passed, Some(pawn));
            restored_pawn = Some(pawn);
        }
    } else if let Some(side) = record.castling {
        let row = record.from.row();
        let (rook_home, rook_castled) = castling_rook_cols(side);
        if let (Some(home), Some(castled)) =
            (Square::new(row, rook_home), Square::new(row, rook_castled))
        {
            board.relocate(castled, home);
        }
    }

    game_state.side_to_move = game_state.side_to_move.opposite();
    game_state.clear_outcome_flags();

    restored_pawn
}
