//! Committing a validated move to a `GameState`.
//!
//! `apply_move` performs the board-level transition: capture, en passant
//! removal, rook relocation for castling, castling-right and en passant
//! updates, promotion and the turn flip. `refresh_outcome_flags` then derives
//! check, checkmate and stalemate for the new side to move.

use log::trace;

use crate::game_state::chess_rules::{castling_rook_cols, PROMOTION_PIECE};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::pawn_moves::promotion_row;

/// Result of applying a move: the history record plus any pawn removed en passant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub record: MoveRecord,
    pub en_passant_victim: Option<Piece>,
}

/// Apply `mv` without validating it. Callers check legality first.
/// Returns `None` only when `mv.from` is empty.
pub fn apply_move(game_state: &mut GameState, mv: &MoveDescription) -> Option<AppliedMove> {
    let piece = game_state.board.piece_at(mv.from)?;
    let mover = piece.color;

    let mut record = MoveRecord {
        moved_piece: piece,
        from: mv.from,
        to: mv.to,
        captured_piece: game_state.board.piece_at(mv.to),
        is_en_passant: mv.is_en_passant,
        castling: mv.castling,
        was_check: false,
        was_checkmate: false,
    };

    let mut en_passant_victim = None;
    if mv.is_en_passant {
        if let Some(passed) = mv.to.offset(-mover.forward(), 0) {
            if let Some(victim) = game_state.board.piece_at(passed) {
                if victim == Piece::new(PieceKind::Pawn, mover.opposite()) {
                    game_state.board.take(passed);
                    en_passant_victim = Some(victim);
                }
            }
        }
        // Undo only puts a pawn back when one was really taken.
        record.is_en_passant = en_passant_victim.is_some();
    }

    if let Some(side) = mv.castling {
        let row = mv.from.row();
        let (rook_from, rook_to) = castling_rook_cols(side);
        if let (Some(rook_from), Some(rook_to)) =
            (Square::new(row, rook_from), Square::new(row, rook_to))
        {
            game_state.board.relocate(rook_from, rook_to);
        }
    }

    update_castling_rights(game_state, piece, mv.from, mv.to);

    game_state.en_passant_target = if piece.kind == PieceKind::Pawn
        && mv.from.row().abs_diff(mv.to.row()) == 2
    {
        mv.from.offset(mover.forward(), 0)
    } else {
        None
    };

    game_state.board.relocate(mv.from, mv.to);
    if piece.kind == PieceKind::Pawn && mv.to.row() == promotion_row(mover) {
        game_state
            .board
            .set(mv.to, Some(Piece::new(PROMOTION_PIECE, mover)));
    }

    game_state.side_to_move = mover.opposite();

    Some(AppliedMove {
        record,
        en_passant_victim,
    })
}

/// Recompute every derived flag for the side now to move.
pub fn refresh_outcome_flags(game_state: &mut GameState) {
    let side = game_state.side_to_move;
    game_state.clear_outcome_flags();
    game_state.in_check = is_king_in_check(&game_state.board, side);

    if !has_any_legal_move(game_state) {
        if game_state.in_check {
            game_state.checkmate = true;
        } else {
            game_state.stalemate = true;
        }
        game_state.game_over = true;
    }

    trace!(
        "status for {side}: in_check={} checkmate={} stalemate={}",
        game_state.in_check,
        game_state.checkmate,
        game_state.stalemate
    );
}

/// Moving the king drops both rights; moving a rook off its corner, or
/// capturing a rook standing on one, drops that side's right.
fn update_castling_rights(game_state: &mut GameState, piece: Piece, from: Square, to: Square) {
    if piece.kind == PieceKind::King {
        game_state.castling_rights &= !castling_rights_of(piece.color);
    }

    if piece.kind == PieceKind::Rook {
        game_state.castling_rights &= !corner_right(piece.color, from);
    }

    if let Some(target) = game_state.board.piece_at(to) {
        if target.kind == PieceKind::Rook {
            game_state.castling_rights &= !corner_right(target.color, to);
        }
    }
}

fn corner_right(color: Color, square: Square) -> CastlingRights {
    if square.row() != color.home_row() {
        return 0;
    }
    match square.col() {
        0 => castling_right(color, CastlingSide::Queenside),
        7 => castling_right(color, CastlingSide::Kingside),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    fn piece(kind: PieceKind, color: Color) -> Option<Piece> {
        Some(Piece::new(kind, color))
    }

    fn apply(state: &mut GameState, mv: MoveDescription) -> AppliedMove {
        apply_move(state, &mv).expect("source square should hold a piece")
    }

    #[test]
    fn double_push_sets_en_passant_target_and_next_move_clears_it() {
        let mut state = GameState::new_game();
        apply(&mut state, MoveDescription::quiet(sq(6, 4), sq(4, 4)));
        assert_eq!(state.en_passant_target, Some(sq(5, 4)));
        assert_eq!(state.side_to_move, Color::Black);

        apply(&mut state, MoveDescription::quiet(sq(0, 6), sq(2, 5)));
        assert_eq!(state.en_passant_target, None);
        assert_eq!(state.side_to_move, Color::White);
    }

    #[test]
    fn castling_moves_the_rook_and_clears_rights() {
        let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN");
        apply(
            &mut state,
            MoveDescription::castle(sq(7, 4), sq(7, 6), CastlingSide::Kingside),
        );
        assert_eq!(state.board.piece_at(sq(7, 5)), piece(PieceKind::Rook, Color::White));
        assert_eq!(state.board.piece_at(sq(7, 7)), None);
        assert_eq!(state.board.piece_at(sq(7, 6)), piece(PieceKind::King, Color::White));
        assert_eq!(state.castling_rights, CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);

        apply(
            &mut state,
            MoveDescription::castle(sq(0, 4), sq(0, 2), CastlingSide::Queenside),
        );
        assert_eq!(state.board.piece_at(sq(0, 3)), piece(PieceKind::Rook, Color::Black));
        assert_eq!(state.board.piece_at(sq(0, 0)), None);
        assert_eq!(state.castling_rights, 0);
    }

    #[test]
    fn rook_leaving_or_losing_its_corner_clears_one_right() {
        let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN");
        apply(&mut state, MoveDescription::quiet(sq(7, 0), sq(0, 0)));
        assert_eq!(state.castling_rights, CASTLE_WHITE_KINGSIDE | CASTLE_BLACK_KINGSIDE);
    }

    #[test]
    fn pawn_promotes_to_queen_even_when_capturing() {
        let mut state = GameState::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("FEN");
        let applied = apply(&mut state, MoveDescription::quiet(sq(1, 0), sq(0, 1)));
        assert_eq!(state.board.piece_at(sq(0, 1)), piece(PieceKind::Queen, Color::White));
        assert_eq!(applied.record.moved_piece, Piece::new(PieceKind::Pawn, Color::White));
        assert_eq!(applied.record.captured_piece, Some(Piece::new(PieceKind::Rook, Color::Black)));
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let mut state = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN");
        let applied = apply(&mut state, MoveDescription::en_passant(sq(3, 4), sq(2, 3)));
        assert_eq!(state.board.piece_at(sq(3, 3)), None);
        assert_eq!(state.board.piece_at(sq(2, 3)), piece(PieceKind::Pawn, Color::White));
        assert_eq!(applied.record.captured_piece, None);
        assert_eq!(applied.en_passant_victim, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert!(applied.record.is_en_passant);
    }

    #[test]
    fn en_passant_never_removes_a_friendly_pawn() {
        let mut state = GameState::from_fen("4k3/8/8/8/8/8/3PP3/4K3 w - e3 0 1").expect("FEN");
        let applied = apply(&mut state, MoveDescription::en_passant(sq(6, 3), sq(5, 4)));
        assert_eq!(state.board.piece_at(sq(6, 4)), piece(PieceKind::Pawn, Color::White));
        assert_eq!(applied.en_passant_victim, None);
        assert!(!applied.record.is_en_passant);
    }

    #[test]
    fn refresh_flags_detects_mate_and_stalemate() {
        let mut mated = GameState::from_fen("4k3/8/8/8/8/8/6PP/r6K w - - 0 1").expect("FEN");
        refresh_outcome_flags(&mut mated);
        assert!(mated.in_check && mated.checkmate && mated.game_over);
        assert!(!mated.stalemate);

        let mut stalemated = GameState::from_fen("k7/2Q5/8/8/8/8/8/7K b - - 0 1").expect("FEN");
        refresh_outcome_flags(&mut stalemated);
        assert!(stalemated.stalemate && stalemated.game_over);
        assert!(!stalemated.in_check && !stalemated.checkmate);
    }
}
