//! King move generation, including castling candidates.

use crate::game_state::chess_rules::{
    castling_empty_cols, castling_king_target_col, castling_rook_cols, castling_safe_cols,
    KING_HOME_COL,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::king_moves::king_attacks;
use crate::moves::move_descriptions::MoveDescription;

pub fn generate_king_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<MoveDescription>,
) {
    push_targets(&game_state.board, from, color, king_attacks(from), out);

    for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
        if let Some(castle) = castling_move(game_state, from, color, side) {
            out.push(castle);
        }
    }
}

/// Castling needs the right, an empty path between king and rook, and no
/// attacked square among the king's origin, transit and destination.
fn castling_move(
    game_state: &GameState,
    from: Square,
    color: Color,
    side: CastlingSide,
) -> Option<MoveDescription> {
    if !game_state.has_castling_right(color, side) {
        return None;
    }

    let board = &game_state.board;
    let row = color.home_row();
    if from != Square::new(row, KING_HOME_COL)? {
        return None;
    }

    let (rook_col, _) = castling_rook_cols(side);
    let rook = board.piece_at(Square::new(row, rook_col)?)?;
    if rook != Piece::new(PieceKind::Rook, color) {
        return None;
    }

    for &col in castling_empty_cols(side) {
        if board.piece_at(Square::new(row, col)?).is_some() {
            return None;
        }
    }

    let enemy = color.opposite();
    for &col in castling_safe_cols(side) {
        if is_square_attacked(board, Square::new(row, col)?, enemy) {
            return None;
        }
    }

    let to = Square::new(row, castling_king_target_col(side))?;
    Some(MoveDescription::castle(from, to, side))
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::MoveDescription;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    fn castles(fen: &str, from: Square, color: Color) -> Vec<CastlingSide> {
        let state = GameState::from_fen(fen).expect("test FEN should parse");
        let mut out = Vec::new();
        generate_king_moves(&state, from, color, &mut out);
        out.iter().filter_map(|m| m.castling).collect()
    }

    #[test]
    fn open_back_rank_offers_both_castles() {
        let sides = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", sq(7, 4), Color::White);
        assert_eq!(sides, vec![CastlingSide::Kingside, CastlingSide::Queenside]);
        let sides = castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", sq(0, 4), Color::Black);
        assert_eq!(sides, vec![CastlingSide::Kingside, CastlingSide::Queenside]);
    }

    #[test]
    fn castle_destination_is_two_files_over() {
        let state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN");
        let mut out = Vec::new();
        generate_king_moves(&state, sq(7, 4), Color::White, &mut out);
        assert!(out.contains(&MoveDescription::castle(sq(7, 4), sq(7, 6), CastlingSide::Kingside)));
        let queenside = MoveDescription::castle(sq(7, 4), sq(7, 2), CastlingSide::Queenside);
        assert!(out.contains(&queenside));
    }

    #[test]
    fn missing_right_or_blocked_path_forbids_castling() {
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1", sq(7, 4), Color::White).is_empty());
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1", sq(7, 4), Color::White),
            vec![CastlingSide::Kingside]
        );
    }

    #[test]
    fn attacked_transit_square_forbids_castling() {
        // Black rook on f8 covers f1, which the king crosses when castling short.
        assert_eq!(
            castles("r3kr2/8/8/8/8/8/8/R3K2R w KQq - 0 1", sq(7, 4), Color::White),
            vec![CastlingSide::Queenside]
        );
        // Black rook on c8 covers the queenside landing square.
        assert_eq!(
            castles("2r1k2r/8/8/8/8/8/8/R3K2R w KQk - 0 1", sq(7, 4), Color::White),
            vec![CastlingSide::Kingside]
        );
    }

    #[test]
    fn king_in_check_cannot_castle() {
        assert!(castles("4r2k/8/8/8/8/8/8/R3K2R w KQ - 0 1", sq(7, 4), Color::White).is_empty());
    }

    #[test]
    fn attacked_b_file_square_does_not_stop_long_castle() {
        // Only the squares the king touches must be safe; b1 may be attacked.
        assert_eq!(
            castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", sq(7, 4), Color::White),
            vec![CastlingSide::Queenside]
        );
    }
}
