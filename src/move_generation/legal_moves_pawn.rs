//! Pawn move generation: pushes, double pushes, captures and en passant.
//!
//! Promotion is not a separate candidate. A move landing on the last row is
//! emitted as an ordinary move and rewritten when it is applied.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_enemy_of;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::pawn_moves::pawn_start_row;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<MoveDescription>,
) {
    let board = &game_state.board;
    let forward = color.forward();

    if let Some(one_step) = from.offset(forward, 0) {
        if board.piece_at(one_step).is_none() {
            out.push(MoveDescription::quiet(from, one_step));

            if from.row() == pawn_start_row(color) {
                if let Some(two_step) = from.offset(2 * forward, 0) {
                    if board.piece_at(two_step).is_none() {
                        out.push(MoveDescription::quiet(from, two_step));
                    }
                }
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let Some(to) = from.offset(forward, d_col) else {
            continue;
        };

        if is_enemy_of(board, to, color) {
            out.push(MoveDescription::quiet(from, to));
        } else if game_state.en_passant_target == Some(to)
            && holds_passed_enemy_pawn(board, to, color)
        {
            out.push(MoveDescription::en_passant(from, to));
        }
    }
}

/// The en passant target only counts while an enemy pawn sits just past it.
fn holds_passed_enemy_pawn(board: &Board, target: Square, color: Color) -> bool {
    target
        .offset(-color.forward(), 0)
        .and_then(|passed| board.piece_at(passed))
        .is_some_and(|piece| piece == Piece::new(PieceKind::Pawn, color.opposite()))
}
