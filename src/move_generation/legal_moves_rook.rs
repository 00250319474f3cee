//! Rook move generation.
//!
//! Rays stop at the edge or the first occupied square; an enemy blocker is a
//! capture, a friendly blocker is dropped.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<MoveDescription>,
) {
    let board = &game_state.board;
    push_targets(board, from, color, rook_attacks(from, board.occupancy_all()), out);
}
