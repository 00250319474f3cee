use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::MoveDescription;

/// Rook rays followed by bishop rays.
pub fn generate_queen_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<MoveDescription>,
) {
    generate_rook_moves(game_state, from, color, out);
    generate_bishop_moves(game_state, from, color, out);
}
