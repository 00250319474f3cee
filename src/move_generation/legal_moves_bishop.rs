use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::move_descriptions::MoveDescription;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<MoveDescription>,
) {
    let board = &game_state.board;
    push_targets(board, from, color, bishop_attacks(from, board.occupancy_all()), out);
}
