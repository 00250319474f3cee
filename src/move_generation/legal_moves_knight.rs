use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::push_targets;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::move_descriptions::MoveDescription;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: Square,
    color: Color,
    out: &mut Vec<MoveDescription>,
) {
    push_targets(&game_state.board, from, color, knight_attacks(from), out);
}
