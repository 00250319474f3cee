use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveDescription;

/// Push a plain move for every square in `targets`, minus squares held by `color`.
#[inline]
pub fn push_targets(
    board: &Board,
    from: Square,
    color: Color,
    targets: u64,
    out: &mut Vec<MoveDescription>,
) {
    let reachable = targets & !board.occupancy(color);
    out.extend(squares_in(reachable).map(|to| MoveDescription::quiet(from, to)));
}

#[inline]
pub fn is_enemy_of(board: &Board, square: Square, color: Color) -> bool {
    matches!(board.piece_at(square), Some(piece) if piece.color != color)
}
