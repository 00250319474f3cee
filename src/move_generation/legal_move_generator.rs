//! Pseudo-legal generation plus the king-safety filter.
//!
//! Each candidate is played on a copied board (piece relocation plus removal of
//! a pawn taken en passant) and rejected if the mover's king is then attacked.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::move_descriptions::MoveDescription;

/// Moves obeying piece movement and occupancy, for the piece on `from`,
/// whatever its color. Empty when `from` is empty.
pub fn pseudo_legal_moves_from(game_state: &GameState, from: Square) -> Vec<MoveDescription> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::with_capacity(28);
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, color, &mut moves),
        PieceKind::Knight => generate_knight_moves(game_state, from, color, &mut moves),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, color, &mut moves),
        PieceKind::Rook => generate_rook_moves(game_state, from, color, &mut moves),
        PieceKind::Queen => generate_queen_moves(game_state, from, color, &mut moves),
        PieceKind::King => generate_king_moves(game_state, from, color, &mut moves),
    }
    moves
}

/// Whether playing `mv` would leave `color`'s own king attacked.
pub fn leaves_king_exposed(board: &Board, mv: &MoveDescription, color: Color) -> bool {
    let mut simulated = *board;
    simulated.relocate(mv.from, mv.to);
    if mv.is_en_passant {
        if let Some(passed) = mv.to.offset(-color.forward(), 0) {
            simulated.take(passed);
        }
    }
    is_king_in_check(&simulated, color)
}

/// Legal moves for the piece on `from`. Empty if the square is empty or the
/// piece does not belong to the side to move.
pub fn legal_moves_from(game_state: &GameState, from: Square) -> Vec<MoveDescription> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return Vec::new();
    };
    if piece.color != game_state.side_to_move {
        return Vec::new();
    }

    let mut moves = pseudo_legal_moves_from(game_state, from);
    moves.retain(|mv| !leaves_king_exposed(&game_state.board, mv, piece.color));
    moves
}

/// Every legal move for the side to move, grouped by origin square.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<MoveDescription> {
    let mut legal = Vec::with_capacity(64);
    for (from, _) in game_state.board.pieces_of(game_state.side_to_move) {
        legal.extend(legal_moves_from(game_state, from));
    }
    legal
}

/// Stops at the first legal move found.
pub fn has_any_legal_move(game_state: &GameState) -> bool {
    game_state
        .board
        .pieces_of(game_state.side_to_move)
        .any(|(from, _)| !legal_moves_from(game_state, from).is_empty())
}
