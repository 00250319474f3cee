//! Perft node counting over the legality-filtered generator.
//!
//! Works on copied `GameState` values, so it is independent of the history
//! stack and its incomplete undo.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, has_any_legal_move};
use crate::moves::move_descriptions::MoveDescription;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Count leaf positions `depth` plies below `game_state`, with per-leaf tallies.
pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generate_legal_moves(game_state) {
        let mut next = *game_state;
        let Some(applied) = apply_move(&mut next, &mv) else {
            continue;
        };

        if depth > 1 {
            total.merge(perft(&next, depth - 1));
            continue;
        }

        let record = applied.record;
        total.nodes += 1;
        if record.captured_piece.is_some() || applied.en_passant_victim.is_some() {
            total.captures += 1;
        }
        if record.is_en_passant {
            total.en_passant += 1;
        }
        if record.castling.is_some() {
            total.castles += 1;
        }
        if record.moved_piece.kind == PieceKind::Pawn
            && next.board.piece_at(record.to).map(|p| p.kind) != Some(PieceKind::Pawn)
        {
            total.promotions += 1;
        }
        if is_king_in_check(&next.board, next.side_to_move) {
            total.checks += 1;
            if !has_any_legal_move(&next) {
                total.checkmates += 1;
            }
        }
    }

    total
}

/// Leaf counts split by root move, for locating generator discrepancies.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(MoveDescription, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    generate_legal_moves(game_state)
        .into_iter()
        .filter_map(|mv| {
            let mut next = *game_state;
            apply_move(&mut next, &mv)?;
            Some((mv, perft(&next, depth - 1).nodes))
        })
        .collect()
}
