//! Random legal-move playouts.
//!
//! Drives a `ChessGame` with uniformly chosen legal moves until the game ends
//! or a ply cap is reached. Used for invariant tests and benchmarks.

use rand::prelude::IndexedRandom;
use rand::Rng;

use crate::game::chess_game::ChessGame;
use crate::game_state::game_status::GameStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutSummary {
    pub plies: usize,
    pub final_status: GameStatus,
}

/// Play up to `max_plies` random legal moves on `game`.
pub fn random_playout<R: Rng + ?Sized>(
    game: &mut ChessGame,
    rng: &mut R,
    max_plies: usize,
) -> PlayoutSummary {
    let mut plies = 0;

    while plies < max_plies && !game.is_game_over() {
        let moves = game.legal_moves();
        let Some(mv) = moves.as_slice().choose(rng) else {
            break;
        };
        if !game.move_piece(mv.from, mv.to) {
            break;
        }
        plies += 1;
    }

    PlayoutSummary {
        plies,
        final_status: game.game_status(),
    }
}
