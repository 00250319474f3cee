//! Board plus turn, castling, en passant and derived outcome flags.
//!
//! `GameState` is a plain `Copy` value. Move generation, attack queries and
//! perft read it by reference; only the apply/undo routines mutate it.

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square passed over by the last double pawn push; valid for one ply.
    pub en_passant_target: Option<Square>,

    // Derived after every commit; never patched incrementally.
    pub in_check: bool,
    pub checkmate: bool,
    pub stalemate: bool,
    pub game_over: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_target: None,
            in_check: false,
            checkmate: false,
            stalemate: false,
            game_over: false,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard opening position with all castling rights.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            castling_rights: CASTLE_ALL,
            ..Self::default()
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn has_castling_right(&self, color: Color, side: CastlingSide) -> bool {
        self.castling_rights & castling_right(color, side) != 0
    }

    pub(crate) fn clear_outcome_flags(&mut self) {
        self.in_check = false;
        self.checkmate = false;
        self.stalemate = false;
        self.game_over = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let from_fen =
            GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(GameState::new_game(), from_fen);
        assert_eq!(GameState::new_game().get_fen(), STARTING_POSITION_FEN);
    }

    #[test]
    fn new_game_grants_every_castling_right() {
        let state = GameState::new_game();
        for color in [Color::White, Color::Black] {
            for side in [CastlingSide::Kingside, CastlingSide::Queenside] {
                assert!(state.has_castling_right(color, side));
            }
        }
        assert_eq!(state.en_passant_target, None);
        assert!(!state.game_over);
    }
}
