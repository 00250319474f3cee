//! The rules engine a presentation layer talks to.
//!
//! `ChessGame` owns the board and state, the move history and the captured
//! lists. State changes only through `move_piece`, `undo_last_move` and
//! `reset` (plus the explicit setup helpers used to build positions by hand).
//!
//! Undo is partial: castling rights and the en passant target are
//! not restored, and the outcome flags are cleared instead of recomputed.

use log::{debug, info, trace};

use crate::game_state::captured_pieces::CapturedPieces;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::GameStatus;
use crate::move_generation::legal_move_apply::{apply_move, refresh_outcome_flags};
use crate::move_generation::legal_move_generator::{generate_legal_moves, legal_moves_from};
use crate::move_generation::legal_move_undo::revert_move;
use crate::move_generation::move_errors::{MoveError, MoveResult};
use crate::moves::move_descriptions::MoveDescription;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessGame {
    state: GameState,
    move_history: Vec<MoveRecord>,
    captured_pieces: CapturedPieces,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    /// Standard opening position, White to move, all castling rights.
    pub fn new() -> Self {
        Self {
            state: GameState::new_game(),
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
        }
    }

    /// Start from an arbitrary position. Outcome flags are derived immediately.
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        let mut state = GameState::from_fen(fen)?;
        refresh_outcome_flags(&mut state);
        Ok(Self {
            state,
            move_history: Vec::new(),
            captured_pieces: CapturedPieces::default(),
        })
    }

    pub fn reset(&mut self) {
        info!("resetting to the starting position");
        *self = Self::new();
    }

    // --- Queries ---

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.state.board.piece_at(square)
    }

    /// Out-of-range coordinates simply hold no piece.
    #[inline]
    pub fn get_piece(&self, row: i32, col: i32) -> Option<Piece> {
        Square::try_from_coords(row, col).and_then(|sq| self.piece_at(sq))
    }

    /// Legal moves for the piece on `from`; empty for an empty square or a
    /// piece whose side is not to move.
    pub fn valid_moves(&self, from: Square) -> Vec<MoveDescription> {
        legal_moves_from(&self.state, from)
    }

    /// Every legal move for the side to move.
    pub fn legal_moves(&self) -> Vec<MoveDescription> {
        generate_legal_moves(&self.state)
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.state.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.state.castling_rights
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.state.en_passant_target
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state.game_over
    }

    #[inline]
    pub fn move_history(&self) -> &[MoveRecord] {
        &self.move_history
    }

    #[inline]
    pub fn captured_pieces(&self) -> &CapturedPieces {
        &self.captured_pieces
    }

    pub fn game_status(&self) -> GameStatus {
        GameStatus::from_state(&self.state)
    }

    /// Status line such as "White to move" or "Black wins by checkmate!".
    pub fn game_status_text(&self) -> String {
        self.game_status().to_string()
    }

    // --- Transitions ---

    /// Commit a move if it is legal. Returns whether it was played.
    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        match self.try_move_piece(from, to) {
            Ok(_) => true,
            Err(err) => {
                debug!("move rejected: {err}");
                false
            }
        }
    }

    /// Commit a move, or explain why it was refused. On error nothing changes.
    pub fn try_move_piece(&mut self, from: Square, to: Square) -> MoveResult<&MoveRecord> {
        let piece = self
            .state
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource(from))?;
        if piece.color != self.state.side_to_move {
            return Err(MoveError::NotSideToMove {
                square: from,
                color: piece.color,
            });
        }

        let mv = legal_moves_from(&self.state, from)
            .into_iter()
            .find(|mv| mv.to == to)
            .ok_or(MoveError::IllegalDestination { from, to })?;

        let applied =
            apply_move(&mut self.state, &mv).ok_or(MoveError::NoPieceAtSource(from))?;

        let mover = piece.color;
        if let Some(captured) = applied.record.captured_piece {
            self.captured_pieces.push(mover, captured);
        }
        if let Some(victim) = applied.en_passant_victim {
            self.captured_pieces.push(mover, victim);
        }

        refresh_outcome_flags(&mut self.state);

        let mut record = applied.record;
        record.was_check = self.state.in_check;
        record.was_checkmate = self.state.checkmate;
        trace!("{mover} played {:?} -> {:?}", record.from, record.to);
        if self.state.game_over {
            info!("game over: {}", self.game_status());
        }

        self.move_history.push(record);
        Ok(&self.move_history[self.move_history.len() - 1])
    }

    /// Revert the last committed move. Returns whether there was one.
    pub fn undo_last_move(&mut self) -> bool {
        match self.try_undo_last_move() {
            Ok(_) => true,
            Err(err) => {
                debug!("undo rejected: {err}");
                false
            }
        }
    }

    pub fn try_undo_last_move(&mut self) -> MoveResult<MoveRecord> {
        let record = self.move_history.pop().ok_or(MoveError::EmptyHistory)?;
        let mover = record.moved_piece.color;

        if let Some(captured) = record.captured_piece {
            self.captured_pieces.remove_last(mover, captured);
        }
        if let Some(pawn) = revert_move(&mut self.state, &record) {
            self.captured_pieces.remove_last(mover, pawn);
        }

        trace!("{mover} took back {:?} -> {:?}", record.from, record.to);
        Ok(record)
    }

    // --- Position setup ---

    /// Remove every piece. History and captured lists are left alone.
    pub fn clear_board(&mut self) {
        self.state.board.clear();
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.state.board.set(square, piece);
    }

    pub fn set_side_to_move(&mut self, color: Color) {
        self.state.side_to_move = color;
    }

    pub fn set_castling_rights(&mut self, rights: CastlingRights) {
        self.state.castling_rights = rights & CASTLE_ALL;
    }

    /// Recompute check, checkmate and stalemate for the current position.
    pub fn refresh_status(&mut self) {
        refresh_outcome_flags(&mut self.state);
    }
}
