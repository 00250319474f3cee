//! Crate root module declarations for the Plum Rules chess rules engine.
//!
//! Exposes board/state types, pseudo-legal move generation, attack detection,
//! the legality filter, move application and undo, and the `ChessGame` facade
//! a presentation layer drives, plus FEN/perft/playout utilities.

pub mod game_state {
    pub mod board;
    pub mod captured_pieces;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
    pub mod move_record;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rays;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_move_undo;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod move_errors;
    pub mod perft;
}

pub mod game {
    pub mod chess_game;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use game::chess_game::ChessGame;
pub use game_state::chess_types::{CastlingSide, Color, Piece, PieceKind, Square};
pub use game_state::game_status::GameStatus;
pub use move_generation::move_errors::MoveError;
pub use moves::move_descriptions::MoveDescription;
