//! Attack detection.
//!
//! Pure queries over a board: the attacking color is an explicit argument and
//! nothing is mutated. Pawns contribute capture diagonals only and kings their
//! eight neighbours only, which keeps castling safety from recursing.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::king_moves::king_attacks;
use crate::moves::knight_moves::knight_attacks;
use crate::moves::pawn_moves::pawn_attacks;
use crate::moves::queen_moves::queen_attacks;
use crate::moves::rook_moves::rook_attacks;

#[inline]
fn attack_mask(from: Square, piece: Piece, occupancy: u64, own_occupancy: u64) -> u64 {
    let raw = match piece.kind {
        PieceKind::Pawn => pawn_attacks(piece.color, from),
        PieceKind::Knight => knight_attacks(from),
        PieceKind::Bishop => bishop_attacks(from, occupancy),
        PieceKind::Rook => rook_attacks(from, occupancy),
        PieceKind::Queen => queen_attacks(from, occupancy),
        PieceKind::King => king_attacks(from),
    };
    raw & !own_occupancy
}

/// True as soon as one piece of `attacker_color` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let target_mask = square.mask();
    let occupancy = board.occupancy_all();
    let own_occupancy = board.occupancy(attacker_color);
    board
        .pieces_of(attacker_color)
        .any(|(from, piece)| attack_mask(from, piece, occupancy, own_occupancy) & target_mask != 0)
}

/// A side without a king on the board is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    fn board(fen: &str) -> Board {
        GameState::from_fen(fen).expect("test FEN should parse").board
    }

    #[test]
    fn start_position_third_rows_are_covered() {
        let board = Board::standard();
        for col in 0..8 {
            assert!(is_square_attacked(&board, sq(5, col), Color::White));
            assert!(is_square_attacked(&board, sq(2, col), Color::Black));
        }
        assert!(!is_square_attacked(&board, sq(4, 4), Color::White));
        assert!(!is_square_attacked(&board, sq(3, 4), Color::Black));
    }

    #[test]
    fn pawn_push_square_is_not_an_attack() {
        let board = board("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1");
        assert!(!is_square_attacked(&board, sq(5, 4), Color::White));
        assert!(is_square_attacked(&board, sq(5, 3), Color::White));
        assert!(is_square_attacked(&board, sq(5, 5), Color::White));
    }

    #[test]
    fn blocked_slider_does_not_attack_past_blocker() {
        let board = board("4k3/4r3/8/8/8/8/4P3/4K3 w - - 0 1");
        assert!(is_square_attacked(&board, sq(6, 4), Color::Black));
        assert!(!is_square_attacked(&board, sq(7, 4), Color::Black));
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn double_check_is_seen_from_either_checker() {
        let board = board("4k3/8/8/8/1b6/8/8/4K2r w - - 0 1");
        assert!(is_king_in_check(&board, Color::White));

        // Each checker alone still gives check.
        let mut bishop_only = board;
        bishop_only.set(sq(7, 7), None);
        assert!(is_king_in_check(&bishop_only, Color::White));
        let mut rook_only = board;
        rook_only.set(sq(4, 1), None);
        assert!(is_king_in_check(&rook_only, Color::White));
    }

    #[test]
    fn friendly_pieces_are_not_attacked_by_their_own_side() {
        let board = Board::standard();
        assert!(!is_square_attacked(&board, sq(7, 0), Color::White));
        assert!(!is_square_attacked(&board, sq(6, 4), Color::White));
        assert!(is_square_attacked(&board, sq(5, 0), Color::White));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        assert!(!is_king_in_check(&Board::empty(), Color::White));
    }
}
