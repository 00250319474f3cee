use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

/// Clocks are not tracked, so they are always written as `0 1`.
pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = game_state
        .en_passant_target
        .map(square_to_algebraic)
        .unwrap_or_else(|| "-".to_owned());

    format!("{board} {side_to_move} {castling} {en_passant} 0 1")
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..8u8 {
        let mut empty_count = 0u8;

        for col in 0..8u8 {
            match Square::new(row, col).and_then(|sq| board.piece_at(sq)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < 7 {
            out.push('/');
        }
    }

    out
}

pub(crate) fn piece_to_fen_char(piece: Piece) -> char {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };

    match piece.color {
        Color::White => base.to_ascii_uppercase(),
        Color::Black => base,
    }
}

fn generate_castling_field(castling_rights: CastlingRights) -> String {
    let mut out = String::new();

    if castling_rights & CASTLE_WHITE_KINGSIDE != 0 {
        out.push('K');
    }
    if castling_rights & CASTLE_WHITE_QUEENSIDE != 0 {
        out.push('Q');
    }
    if castling_rights & CASTLE_BLACK_KINGSIDE != 0 {
        out.push('k');
    }
    if castling_rights & CASTLE_BLACK_QUEENSIDE != 0 {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_types::GameState;

    #[test]
    fn parsed_positions_are_written_back_unchanged() {
        for fen in [
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 b Kq - 0 1",
        ] {
            let game_state = GameState::from_fen(fen).expect("test FEN should parse");
            assert_eq!(generate_fen(&game_state), fen);
        }
    }
}
