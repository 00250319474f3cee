//! FEN-to-GameState parser.
//!
//! Reads piece placement, side to move, castling rights and the en passant
//! square. The clock fields are optional and validated but not stored.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<GameState, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;

    if let Some(halfmove_part) = parts.next() {
        halfmove_part
            .parse::<u16>()
            .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    }
    if let Some(fullmove_part) = parts.next() {
        fullmove_part
            .parse::<u16>()
            .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;
    }
    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state.board)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;

    Ok(game_state)
}

fn parse_board(board_part: &str, board: &mut Board) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            let square = Square::new(row as u8, col as u8)
                .ok_or_else(|| "Board rank has too many files".to_owned())?;
            board.set(square, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingRights, String> {
    if castling_part == "-" {
        return Ok(0);
    }

    let mut rights: CastlingRights = 0;

    for ch in castling_part.chars() {
        match ch {
            'K' => rights |= CASTLE_WHITE_KINGSIDE,
            'Q' => rights |= CASTLE_WHITE_QUEENSIDE,
            'k' => rights |= CASTLE_BLACK_KINGSIDE,
            'q' => rights |= CASTLE_BLACK_QUEENSIDE,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<Square>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.board, Board::standard());
        assert_eq!(game_state.castling_rights, CASTLE_ALL);
    }

    #[test]
    fn clocks_are_optional() {
        let game_state =
            parse_fen("4k3/8/8/8/8/8/8/4K3 b - e3").expect("four-field FEN should parse");
        assert_eq!(game_state.side_to_move, Color::Black);
        assert_eq!(game_state.en_passant_target, Square::new(5, 4));
    }

    #[test]
    fn malformed_fields_are_rejected() {
        assert!(parse_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 x - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w X - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K4 w - - 0 1").is_err());
        assert!(parse_fen("4k3/8/8/8/8/8/8/4K3 w - - zero 1").is_err());
    }
}
