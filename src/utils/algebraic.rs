//! Square name conversions (`e4` <-> row/column).
//!
//! Rank 8 is row 0 and rank 1 is row 7; files `a`..`h` are columns 0..7.

use crate::game_state::chess_types::Square;

/// Convert a square name (for example: "e4") to a board square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    let col = file - b'a';
    let row = b'8' - rank;
    Square::new(row, col).ok_or_else(|| format!("Invalid algebraic square: {square}"))
}

/// Convert a board square to its name (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let file_char = char::from(b'a' + square.col());
    let rank_char = char::from(b'8' - square.row());
    format!("{file_char}{rank_char}")
}
