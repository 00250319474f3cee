//! Pawn geometry: capture diagonals, start rows and promotion rows.

use crate::game_state::chess_types::{Color, Square};

pub const WHITE_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(-1);
pub const BLACK_PAWN_ATTACKS: [u64; 64] = generate_pawn_attacks(1);

/// Diagonal capture squares only; pushes and en passant reach are not attacks.
#[inline]
pub const fn pawn_attacks(color: Color, square: Square) -> u64 {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[square.index()],
        Color::Black => BLACK_PAWN_ATTACKS[square.index()],
    }
}

/// Row from which a double push is allowed.
#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// Farthest row; a pawn landing here promotes.
#[inline]
pub const fn promotion_row(color: Color) -> u8 {
    match color {
        Color::White => 0,
        Color::Black => 7,
    }
}

const fn generate_pawn_attacks(d_row: i32) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i32 + d_row;
        let col = (sq % 8) as i32;
        let mut attacks = 0u64;

        if row >= 0 && row < 8 {
            if col > 0 {
                attacks |= 1u64 << ((row * 8 + col - 1) as u32);
            }
            if col < 7 {
                attacks |= 1u64 << ((row * 8 + col + 1) as u32);
            }
        }

        table[sq] = attacks;
        sq += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks;
    use crate::game_state::chess_types::{Color, Square};

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).expect("test square should be on the board")
    }

    #[test]
    fn white_pawn_attacks_from_e2() {
        let expected = sq(5, 3).mask() | sq(5, 5).mask();
        assert_eq!(pawn_attacks(Color::White, sq(6, 4)), expected);
    }

    #[test]
    fn black_pawn_on_a_file_attacks_one_square() {
        assert_eq!(pawn_attacks(Color::Black, sq(1, 0)), sq(2, 1).mask());
    }
}
