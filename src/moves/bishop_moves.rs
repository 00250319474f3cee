//! Diagonal ray attacks.

use crate::game_state::chess_types::Square;
use crate::moves::rays::trace_ray;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub fn bishop_attacks(square: Square, occupancy: u64) -> u64 {
    BISHOP_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, occupancy))
}

#[cfg(test)]
mod tests {
    use super::bishop_attacks;
    use crate::game_state::chess_types::Square;

    #[test]
    fn bishop_in_corner_covers_long_diagonal() {
        let a1 = Square::new(7, 0).expect("a1");
        assert_eq!(bishop_attacks(a1, 0).count_ones(), 7);
    }

    #[test]
    fn bishop_blocker_is_included_and_stops_ray() {
        let c1 = Square::new(7, 2).expect("c1");
        let e3 = Square::new(5, 4).expect("e3");
        let f4 = Square::new(4, 5).expect("f4");
        let attacks = bishop_attacks(c1, e3.mask());

        assert_ne!(attacks & e3.mask(), 0);
        assert_eq!(attacks & f4.mask(), 0);
        assert_eq!(attacks.count_ones(), 4);
    }
}
