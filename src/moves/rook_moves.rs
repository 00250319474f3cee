//! Orthogonal ray attacks.

use crate::game_state::chess_types::Square;
use crate::moves::rays::trace_ray;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Squares a rook on `square` reaches given `occupancy`, blockers included.
#[inline]
pub fn rook_attacks(square: Square, occupancy: u64) -> u64 {
    ROOK_DIRECTIONS
        .iter()
        .fold(0u64, |acc, &(d_row, d_col)| acc | trace_ray(square, d_row, d_col, occupancy))
}
