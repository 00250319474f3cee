//! Ray tracing shared by the sliding pieces.

use crate::game_state::chess_types::Square;

/// Squares reached from `square` stepping by `(d_row, d_col)` until the edge
/// or the first occupied square, which is included.
#[inline]
pub fn trace_ray(square: Square, d_row: i8, d_col: i8, occupancy: u64) -> u64 {
    let mut attacks = 0u64;
    let mut cursor = square.offset(d_row, d_col);

    while let Some(target) = cursor {
        attacks |= target.mask();
        if occupancy & target.mask() != 0 {
            break;
        }
        cursor = target.offset(d_row, d_col);
    }

    attacks
}
