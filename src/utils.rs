//! Bitboard helpers.
//!
//! The puzzle board is mapped onto the bits of a `u64`: bit `y * 8 + x` stands
//! for the cell at column `x`, row `y`. Row 0 is the pawn row at the top of the
//! board, row 7 is the back row the pieces start on.

/// Type alias for a 64-bit integer representing one bit per board cell
pub type Bitboard = u64;

/// Number of cells along each side of the board.
pub const BOARD_SIZE: i32 = 8;

/// Sets the bit for a board coordinate.
///
/// Coordinates outside `0..8` yield an empty bitboard, so callers may pass the
/// result of an offset calculation without bounds-checking it first.
///
/// # Arguments
///
/// * `x` - The column (0-7)
/// * `y` - The row (0-7)
///
/// # Returns
///
/// * A bitboard with the specified bit set
pub fn set_bit(x: i32, y: i32) -> Bitboard {
    if !in_bounds(x, y) {
        return 0;
    }
    1 << (y * BOARD_SIZE + x)
}

/// Whether `(x, y)` lies on the 8x8 grid.
pub fn in_bounds(x: i32, y: i32) -> bool {
    (0..BOARD_SIZE).contains(&x) && (0..BOARD_SIZE).contains(&y)
}

/// Finds the index of the least significant set bit in a bitboard.
///
/// Returns 0 for an empty bitboard; use [`bit_scan_safe`] when emptiness matters.
pub fn bit_scan(bitboard: Bitboard) -> usize {
    bit_scan_safe(bitboard).unwrap_or(0)
}

/// Safe version of bit_scan that returns an Option
pub fn bit_scan_safe(bitboard: Bitboard) -> Option<usize> {
    if bitboard == 0 {
        None
    } else {
        Some(bitboard.trailing_zeros() as usize)
    }
}

/// Extracts all set bits from a bitboard into a vector, lowest index first.
pub fn extract_bits(mut bitboard: Bitboard) -> Vec<usize> {
    let mut bits = Vec::with_capacity(bitboard.count_ones() as usize);
    while bitboard != 0 {
        let lsb = bit_scan(bitboard);
        bits.push(lsb);
        bitboard &= bitboard - 1;
    }
    bits
}

/// Renders a bitboard as an 8x8 grid of `1`/`.`, row 0 first.
///
/// Used in test failure messages and debug logging.
pub fn format_bitboard(bitboard: Bitboard) -> String {
    let mut out = String::with_capacity(8 * 17);
    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            if bitboard & set_bit(x, y) != 0 {
                out.push_str("1 ");
            } else {
                out.push_str(". ");
            }
        }
        out.push('\n');
    }
    out
}
