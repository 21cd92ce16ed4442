//! Knight jump tables.
//!
//! A knight jumps straight to its destination; nothing on the way blocks it.
//! For trajectory purposes its path still bends through one "elbow" cell.

use crate::board::Coord;
use crate::squareset::SquareSet;

/// The eight L-shaped offsets as `(dx, dy)`.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

/// Pre-computed knight destinations, indexed by square index (0-63).
#[derive(Debug, Clone)]
pub struct KnightAttacks(pub Vec<SquareSet>);

impl Default for KnightAttacks {
    fn default() -> Self {
        KnightAttacks::new()
    }
}

impl KnightAttacks {
    /// Creates a new instance with pre-computed knight jumps.
    ///
    /// Every square gets the set of on-board cells one L-jump away; jumps
    /// that would leave the board are dropped.
    ///
    /// # Returns
    ///
    /// * A new `KnightAttacks` instance with all 64 entries filled
    pub fn new() -> Self {
        Self(Coord::all().map(knight_attacks).collect())
    }

    /// Jump targets from `square`.
    pub fn jumps_from(&self, square: Coord) -> SquareSet {
        self.0[square.index()]
    }
}

fn knight_attacks(from: Coord) -> SquareSet {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(dx, dy)| from.offset(dx, dy))
        .collect()
}

/// The bend of an L-shaped jump.
///
/// When the knight moves two columns the elbow stays on the start row; when it
/// moves two rows the elbow stays on the start column. `None` if `from -> to`
/// is not a knight jump.
pub fn knight_elbow(from: Coord, to: Coord) -> Option<Coord> {
    let dx = to.x() as i32 - from.x() as i32;
    let dy = to.y() as i32 - from.y() as i32;
    match (dx.abs(), dy.abs()) {
        (2, 1) => from.offset(dx / 2, 0),
        (1, 2) => from.offset(0, dy / 2),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn corner_has_two_jumps() {
        let attacks = KnightAttacks::new();
        let from_corner = attacks.jumps_from(c(0, 0));
        assert_eq!(from_corner.to_vec(), vec![c(2, 1), c(1, 2)]);
    }

    #[test]
    fn centre_has_eight_jumps() {
        let attacks = KnightAttacks::new();
        assert_eq!(attacks.jumps_from(c(3, 4)).len(), 8);
        assert!(!attacks.jumps_from(c(3, 4)).contains(c(3, 4)));
    }

    #[test]
    fn elbow_follows_long_axis() {
        assert_eq!(knight_elbow(c(0, 0), c(1, 2)), Some(c(0, 1)));
        assert_eq!(knight_elbow(c(0, 0), c(2, 1)), Some(c(1, 0)));
        assert_eq!(knight_elbow(c(4, 4), c(2, 3)), Some(c(3, 4)));
        assert_eq!(knight_elbow(c(4, 4), c(3, 2)), Some(c(4, 3)));
    }

    #[test]
    fn elbow_rejects_non_jumps() {
        assert_eq!(knight_elbow(c(0, 0), c(2, 2)), None);
        assert_eq!(knight_elbow(c(0, 0), c(0, 1)), None);
    }
}
