//! Sets of board coordinates backed by a single bitboard.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Sub};

use crate::board::Coord;
use crate::utils::{extract_bits, format_bitboard, Bitboard};

/// A set of cells, one bit per cell.
///
/// All the occupancy, pawn and trajectory queries of the engine return this
/// type, so membership checks during move generation are a single mask test.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(pub Bitboard);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, coord: Coord) {
        self.0 |= coord.bit();
    }

    pub fn remove(&mut self, coord: Coord) {
        self.0 &= !coord.bit();
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.0 & coord.bit() != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Cells in index order: row 0 left to right, then row 1, and so on.
    pub fn iter(&self) -> impl Iterator<Item = Coord> {
        extract_bits(self.0).into_iter().filter_map(Coord::from_index)
    }

    pub fn to_vec(&self) -> Vec<Coord> {
        self.iter().collect()
    }
}

impl FromIterator<Coord> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut set = SquareSet::new();
        for coord in iter {
            set.insert(coord);
        }
        set
    }
}

impl<'a> FromIterator<&'a Coord> for SquareSet {
    fn from_iter<I: IntoIterator<Item = &'a Coord>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl Extend<Coord> for SquareSet {
    fn extend<I: IntoIterator<Item = Coord>>(&mut self, iter: I) {
        for coord in iter {
            self.insert(coord);
        }
    }
}

impl BitOr for SquareSet {
    type Output = SquareSet;

    fn bitor(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    fn bitor_assign(&mut self, rhs: SquareSet) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for SquareSet {
    type Output = SquareSet;

    fn bitand(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & rhs.0)
    }
}

/// Set difference.
impl Sub for SquareSet {
    type Output = SquareSet;

    fn sub(self, rhs: SquareSet) -> SquareSet {
        SquareSet(self.0 & !rhs.0)
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_bitboard(self.0))
    }
}
