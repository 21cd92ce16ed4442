//! Ray generation for sliding pieces.
//!
//! Rooks, bishops and queens scan outward one cell at a time. Unlike a normal
//! chess engine the scan cannot be reduced to a blocker mask: a foreign
//! trajectory cell is skipped but does not stop the ray, so the rays are kept
//! as ordered cell lists rather than bitboards.

use crate::board::Coord;

/// One of the eight compass directions on the board. North is towards row 0.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

pub const ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::West,
    Direction::East,
    Direction::North,
    Direction::South,
];

pub const BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::SouthEast,
];

pub const QUEEN_DIRECTIONS: [Direction; 8] = [
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthWest,
    Direction::SouthEast,
    Direction::South,
    Direction::East,
    Direction::West,
    Direction::North,
];

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Step as `(dx, dy)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }

    fn slot(self) -> usize {
        self as usize
    }

    /// The direction pointing from `from` to `to`, if they share a row,
    /// column or diagonal.
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        let dx = to.x() as i32 - from.x() as i32;
        let dy = to.y() as i32 - from.y() as i32;
        if (dx, dy) == (0, 0) || (dx != 0 && dy != 0 && dx.abs() != dy.abs()) {
            return None;
        }
        let step = (dx.signum(), dy.signum());
        Direction::ALL.into_iter().find(|dir| dir.delta() == step)
    }
}

/// Pre-computed rays: for each square and direction, the cells reached in
/// travel order, up to the edge of the board.
#[derive(Debug, Clone)]
pub struct Rays {
    rays: Vec<[Vec<Coord>; 8]>,
}

impl Default for Rays {
    fn default() -> Self {
        Rays::new()
    }
}

impl Rays {
    /// Creates the ray table.
    ///
    /// For each of the 64 squares and each of the 8 directions this walks to
    /// the edge of the board and stores the cells in the order a sliding
    /// piece would reach them.
    ///
    /// # Returns
    ///
    /// * A new `Rays` instance covering every square and direction
    pub fn new() -> Self {
        let rays = Coord::all()
            .map(|from| Direction::ALL.map(|dir| walk(from, dir)))
            .collect();
        Rays { rays }
    }

    /// Cells from `from` towards `dir`, nearest first, excluding `from`.
    ///
    /// # Arguments
    ///
    /// * `from` - The starting square
    /// * `dir` - The direction to travel
    ///
    /// # Returns
    ///
    /// * A slice that is empty when `from` sits on the edge facing `dir`
    pub fn ray(&self, from: Coord, dir: Direction) -> &[Coord] {
        &self.rays[from.index()][dir.slot()]
    }

    /// Every cell on the straight line from `from` to `to`, both ends included.
    /// `None` when the two cells are not aligned.
    pub fn path(&self, from: Coord, to: Coord) -> Option<Vec<Coord>> {
        let dir = Direction::between(from, to)?;
        let ray = self.ray(from, dir);
        let end = ray.iter().position(|&coord| coord == to)?;
        let mut path = Vec::with_capacity(end + 2);
        path.push(from);
        path.extend_from_slice(&ray[..=end]);
        Some(path)
    }
}

fn walk(from: Coord, dir: Direction) -> Vec<Coord> {
    let (dx, dy) = dir.delta();
    let mut cells = Vec::with_capacity(7);
    let mut current = from;
    while let Some(next) = current.offset(dx, dy) {
        cells.push(next);
        current = next;
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn rays_stop_at_edge() {
        let rays = Rays::new();
        assert!(rays.ray(c(0, 0), Direction::North).is_empty());
        assert_eq!(rays.ray(c(0, 0), Direction::East).len(), 7);
        assert_eq!(rays.ray(c(0, 0), Direction::SouthEast).len(), 7);
        assert_eq!(
            rays.ray(c(3, 3), Direction::NorthWest),
            &[c(2, 2), c(1, 1), c(0, 0)]
        );
    }

    #[test]
    fn rays_are_in_travel_order() {
        let rays = Rays::new();
        let south = rays.ray(c(4, 1), Direction::South);
        assert_eq!(south.first(), Some(&c(4, 2)));
        assert_eq!(south.last(), Some(&c(4, 7)));
    }

    #[test]
    fn direction_between_aligned_cells() {
        assert_eq!(Direction::between(c(0, 7), c(0, 2)), Some(Direction::North));
        assert_eq!(Direction::between(c(2, 2), c(5, 5)), Some(Direction::SouthEast));
        assert_eq!(Direction::between(c(0, 0), c(1, 2)), None);
        assert_eq!(Direction::between(c(4, 4), c(4, 4)), None);
    }

    #[test]
    fn path_includes_both_ends() {
        let rays = Rays::new();
        assert_eq!(
            rays.path(c(7, 7), c(4, 4)),
            Some(vec![c(7, 7), c(6, 6), c(5, 5), c(4, 4)])
        );
        assert_eq!(rays.path(c(0, 7), c(0, 6)), Some(vec![c(0, 7), c(0, 6)]));
        assert_eq!(rays.path(c(0, 7), c(1, 5)), None);
    }
}
