//! Move generation lookup tables.
//!
//! All the per-square geometry the move generator needs is computed once
//! when a session is created and reused for every query afterwards.

use crate::board::Coord;
use crate::knightattacks::KnightAttacks;
use crate::piece::PieceKind;
use crate::rayattacks::{Direction, Rays};
use crate::squareset::SquareSet;

/// A collection of pre-computed lookup tables for move generation.
#[derive(Debug, Clone)]
pub struct MoveGenTables {
    /// Knight jump targets indexed by square (0-63).
    pub knight_attacks: KnightAttacks,

    /// King step targets indexed by square (0-63).
    pub king_attacks: [SquareSet; 64],

    /// Ordered rays for the sliding pieces.
    pub rays: Rays,
}

impl Default for MoveGenTables {
    fn default() -> Self {
        MoveGenTables::new()
    }
}

impl MoveGenTables {
    /// Creates the knight, king and ray tables for every square.
    ///
    /// The tables depend only on board geometry, so one instance serves a
    /// whole session, across restarts and new configurations.
    ///
    /// # Returns
    ///
    /// * A new `MoveGenTables` instance with all tables initialized
    pub fn new() -> Self {
        let mut tables = Self {
            knight_attacks: KnightAttacks::new(),
            king_attacks: [SquareSet::EMPTY; 64],
            rays: Rays::new(),
        };

        for square in Coord::all() {
            tables.king_attacks[square.index()] = generate_king_attacks(square);
        }

        tables
    }

    /// Geometric single-step targets for the king and the knight.
    ///
    /// Sliding kinds have no fixed targets and get an empty set; their moves
    /// come from scanning [`MoveGenTables::rays`].
    ///
    /// # Arguments
    ///
    /// * `kind` - The piece type
    /// * `from` - The square the piece stands on
    ///
    /// # Returns
    ///
    /// * The on-board target squares, before any occupancy or trajectory filter
    pub fn step_targets(&self, kind: PieceKind, from: Coord) -> SquareSet {
        match kind {
            PieceKind::Knight => self.knight_attacks.jumps_from(from),
            PieceKind::King => self.king_attacks[from.index()],
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop => SquareSet::EMPTY,
        }
    }
}

fn generate_king_attacks(from: Coord) -> SquareSet {
    Direction::ALL
        .iter()
        .filter_map(|dir| {
            let (dx, dy) = dir.delta();
            from.offset(dx, dy)
        })
        .collect()
}
