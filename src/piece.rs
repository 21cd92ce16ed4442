//! Piece kinds and the per-piece state carried through a game.

use serde::{Deserialize, Serialize};

use crate::board::Coord;
use crate::rayattacks::{Direction, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PieceKind {
    /// Every kind, used for independent draws in the unlimited setup.
    pub const ALL: [PieceKind; 5] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// The fixed back row of the standard setup, before shuffling.
    pub const STANDARD_SET: [PieceKind; 8] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Knight,
    ];

    /// Rook, bishop and queen slide along rays; king and knight jump.
    pub fn is_slider(self) -> bool {
        matches!(self, PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop)
    }

    /// Sliding directions. Empty for the king and knight.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            PieceKind::Rook => &ROOK_DIRECTIONS,
            PieceKind::Bishop => &BISHOP_DIRECTIONS,
            PieceKind::Queen => &QUEEN_DIRECTIONS,
            PieceKind::King | PieceKind::Knight => &[],
        }
    }

    /// Upper-case letter used in board dumps.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
        }
    }
}

/// A piece on the board.
///
/// `trajectory` holds every cell the piece has travelled through, in order. It
/// only grows during a game and is emptied by a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    /// Cleared once the piece has captured a pawn
    pub active: bool,
    pub trajectory: Vec<Coord>,
    /// Square the piece returns to on restart
    pub origin: Coord,
}

impl Piece {
    pub fn new(kind: PieceKind, origin: Coord) -> Self {
        Piece {
            kind,
            active: true,
            trajectory: Vec::new(),
            origin,
        }
    }

    /// Back to the state right after setup.
    pub fn reset(&mut self) {
        self.active = true;
        self.trajectory.clear();
    }

    pub fn symbol(&self) -> char {
        if self.active {
            self.kind.symbol()
        } else {
            self.kind.symbol().to_ascii_lowercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_set_counts() {
        let count = |kind| PieceKind::STANDARD_SET.iter().filter(|&&k| k == kind).count();
        assert_eq!(count(PieceKind::King), 1);
        assert_eq!(count(PieceKind::Queen), 1);
        assert_eq!(count(PieceKind::Rook), 2);
        assert_eq!(count(PieceKind::Bishop), 2);
        assert_eq!(count(PieceKind::Knight), 2);
    }

    #[test]
    fn slider_directions() {
        assert_eq!(PieceKind::Rook.directions().len(), 4);
        assert_eq!(PieceKind::Bishop.directions().len(), 4);
        assert_eq!(PieceKind::Queen.directions().len(), 8);
        assert!(PieceKind::King.directions().is_empty());
        assert!(PieceKind::Knight.directions().is_empty());
        assert!(!PieceKind::Knight.is_slider());
        assert!(PieceKind::Queen.is_slider());
    }

    #[test]
    fn reset_restores_active_and_clears_path() {
        let origin = Coord::new(2, 7).unwrap();
        let mut piece = Piece::new(PieceKind::Rook, origin);
        piece.active = false;
        piece.trajectory.push(origin);
        assert_eq!(piece.symbol(), 'r');
        piece.reset();
        assert!(piece.active);
        assert!(piece.trajectory.is_empty());
        assert_eq!(piece.symbol(), 'R');
    }
}
