//! Trajectory tracking.
//!
//! Each piece keeps its own path in [`Piece::trajectory`]. This module derives
//! the obstacle sets the move generator needs from those paths, and turns a
//! committed move into the cells it traversed.
//!
//! A piece may never land on or pass through its own trajectory. It may fly
//! over another piece's trajectory but never land on it.

use crate::board::{Board, Coord};
use crate::knightattacks::knight_elbow;
use crate::movegen_tables::MoveGenTables;
use crate::piece::{Piece, PieceKind};
use crate::squareset::SquareSet;

pub fn own_trajectory(piece: &Piece) -> SquareSet {
    piece.trajectory.iter().collect()
}

/// Trajectory cells of every other active piece, minus the piece's own cells.
pub fn foreign_trajectory_cells(board: &Board, piece_index: usize) -> SquareSet {
    let own = board
        .piece(piece_index)
        .map(own_trajectory)
        .unwrap_or_default();
    board.all_trajectory_cells() - own
}

/// The full path of a move, both ends included.
///
/// * knight: start, elbow, end
/// * rook, bishop, queen: every cell along the line
/// * king: start and end
///
/// Geometry that does not fit the kind degrades to `[from, to]`.
pub fn trajectory_segment(
    tables: &MoveGenTables,
    kind: PieceKind,
    from: Coord,
    to: Coord,
) -> Vec<Coord> {
    match kind {
        PieceKind::Knight => match knight_elbow(from, to) {
            Some(elbow) => vec![from, elbow, to],
            None => vec![from, to],
        },
        PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop => tables
            .rays
            .path(from, to)
            .unwrap_or_else(|| vec![from, to]),
        PieceKind::King => vec![from, to],
    }
}

/// Appends a traversed segment to a piece's trajectory.
///
/// The first move records the whole segment, origin included. Later moves
/// drop the segment's first cell, which is already the last recorded one.
pub fn record_segment(piece: &mut Piece, segment: &[Coord]) {
    if piece.trajectory.is_empty() {
        piece.trajectory.extend_from_slice(segment);
    } else {
        piece.trajectory.extend(segment.iter().skip(1).copied());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y).unwrap()
    }

    #[test]
    fn knight_segment_has_elbow() {
        let tables = MoveGenTables::new();
        assert_eq!(
            trajectory_segment(&tables, PieceKind::Knight, c(0, 0), c(1, 2)),
            vec![c(0, 0), c(0, 1), c(1, 2)]
        );
        assert_eq!(
            trajectory_segment(&tables, PieceKind::Knight, c(5, 7), c(3, 6)),
            vec![c(5, 7), c(4, 7), c(3, 6)]
        );
    }

    #[test]
    fn slider_segment_covers_line() {
        let tables = MoveGenTables::new();
        assert_eq!(
            trajectory_segment(&tables, PieceKind::Rook, c(0, 7), c(0, 4)),
            vec![c(0, 7), c(0, 6), c(0, 5), c(0, 4)]
        );
        assert_eq!(
            trajectory_segment(&tables, PieceKind::Queen, c(3, 7), c(6, 4)),
            vec![c(3, 7), c(4, 6), c(5, 5), c(6, 4)]
        );
    }

    #[test]
    fn king_segment_is_two_cells() {
        let tables = MoveGenTables::new();
        assert_eq!(
            trajectory_segment(&tables, PieceKind::King, c(4, 7), c(5, 6)),
            vec![c(4, 7), c(5, 6)]
        );
    }

    #[test]
    fn record_does_not_duplicate_joints() {
        let tables = MoveGenTables::new();
        let mut piece = Piece::new(PieceKind::Rook, c(0, 7));
        record_segment(
            &mut piece,
            &trajectory_segment(&tables, PieceKind::Rook, c(0, 7), c(0, 5)),
        );
        record_segment(
            &mut piece,
            &trajectory_segment(&tables, PieceKind::Rook, c(0, 5), c(2, 5)),
        );
        assert_eq!(
            piece.trajectory,
            vec![c(0, 7), c(0, 6), c(0, 5), c(1, 5), c(2, 5)]
        );
    }

    #[test]
    fn foreign_excludes_own_and_inactive() {
        let mut board = Board::empty();
        let rook = board.place_piece(PieceKind::Rook, c(0, 7)).unwrap();
        let king = board.place_piece(PieceKind::King, c(4, 7)).unwrap();
        let knight = board.place_piece(PieceKind::Knight, c(6, 7)).unwrap();
        board.piece_mut(rook).unwrap().trajectory = vec![c(0, 7), c(0, 6)];
        board.piece_mut(king).unwrap().trajectory = vec![c(4, 7), c(4, 6)];
        board.piece_mut(knight).unwrap().trajectory = vec![c(6, 7), c(6, 6), c(7, 5)];
        board.piece_mut(knight).unwrap().active = false;

        let foreign = foreign_trajectory_cells(&board, rook);
        assert_eq!(foreign.to_vec(), vec![c(4, 6), c(4, 7)]);
        assert_eq!(
            own_trajectory(board.piece(rook).unwrap()).to_vec(),
            vec![c(0, 6), c(0, 7)]
        );
    }
}
