//! Legal move generation.
//!
//! Pieces never capture one another: any piece, active or not, blocks a cell.
//! Pawns are the only capturable targets and do not block. On top of the piece
//! geometry the trajectory rules apply:
//!
//! - a piece's own trajectory can be neither landed on nor crossed;
//! - another active piece's trajectory can be crossed by a slider but not
//!   landed on.

use tracing::trace;

use crate::board::{Board, Coord};
use crate::movegen_tables::MoveGenTables;
use crate::piece::PieceKind;
use crate::squareset::SquareSet;
use crate::trajectory::{foreign_trajectory_cells, own_trajectory};

/// Obstacle sets seen by one piece.
#[derive(Debug, Clone, Copy)]
struct Obstacles {
    occupied: SquareSet,
    own: SquareSet,
    foreign: SquareSet,
}

/// Legal destinations for the piece on `from`.
///
/// Empty if the cell holds no piece or an inactive one. Read-only; safe to
/// call for previews.
///
/// # Arguments
///
/// * `board` - The current board
/// * `tables` - Pre-computed move generation tables
/// * `from` - The square of the piece to generate moves for
///
/// # Returns
///
/// * The set of cells the piece may move to. A cell holding a pawn is a
///   capture; every other cell in the set is a quiet move.
pub fn legal_moves(board: &Board, tables: &MoveGenTables, from: Coord) -> SquareSet {
    let Some(index) = board.piece_index_at(from) else {
        return SquareSet::EMPTY;
    };
    let Some(piece) = board.piece(index).filter(|piece| piece.active) else {
        return SquareSet::EMPTY;
    };

    let obstacles = Obstacles {
        occupied: board.occupied_by_pieces(Some(from)),
        own: own_trajectory(piece),
        foreign: foreign_trajectory_cells(board, index),
    };

    let moves = match piece.kind {
        PieceKind::Knight | PieceKind::King => {
            generate_step_moves(piece.kind, from, tables, obstacles)
        }
        PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop => {
            generate_sliding_moves(piece.kind, from, tables, obstacles)
        }
    };
    trace!(kind = ?piece.kind, from = %from, count = moves.len(), "generated legal moves");
    moves
}

/// Knight and king: a destination check only, nothing in between.
fn generate_step_moves(
    kind: PieceKind,
    from: Coord,
    tables: &MoveGenTables,
    obstacles: Obstacles,
) -> SquareSet {
    tables.step_targets(kind, from) - obstacles.occupied - obstacles.foreign - obstacles.own
}

/// Rook, bishop and queen: walk each ray until a piece or the piece's own
/// trajectory stops it, stepping over foreign trajectory cells.
fn generate_sliding_moves(
    kind: PieceKind,
    from: Coord,
    tables: &MoveGenTables,
    obstacles: Obstacles,
) -> SquareSet {
    let mut moves = SquareSet::new();
    for &dir in kind.directions() {
        for &target in tables.rays.ray(from, dir) {
            if obstacles.occupied.contains(target) || obstacles.own.contains(target) {
                break;
            }
            if obstacles.foreign.contains(target) {
                continue;
            }
            moves.insert(target);
        }
    }
    moves
}

/// Whether any active piece on the board still has a legal move.
pub fn has_any_legal_move(board: &Board, tables: &MoveGenTables) -> bool {
    board
        .active_pieces()
        .any(|(_, coord)| !legal_moves(board, tables, coord).is_empty())
}
