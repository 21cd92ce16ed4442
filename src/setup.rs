//! Dealing the starting position.
//!
//! Pawns always fill row 0, one per column. The pieces fill row 7 in column
//! order, either from the shuffled standard set or from independent draws.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::board::{Board, Coord, BACK_ROW};
use crate::config::SetupMode;
use crate::error::PuzzleResult;
use crate::piece::PieceKind;
use crate::utils::BOARD_SIZE;

/// The standard set in a uniformly random order.
pub fn standard_back_rank<R: Rng + ?Sized>(rng: &mut R) -> [PieceKind; 8] {
    let mut kinds = PieceKind::STANDARD_SET;
    kinds.shuffle(rng);
    kinds
}

/// Eight independent uniform draws from all kinds, repeats allowed.
pub fn unlimited_back_rank<R: Rng + ?Sized>(rng: &mut R) -> [PieceKind; 8] {
    [(); 8].map(|_| random_kind(rng))
}

fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}

/// A fresh board for the given mode: pawn row plus a dealt back row.
pub fn deal<R: Rng + ?Sized>(mode: SetupMode, rng: &mut R) -> PuzzleResult<Board> {
    let mut board = Board::empty();
    board.place_pawn_row();

    let kinds = match mode {
        SetupMode::Standard => standard_back_rank(rng),
        SetupMode::Unlimited => unlimited_back_rank(rng),
    };
    for (x, kind) in kinds.into_iter().enumerate() {
        board.place_piece(kind, Coord::new(x as i32, BACK_ROW as i32)?)?;
    }

    if mode == SetupMode::Unlimited {
        let pawns = board.pawn_count();
        top_up(&mut board, rng, pawns)?;
    }

    debug!(?mode, back_row = ?kinds, "dealt new configuration");
    Ok(board)
}

/// Adds random pieces on empty back-row columns until there are at least as
/// many active pieces as `pawn_count`. Returns how many were added.
///
/// With eight pawns and a full back row this never adds anything; it only
/// matters for boards that start with gaps on row 7.
pub fn top_up<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    pawn_count: usize,
) -> PuzzleResult<usize> {
    let mut added = 0;
    while board.active_pieces().count() < pawn_count {
        let empty_columns: Vec<i32> = (0..BOARD_SIZE)
            .filter(|&x| {
                board
                    .cell_at_xy(x, BACK_ROW as i32)
                    .map(|cell| cell.piece.is_none())
                    .unwrap_or(false)
            })
            .collect();
        let Some(&x) = empty_columns.choose(rng) else {
            break;
        };
        let kind = random_kind(rng);
        board.place_piece(kind, Coord::new(x, BACK_ROW as i32)?)?;
        added += 1;
    }
    if added > 0 {
        debug!(added, "topped up back row");
    }
    Ok(added)
}
