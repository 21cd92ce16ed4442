//! Board representation.
//!
//! The board owns the 64 cells and every piece placed on it. A cell refers to
//! its piece by index into the piece list, so piece identity stays stable while
//! pieces travel between cells.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, PuzzleResult};
use crate::piece::{Piece, PieceKind};
use crate::squareset::SquareSet;
use crate::utils::{in_bounds, set_bit, Bitboard, BOARD_SIZE};

/// Row the pawns stand on.
pub const PAWN_ROW: u8 = 0;
/// Row the pieces start on.
pub const BACK_ROW: u8 = 7;

/// A position on the grid, `x` is the column and `y` the row (0 at the top).
///
/// Always on the board: the only ways in are [`Coord::new`],
/// [`Coord::from_index`] and deserialization, and all of them check bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCoord")]
pub struct Coord {
    x: u8,
    y: u8,
}

/// Unchecked wire form of a [`Coord`].
#[derive(Deserialize)]
struct RawCoord {
    x: i32,
    y: i32,
}

impl TryFrom<RawCoord> for Coord {
    type Error = PuzzleError;

    fn try_from(raw: RawCoord) -> PuzzleResult<Coord> {
        Coord::new(raw.x, raw.y)
    }
}

impl Coord {
    /// Checked constructor.
    ///
    /// # Arguments
    ///
    /// * `x` - column, 0 on the left
    /// * `y` - row, 0 is the pawn row
    ///
    /// # Returns
    ///
    /// * The coordinate, or `OutOfBounds` if either value is off the 8x8 grid
    pub fn new(x: i32, y: i32) -> PuzzleResult<Coord> {
        if !in_bounds(x, y) {
            return Err(PuzzleError::OutOfBounds { x, y });
        }
        Ok(Coord {
            x: x as u8,
            y: y as u8,
        })
    }

    /// Inverse of [`Coord::index`].
    pub fn from_index(index: usize) -> Option<Coord> {
        if index >= 64 {
            return None;
        }
        Some(Coord {
            x: (index % 8) as u8,
            y: (index / 8) as u8,
        })
    }

    pub fn x(self) -> u8 {
        self.x
    }

    pub fn y(self) -> u8 {
        self.y
    }

    pub fn index(self) -> usize {
        self.y as usize * BOARD_SIZE as usize + self.x as usize
    }

    pub fn bit(self) -> Bitboard {
        set_bit(self.x as i32, self.y as i32)
    }

    /// The cell `(dx, dy)` away, if it is still on the board.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Coord> {
        Coord::new(self.x as i32 + dx, self.y as i32 + dy).ok()
    }

    /// All 64 coordinates in index order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..64).filter_map(Coord::from_index)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One square of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    /// Index into the board's piece list
    pub piece: Option<usize>,
    pub has_pawn: bool,
}

impl Cell {
    fn new(coord: Coord) -> Self {
        Cell {
            coord,
            piece: None,
            has_pawn: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pieces: Vec<Piece>,
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// A board with no pieces and no pawns.
    pub fn empty() -> Self {
        Board {
            pieces: Vec::new(),
            cells: Coord::all().map(Cell::new).collect(),
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_SIZE as u8
    }

    pub fn height(&self) -> u8 {
        BOARD_SIZE as u8
    }

    /// The cell under `coord`.
    ///
    /// # Arguments
    ///
    /// * `coord` - any coordinate; it is on the board by construction
    ///
    /// # Returns
    ///
    /// * A reference into the board's cell list
    pub fn cell_at(&self, coord: Coord) -> &Cell {
        &self.cells[coord.index()]
    }

    pub fn cell_at_xy(&self, x: i32, y: i32) -> PuzzleResult<&Cell> {
        Ok(self.cell_at(Coord::new(x, y)?))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, index: usize) -> Option<&Piece> {
        self.pieces.get(index)
    }

    pub(crate) fn piece_mut(&mut self, index: usize) -> Option<&mut Piece> {
        self.pieces.get_mut(index)
    }

    pub fn piece_index_at(&self, coord: Coord) -> Option<usize> {
        self.cell_at(coord).piece
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.piece_index_at(coord).and_then(|index| self.pieces.get(index))
    }

    /// Current cell of a piece. Linear scan; the board is small.
    pub fn position_of(&self, index: usize) -> Option<Coord> {
        self.cells
            .iter()
            .find(|cell| cell.piece == Some(index))
            .map(|cell| cell.coord)
    }

    /// Active pieces with their current cell.
    pub fn active_pieces(&self) -> impl Iterator<Item = (usize, Coord)> + '_ {
        self.cells.iter().filter_map(move |cell| {
            let index = cell.piece?;
            self.pieces
                .get(index)
                .filter(|piece| piece.active)
                .map(|_| (index, cell.coord))
        })
    }

    /// Puts a new piece on an empty cell, with `coord` as its origin.
    ///
    /// # Arguments
    ///
    /// * `kind` - the piece type
    /// * `coord` - the cell, which also becomes the piece's origin
    ///
    /// # Returns
    ///
    /// * The new piece's index, or `SquareOccupied` if a piece already stands there
    pub fn place_piece(&mut self, kind: PieceKind, coord: Coord) -> PuzzleResult<usize> {
        if self.cell_at(coord).piece.is_some() {
            return Err(PuzzleError::SquareOccupied {
                x: coord.x,
                y: coord.y,
            });
        }
        let index = self.pieces.len();
        self.pieces.push(Piece::new(kind, coord));
        self.cells[coord.index()].piece = Some(index);
        Ok(index)
    }

    pub fn place_pawn(&mut self, coord: Coord) {
        self.cells[coord.index()].has_pawn = true;
    }

    /// Removes a pawn, returning whether one was there.
    pub(crate) fn remove_pawn(&mut self, coord: Coord) -> bool {
        let cell = &mut self.cells[coord.index()];
        let had_pawn = cell.has_pawn;
        cell.has_pawn = false;
        had_pawn
    }

    /// One pawn on every column of the pawn row.
    pub fn place_pawn_row(&mut self) {
        for x in 0..BOARD_SIZE as u8 {
            self.place_pawn(Coord { x, y: PAWN_ROW });
        }
    }

    /// Moves the piece reference from `from` to `to`. Does not touch trajectories.
    pub(crate) fn move_piece(&mut self, from: Coord, to: Coord) -> PuzzleResult<usize> {
        let index = self.piece_index_at(from).ok_or(PuzzleError::NoPieceAt {
            x: from.x,
            y: from.y,
        })?;
        if from != to && self.cell_at(to).piece.is_some() {
            return Err(PuzzleError::SquareOccupied { x: to.x, y: to.y });
        }
        self.cells[from.index()].piece = None;
        self.cells[to.index()].piece = Some(index);
        Ok(index)
    }

    /// Puts every piece back on its origin, active and with an empty trajectory,
    /// and refills the pawn row.
    pub fn reset_to_origins(&mut self) {
        for cell in &mut self.cells {
            cell.piece = None;
            cell.has_pawn = false;
        }
        for (index, piece) in self.pieces.iter_mut().enumerate() {
            piece.reset();
            self.cells[piece.origin.index()].piece = Some(index);
        }
        self.place_pawn_row();
    }

    /// Cells holding any piece, active or not, optionally skipping one cell.
    pub fn occupied_by_pieces(&self, excluding: Option<Coord>) -> SquareSet {
        self.cells
            .iter()
            .filter(|cell| cell.piece.is_some() && Some(cell.coord) != excluding)
            .map(|cell| cell.coord)
            .collect()
    }

    pub fn pawn_cells(&self) -> SquareSet {
        self.cells
            .iter()
            .filter(|cell| cell.has_pawn)
            .map(|cell| cell.coord)
            .collect()
    }

    pub fn pawn_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.has_pawn).count()
    }

    /// Union of the trajectories of all active pieces.
    pub fn all_trajectory_cells(&self) -> SquareSet {
        self.pieces
            .iter()
            .filter(|piece| piece.active)
            .flat_map(|piece| piece.trajectory.iter())
            .collect()
    }
}

/// Text dump, row 0 first: `KQRBN` active pieces, lower case for inactive
/// ones, `p` pawns, `*` trajectory cells, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let trails: SquareSet = self
            .pieces
            .iter()
            .flat_map(|piece| piece.trajectory.iter())
            .collect();
        for (i, cell) in self.cells.iter().enumerate() {
            let symbol = match cell.piece.and_then(|index| self.pieces.get(index)) {
                Some(piece) => piece.symbol(),
                None if cell.has_pawn => 'p',
                None if trails.contains(cell.coord) => '*',
                None => '.',
            };
            write!(f, "{} ", symbol)?;
            if (i + 1) % BOARD_SIZE as usize == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
