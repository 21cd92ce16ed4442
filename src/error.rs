//! Error types for the puzzle engine
//!
//! Interactive misuse (selecting an empty cell, tapping outside the candidate
//! set) is reported through outcome enums in [`crate::session`]; the errors
//! here are for calls that cannot be interpreted at all.

use thiserror::Error;

use crate::board::Coord;

/// Errors raised by the puzzle engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// Coordinate outside the 8x8 grid
    #[error("Coordinate ({x}, {y}) is outside the 8x8 board")]
    OutOfBounds { x: i32, y: i32 },

    /// Destination is not a legal move for the piece on the source cell
    #[error("Illegal move from {from} to {to}")]
    IllegalMove { from: Coord, to: Coord },

    /// Two pieces were placed on the same cell while building a layout
    #[error("Cell ({x}, {y}) already holds a piece")]
    SquareOccupied { x: u8, y: u8 },

    /// No piece at the requested cell
    #[error("No piece at cell ({x}, {y})")]
    NoPieceAt { x: u8, y: u8 },
}

/// Result type alias for puzzle operations
pub type PuzzleResult<T> = Result<T, PuzzleError>;
