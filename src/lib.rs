//! Rules engine for a single-player chess puzzle.
//!
//! A back row of pieces must destroy the eight pawns on the opposite row.
//! Every piece leaves a permanent trail behind it. A piece can never land on
//! or cross its own trail. It can fly over another piece's trail but cannot
//! land on it. A piece that captures a pawn is spent and stays where it is.
//! The puzzle is won when no pawn is left, and lost when pawns remain but
//! nothing can move.
//!
//! The crate holds only the engine; drawing the board and reading input are
//! left to the front-end, which drives a [`GameSession`].
//!
//! ```
//! use trail_chess::{Coord, GameSession, SessionConfig};
//!
//! let mut session = GameSession::new(SessionConfig::standard().with_seed(1)).unwrap();
//! let from = Coord::new(0, 7).unwrap();
//! session.select(from);
//! if let Some(to) = session.candidate_moves().iter().next() {
//!     session.attempt_move(to);
//!     assert_eq!(session.move_count(), 1);
//! }
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod knightattacks;
pub mod movegen_tables;
pub mod movegeneration;
pub mod piece;
pub mod rayattacks;
pub mod session;
pub mod setup;
pub mod squareset;
pub mod trajectory;
pub mod utils;

pub use board::{Board, Cell, Coord};
pub use config::{SessionConfig, SetupMode};
pub use error::{PuzzleError, PuzzleResult};
pub use piece::{Piece, PieceKind};
pub use session::{ClickOutcome, GameSession, GameStatus, MoveEffects, MoveOutcome, SelectOutcome};
pub use squareset::SquareSet;
