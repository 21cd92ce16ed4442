//! The game session.
//!
//! A [`GameSession`] owns all mutable puzzle state: the board with its pieces
//! and pawns, the move counter, the current selection and the RNG used for
//! dealing new configurations. A front-end holds one session and drives it
//! through the commands below; it never mutates the board directly.
//!
//! Every command either completes fully or leaves the session untouched.
//! Interactive misuse degrades to a no-op reported through an outcome value,
//! so the caller can play a "not allowed" cue.

use bitflags::bitflags;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::board::{Board, Coord};
use crate::config::{SessionConfig, SetupMode};
use crate::error::{PuzzleError, PuzzleResult};
use crate::movegen_tables::MoveGenTables;
use crate::movegeneration::{has_any_legal_move, legal_moves};
use crate::piece::{Piece, PieceKind};
use crate::setup::deal;
use crate::squareset::SquareSet;
use crate::trajectory::{record_segment, trajectory_segment};

bitflags! {
    /// What a committed move did.
    pub struct MoveEffects: u8 {
        const NONE = 0;
        const CAPTURED_PAWN = 1 << 0;
        const WON = 1 << 1;
        const LOST = 1 << 2;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// No pawn is left on the board
    Won,
    /// Pawns remain but no active piece can move
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    /// Empty cell, inactive piece, or the game is over. Selection unchanged.
    InvalidSelection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(MoveEffects),
    /// Destination not among the candidates. The selection is cleared.
    IllegalMove,
    /// Nothing selected.
    PrematureMove,
    GameOver,
}

/// Result of a single tap on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected,
    /// A tap outside the candidates cancelled the selection
    SelectionCleared,
    Moved(MoveEffects),
    Ignored,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    tables: MoveGenTables,
    rng: StdRng,
    move_count: u32,
    selection: Option<Coord>,
    candidate_moves: SquareSet,
}

impl GameSession {
    /// Creates a session and deals the configured setup.
    pub fn new(config: SessionConfig) -> PuzzleResult<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let board = deal(config.setup, &mut rng)?;
        info!(setup = ?config.setup, seed = ?config.seed, "new puzzle session");
        Ok(Self::with_board(config, board, rng))
    }

    /// Creates a session on a hand-built position.
    ///
    /// Each piece's cell becomes its origin. Restart puts the pieces back there
    /// and refills the whole pawn row, like any other session.
    pub fn from_layout(
        config: SessionConfig,
        pieces: &[(PieceKind, Coord)],
        pawns: &[Coord],
    ) -> PuzzleResult<Self> {
        let mut board = Board::empty();
        for &(kind, coord) in pieces {
            board.place_piece(kind, coord)?;
        }
        for &coord in pawns {
            board.place_pawn(coord);
        }
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self::with_board(config, board, rng))
    }

    fn with_board(config: SessionConfig, board: Board, rng: StdRng) -> Self {
        GameSession {
            config,
            board,
            tables: MoveGenTables::new(),
            rng,
            move_count: 0,
            selection: None,
            candidate_moves: SquareSet::EMPTY,
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pieces(&self) -> &[Piece] {
        self.board.pieces()
    }

    pub fn piece_at(&self, coord: Coord) -> Option<&Piece> {
        self.board.piece_at(coord)
    }

    /// Recorded path of the piece on `coord`, in travel order.
    pub fn trajectory_of(&self, coord: Coord) -> Option<&[Coord]> {
        self.board
            .piece_at(coord)
            .map(|piece| piece.trajectory.as_slice())
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn selection(&self) -> Option<Coord> {
        self.selection
    }

    pub fn candidate_moves(&self) -> SquareSet {
        self.candidate_moves
    }

    /// Legal moves of any cell, without touching the selection.
    pub fn legal_moves(&self, from: Coord) -> SquareSet {
        legal_moves(&self.board, &self.tables, from)
    }

    pub fn is_won(&self) -> bool {
        self.board.pawn_count() == 0
    }

    pub fn is_lost(&self) -> bool {
        !self.is_won() && !has_any_legal_move(&self.board, &self.tables)
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.is_lost() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// End-of-game message for the player, `None` while the game runs.
    pub fn status_message(&self) -> Option<String> {
        match self.status() {
            GameStatus::InProgress => None,
            GameStatus::Won => Some(format!("You won in {} steps!", self.move_count)),
            GameStatus::Lost => Some("No more possible moves. You lost.".to_string()),
        }
    }

    pub fn select(&mut self, coord: Coord) -> SelectOutcome {
        let selectable = self
            .board
            .piece_at(coord)
            .map(|piece| piece.active)
            .unwrap_or(false);
        if !selectable || self.is_over() {
            trace!(%coord, "selection rejected");
            return SelectOutcome::InvalidSelection;
        }
        self.selection = Some(coord);
        self.candidate_moves = legal_moves(&self.board, &self.tables, coord);
        debug!(%coord, candidates = self.candidate_moves.len(), "selected piece");
        SelectOutcome::Selected
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.candidate_moves = SquareSet::EMPTY;
    }

    /// Moves the selected piece to `to` if it is one of the candidates.
    pub fn attempt_move(&mut self, to: Coord) -> MoveOutcome {
        if self.is_over() {
            trace!(%to, "move rejected, game is over");
            return MoveOutcome::GameOver;
        }
        let Some(from) = self.selection else {
            trace!(%to, "move rejected, nothing selected");
            return MoveOutcome::PrematureMove;
        };
        if !self.candidate_moves.contains(to) {
            trace!(%from, %to, "move rejected, not a candidate");
            self.clear_selection();
            return MoveOutcome::IllegalMove;
        }
        match self.apply_move(from, to) {
            Ok(effects) => MoveOutcome::Moved(effects),
            Err(_) => {
                self.clear_selection();
                MoveOutcome::IllegalMove
            }
        }
    }

    /// Commits a move from `from` to `to`.
    ///
    /// Fails with [`PuzzleError::IllegalMove`] and changes nothing when `to`
    /// is not a legal destination of the piece on `from`.
    pub fn apply_move(&mut self, from: Coord, to: Coord) -> PuzzleResult<MoveEffects> {
        let index = match self.board.piece_index_at(from) {
            Some(index) if legal_moves(&self.board, &self.tables, from).contains(to) => index,
            _ => return Err(PuzzleError::IllegalMove { from, to }),
        };
        let kind = self.board.piece(index).map(|piece| piece.kind).ok_or(
            PuzzleError::NoPieceAt {
                x: from.x(),
                y: from.y(),
            },
        )?;
        let segment = trajectory_segment(&self.tables, kind, from, to);

        self.board.move_piece(from, to)?;
        let captured = self.board.remove_pawn(to);
        if let Some(piece) = self.board.piece_mut(index) {
            record_segment(piece, &segment);
            if captured {
                piece.active = false;
            }
        }
        self.move_count += 1;
        self.clear_selection();

        let mut effects = MoveEffects::NONE;
        if captured {
            effects |= MoveEffects::CAPTURED_PAWN;
        }
        debug!(?kind, %from, %to, captured, moves = self.move_count, "move committed");

        match self.status() {
            GameStatus::Won => {
                effects |= MoveEffects::WON;
                info!(moves = self.move_count, "all pawns destroyed");
            }
            GameStatus::Lost => {
                effects |= MoveEffects::LOST;
                info!(
                    moves = self.move_count,
                    pawns_left = self.board.pawn_count(),
                    "no legal moves left"
                );
            }
            GameStatus::InProgress => {}
        }
        Ok(effects)
    }

    /// One tap on the board, the way the touch front-ends drive the game.
    ///
    /// With a selection, the tap either commits a move to a candidate cell or
    /// cancels the selection. Without one, it selects an active piece.
    pub fn click(&mut self, coord: Coord) -> ClickOutcome {
        if self.selection.is_some() {
            return match self.attempt_move(coord) {
                MoveOutcome::Moved(effects) => ClickOutcome::Moved(effects),
                MoveOutcome::IllegalMove => ClickOutcome::SelectionCleared,
                MoveOutcome::PrematureMove | MoveOutcome::GameOver => ClickOutcome::Ignored,
            };
        }
        match self.select(coord) {
            SelectOutcome::Selected => ClickOutcome::Selected,
            SelectOutcome::InvalidSelection => ClickOutcome::Ignored,
        }
    }

    /// [`GameSession::click`] on raw grid coordinates.
    pub fn click_xy(&mut self, x: i32, y: i32) -> PuzzleResult<ClickOutcome> {
        let coord = Coord::new(x, y)?;
        Ok(self.click(coord))
    }

    pub fn new_standard_configuration(&mut self) -> PuzzleResult<()> {
        self.reconfigure(SetupMode::Standard)
    }

    pub fn new_unlimited_configuration(&mut self) -> PuzzleResult<()> {
        self.reconfigure(SetupMode::Unlimited)
    }

    fn reconfigure(&mut self, setup: SetupMode) -> PuzzleResult<()> {
        let board = deal(setup, &mut self.rng)?;
        self.board = board;
        self.config.setup = setup;
        self.move_count = 0;
        self.clear_selection();
        info!(?setup, "new configuration");
        Ok(())
    }

    /// Same pieces back on their origins, trajectories and pawns reset.
    pub fn restart(&mut self) {
        self.board.reset_to_origins();
        self.move_count = 0;
        self.clear_selection();
        info!("puzzle restarted");
    }
}
