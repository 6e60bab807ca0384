//! Game session: turn bookkeeping and the selection state machine
//!
//! The rules engine is stateless. A front end still has to remember which
//! piece is selected and, after a capture that must be continued, which piece
//! is obliged to keep capturing. [`GameSession`] keeps that state explicitly,
//! driven only by the `chain_continues` flag the rules engine returns.

use tracing::info;

use crate::board::{Board, Move, Player, Square};
use crate::error::{EngineError, EngineResult, MoveError, SelectionError};
use crate::rules::{self, check_winner, has_valid_moves, MoveOutcome, Outcome, Selection};
use crate::search::Search;

/// Hints allowed per game unless configured otherwise.
pub const DEFAULT_HINTS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    PieceSelected {
        square: Square,
        moves: Vec<Move>,
    },
    /// The piece on `square` just captured and has to capture again.
    MustContinueCapture {
        square: Square,
    },
}

impl SelectionState {
    fn chain_square(&self) -> Option<Square> {
        match self {
            SelectionState::MustContinueCapture { square } => Some(*square),
            _ => None,
        }
    }
}

/// What a click on the board resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickResult {
    Selected(Selection),
    Moved(MoveOutcome),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    to_move: Player,
    state: SelectionState,
    outcome: Outcome,
    hints_remaining: u8,
    history: Vec<Move>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_HINTS)
    }
}

impl GameSession {
    /// New game from the initial layout, Red to move.
    pub fn new(hints: u8) -> Self {
        Self::from_position(Board::new(), Player::Red, hints)
    }

    pub fn from_position(board: Board, to_move: Player, hints: u8) -> Self {
        let mut session = Self {
            board,
            to_move,
            state: SelectionState::Idle,
            outcome: Outcome::InProgress,
            hints_remaining: hints,
            history: Vec::new(),
        };
        session.outcome = session.status();
        session
    }

    pub fn reset(&mut self, hints: u8) {
        *self = Self::new(hints);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn hints_remaining(&self) -> u8 {
        self.hints_remaining
    }

    /// Moves applied so far, capture-chain steps included.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    // A side with pieces but no legal move loses
    fn status(&self) -> Outcome {
        match check_winner(&self.board) {
            Outcome::InProgress if !has_valid_moves(&self.board, self.to_move) => {
                Outcome::Winner(self.to_move.opponent())
            }
            outcome => outcome,
        }
    }

    fn ensure_in_progress(&self) -> EngineResult<()> {
        if self.outcome.is_over() {
            Err(EngineError::GameOver(self.outcome))
        } else {
            Ok(())
        }
    }

    /// Selects a piece of the side to move.
    pub fn select(&mut self, sq: Square) -> EngineResult<Selection> {
        self.ensure_in_progress()?;

        if let Some(chain) = self.state.chain_square() {
            if sq != chain {
                return Err(SelectionError::MustContinueCapture.into());
            }
            return Ok(rules::select(&self.board, self.to_move, sq)?);
        }

        match rules::select(&self.board, self.to_move, sq) {
            Ok(selection) => {
                self.state = SelectionState::PieceSelected {
                    square: sq,
                    moves: selection.moves.clone(),
                };
                Ok(selection)
            }
            Err(reason) => {
                self.state = SelectionState::Idle;
                Err(reason.into())
            }
        }
    }

    /// Plays `mv` for the side to move.
    pub fn play(&mut self, mv: Move) -> EngineResult<MoveOutcome> {
        self.ensure_in_progress()?;

        if let Some(chain) = self.state.chain_square() {
            if mv.from != chain {
                return Err(MoveError::MustContinueCapture.into());
            }
        }

        let outcome = rules::move_piece(&self.board, mv, self.to_move)?;
        self.apply(&outcome);
        Ok(outcome)
    }

    /// Click semantics of a board front end: an own piece is selected,
    /// any other square is a move target for the current selection.
    pub fn click(&mut self, sq: Square) -> EngineResult<ClickResult> {
        self.ensure_in_progress()?;

        let own_piece = self
            .board
            .get(sq)
            .map_or(false, |piece| piece.player == self.to_move);
        if own_piece {
            return self.select(sq).map(ClickResult::Selected);
        }

        let from = match &self.state {
            SelectionState::PieceSelected { square, .. }
            | SelectionState::MustContinueCapture { square } => *square,
            SelectionState::Idle => {
                let reason = if self.board.is_empty(sq) {
                    SelectionError::EmptySquare
                } else {
                    SelectionError::OpponentPiece
                };
                return Err(reason.into());
            }
        };

        self.play(Move::new(from, sq)).map(ClickResult::Moved)
    }

    /// Lets the search play one move (one capture of a chain) for the side to move.
    pub fn ai_move(&mut self, search: &mut Search, depth: u8) -> EngineResult<MoveOutcome> {
        self.ensure_in_progress()?;

        let outcome = search.play(&self.board, self.to_move, depth, self.state.chain_square())?;
        self.apply(&outcome);
        Ok(outcome)
    }

    /// Plays a whole turn for the side to move, following the capture chain.
    pub fn play_ai_turn(&mut self, search: &mut Search, depth: u8) -> EngineResult<Vec<MoveOutcome>> {
        let mut played = Vec::new();
        loop {
            let outcome = self.ai_move(search, depth)?;
            let continues = outcome.chain_continues;
            played.push(outcome);
            if !continues || self.outcome.is_over() {
                break;
            }
        }
        Ok(played)
    }

    /// Suggests a move for the side to move without playing it.
    pub fn hint(&mut self, search: &mut Search, depth: u8) -> EngineResult<Move> {
        self.ensure_in_progress()?;
        if self.hints_remaining == 0 {
            return Err(EngineError::NoHintsRemaining);
        }

        let best = match self.state.chain_square() {
            Some(sq) => search.best_continuation(&self.board, depth, self.to_move, sq),
            None => search.generate_best_move(&self.board, depth, self.to_move),
        };
        let mv = best.ok_or(EngineError::NoMoveAvailable {
            player: self.to_move,
        })?;
        self.hints_remaining -= 1;
        Ok(mv)
    }

    fn apply(&mut self, outcome: &MoveOutcome) {
        self.board = outcome.board;
        self.to_move = outcome.next_player;
        self.history.push(outcome.mv);
        self.state = if outcome.chain_continues {
            SelectionState::MustContinueCapture {
                square: outcome.mv.to,
            }
        } else {
            SelectionState::Idle
        };
        self.outcome = self.status();

        info!(mv = %outcome.mv, next = %self.to_move, chain = outcome.chain_continues, "move applied");
        if self.outcome.is_over() {
            info!(outcome = %self.outcome, "game over");
        }
    }
}
