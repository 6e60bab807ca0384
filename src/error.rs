//! Error types for the engine
//!
//! Every gameplay violation is a rejection carrying a human-readable reason;
//! none of them is fatal. Off-board coordinates are a caller contract
//! violation and are reported separately as [`EngineError::OutOfBounds`].

use crate::board::Player;
use crate::rules::Outcome;

/// Reasons a submitted move is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("it's not your turn")]
    NotYourPiece,

    #[error("the target position is already occupied")]
    TargetOccupied,

    #[error("you can only move diagonally")]
    NotDiagonal,

    #[error("you can't move in this direction")]
    WrongDirection,

    #[error("a piece moves one square, or two when capturing")]
    TooFar,

    #[error("no piece to capture")]
    NothingToCapture,

    #[error("a capture is available")]
    CaptureRequired,

    #[error("you must continue capturing with the current piece")]
    MustContinueCapture,
}

/// Reasons a piece cannot be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("there is no piece on that square")]
    EmptySquare,

    #[error("that piece belongs to the opponent")]
    OpponentPiece,

    #[error("you must capture with another piece")]
    MustCaptureWithAnotherPiece,

    #[error("you must continue capturing with the current piece")]
    MustContinueCapture,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("illegal selection: {0}")]
    IllegalSelection(#[from] SelectionError),

    #[error("illegal move: {0}")]
    IllegalMove(#[from] MoveError),

    #[error("no move available for {player}")]
    NoMoveAvailable { player: Player },

    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i32, col: i32 },

    #[error("no hints remaining")]
    NoHintsRemaining,

    #[error("the game is over: {0}")]
    GameOver(Outcome),

    #[error("invalid value for option {name}: {reason}")]
    InvalidOption { name: String, reason: String },
}

/// Result alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
