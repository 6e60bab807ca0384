//! Damista: a checkers (draughts) rules engine with an alpha-beta opponent.
//!
//! The rules engine ([`rules`]) is stateless: every operation takes a board
//! and returns a fresh one. [`game::GameSession`] adds turn bookkeeping and
//! the capture-chain state a front end needs, and [`protocol`] drives a
//! session over a line-based text protocol.

pub mod board;
pub mod error;
pub mod eval;
pub mod game;
pub mod protocol;
pub mod rules;
pub mod search;

pub use board::{Board, Move, Piece, Player, Square};
pub use error::{EngineError, EngineResult, MoveError, SelectionError};
pub use game::GameSession;
pub use rules::{MoveOutcome, Outcome};
