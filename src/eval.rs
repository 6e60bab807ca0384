//! Valutazione statica - conteggio materiale
//!
//! Positive scores favour Red (+1), negative scores favour White (-1).
//! Kings currently weigh the same as men; both weights are kept as named
//! constants so they can be tuned without touching the search.

use crate::board::{Board, Player};

/// Weight of a man.
pub const MAN_VALUE: i32 = 1;
/// Weight of a king (same as a man in this ruleset).
pub const KING_VALUE: i32 = 1;

/// Material of one side.
pub fn material(board: &Board, player: Player) -> i32 {
    board
        .pieces_of(player)
        .map(|piece| if piece.king { KING_VALUE } else { MAN_VALUE })
        .sum()
}

/// Signed material differential, Red minus White.
pub fn evaluate(board: &Board) -> i32 {
    material(board, Player::Red) - material(board, Player::White)
}
