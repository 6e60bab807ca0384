//! Rules engine: move and capture generation, forced captures, capture chains,
//! promotion and terminal detection.
//!
//! All functions are pure with respect to their input board. Applying a move
//! returns a new [`Board`] value; a rejected move leaves the caller's board
//! untouched.

use std::fmt;

use tracing::{debug, trace};

use crate::board::{Board, Move, Player, Square};
use crate::error::{MoveError, SelectionError};

/// Diagonal directions in scan order.
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Result of [`check_winner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "no winner yet"),
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

/// An accepted move and everything the caller needs to continue the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    /// Position after the move; the input board is never modified.
    pub board: Board,
    /// Cell vacated by the captured piece, if the move was a capture.
    pub captured: Option<Square>,
    /// Same player when the capture chain must continue, otherwise the opponent.
    pub next_player: Player,
    /// The moved piece has a further capture from its landing square.
    pub chain_continues: bool,
    /// The move crowned the moving piece.
    pub promoted: bool,
}

impl MoveOutcome {
    pub fn captured_cells(&self) -> Vec<Square> {
        self.captured.into_iter().collect()
    }
}

/// A successful selection: the chosen piece and where it may go this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub moves: Vec<Move>,
}

impl Selection {
    pub fn destinations(&self) -> Vec<Square> {
        self.moves.iter().map(|mv| mv.to).collect()
    }
}

// Kings use all four diagonals, men only the two forward ones
fn directions(player: Player, king: bool) -> impl Iterator<Item = (i8, i8)> {
    DIRECTIONS
        .into_iter()
        .filter(move |&(dr, _)| king || dr == player.forward())
}

fn push_simple_moves(board: &Board, player: Player, from: Square, king: bool, out: &mut Vec<Move>) {
    for (dr, dc) in directions(player, king) {
        if let Some(to) = from.offset(dr, dc, 1) {
            if board.is_empty(to) {
                out.push(Move::new(from, to));
            }
        }
    }
}

fn push_captures(board: &Board, player: Player, from: Square, king: bool, out: &mut Vec<Move>) {
    for (dr, dc) in directions(player, king) {
        let Some(over) = from.offset(dr, dc, 1) else {
            continue;
        };
        match board.get(over) {
            Some(piece) if piece.player == player.opponent() => {}
            _ => continue,
        }
        if let Some(landing) = from.offset(dr, dc, 2) {
            if board.is_empty(landing) {
                out.push(Move::new(from, landing));
            }
        }
    }
}

/// Non-capturing one-step moves for the piece on `from`, or for every piece
/// of `player` when `from` is `None`. Ignores the forced-capture rule.
pub fn generate_simple_moves(board: &Board, player: Player, from: Option<Square>) -> Vec<Move> {
    let mut moves = Vec::new();
    match from {
        Some(sq) => {
            if let Some(piece) = board.get(sq).filter(|p| p.player == player) {
                push_simple_moves(board, player, sq, piece.king, &mut moves);
            }
        }
        None => {
            for piece in board.pieces_of(player) {
                push_simple_moves(board, player, piece.square(), piece.king, &mut moves);
            }
        }
    }
    moves
}

/// Single jumps available from `from` for a piece of `player`, at most one per direction.
pub fn generate_captures(board: &Board, player: Player, from: Square, king: bool) -> Vec<Move> {
    let mut captures = Vec::new();
    push_captures(board, player, from, king, &mut captures);
    captures
}

/// Captures of whatever piece stands on `sq` (empty if the square is empty).
pub fn piece_captures(board: &Board, sq: Square) -> Vec<Move> {
    board
        .get(sq)
        .map(|piece| generate_captures(board, piece.player, sq, piece.king))
        .unwrap_or_default()
}

/// Every capture available to `player`, row-major by piece.
pub fn generate_all_captures(board: &Board, player: Player) -> Vec<Move> {
    let mut captures = Vec::new();
    for piece in board.pieces_of(player) {
        push_captures(board, player, piece.square(), piece.king, &mut captures);
    }
    captures
}

/// True iff any piece of `player` can capture.
pub fn captures_available(board: &Board, player: Player) -> bool {
    board
        .pieces_of(player)
        .any(|piece| !generate_captures(board, player, piece.square(), piece.king).is_empty())
}

/// Legal moves for `player`: only captures when any exists, otherwise simple moves.
pub fn generate_moves(board: &Board, player: Player) -> Vec<Move> {
    let captures = generate_all_captures(board, player);
    if captures.is_empty() {
        generate_simple_moves(board, player, None)
    } else {
        captures
    }
}

/// Legal moves of the single piece on `sq`, forced-capture rule applied.
pub fn moves_for_piece(board: &Board, player: Player, sq: Square) -> Vec<Move> {
    let Some(piece) = board.get(sq).filter(|p| p.player == player) else {
        return Vec::new();
    };
    if captures_available(board, player) {
        generate_captures(board, player, sq, piece.king)
    } else {
        generate_simple_moves(board, player, Some(sq))
    }
}

/// Selects the piece on `sq` for `player` and lists its legal moves.
pub fn select(board: &Board, player: Player, sq: Square) -> Result<Selection, SelectionError> {
    let piece = board.get(sq).ok_or(SelectionError::EmptySquare)?;
    if piece.player != player {
        return Err(SelectionError::OpponentPiece);
    }

    if captures_available(board, player) {
        let captures = generate_captures(board, player, sq, piece.king);
        if captures.is_empty() {
            return Err(SelectionError::MustCaptureWithAnotherPiece);
        }
        return Ok(Selection {
            square: sq,
            moves: captures,
        });
    }

    Ok(Selection {
        square: sq,
        moves: generate_simple_moves(board, player, Some(sq)),
    })
}

/// Geometry, ownership and occupancy checks of a single move, without the
/// forced-capture rule.
pub fn validate_move(board: &Board, player: Player, mv: Move) -> Result<(), MoveError> {
    let piece = match board.get(mv.from) {
        Some(piece) if piece.player == player => piece,
        _ => return Err(MoveError::NotYourPiece),
    };

    if !board.is_empty(mv.to) {
        return Err(MoveError::TargetOccupied);
    }

    let row_diff = mv.row_delta();
    let col_diff = mv.col_delta();
    if row_diff.abs() != col_diff.abs() {
        return Err(MoveError::NotDiagonal);
    }

    if !piece.king && row_diff.signum() != player.forward() as i32 {
        return Err(MoveError::WrongDirection);
    }

    match row_diff.abs() {
        1 => Ok(()),
        2 => match mv.midpoint().and_then(|mid| board.get(mid)) {
            Some(jumped) if jumped.player == player.opponent() => Ok(()),
            _ => Err(MoveError::NothingToCapture),
        },
        _ => Err(MoveError::TooFar),
    }
}

/// Predicate form of [`validate_move`], for move previews.
pub fn is_valid_move(board: &Board, player: Player, mv: Move) -> bool {
    validate_move(board, player, mv).is_ok()
}

fn check_move(board: &Board, player: Player, mv: Move) -> Result<(), MoveError> {
    validate_move(board, player, mv)?;

    if captures_available(board, player) {
        let king = board.get(mv.from).map_or(false, |p| p.king);
        if !generate_captures(board, player, mv.from, king).contains(&mv) {
            return Err(MoveError::CaptureRequired);
        }
    } else if mv.is_jump() {
        return Err(MoveError::NothingToCapture);
    }

    Ok(())
}

/// Validates and applies `mv` for `player` on a copy of `board`.
pub fn move_piece(board: &Board, mv: Move, player: Player) -> Result<MoveOutcome, MoveError> {
    if let Err(reason) = check_move(board, player, mv) {
        trace!(%mv, %player, %reason, "move rejected");
        return Err(reason);
    }

    let mut next = *board;
    let mut piece = next.relocate(mv.from, mv.to).ok_or(MoveError::NotYourPiece)?;
    let mut promoted = false;

    if !piece.king && mv.to.row() == player.promotion_row() {
        next.promote(mv.to);
        piece.promote();
        promoted = true;
        debug!(%mv, %player, "piece promoted to king");
    }

    let mut captured = None;
    if let Some(mid) = mv.midpoint() {
        if let Some(victim) = next.remove(mid) {
            captured = Some(mid);
            // Un pezzo semplice che cattura un re diventa re
            if victim.king && !piece.king {
                next.promote(mv.to);
                piece.promote();
                promoted = true;
                debug!(%mv, %player, "piece promoted to king after capturing a king");
            }
        }
    }

    let chain_continues =
        captured.is_some() && !generate_captures(&next, player, mv.to, piece.king).is_empty();
    let next_player = if chain_continues {
        debug!(%mv, %player, "capture chain continues");
        player
    } else {
        player.opponent()
    };

    Ok(MoveOutcome {
        mv,
        board: next,
        captured,
        next_player,
        chain_continues,
        promoted,
    })
}

pub fn has_pieces(board: &Board, player: Player) -> bool {
    board.pieces_of(player).next().is_some()
}

pub fn has_valid_moves(board: &Board, player: Player) -> bool {
    !generate_moves(board, player).is_empty()
}

/// True iff either side has no pieces or no legal move.
pub fn is_game_over(board: &Board) -> bool {
    Player::ALL
        .iter()
        .any(|&player| !has_pieces(board, player) || !has_valid_moves(board, player))
}

/// Winner by elimination; one piece each is a draw.
pub fn check_winner(board: &Board) -> Outcome {
    let red = board.count(Player::Red);
    let white = board.count(Player::White);

    if red == 0 {
        Outcome::Winner(Player::White)
    } else if white == 0 {
        Outcome::Winner(Player::Red)
    } else if red == 1 && white == 1 {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Leaf count of the full-width move tree, one ply per applied move.
pub fn perft(board: &Board, player: Player, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for mv in generate_moves(board, player) {
        if let Ok(outcome) = move_piece(board, mv, player) {
            nodes += perft(&outcome.board, player.opponent(), depth - 1);
        }
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_men_use_forward_directions_only() {
        let red: Vec<_> = directions(Player::Red, false).collect();
        assert_eq!(red, vec![(1, -1), (1, 1)]);
        let white: Vec<_> = directions(Player::White, false).collect();
        assert_eq!(white, vec![(-1, -1), (-1, 1)]);
        assert_eq!(directions(Player::White, true).count(), 4);
    }

    #[test]
    fn test_initial_position_has_seven_moves_each() {
        let board = Board::new();
        assert_eq!(generate_moves(&board, Player::Red).len(), 7);
        assert_eq!(generate_moves(&board, Player::White).len(), 7);
        assert!(!captures_available(&board, Player::Red));
    }

    #[test]
    fn test_rejected_move_leaves_board_untouched() {
        let board = Board::new();
        let before = board;
        let mv = Move::new(sq(2, 1), sq(4, 3));
        assert_eq!(
            move_piece(&board, mv, Player::Red),
            Err(MoveError::NothingToCapture)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_too_far_is_rejected() {
        let board = Board::from_pieces(&[(2, 1, Player::Red, true)]).unwrap();
        let mv = Move::new(sq(2, 1), sq(5, 4));
        assert_eq!(validate_move(&board, Player::Red, mv), Err(MoveError::TooFar));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Winner(Player::Red).to_string(), "red wins");
        assert_eq!(Outcome::Draw.to_string(), "draw");
        assert!(!Outcome::InProgress.is_over());
    }
}
