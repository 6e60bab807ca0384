//! Simple moves, move validation and rejection causes

use damista::board::{Board, Move, Player, Square};
use damista::error::MoveError;
use damista::rules::{generate_moves, generate_simple_moves, is_valid_move, move_piece, validate_move};

fn sq(row: i32, col: i32) -> Square {
    Square::new(row, col).unwrap()
}

fn mv(sr: i32, sc: i32, er: i32, ec: i32) -> Move {
    Move::from_coords(sr, sc, er, ec).unwrap()
}

#[test]
fn initial_moves_in_scan_order() {
    let board = Board::new();
    let red = generate_moves(&board, Player::Red);
    assert_eq!(
        red,
        vec![
            mv(2, 1, 3, 0),
            mv(2, 1, 3, 2),
            mv(2, 3, 3, 2),
            mv(2, 3, 3, 4),
            mv(2, 5, 3, 4),
            mv(2, 5, 3, 6),
            mv(2, 7, 3, 6),
        ]
    );

    let white = generate_moves(&board, Player::White);
    assert_eq!(white.len(), 7);
    assert_eq!(white[0], mv(5, 0, 4, 1));
    assert!(white.iter().all(|m| m.from.row() == 5 && m.to.row() == 4));
}

#[test]
fn man_moves_forward_only() {
    let board = Board::from_pieces(&[(4, 3, Player::Red, false), (4, 5, Player::White, false)]).unwrap();

    assert_eq!(
        generate_simple_moves(&board, Player::Red, Some(sq(4, 3))),
        vec![mv(4, 3, 5, 2), mv(4, 3, 5, 4)]
    );
    assert_eq!(
        generate_simple_moves(&board, Player::White, Some(sq(4, 5))),
        vec![mv(4, 5, 3, 4), mv(4, 5, 3, 6)]
    );
    assert_eq!(
        validate_move(&board, Player::Red, mv(4, 3, 3, 2)),
        Err(MoveError::WrongDirection)
    );
}

#[test]
fn king_moves_in_all_four_directions() {
    let board = Board::from_pieces(&[(4, 3, Player::Red, true), (0, 7, Player::White, false)]).unwrap();
    assert_eq!(
        generate_simple_moves(&board, Player::Red, Some(sq(4, 3))),
        vec![mv(4, 3, 3, 2), mv(4, 3, 3, 4), mv(4, 3, 5, 2), mv(4, 3, 5, 4)]
    );
}

#[test]
fn edge_piece_has_one_move() {
    let board = Board::from_pieces(&[(2, 7, Player::Red, false), (7, 0, Player::White, false)]).unwrap();
    assert_eq!(
        generate_simple_moves(&board, Player::Red, None),
        vec![mv(2, 7, 3, 6)]
    );
}

#[test]
fn rejection_causes() {
    let board = Board::new();

    assert_eq!(
        validate_move(&board, Player::Red, mv(5, 0, 4, 1)),
        Err(MoveError::NotYourPiece)
    );
    assert_eq!(
        validate_move(&board, Player::Red, mv(3, 0, 4, 1)),
        Err(MoveError::NotYourPiece)
    );
    assert_eq!(
        validate_move(&board, Player::Red, mv(1, 0, 2, 1)),
        Err(MoveError::TargetOccupied)
    );
    assert_eq!(
        validate_move(&board, Player::Red, mv(2, 1, 3, 1)),
        Err(MoveError::NotDiagonal)
    );
    assert_eq!(
        validate_move(&board, Player::Red, mv(2, 1, 4, 3)),
        Err(MoveError::NothingToCapture)
    );

    let open = Board::from_pieces(&[(2, 1, Player::Red, false), (7, 0, Player::White, false)]).unwrap();
    assert_eq!(
        validate_move(&open, Player::Red, mv(2, 1, 5, 4)),
        Err(MoveError::TooFar)
    );
}

#[test]
fn rejected_move_leaves_board_unchanged() {
    let board = Board::new();
    let before = board;
    let err = move_piece(&board, mv(2, 1, 4, 3), Player::Red).unwrap_err();
    assert_eq!(err, MoveError::NothingToCapture);
    assert_eq!(board, before);
}

#[test]
fn accepted_move_returns_new_board() {
    let board = Board::new();
    let outcome = move_piece(&board, mv(2, 1, 3, 2), Player::Red).unwrap();

    assert!(board.get(sq(2, 1)).is_some());
    assert!(board.is_empty(sq(3, 2)));

    assert!(outcome.board.is_empty(sq(2, 1)));
    assert_eq!(outcome.board.get(sq(3, 2)).map(|p| p.player), Some(Player::Red));
    assert_eq!(outcome.captured, None);
    assert!(outcome.captured_cells().is_empty());
    assert_eq!(outcome.next_player, Player::White);
    assert!(!outcome.chain_continues);
    assert!(!outcome.promoted);
}

#[test]
fn valid_move_predicate_matches_validation() {
    let board = Board::new();
    assert!(is_valid_move(&board, Player::Red, mv(2, 3, 3, 4)));
    assert!(!is_valid_move(&board, Player::Red, mv(2, 3, 3, 3)));
    assert!(is_valid_move(&board, Player::White, mv(5, 6, 4, 7)));
}
