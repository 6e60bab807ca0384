use damista::board::{Board, Player};
use damista::rules::perft;

#[test]
fn perft_regression_starting_pos() {
    let board = Board::new();

    // Known leaf counts for the opening, no capture chains are reachable this early
    let expected = [1u64, 7, 49, 302];
    for (depth, &nodes) in expected.iter().enumerate() {
        let got = perft(&board, Player::Red, depth as u8);
        assert_eq!(got, nodes, "perft mismatch at depth {}: got {} expected {}", depth, got, nodes);
    }
}

#[test]
fn perft_is_symmetric_for_white() {
    let board = Board::new();
    for depth in 1..=3u8 {
        assert_eq!(
            perft(&board, Player::White, depth),
            perft(&board, Player::Red, depth),
            "colour asymmetry at depth {}",
            depth
        );
    }
}

#[test]
fn perft_does_not_touch_the_board() {
    let board = Board::new();
    let before = board;
    let _ = perft(&board, Player::Red, 4);
    assert_eq!(board, before);
}
