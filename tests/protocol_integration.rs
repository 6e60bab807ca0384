//! Integration tests for the text protocol

use damista::protocol::{process_line, ProtocolEngine};

#[test]
fn test_handshake() {
    let mut engine = ProtocolEngine::new();

    let responses = process_line("damista", &mut engine);
    assert_eq!(responses.len(), 9);
    assert_eq!(responses[0], "id name Damista");
    assert!(responses[1].starts_with("id author"));
    assert_eq!(
        responses[2],
        "option name Difficulty type spin default 3 min 1 max 9"
    );
    assert_eq!(responses[8], "damistaok");

    let responses = process_line("isready", &mut engine);
    assert_eq!(responses, vec!["readyok".to_string()]);
}

#[test]
fn test_board_diagram() {
    let mut engine = ProtocolEngine::new();
    let responses = process_line("board", &mut engine);
    assert_eq!(responses.len(), 10);
    assert_eq!(responses[1], "0  . r . r . r . r");
    assert_eq!(responses[8], "7  w . w . w . w .");
    assert_eq!(responses[9], "turn red");
}

#[test]
fn test_select_targets_and_errors() {
    let mut engine = ProtocolEngine::new();

    assert_eq!(process_line("select 2 1", &mut engine), vec!["targets 3,0 3,2"]);
    assert_eq!(process_line("select 1 0", &mut engine), vec!["targets none"]);
    assert_eq!(
        process_line("select 5 0", &mut engine),
        vec!["info string illegal selection: that piece belongs to the opponent"]
    );
    assert_eq!(
        process_line("select 9 -1", &mut engine),
        vec!["info string square (9, -1) is off the board"]
    );
}

#[test]
fn test_computer_opens_and_replies() {
    let mut engine = ProtocolEngine::new();

    // The computer plays red and moves first
    assert_eq!(
        process_line("move 5 0 4 1", &mut engine),
        vec!["info string illegal move: it's not your turn"]
    );

    let responses = process_line("go", &mut engine);
    assert!(responses[0].starts_with("info depth 3 nodes"));
    assert!(responses[1].starts_with("bestmove "));
    assert!(responses[2].starts_with("moved "));
    assert!(responses[2].ends_with("next white chain false promoted false"));
    assert_eq!(engine.session().history().len(), 1);

    let responses = process_line("move 5 0 4 1", &mut engine);
    assert_eq!(
        responses[0],
        "moved 5 0 4 1 captured - next red chain false promoted false"
    );
    // auto reply from the computer
    assert!(responses[1].starts_with("info depth 3"));
    assert!(responses.iter().any(|r| r.starts_with("bestmove ")));
    assert_eq!(
        engine.session().to_move(),
        damista::board::Player::White
    );
}

#[test]
fn test_auto_reply_off() {
    let mut engine = ProtocolEngine::new();
    assert_eq!(
        process_line("setoption name AutoReply value false", &mut engine),
        vec!["info string AutoReply set to false"]
    );

    let responses = process_line("move 2 1 3 2", &mut engine);
    assert_eq!(
        responses,
        vec!["moved 2 1 3 2 captured - next white chain false promoted false"]
    );

    let responses = process_line("move 5 0 4 1", &mut engine);
    assert_eq!(responses.len(), 1);

    // red must now take on (4,1)
    assert_eq!(
        process_line("move 2 3 3 4", &mut engine),
        vec!["info string illegal move: a capture is available"]
    );
    assert_eq!(
        process_line("move 3 2 5 0", &mut engine),
        vec!["moved 3 2 5 0 captured 4,1 next white chain false promoted false"]
    );
    assert_eq!(process_line("eval", &mut engine), vec!["eval 1"]);
}

#[test]
fn test_eval_winner_and_hints() {
    let mut engine = ProtocolEngine::new();
    assert_eq!(process_line("eval", &mut engine), vec!["eval 0"]);
    assert_eq!(process_line("winner", &mut engine), vec!["result none"]);

    let responses = process_line("hint", &mut engine);
    assert!(responses[0].starts_with("hint 2 "));

    process_line("setoption name Hints value 0", &mut engine);
    process_line("newgame", &mut engine);
    assert_eq!(
        process_line("hint", &mut engine),
        vec!["info string no hints remaining"]
    );
}

#[test]
fn test_option_errors_and_unknown_commands() {
    let mut engine = ProtocolEngine::new();

    assert_eq!(
        process_line("setoption name Difficulty value 12", &mut engine),
        vec!["info string invalid value for option Difficulty: expected a number between 1 and 9"]
    );
    assert_eq!(engine.options().difficulty, 3);

    assert_eq!(
        process_line("frobnicate", &mut engine),
        vec!["info string unknown command: frobnicate"]
    );
    assert_eq!(
        process_line("move 1 2", &mut engine),
        vec!["info string move: expected: move <row> <col> <row> <col>"]
    );

    assert!(engine.is_running());
    assert!(process_line("quit", &mut engine).is_empty());
    assert!(!engine.is_running());
}

#[test]
fn test_go_with_explicit_depth() {
    let mut engine = ProtocolEngine::new();
    let responses = process_line("go depth 1", &mut engine);
    assert_eq!(responses[1], "bestmove 2 1 3 0");
    assert_eq!(
        responses[2],
        "moved 2 1 3 0 captured - next white chain false promoted false"
    );
}

#[test]
fn test_go_with_movetime() {
    let mut engine = ProtocolEngine::new();
    let responses = process_line("go depth 12 movetime 1", &mut engine);
    assert!(responses[0].starts_with("info depth 12 nodes "));
    assert!(responses[1].starts_with("bestmove 2 "));
    assert_eq!(engine.session().history().len(), 1);
}

