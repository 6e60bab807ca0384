use damista::protocol::{parse_command, Command};

#[test]
fn test_parse_handshake_commands() {
    assert_eq!(parse_command("damista"), Command::Hello);
    assert_eq!(parse_command("isready"), Command::IsReady);
    assert_eq!(parse_command("newgame"), Command::NewGame);
    assert_eq!(parse_command("board"), Command::ShowBoard);
    assert_eq!(parse_command("hint"), Command::Hint);
    assert_eq!(parse_command("eval"), Command::Eval);
    assert_eq!(parse_command("winner"), Command::Winner);
}

#[test]
fn test_parse_select_and_move() {
    assert_eq!(parse_command("select 2 1"), Command::Select { row: 2, col: 1 });
    assert_eq!(
        parse_command("move 2 1 3 2"),
        Command::Move {
            start_row: 2,
            start_col: 1,
            end_row: 3,
            end_col: 2
        }
    );
    assert!(matches!(
        parse_command("move 2 1 3 2 4"),
        Command::Malformed { ref command, .. } if command == "move"
    ));
}

#[test]
fn test_parse_go() {
    assert_eq!(
        parse_command("go"),
        Command::Go {
            depth: None,
            movetime: None
        }
    );
    assert_eq!(
        parse_command("go depth 5"),
        Command::Go {
            depth: Some(5),
            movetime: None
        }
    );
    assert_eq!(
        parse_command("go depth 12 movetime 50"),
        Command::Go {
            depth: Some(12),
            movetime: Some(50)
        }
    );
    assert!(matches!(parse_command("go movetime soon"), Command::Malformed { .. }));
    assert!(matches!(parse_command("go depth"), Command::Malformed { .. }));
    assert!(matches!(parse_command("go depth x"), Command::Malformed { .. }));
}

#[test]
fn test_parse_setoption() {
    let cmd = parse_command("setoption name Difficulty value 5");
    assert_eq!(
        cmd,
        Command::SetOption {
            name: "Difficulty".to_string(),
            value: Some("5".to_string())
        }
    );

    let cmd = parse_command("setoption name AutoReply");
    assert_eq!(
        cmd,
        Command::SetOption {
            name: "AutoReply".to_string(),
            value: None
        }
    );

    assert!(matches!(
        parse_command("setoption value 5"),
        Command::Malformed { .. }
    ));
}

#[test]
fn test_parse_unknown() {
    assert_eq!(
        parse_command("position startpos"),
        Command::Unknown("position".to_string())
    );
}
