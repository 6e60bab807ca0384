//! Command parser for the Damista text protocol
//!
//! One command per line. Coordinates are `row col` pairs and may be written
//! either space- or comma-separated (`move 2 1 3 2` or `move 2,1 3,2`).

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Command {
    Hello,
    IsReady,
    NewGame,
    ShowBoard,
    Select {
        row: i32,
        col: i32,
    },
    Move {
        start_row: i32,
        start_col: i32,
        end_row: i32,
        end_col: i32,
    },
    Go {
        depth: Option<u8>,
        movetime: Option<u64>,
    },
    Hint,
    Eval,
    Winner,
    SetOption {
        name: String,
        value: Option<String>,
    },
    Quit,
    /// A known command with unusable arguments
    Malformed {
        command: String,
        reason: String,
    },
    Unknown(String),
}

fn coordinates(args: &[&str]) -> Option<Vec<i32>> {
    args.iter()
        .flat_map(|arg| arg.split(','))
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i32>().ok())
        .collect()
}

fn malformed(command: &str, reason: &str) -> Command {
    Command::Malformed {
        command: command.to_string(),
        reason: reason.to_string(),
    }
}

/// Parse a protocol command from a line (simple tokenizer)
pub fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Unknown("".to_string());
    }

    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    let args = &parts[1..];
    match parts[0] {
        "damista" => Command::Hello,
        "isready" => Command::IsReady,
        "newgame" => Command::NewGame,
        "board" => Command::ShowBoard,
        "hint" => Command::Hint,
        "eval" => Command::Eval,
        "winner" => Command::Winner,
        "quit" => Command::Quit,
        "select" => match coordinates(args).as_deref() {
            Some(&[row, col]) => Command::Select { row, col },
            _ => malformed("select", "expected: select <row> <col>"),
        },
        "move" => match coordinates(args).as_deref() {
            Some(&[start_row, start_col, end_row, end_col]) => Command::Move {
                start_row,
                start_col,
                end_row,
                end_col,
            },
            _ => malformed("move", "expected: move <row> <col> <row> <col>"),
        },
        "go" => {
            // go [depth N] [movetime MS]
            let mut depth = None;
            let mut movetime = None;
            let mut i = 0usize;
            while i < args.len() {
                match args[i] {
                    "depth" => {
                        match args.get(i + 1).and_then(|v| v.parse::<u8>().ok()) {
                            Some(d) => depth = Some(d),
                            None => return malformed("go", "depth needs a number"),
                        }
                        i += 2;
                    }
                    "movetime" => {
                        match args.get(i + 1).and_then(|v| v.parse::<u64>().ok()) {
                            Some(ms) => movetime = Some(ms),
                            None => return malformed("go", "movetime needs milliseconds"),
                        }
                        i += 2;
                    }
                    _ => {
                        i += 1;
                    }
                }
            }
            Command::Go { depth, movetime }
        }
        "setoption" => {
            // expected: setoption name <name> [value <val>]
            let mut name = String::new();
            let mut value: Option<String> = None;
            let mut i = 0usize;
            while i < args.len() {
                match args[i] {
                    "name" => {
                        i += 1;
                        let mut vals = Vec::new();
                        while i < args.len() && args[i] != "value" {
                            vals.push(args[i]);
                            i += 1;
                        }
                        name = vals.join(" ");
                    }
                    "value" => {
                        value = Some(args[i + 1..].join(" "));
                        break;
                    }
                    _ => {
                        i += 1;
                    }
                }
            }
            if name.is_empty() {
                return malformed("setoption", "expected: setoption name <name> value <value>");
            }
            Command::SetOption { name, value }
        }
        other => Command::Unknown(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse_command("damista"), Command::Hello);
        assert_eq!(parse_command("  isready  "), Command::IsReady);
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command(""), Command::Unknown("".to_string()));
    }

    #[test]
    fn test_comma_coordinates() {
        assert_eq!(
            parse_command("move 2,1 3,2"),
            Command::Move {
                start_row: 2,
                start_col: 1,
                end_row: 3,
                end_col: 2
            }
        );
    }

    #[test]
    fn test_negative_coordinates_are_passed_through() {
        assert_eq!(
            parse_command("select -1 9"),
            Command::Select { row: -1, col: 9 }
        );
    }

    #[test]
    fn test_malformed_move() {
        assert!(matches!(
            parse_command("move 2 1 3"),
            Command::Malformed { .. }
        ));
        assert!(matches!(
            parse_command("select a b"),
            Command::Malformed { .. }
        ));
    }
}
