//! Text protocol event loop and state machine for Damista

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use super::options::EngineOptions;
use super::parser::{parse_command, Command};
use crate::board::{Move, Square};
use crate::error::EngineResult;
use crate::eval::evaluate;
use crate::game::GameSession;
use crate::rules::{MoveOutcome, Outcome};
use crate::search::{Search, SearchParams};

pub struct ProtocolEngine {
    session: GameSession,
    options: EngineOptions,
    running: bool,
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn moved_line(outcome: &MoveOutcome) -> String {
    let captured = outcome
        .captured
        .map(|sq| sq.to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "moved {} captured {} next {} chain {} promoted {}",
        outcome.mv, captured, outcome.next_player, outcome.chain_continues, outcome.promoted
    )
}

fn result_line(outcome: Outcome) -> String {
    match outcome {
        Outcome::InProgress => "result none".to_string(),
        Outcome::Winner(player) => format!("result {}", player),
        Outcome::Draw => "result draw".to_string(),
    }
}

impl ProtocolEngine {
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self {
            session: GameSession::new(options.hints),
            options,
            running: true,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    fn new_search(&self, depth: u8, movetime: Option<u64>) -> Search {
        Search::new(
            SearchParams::new()
                .max_depth(depth)
                .node_limit(self.options.node_limit)
                .time_limit(movetime.unwrap_or(0)),
        )
    }

    // Plays a full computer turn: "info", "bestmove" and "moved" for every capture step
    fn computer_turn(&mut self, depth: u8, movetime: Option<u64>, res: &mut Vec<String>) {
        let mut search = self.new_search(depth, movetime);
        loop {
            let outcome = match self.session.ai_move(&mut search, depth) {
                Ok(outcome) => outcome,
                Err(e) => {
                    res.push(format!("info string {}", e));
                    res.push("bestmove none".to_string());
                    return;
                }
            };

            let stats = search.stats();
            res.push(format!(
                "info depth {} nodes {} time {}",
                depth,
                stats.nodes,
                stats.search_time.as_millis()
            ));
            res.push(format!("bestmove {}", outcome.mv));
            res.push(moved_line(&outcome));

            if self.session.outcome().is_over() {
                res.push(result_line(self.session.outcome()));
                return;
            }
            if !outcome.chain_continues {
                return;
            }
        }
    }

    fn human_move(&mut self, mv: EngineResult<Move>, res: &mut Vec<String>) {
        let outcome = match mv.and_then(|mv| self.session.play(mv)) {
            Ok(outcome) => outcome,
            Err(e) => {
                res.push(format!("info string {}", e));
                return;
            }
        };
        res.push(moved_line(&outcome));

        if self.session.outcome().is_over() {
            res.push(result_line(self.session.outcome()));
            return;
        }

        if self.options.auto_reply && self.session.to_move() == self.options.ai_player {
            self.computer_turn(self.options.difficulty, None, res);
        }
    }

    pub fn handle_command(&mut self, cmd: Command) -> Vec<String> {
        let mut res = Vec::new();
        match cmd {
            Command::Hello => {
                res.push("id name Damista".to_string());
                res.push("id author Gaspox".to_string());
                for option in self.options.definitions() {
                    res.push(option.describe());
                }
                res.push("damistaok".to_string());
            }
            Command::IsReady => {
                res.push("readyok".to_string());
            }
            Command::NewGame => {
                self.session.reset(self.options.hints);
                info!("new game");
            }
            Command::ShowBoard => {
                let diagram = self.session.board().to_string();
                res.extend(diagram.lines().map(str::to_string));
                res.push(format!("turn {}", self.session.to_move()));
            }
            Command::Select { row, col } => {
                let selection = Square::new(row, col).and_then(|sq| self.session.select(sq));
                match selection {
                    Ok(selection) => {
                        let targets: Vec<String> =
                            selection.destinations().iter().map(|sq| sq.to_string()).collect();
                        if targets.is_empty() {
                            res.push("targets none".to_string());
                        } else {
                            res.push(format!("targets {}", targets.join(" ")));
                        }
                    }
                    Err(e) => res.push(format!("info string {}", e)),
                }
            }
            Command::Move {
                start_row,
                start_col,
                end_row,
                end_col,
            } => {
                let mv = Move::from_coords(start_row, start_col, end_row, end_col);
                self.human_move(mv, &mut res);
            }
            Command::Go { depth, movetime } => {
                let depth = depth.unwrap_or(self.options.difficulty);
                self.computer_turn(depth, movetime, &mut res);
            }
            Command::Hint => {
                let mut search = self.new_search(self.options.hint_depth, None);
                match self.session.hint(&mut search, self.options.hint_depth) {
                    Ok(mv) => res.push(format!("hint {}", mv)),
                    Err(e) => res.push(format!("info string {}", e)),
                }
            }
            Command::Eval => {
                res.push(format!("eval {}", evaluate(self.session.board())));
            }
            Command::Winner => {
                res.push(result_line(self.session.outcome()));
            }
            Command::SetOption { name, value } => {
                match self.options.set_option(&name, value.as_deref()) {
                    Ok(()) => res.push(format!(
                        "info string {} set to {}",
                        name,
                        value.unwrap_or_default()
                    )),
                    Err(e) => {
                        warn!(%name, error = %e, "option rejected");
                        res.push(format!("info string {}", e));
                    }
                }
            }
            Command::Quit => {
                self.running = false;
            }
            Command::Malformed { command, reason } => {
                res.push(format!("info string {}: {}", command, reason));
            }
            Command::Unknown(s) => {
                warn!(command = %s, "unknown command");
                res.push(format!("info string unknown command: {}", s));
            }
        }
        res
    }
}

pub fn run_protocol_loop(options: EngineOptions) -> io::Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    let mut engine = ProtocolEngine::with_options(options);
    let mut buf = String::new();

    while engine.is_running() {
        buf.clear();
        let n = reader.read_line(&mut buf)?;
        if n == 0 {
            // EOF reached
            break;
        }
        let line = buf.trim();
        if line.is_empty() {
            continue;
        }

        let responses = process_line(line, &mut engine);
        for r in responses {
            writeln!(writer, "{}", r)?;
        }

        // Flush after every command so the front end sees responses immediately
        writer.flush()?;
    }

    Ok(())
}

pub fn process_line(line: &str, engine: &mut ProtocolEngine) -> Vec<String> {
    let cmd = parse_command(line);
    engine.handle_command(cmd)
}
