//! Engine options for Damista
//!
//! Option definitions with types, defaults and ranges, and the runtime
//! `setoption` handling. Invalid values are rejected and leave the option
//! unchanged.

use crate::board::Player;
use crate::error::{EngineError, EngineResult};
use crate::game::DEFAULT_HINTS;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 9;

/// Option types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionType {
    Check { default: bool },
    Spin { default: i64, min: i64, max: i64 },
    Combo { default: String, vars: Vec<String> },
}

/// Individual option definition
#[derive(Debug, Clone)]
pub struct EngineOption {
    pub name: &'static str,
    pub opt_type: OptionType,
}

impl EngineOption {
    /// Announcement line, e.g. `option name Difficulty type spin default 3 min 1 max 9`.
    pub fn describe(&self) -> String {
        match &self.opt_type {
            OptionType::Check { default } => {
                format!("option name {} type check default {}", self.name, default)
            }
            OptionType::Spin { default, min, max } => format!(
                "option name {} type spin default {} min {} max {}",
                self.name, default, min, max
            ),
            OptionType::Combo { default, vars } => {
                let vars: Vec<String> = vars.iter().map(|v| format!("var {}", v)).collect();
                format!(
                    "option name {} type combo default {} {}",
                    self.name,
                    default,
                    vars.join(" ")
                )
            }
        }
    }
}

/// Complete options configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Computer strength: the search depth in plies
    pub difficulty: u8,

    /// Search depth used for hints
    pub hint_depth: u8,

    /// Hints allowed per game
    pub hints: u8,

    /// Side played by the computer
    pub ai_player: Player,

    /// Reply automatically after a human move
    pub auto_reply: bool,

    /// Search node budget (0 = unlimited)
    pub node_limit: u64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            difficulty: 3,
            hint_depth: 4,
            hints: DEFAULT_HINTS,
            ai_player: Player::Red,
            auto_reply: true,
            node_limit: 0,
        }
    }
}

impl EngineOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Definitions announced during the handshake, defaults taken from `self`.
    pub fn definitions(&self) -> Vec<EngineOption> {
        vec![
            EngineOption {
                name: "Difficulty",
                opt_type: OptionType::Spin {
                    default: self.difficulty as i64,
                    min: MIN_DIFFICULTY as i64,
                    max: MAX_DIFFICULTY as i64,
                },
            },
            EngineOption {
                name: "HintDepth",
                opt_type: OptionType::Spin {
                    default: self.hint_depth as i64,
                    min: 1,
                    max: MAX_DIFFICULTY as i64,
                },
            },
            EngineOption {
                name: "Hints",
                opt_type: OptionType::Spin {
                    default: self.hints as i64,
                    min: 0,
                    max: 99,
                },
            },
            EngineOption {
                name: "AiPlayer",
                opt_type: OptionType::Combo {
                    default: self.ai_player.to_string(),
                    vars: vec!["red".to_string(), "white".to_string()],
                },
            },
            EngineOption {
                name: "AutoReply",
                opt_type: OptionType::Check {
                    default: self.auto_reply,
                },
            },
            EngineOption {
                name: "NodeLimit",
                opt_type: OptionType::Spin {
                    default: self.node_limit as i64,
                    min: 0,
                    max: i64::MAX,
                },
            },
        ]
    }

    /// Set option value
    pub fn set_option(&mut self, name: &str, value: Option<&str>) -> EngineResult<()> {
        let invalid = |reason: &str| EngineError::InvalidOption {
            name: name.to_string(),
            reason: reason.to_string(),
        };
        let value = value.map(str::trim).ok_or_else(|| invalid("missing value"))?;

        match name {
            "Difficulty" => {
                self.difficulty = parse_in_range(value, MIN_DIFFICULTY, MAX_DIFFICULTY)
                    .ok_or_else(|| invalid("expected a number between 1 and 9"))?;
            }
            "HintDepth" => {
                self.hint_depth = parse_in_range(value, 1, MAX_DIFFICULTY)
                    .ok_or_else(|| invalid("expected a number between 1 and 9"))?;
            }
            "Hints" => {
                self.hints = parse_in_range(value, 0, 99)
                    .ok_or_else(|| invalid("expected a number between 0 and 99"))?;
            }
            "AiPlayer" => {
                self.ai_player = value.parse().map_err(|e: String| invalid(&e))?;
            }
            "AutoReply" => {
                self.auto_reply = match value {
                    "true" => true,
                    "false" => false,
                    _ => return Err(invalid("expected true or false")),
                };
            }
            "NodeLimit" => {
                self.node_limit = value
                    .parse()
                    .map_err(|_| invalid("expected a non-negative number"))?;
            }
            _ => return Err(invalid("unknown option")),
        }

        Ok(())
    }
}

fn parse_in_range(value: &str, min: u8, max: u8) -> Option<u8> {
    value.parse::<u8>().ok().filter(|v| (min..=max).contains(v))
}
