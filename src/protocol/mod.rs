pub mod engine;
pub mod options;
pub mod parser;

pub use engine::{process_line, run_protocol_loop, ProtocolEngine};
pub use options::{EngineOptions, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use parser::{parse_command, Command};
