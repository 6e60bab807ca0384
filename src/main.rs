//! Damista checkers engine main entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use damista::board::Player;
use damista::protocol::{run_protocol_loop, EngineOptions, MAX_DIFFICULTY, MIN_DIFFICULTY};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search depth of the computer player
    #[arg(short, long, default_value_t = 3,
          value_parser = clap::value_parser!(u8).range(MIN_DIFFICULTY as i64..=MAX_DIFFICULTY as i64))]
    difficulty: u8,

    /// Side played by the computer (red or white)
    #[arg(long, default_value_t = Player::Red)]
    ai_player: Player,

    /// Do not answer human moves automatically
    #[arg(long)]
    no_auto_reply: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log: String,
}

fn main() {
    let args = Args::parse();

    // Logs go to stderr, stdout belongs to the protocol
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let options = EngineOptions {
        difficulty: args.difficulty,
        ai_player: args.ai_player,
        auto_reply: !args.no_auto_reply,
        ..EngineOptions::default()
    };

    if let Err(e) = run_protocol_loop(options) {
        eprintln!("protocol loop failed: {:?}", e);
    }
}
