use clap::Parser;
use damista::board::{Board, Player};
use damista::rules::perft;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 6)]
    depth: u8,

    /// Side to move at the root
    #[arg(short, long, default_value_t = Player::Red)]
    player: Player,
}

fn main() {
    let args = Args::parse();
    let board = Board::new();

    println!("Running perft from the initial position at depth {}", args.depth);

    for depth in 1..=args.depth {
        let start = std::time::Instant::now();
        let nodes = perft(&board, args.player, depth);
        let duration = start.elapsed();

        println!(
            "perft({}) = {} nodes ({} ms, {:.2} Mnps)",
            depth,
            nodes,
            duration.as_millis(),
            nodes as f64 / (duration.as_micros().max(1) as f64)
        );
    }
}
