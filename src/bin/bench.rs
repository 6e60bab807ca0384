use clap::Parser;
use damista::board::{Board, Player};
use damista::search::{Search, SearchParams};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 8)]
    depth: u8,
}

fn main() {
    let args = Args::parse();
    let board = Board::new();
    let mut search = Search::new(SearchParams::new().max_depth(args.depth));

    println!("Benchmarking depth {}...", search.params().max_depth);
    let start = Instant::now();
    let result = search.search(&board, Player::Red);
    let elapsed = start.elapsed();

    let nodes = search.stats().nodes;
    let nps = (nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;

    println!("Time: {:.2?}", elapsed);
    println!("Nodes: {}", nodes);
    println!("NPS: {}", nps);
    match result.best_move {
        Some(mv) => println!("Best Move: {}", mv),
        None => println!("Best Move: none"),
    }
    if let Some(score) = result.score {
        println!("Score: {}", score);
    }

    search.stats().print_summary();
}
