//! Search statistics and performance metrics
//!
//! Tracks nodes visited, alpha-beta cutoffs, branch copies and timing.

use std::time::{Duration, Instant};

/// Search statistics
#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    /// Total nodes searched
    pub nodes: u64,

    /// Nodes scored by the static evaluator
    pub leaf_nodes: u64,

    /// Moves scored at the root
    pub root_moves: u64,

    /// Alpha-beta cutoffs
    pub cutoffs: u64,

    /// Enumerated moves that failed to re-apply and were skipped
    pub skipped_moves: u64,

    /// Nodes cut short by the node or time budget
    pub budget_stops: u64,

    /// Search start time
    pub start_time: Option<Instant>,

    /// Time spent searching
    pub search_time: Duration,

    /// Nodes per second rate
    pub nps: u64,
}

impl SearchStats {
    /// Create new empty stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Start timing
    pub fn start_timing(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Milliseconds since [`start_timing`](Self::start_timing), 0 if never started.
    pub fn elapsed_ms(&self) -> u64 {
        self.start_time
            .map(|start| start.elapsed().as_millis() as u64)
            .unwrap_or(0)
    }

    /// Update elapsed time and calculate NPS
    pub fn update_timing(&mut self) {
        if let Some(start) = self.start_time {
            self.search_time = start.elapsed();
            let elapsed_ms = self.search_time.as_millis() as u64;
            if elapsed_ms > 0 {
                self.nps = (self.nodes * 1000) / elapsed_ms;
            }
        }
    }

    pub fn inc_node(&mut self) {
        self.nodes += 1;
    }

    pub fn inc_leaf(&mut self) {
        self.leaf_nodes += 1;
    }

    pub fn inc_root_move(&mut self) {
        self.root_moves += 1;
    }

    pub fn inc_cutoff(&mut self) {
        self.cutoffs += 1;
    }

    pub fn inc_skipped(&mut self) {
        self.skipped_moves += 1;
    }

    pub fn inc_budget_stop(&mut self) {
        self.budget_stops += 1;
    }

    /// Reset all statistics
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Print formatted summary
    pub fn print_summary(&self) {
        println!("=== Search Statistics ===");
        println!("Nodes searched: {}", self.nodes);
        println!("Leaf nodes: {}", self.leaf_nodes);
        println!("Root moves: {}", self.root_moves);
        println!("Alpha-Beta cutoffs: {}", self.cutoffs);
        println!("Skipped moves: {}", self.skipped_moves);
        println!("Budget stops: {}", self.budget_stops);
        println!("Search time: {} ms", self.search_time.as_millis());
        println!("Nodes per second: {}", self.nps);

        let branching = if self.nodes > self.leaf_nodes {
            (self.nodes - 1) as f64 / (self.nodes - self.leaf_nodes) as f64
        } else {
            0.0
        };
        println!("Average branching: {:.2}", branching);
    }
}
