//! Search engine for Damista
//!
//! Depth-limited minimax with alpha-beta pruning on top of the rules engine.

pub mod params;
pub mod search;
pub mod stats;

pub use self::params::SearchParams;
pub use self::search::{ai_move, generate_best_move, minimax_alpha_beta, Search, SearchResult, INFINITE};
pub use self::stats::SearchStats;
