//! Main search engine implementation for Damista
//!
//! Depth-limited minimax with alpha-beta pruning. Red (+1) maximizes and
//! White (-1) minimizes. Every child is explored on its own copy of the
//! board, so sibling branches never observe each other's moves. Move
//! ordering is the rules engine's enumeration order; there is no
//! transposition table.

use tracing::debug;

use super::params::SearchParams;
use super::stats::SearchStats;
use crate::board::{Board, Move, Player, Square};
use crate::error::{EngineError, EngineResult};
use crate::eval::evaluate;
use crate::rules::{generate_moves, is_game_over, move_piece, moves_for_piece, MoveOutcome};

/// Window bound larger than any reachable material score.
pub const INFINITE: i32 = 1_000_000;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the side to move has no legal move.
    pub best_move: Option<Move>,
    pub score: Option<i32>,
}

/// Main search engine
#[derive(Debug, Default)]
pub struct Search {
    /// Search parameters
    params: SearchParams,

    /// Search statistics
    stats: SearchStats,
}

impl Search {
    pub fn new(params: SearchParams) -> Self {
        Self {
            params,
            stats: SearchStats::new(),
        }
    }

    /// Search with default parameters and the given depth
    pub fn with_depth(depth: u8) -> Self {
        Self::new(SearchParams::new().max_depth(depth))
    }

    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Get search statistics
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    fn out_of_budget(&self) -> bool {
        let nodes_spent = self.params.node_limit > 0 && self.stats.nodes >= self.params.node_limit;
        let time_spent =
            self.params.time_limit_ms > 0 && self.stats.elapsed_ms() >= self.params.time_limit_ms;
        nodes_spent || time_spent
    }

    /// Minimax value of `board` searched `depth` plies deep.
    ///
    /// # Arguments
    /// * `maximizing` - true when Red is to move
    ///
    /// # Returns
    /// Static evaluation at depth 0 or on a finished game, otherwise the
    /// minimax value within the `alpha`/`beta` window.
    pub fn minimax_alpha_beta(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.stats.inc_node();

        if depth == 0 || is_game_over(board) {
            self.stats.inc_leaf();
            return evaluate(board);
        }

        if self.out_of_budget() {
            self.stats.inc_budget_stop();
            self.stats.inc_leaf();
            return evaluate(board);
        }

        let player = if maximizing { Player::Red } else { Player::White };
        let mut best: Option<i32> = None;

        for mv in generate_moves(board, player) {
            // Ogni ramo lavora sulla propria copia della scacchiera
            let child = match move_piece(board, mv, player) {
                Ok(outcome) => outcome.board,
                Err(_) => {
                    self.stats.inc_skipped();
                    continue;
                }
            };

            let score = self.minimax_alpha_beta(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = Some(best.map_or(score, |b| b.max(score)));
                alpha = alpha.max(score);
            } else {
                best = Some(best.map_or(score, |b| b.min(score)));
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.inc_cutoff();
                break;
            }
        }

        // Nessun figlio valutato: si ricade sulla valutazione statica
        best.unwrap_or_else(|| evaluate(board))
    }

    /// Root search over all legal moves of `player`, or over the moves of the
    /// piece on `only_from` when a capture chain has to continue.
    ///
    /// Children are searched from the opponent's turn at `depth - 1` (a root
    /// depth of 0 is treated as 1). The first move with a strictly better
    /// score wins ties.
    pub fn search_root(
        &mut self,
        board: &Board,
        depth: u8,
        player: Player,
        only_from: Option<Square>,
    ) -> SearchResult {
        self.stats.reset();
        self.stats.start_timing();

        let child_depth = depth.max(1) - 1;
        let moves = match only_from {
            Some(sq) => moves_for_piece(board, player, sq),
            None => generate_moves(board, player),
        };

        let mut best_move = None;
        let mut best_score: Option<i32> = None;

        for mv in moves {
            let child = match move_piece(board, mv, player) {
                Ok(outcome) => outcome.board,
                Err(_) => {
                    self.stats.inc_skipped();
                    continue;
                }
            };
            self.stats.inc_root_move();

            let score =
                self.minimax_alpha_beta(&child, child_depth, -INFINITE, INFINITE, !player.is_maximizer());
            debug!(%mv, score, "root move scored");

            let improves = match best_score {
                None => true,
                Some(best) if player.is_maximizer() => score > best,
                Some(best) => score < best,
            };
            if improves {
                best_score = Some(score);
                best_move = Some(mv);
            }
        }

        self.stats.update_timing();
        debug!(
            %player,
            depth,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            elapsed_ms = self.stats.search_time.as_millis() as u64,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
        }
    }

    /// Search at the configured `max_depth`.
    pub fn search(&mut self, board: &Board, player: Player) -> SearchResult {
        let depth = self.params.max_depth;
        self.search_root(board, depth, player, None)
    }

    /// Best legal move for `player`, `None` when there is none.
    pub fn generate_best_move(&mut self, board: &Board, depth: u8, player: Player) -> Option<Move> {
        self.search_root(board, depth, player, None).best_move
    }

    /// Best further capture of the piece on `from`.
    pub fn best_continuation(
        &mut self,
        board: &Board,
        depth: u8,
        player: Player,
        from: Square,
    ) -> Option<Move> {
        self.search_root(board, depth, player, Some(from)).best_move
    }

    /// Searches and applies the best move; `NoMoveAvailable` leaves `board` as is.
    pub fn play(
        &mut self,
        board: &Board,
        player: Player,
        depth: u8,
        only_from: Option<Square>,
    ) -> EngineResult<MoveOutcome> {
        let mv = self
            .search_root(board, depth, player, only_from)
            .best_move
            .ok_or(EngineError::NoMoveAvailable { player })?;
        Ok(move_piece(board, mv, player)?)
    }
}

/// [`Search::minimax_alpha_beta`] with default parameters.
pub fn minimax_alpha_beta(board: &Board, depth: u8, alpha: i32, beta: i32, maximizing: bool) -> i32 {
    Search::default().minimax_alpha_beta(board, depth, alpha, beta, maximizing)
}

/// [`Search::generate_best_move`] with default parameters.
pub fn generate_best_move(board: &Board, depth: u8, player: Player) -> Option<Move> {
    Search::default().generate_best_move(board, depth, player)
}

/// Searches the best move for `player` and applies it.
pub fn ai_move(board: &Board, player: Player, depth: u8) -> EngineResult<MoveOutcome> {
    Search::default().play(board, player, depth, None)
}
