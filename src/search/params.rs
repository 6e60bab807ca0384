//! Search parameters and configuration
//!
//! Depth is the primary termination control. Node and time budgets are
//! optional extra limits; when one is exhausted the node being visited is
//! scored statically instead of expanded.

/// Search parameters for the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchParams {
    /// Maximum search depth in plies
    pub max_depth: u8,

    /// Node limit (0 = unlimited)
    pub node_limit: u64,

    /// Time limit in milliseconds (0 = unlimited)
    pub time_limit_ms: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_depth: 3,
            node_limit: 0,
            time_limit_ms: 0,
        }
    }
}

impl SearchParams {
    /// Create new search params with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set maximum depth in plies
    pub fn max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set node limit
    pub fn node_limit(mut self, limit: u64) -> Self {
        self.node_limit = limit;
        self
    }

    /// Set time limit in milliseconds
    pub fn time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// True when neither a node nor a time budget is set.
    pub fn is_unbounded(&self) -> bool {
        self.node_limit == 0 && self.time_limit_ms == 0
    }
}
