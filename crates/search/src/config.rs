use matcher_core::Board;
use matcher_eval::EvalWeights;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Breadth-first search scoring every discovered board.
    BestState,
    /// Iterative deepening that stops at the first move sequence making a match.
    Bounded,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BestStateConfig {
    /// Search stops once this many boards besides the start have been discovered.
    pub visited_cap: usize,
    /// Scores lose `discovered / discovery_divisor`, favoring earlier discoveries.
    pub discovery_divisor: f64,
    /// Log progress every this many discovered boards.
    pub progress_interval: usize,
}

impl Default for BestStateConfig {
    fn default() -> Self {
        Self {
            visited_cap: 25_000,
            discovery_divisor: 10_000_000.0,
            progress_interval: 25_000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundedConfig {
    /// Boards with at least this many items get the dense depth cap.
    pub dense_item_threshold: usize,
    pub sparse_depth_cap: usize,
    pub dense_depth_cap: usize,
    /// Moves the column balancing fallback may emit.
    pub balance_passes: usize,
    /// Balancing stops once tallest and shortest differ by less than this.
    pub balance_gap: usize,
}

impl Default for BoundedConfig {
    fn default() -> Self {
        Self {
            dense_item_threshold: 12,
            sparse_depth_cap: 7,
            dense_depth_cap: 10,
            balance_passes: 4,
            balance_gap: 2,
        }
    }
}

impl BoundedConfig {
    /// Exclusive upper bound on the move count tried for `board`.
    pub fn depth_cap(&self, board: &Board) -> usize {
        if board.item_count() < self.dense_item_threshold {
            self.sparse_depth_cap
        } else {
            self.dense_depth_cap
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub strategy: Strategy,
    pub best_state: BestStateConfig,
    pub bounded: BoundedConfig,
    pub weights: EvalWeights,
}

impl SolverConfig {
    pub fn best_state() -> Self {
        Self {
            strategy: Strategy::BestState,
            best_state: BestStateConfig::default(),
            bounded: BoundedConfig::default(),
            weights: EvalWeights::default(),
        }
    }

    pub fn bounded() -> Self {
        Self {
            strategy: Strategy::Bounded,
            ..Self::best_state()
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::best_state()
    }
}
