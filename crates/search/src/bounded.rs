use log::{debug, trace};
use matcher_core::{Board, ColumnHeights, Move, MAX_COLS};
use matcher_engine::completes_match;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::{BoundedConfig, Solution};

type Path = SmallVec<[Move; 16]>;

/// Iterative-deepening search over take/put/swap for the shortest move
/// sequence that makes a match, with column balancing as the fallback.
pub struct BoundedSearch {
    pub config: BoundedConfig,
}

impl BoundedSearch {
    pub fn new(config: BoundedConfig) -> Self {
        Self { config }
    }

    pub fn find_moves(&self, board: &Board) -> Solution {
        let depth_cap = self.config.depth_cap(board);
        debug!(
            "searching for a match within {} moves from {board}",
            depth_cap.saturating_sub(1)
        );

        for max_moves in 1..depth_cap {
            let mut memo = FxHashSet::default();
            let mut path = Path::new();
            if search(board, &mut path, max_moves, &mut memo) {
                debug!("match found in {} moves", path.len());
                return Solution {
                    moves: path.into_vec(),
                    has_match: true,
                };
            }
            trace!("no match within {max_moves} moves, {} boards seen", memo.len());
        }

        let moves = self.balance(board);
        debug!("no match found, balancing with {} moves", moves.len());
        Solution {
            moves,
            has_match: false,
        }
    }

    /// Move pieces from the tallest column to the shortest until the heights
    /// are within `balance_gap` of each other or the pass budget runs out.
    pub fn balance(&self, board: &Board) -> Vec<Move> {
        let mut current = board.clone();
        let mut moves = Vec::new();

        for _ in 0..self.config.balance_passes {
            let heights = ColumnHeights::new(&current);
            if heights.spread() < self.config.balance_gap {
                break;
            }
            let (mv, next) = if current.is_holding() {
                let col = heights.shortest();
                (Move::put(col), current.place(col))
            } else {
                let col = heights.tallest();
                (Move::take(col), current.lift(col))
            };
            let Some(next) = next else {
                break;
            };
            moves.push(mv);
            current = next;
        }
        moves
    }
}

impl Default for BoundedSearch {
    fn default() -> Self {
        Self::new(BoundedConfig::default())
    }
}

/// Depth-first search for a match within `max_moves`; `path` holds the moves on success.
fn search(board: &Board, path: &mut Path, max_moves: usize, memo: &mut FxHashSet<u64>) -> bool {
    if path.len() == max_moves || !memo.insert(board.hash_value()) {
        return false;
    }

    let heights = ColumnHeights::new(board);
    if board.is_holding() {
        // fill the shortest columns first
        for col in heights.ascending() {
            let Some(next) = board.place(col) else {
                continue;
            };
            path.push(Move::put(col));
            if completes_match(&next, col, heights.height(col))
                || search(&next, path, max_moves, memo)
            {
                return true;
            }
            path.pop();
        }
    } else {
        // drain the tallest columns first
        for col in heights.descending() {
            let Some(next) = board.lift(col) else {
                continue;
            };
            path.push(Move::take(col));
            if search(&next, path, max_moves, memo) {
                return true;
            }
            path.pop();
        }
    }

    for col in 0..MAX_COLS {
        let Some(next) = board.swap_top(col) else {
            continue;
        };
        path.push(Move::swap(col));
        let top = heights.height(col) - 1;
        if completes_match(&next, col, top)
            || completes_match(&next, col, top - 1)
            || search(&next, path, max_moves, memo)
        {
            return true;
        }
        path.pop();
    }
    false
}
