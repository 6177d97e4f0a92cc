//! Matcher search crate - move selection for the tile-matching board.

mod best_state;
mod bounded;
mod config;

pub use best_state::BestStateSearch;
pub use bounded::BoundedSearch;
pub use config::{BestStateConfig, BoundedConfig, SolverConfig, Strategy};

use matcher_core::{Board, Move};
use serde::{Deserialize, Serialize};

/// Moves to play from the searched board, and whether they end in a match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub has_match: bool,
}

impl Solution {
    /// Returned when the search found nothing to do: a single grab/drop on
    /// column 0 that at least changes the board if anything is there.
    pub fn probe() -> Self {
        Self {
            moves: vec![Move::grab_or_drop(0)],
            has_match: false,
        }
    }
}

/// A configured search strategy.
pub enum Solver {
    BestState(BestStateSearch),
    Bounded(BoundedSearch),
}

impl Solver {
    pub fn from_config(config: &SolverConfig) -> Self {
        match config.strategy {
            Strategy::BestState => Self::BestState(BestStateSearch::new(
                config.best_state.clone(),
                config.weights.clone(),
            )),
            Strategy::Bounded => Self::Bounded(BoundedSearch::new(config.bounded.clone())),
        }
    }

    pub fn strategy(&self) -> Strategy {
        match self {
            Self::BestState(_) => Strategy::BestState,
            Self::Bounded(_) => Strategy::Bounded,
        }
    }

    pub fn find_moves(&self, board: &Board) -> Solution {
        match self {
            Self::BestState(search) => search.find_moves(board),
            Self::Bounded(search) => search.find_moves(board),
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Self::from_config(&SolverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher_core::{Piece, PieceColor};

    #[test]
    fn test_from_config_picks_strategy() {
        assert_eq!(Solver::default().strategy(), Strategy::BestState);
        assert_eq!(
            Solver::from_config(&SolverConfig::bounded()).strategy(),
            Strategy::Bounded
        );
    }

    #[test]
    fn test_probe() {
        let probe = Solution::probe();
        assert_eq!(probe.moves, vec![Move::grab_or_drop(0)]);
        assert!(!probe.has_match);
    }

    #[test]
    fn test_config_reaches_bounded_search() {
        let config = SolverConfig {
            bounded: BoundedConfig {
                balance_passes: 0,
                ..BoundedConfig::default()
            },
            ..SolverConfig::bounded()
        };
        let r = Piece::plain(PieceColor::Red);
        let p = Piece::plain(PieceColor::Pink);
        let board = Board::from_stacks(&[&[r, p, r, p][..]], None).expect("valid stacks");
        let solution = Solver::from_config(&config).find_moves(&board);
        assert!(!solution.has_match);
        assert!(solution.moves.is_empty());
    }

    #[test]
    fn test_solution_json() {
        let solution = Solution {
            moves: vec![Move::swap(3)],
            has_match: true,
        };
        let json = serde_json::to_string(&solution).expect("serializes");
        let back: Solution = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(back, solution);
    }
}
