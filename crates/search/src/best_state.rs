use std::collections::VecDeque;

use log::debug;
use matcher_core::{Board, Move};
use matcher_engine::children;
use matcher_eval::{evaluate_with, EvalWeights};
use rustc_hash::FxHashSet;

use crate::{BestStateConfig, Solution};

/// Breadth-first search over grab/drop/swap successors that returns the path
/// to the best scoring board it discovers before running out of budget.
pub struct BestStateSearch {
    pub config: BestStateConfig,
    pub weights: EvalWeights,
}

#[derive(Clone, Copy)]
struct Best {
    node: usize,
    score: f64,
    has_match: bool,
}

/// Parent links of every discovered board plus the best one found.
struct Exploration {
    // node 0 is the start and has no parent
    links: Vec<Option<(usize, Move)>>,
    best: Option<Best>,
}

impl Exploration {
    fn discovered(&self) -> usize {
        self.links.len() - 1
    }

    fn path_to(&self, mut node: usize) -> Vec<Move> {
        let mut moves = Vec::new();
        while let Some((parent, mv)) = self.links[node] {
            moves.push(mv);
            node = parent;
        }
        moves.reverse();
        moves
    }
}

impl BestStateSearch {
    pub fn new(config: BestStateConfig, weights: EvalWeights) -> Self {
        Self { config, weights }
    }

    pub fn find_moves(&self, board: &Board) -> Solution {
        debug!("searching for a move from {board}");

        let exploration = self.explore(board);
        let Some(best) = exploration.best else {
            debug!("no successor states, probing with {}", Move::grab_or_drop(0));
            return Solution::probe();
        };
        debug!("best eval {} after {} states", best.score, exploration.discovered());

        Solution {
            moves: exploration.path_to(best.node),
            has_match: best.has_match,
        }
    }

    fn explore(&self, board: &Board) -> Exploration {
        let mut visited = FxHashSet::default();
        visited.insert(board.clone());
        let mut exploration = Exploration {
            links: vec![None],
            best: None,
        };
        let mut queue = VecDeque::new();
        queue.push_back((0usize, board.clone()));

        while exploration.discovered() < self.config.visited_cap {
            let Some((node, current)) = queue.pop_front() else {
                break;
            };
            for (mv, child) in children(&current) {
                if !visited.insert(child.clone()) {
                    continue;
                }
                let child_node = exploration.links.len();
                exploration.links.push(Some((node, mv)));

                let discovered = child_node;
                let interval = self.config.progress_interval;
                if interval > 0 && discovered % interval == 0 {
                    debug!("searched {discovered} states");
                }

                let eval = evaluate_with(&child, &self.weights);
                let score = eval.score - discovered as f64 / self.config.discovery_divisor;
                if exploration.best.map_or(true, |b| score > b.score) {
                    exploration.best = Some(Best {
                        node: child_node,
                        score,
                        has_match: eval.has_match,
                    });
                }
                queue.push_back((child_node, child));
            }
        }
        exploration
    }
}

impl Default for BestStateSearch {
    fn default() -> Self {
        Self::new(BestStateConfig::default(), EvalWeights::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher_core::{Piece, PieceColor};
    use matcher_engine::{apply_moves, MAX_CHILDREN};
    use matcher_eval::evaluate;

    const R: Piece = Piece::plain(PieceColor::Red);
    const T: Piece = Piece::plain(PieceColor::Teal);
    const Y: Piece = Piece::plain(PieceColor::Yellow);
    const P: Piece = Piece::plain(PieceColor::Pink);

    #[test]
    fn test_empty_board_returns_probe() {
        let solution = BestStateSearch::default().find_moves(&Board::empty());
        assert_eq!(solution.moves, vec![Move::grab_or_drop(0)]);
        assert!(!solution.has_match);
    }

    #[test]
    fn test_finds_one_drop_match() {
        let board = Board::from_stacks(&[&[R, R, R][..], &[T], &[R]], None).expect("valid stacks");
        let solution = BestStateSearch::default().find_moves(&board);
        assert!(solution.has_match);

        let end = apply_moves(&board, &solution.moves).expect("solution replays");
        assert!(evaluate(&end).has_match);
    }

    #[test]
    fn test_path_leads_to_a_best_scoring_board() {
        let board =
            Board::from_stacks(&[&[R, T][..], &[Y, R], &[T, Y]], None).expect("valid stacks");
        let search = BestStateSearch::default();
        let solution = search.find_moves(&board);
        let end = apply_moves(&board, &solution.moves).expect("solution replays");
        assert_ne!(end, board);

        // no single successor beats the board the path ends on
        for (_, child) in children(&board) {
            assert!(evaluate(&child).score <= evaluate(&end).score);
        }
    }

    #[test]
    fn test_tiny_cap_still_expands_start() {
        let search = BestStateSearch::new(
            BestStateConfig {
                visited_cap: 1,
                ..BestStateConfig::default()
            },
            EvalWeights::default(),
        );
        let board = Board::from_stacks(&[&[R, T][..], &[Y]], None).expect("valid stacks");
        let solution = search.find_moves(&board);
        assert_eq!(solution.moves.len(), 1);
    }

    #[test]
    fn test_equal_scores_favor_first_discovered() {
        // too few pieces to cluster and too low to be penalized: every board scores 0
        let board = Board::from_stacks(&[&[R, T][..], &[Y]], None).expect("valid stacks");
        let solution = BestStateSearch::default().find_moves(&board);
        assert_eq!(solution.moves, vec![Move::grab_or_drop(0)]);
        assert!(!solution.has_match);
    }

    #[test]
    fn test_default_cap_bounds_discovery() {
        let board = Board::from_stacks(
            &[
                &[R, P, Y, R][..],
                &[P, P],
                &[Y, T, R],
                &[],
                &[R, Y],
                &[T, P, P, Y, R],
                &[Y],
            ],
            None,
        )
        .expect("valid stacks");
        let search = BestStateSearch::default();
        let cap = search.config.visited_cap;

        let exploration = search.explore(&board);
        assert!(exploration.discovered() >= cap);
        assert!(exploration.discovered() < cap + MAX_CHILDREN);

        let solution = search.find_moves(&board);
        assert!(!solution.moves.is_empty());
        apply_moves(&board, &solution.moves).expect("solution replays");
    }

    #[test]
    fn test_search_is_deterministic() {
        let board = Board::from_stacks(&[&[R, T, Y][..], &[Y, R], &[T], &[R, R]], None)
            .expect("valid stacks");
        let search = BestStateSearch::default();
        assert_eq!(search.find_moves(&board), search.find_moves(&board));
    }
}
