//! Matcher eval crate - heuristics for board evaluation.

use std::collections::VecDeque;

use matcher_core::{Board, MAX_COLS, MAX_ROWS};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Flat bonus for every cluster big enough to clear.
    pub match_bonus: f64,
    /// Penalty for a column topped one row above `safe_height`; doubles per extra row.
    pub tower_penalty: f64,
    /// Highest top row (0-based) that costs nothing.
    pub safe_height: usize,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            match_bonus: 1000.0,
            tower_penalty: 200.0,
            safe_height: 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    pub score: f64,
    /// At least one cluster reached its clearing size.
    pub has_match: bool,
}

pub fn evaluate(board: &Board) -> Evaluation {
    evaluate_with(board, &EvalWeights::default())
}

pub fn evaluate_with(board: &Board, weights: &EvalWeights) -> Evaluation {
    let (clusters, has_match) = cluster_score(board, weights);
    Evaluation {
        score: clusters - height_penalty(board, weights),
        has_match,
    }
}

/// Sum of squared cluster sizes plus the match bonus per clearing cluster.
///
/// Clusters are grown from the next unvisited cell in column order while at
/// least four unvisited cells remain; the last few cells go unscored.
pub fn cluster_score(board: &Board, weights: &EvalWeights) -> (f64, bool) {
    let mut visited = [[false; MAX_ROWS]; MAX_COLS];
    let mut remaining = board.item_count() - board.is_holding() as usize;
    let mut score = 0.0;
    let mut has_match = false;
    let mut queue = VecDeque::new();

    let mut cells =
        (0..MAX_COLS).flat_map(|x| (0..board.count_in_column(x)).map(move |y| (x, y)));

    while remaining >= 4 {
        let Some((sx, sy)) = cells.find(|&(x, y)| !visited[x][y]) else {
            break;
        };
        let Some(piece) = board.get(sx, sy) else {
            break;
        };
        visited[sx][sy] = true;
        remaining -= 1;
        queue.push_back((sx, sy));

        let mut count = 1usize;
        while let Some((cx, cy)) = queue.pop_front() {
            for (nx, ny) in Board::neighbors(cx, cy) {
                if visited[nx][ny] || board.get(nx, ny) != Some(piece) {
                    continue;
                }
                visited[nx][ny] = true;
                remaining -= 1;
                count += 1;
                queue.push_back((nx, ny));
            }
        }

        score += (count * count) as f64;
        if count >= piece.match_threshold() {
            score += weights.match_bonus;
            has_match = true;
        }
    }

    (score, has_match)
}

/// Exponential penalty for columns whose top piece sits above `safe_height`.
pub fn height_penalty(board: &Board, weights: &EvalWeights) -> f64 {
    (0..MAX_COLS)
        .filter_map(|x| board.top(x))
        .filter(|&y| y > weights.safe_height)
        .map(|y| weights.tower_penalty * 2f64.powi((y - weights.safe_height) as i32))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher_core::{Piece, PieceColor};

    const R: Piece = Piece::plain(PieceColor::Red);
    const T: Piece = Piece::plain(PieceColor::Teal);
    const Y: Piece = Piece::plain(PieceColor::Yellow);
    const P: Piece = Piece::plain(PieceColor::Pink);
    const RB: Piece = Piece::bomb(PieceColor::Red);

    fn board(stacks: &[&[Piece]]) -> Board {
        Board::from_stacks(stacks, None).expect("valid stacks")
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let eval = evaluate(&Board::empty());
        assert_eq!(eval.score, 0.0);
        assert!(!eval.has_match);
    }

    #[test]
    fn test_four_connected_is_a_match() {
        // 2x2 block of red, one teal so nothing else clusters
        let eval = evaluate(&board(&[&[R, R], &[R, R], &[T]]));
        assert!(eval.has_match);
        assert_eq!(eval.score, 16.0 + 1000.0);
    }

    #[test]
    fn test_three_connected_is_not() {
        let eval = evaluate(&board(&[&[R, R, R], &[T]]));
        assert!(!eval.has_match);
        assert_eq!(eval.score, 9.0);
    }

    #[test]
    fn test_bomb_pair_matches() {
        let eval = evaluate(&board(&[&[RB, T], &[RB, Y]]));
        assert!(eval.has_match);
        // the two leftover singles are never reached
        assert_eq!(eval.score, 4.0 + 1000.0);
    }

    #[test]
    fn test_lone_bomb_does_not_match() {
        let eval = evaluate(&board(&[&[RB, T], &[Y, P], &[R]]));
        assert!(!eval.has_match);
    }

    #[test]
    fn test_bomb_flag_splits_clusters() {
        // red bomb between plain reds breaks the run
        let eval = evaluate(&board(&[&[R, R, RB, R, R]]));
        assert!(!eval.has_match);
        // only the bottom pair is scored before fewer than four cells remain
        assert_eq!(eval.score, 4.0 - 400.0);
    }

    #[test]
    fn test_small_boards_are_not_scored() {
        // fewer than four pieces: the cluster loop never starts
        let eval = evaluate(&board(&[&[R, R, R]]));
        assert_eq!(eval.score, 0.0);
    }

    #[test]
    fn test_held_piece_is_not_clustered() {
        let held = Board::from_stacks(&[&[R, R, R][..]], Some(R)).expect("valid stacks");
        assert!(!evaluate(&held).has_match);
    }

    #[test]
    fn test_height_penalty_thresholds() {
        let weights = EvalWeights::default();
        let top_at_3 = board(&[&[R, T, R, T]]);
        let top_at_4 = board(&[&[R, T, R, T, R]]);
        let top_at_6 = board(&[&[R, T, R, T, R, T, R]]);
        assert_eq!(height_penalty(&top_at_3, &weights), 0.0);
        assert_eq!(height_penalty(&top_at_4, &weights), 400.0);
        assert_eq!(height_penalty(&top_at_6, &weights), 1600.0);
        assert_eq!(height_penalty(&Board::empty(), &weights), 0.0);
    }

    #[test]
    fn test_height_penalty_sums_columns() {
        let weights = EvalWeights::default();
        let towers = board(&[&[R, T, R, T, R], &[], &[T, R, T, R, T]]);
        assert_eq!(height_penalty(&towers, &weights), 800.0);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let b = board(&[&[R, R, T, Y], &[R, T, T], &[Y, Y, Y, RB], &[RB]]);
        let first = evaluate(&b);
        for _ in 0..5 {
            assert_eq!(evaluate(&b), first);
        }
        assert_eq!(evaluate(&b.clone()), first);
    }

    #[test]
    fn test_custom_weights() {
        let weights = EvalWeights {
            match_bonus: 50.0,
            ..EvalWeights::default()
        };
        let eval = evaluate_with(&board(&[&[R, R], &[R, R]]), &weights);
        assert_eq!(eval.score, 66.0);
    }
}
