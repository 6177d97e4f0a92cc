//! perft - successor counting for movegen verification

use matcher_core::Board;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::movegen::{children, count_children};

/// perft - counts leaf nodes of the successor tree at `depth`
pub fn perft(board: &Board, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    if depth == 1 {
        return count_children(board) as u64;
    }
    children(board)
        .iter()
        .map(|(_, child)| perft(child, depth - 1))
        .sum()
}

/// Parallel perft - splits top-level successors across threads
pub fn perft_parallel(board: &Board, depth: u32) -> u64 {
    if depth <= 1 {
        return perft(board, depth);
    }
    children(board)
        .par_iter()
        .map(|(_, child)| perft(child, depth - 1))
        .sum()
}

/// Distinct boards reachable in at most `depth` transitions, the start included.
pub fn reachable_states(board: &Board, depth: u32) -> usize {
    let mut seen = FxHashSet::default();
    seen.insert(board.clone());
    let mut frontier = vec![board.clone()];

    for _ in 0..depth {
        let mut next = Vec::new();
        for current in &frontier {
            for (_, child) in children(current) {
                if seen.insert(child.clone()) {
                    next.push(child);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use matcher_core::{Piece, PieceColor};

    const R: Piece = Piece::plain(PieceColor::Red);
    const T: Piece = Piece::plain(PieceColor::Teal);

    #[test]
    fn test_perft_empty_board() {
        let board = Board::empty();
        assert_eq!(perft(&board, 0), 1);
        assert_eq!(perft(&board, 1), 0);
        assert_eq!(perft(&board, 3), 0);
    }

    #[test]
    fn test_perft_single_piece() {
        let board = Board::from_stacks(&[&[R][..]], None).expect("valid stacks");
        // grab the piece, then drop it on any of the 7 columns
        assert_eq!(perft(&board, 1), 1);
        assert_eq!(perft(&board, 2), 7);
        assert_eq!(reachable_states(&board, 2), 8);
    }

    #[test]
    fn test_perft_parallel_matches_serial() {
        let board = Board::from_stacks(&[&[R, T][..], &[T], &[R, R]], None).expect("valid stacks");
        for depth in 0..4 {
            assert_eq!(perft_parallel(&board, depth), perft(&board, depth));
        }
    }

    #[test]
    fn test_reachable_states_dedupes() {
        let board = Board::from_stacks(&[&[R, T][..]], None).expect("valid stacks");
        // grab or swap; swapping back or dropping onto column 0 revisits the start
        assert_eq!(reachable_states(&board, 1), 3);
        assert_eq!(perft(&board, 2), 9);
        assert_eq!(reachable_states(&board, 2), 10);
    }
}
