//! Successor generation for the breadth-first solver.

use matcher_core::{Board, Move, MAX_COLS, MAX_ROWS};

/// Upper bound on successors: one grab/drop and one swap per column.
pub const MAX_CHILDREN: usize = 2 * MAX_COLS;

/// Every board one grab/drop or swap away from `board`, in column order with
/// the grab/drop before the swap of the same column.
///
/// Swaps are offered whether or not a piece is held, except on a full column
/// while holding: nothing can be dropped there, so the column is skipped.
pub fn children(board: &Board) -> Vec<(Move, Board)> {
    let mut children = Vec::with_capacity(MAX_CHILDREN);
    for x in 0..MAX_COLS {
        let grab_or_drop = if board.is_holding() {
            board.place(x)
        } else {
            board.lift(x)
        };
        match grab_or_drop {
            Some(child) => children.push((Move::grab_or_drop(x), child)),
            None if board.is_holding() => continue,
            None => {}
        }
        if let Some(child) = board.swap_top(x) {
            children.push((Move::swap(x), child));
        }
    }
    children
}

/// Number of successors without building them.
pub fn count_children(board: &Board) -> usize {
    (0..MAX_COLS)
        .map(|x| {
            let count = board.count_in_column(x);
            if board.is_holding() && count == MAX_ROWS {
                return 0;
            }
            (count > 0 || board.is_holding()) as usize + (count >= 2) as usize
        })
        .sum()
}
