//! Localized match detection from a single cell.

use matcher_core::{Board, MAX_COLS, MAX_ROWS};

/// Whether the piece at `(x, y)` belongs to a connected group of identical
/// pieces big enough to clear (2 bombs, 4 plain pieces).
///
/// Stops as soon as enough pieces are found. Empty or out-of-range cells
/// never match.
pub fn completes_match(board: &Board, x: usize, y: usize) -> bool {
    let Some(piece) = board.get(x, y) else {
        return false;
    };

    let mut remaining = piece.match_threshold();
    let mut visited = [[false; MAX_ROWS]; MAX_COLS];
    let mut stack = Vec::with_capacity(MAX_COLS * MAX_ROWS);
    visited[x][y] = true;
    stack.push((x, y));

    while let Some((cx, cy)) = stack.pop() {
        remaining -= 1;
        if remaining == 0 {
            return true;
        }
        for (nx, ny) in Board::neighbors(cx, cy) {
            if visited[nx][ny] || board.get(nx, ny) != Some(piece) {
                continue;
            }
            visited[nx][ny] = true;
            stack.push((nx, ny));
        }
    }
    false
}
