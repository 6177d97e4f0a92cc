//! Column height snapshot for ordering and balancing decisions

use crate::{Board, MAX_COLS};

/// Cached column counts of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnHeights {
    heights: [usize; MAX_COLS],
}

impl ColumnHeights {
    pub fn new(board: &Board) -> Self {
        let mut heights = [0usize; MAX_COLS];
        for (x, height) in heights.iter_mut().enumerate() {
            *height = board.count_in_column(x);
        }
        Self { heights }
    }

    #[inline(always)]
    pub fn height(&self, x: usize) -> usize {
        self.heights[x]
    }

    #[inline(always)]
    pub fn heights(&self) -> &[usize; MAX_COLS] {
        &self.heights
    }

    /// Columns from shortest to tallest; ties keep column order.
    pub fn ascending(&self) -> [usize; MAX_COLS] {
        let mut cols = std::array::from_fn(|x| x);
        cols.sort_by_key(|&x| self.heights[x]);
        cols
    }

    /// Columns from tallest to shortest; ties keep column order.
    pub fn descending(&self) -> [usize; MAX_COLS] {
        let mut cols = std::array::from_fn(|x| x);
        cols.sort_by_key(|&x| std::cmp::Reverse(self.heights[x]));
        cols
    }

    /// First column of minimum height.
    pub fn shortest(&self) -> usize {
        self.ascending()[0]
    }

    /// Last column of maximum height (the tail of [`Self::ascending`]).
    pub fn tallest(&self) -> usize {
        self.ascending()[MAX_COLS - 1]
    }

    /// Height difference between the tallest and the shortest column.
    pub fn spread(&self) -> usize {
        self.heights[self.tallest()] - self.heights[self.shortest()]
    }
}
