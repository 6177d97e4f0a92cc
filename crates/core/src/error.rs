use thiserror::Error;

use crate::{MAX_COLS, MAX_ROWS};

/// Rejected board input: malformed notation or a grid the solver cannot accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board notation ended early")]
    UnexpectedEnd,
    #[error("invalid cell {0:?} in board notation")]
    InvalidCell(char),
    #[error("trailing input after held piece: {0:?}")]
    TrailingInput(String),
    #[error("expected at most {max} columns, got {0}", max = MAX_COLS)]
    TooManyColumns(usize),
    #[error("column {col} holds {len} pieces, at most {max} fit", max = MAX_ROWS)]
    ColumnOverflow { col: usize, len: usize },
    #[error("column {col} has a gap below row {row}")]
    Hole { col: usize, row: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMoveError {
    #[error("unknown move operation {0:?}")]
    UnknownOperation(String),
    #[error("invalid move column {0:?}")]
    InvalidColumn(String),
    #[error("move {0:?} is missing a column")]
    MissingColumn(String),
}
