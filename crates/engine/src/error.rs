use matcher_core::{Move, MAX_COLS};
use thiserror::Error;

/// A move that cannot be executed on the board it was applied to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{mv}: column out of range (board has {max} columns)", max = MAX_COLS)]
    ColumnOutOfRange { mv: Move },
    #[error("{mv}: already holding a piece")]
    AlreadyHolding { mv: Move },
    #[error("{mv}: nothing is held")]
    NothingHeld { mv: Move },
    #[error("{mv}: column is empty")]
    ColumnEmpty { mv: Move },
    #[error("{mv}: column is full")]
    ColumnFull { mv: Move },
    #[error("{mv}: swap needs two pieces in the column")]
    NotEnoughToSwap { mv: Move },
}
