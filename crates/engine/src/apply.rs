use matcher_core::{Board, Move, Operation, MAX_COLS};

use crate::MoveError;

/// Apply a single move and return the resulting board.
/// The input board is left as is; illegal moves are reported, never skipped.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board, MoveError> {
    if mv.col >= MAX_COLS {
        return Err(MoveError::ColumnOutOfRange { mv });
    }
    match mv.operation {
        Operation::GrabOrDrop if board.is_holding() => place(board, mv),
        Operation::GrabOrDrop | Operation::Take => lift(board, mv),
        Operation::Put => place(board, mv),
        Operation::Swap => board
            .swap_top(mv.col)
            .ok_or(MoveError::NotEnoughToSwap { mv }),
    }
}

/// Replay a whole move sequence, stopping at the first illegal move.
pub fn apply_moves(board: &Board, moves: &[Move]) -> Result<Board, MoveError> {
    moves
        .iter()
        .try_fold(board.clone(), |current, &mv| apply_move(&current, mv))
}

fn lift(board: &Board, mv: Move) -> Result<Board, MoveError> {
    if board.is_holding() {
        return Err(MoveError::AlreadyHolding { mv });
    }
    board.lift(mv.col).ok_or(MoveError::ColumnEmpty { mv })
}

fn place(board: &Board, mv: Move) -> Result<Board, MoveError> {
    if !board.is_holding() {
        return Err(MoveError::NothingHeld { mv });
    }
    board.place(mv.col).ok_or(MoveError::ColumnFull { mv })
}
