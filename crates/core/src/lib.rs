//! Matcher core crate - fundamental types for the tile-matching solver.

mod board;
mod board_heights;
mod error;
mod moves;
mod piece;

pub use board::{Board, Cells, MAX_COLS, MAX_ROWS, NEIGHBORS};
pub use board_heights::ColumnHeights;
pub use error::{BoardError, ParseMoveError};
pub use moves::{Move, Operation};
pub use piece::{Compact, Piece, PieceColor};
