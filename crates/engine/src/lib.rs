//! matcher-engine - move rules for the tile-matching board.
//!
//! Provides move application, successor generation, and match detection.

pub mod apply;
pub mod error;
pub mod matching;
pub mod movegen;
pub mod perft;

pub use apply::{apply_move, apply_moves};
pub use error::MoveError;
pub use matching::completes_match;
pub use movegen::{children, count_children, MAX_CHILDREN};
pub use perft::{perft, perft_parallel, reachable_states};
