//! Player actions and their text forms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseMoveError;

/// What the player does at a column.
///
/// The breadth-first solver speaks `GrabOrDrop` and `Swap`; the bounded
/// solver speaks `Take`, `Put` and `Swap`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// Grab the top piece if nothing is held, drop the held piece otherwise.
    GrabOrDrop,
    Take,
    Put,
    Swap,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Operation::GrabOrDrop => "GRAB_OR_DROP",
            Operation::Take => "TAKE",
            Operation::Put => "PUT",
            Operation::Swap => "SWAP",
        }
    }

    /// Single-letter tag used in compact move lists (`t3 p0 s5`).
    pub fn tag(self) -> char {
        match self {
            Operation::GrabOrDrop => 'g',
            Operation::Take => 't',
            Operation::Put => 'p',
            Operation::Swap => 's',
        }
    }

    fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'g' => Some(Operation::GrabOrDrop),
            't' => Some(Operation::Take),
            'p' => Some(Operation::Put),
            's' => Some(Operation::Swap),
            _ => None,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GRAB_OR_DROP" => Ok(Operation::GrabOrDrop),
            "TAKE" => Ok(Operation::Take),
            "PUT" => Ok(Operation::Put),
            "SWAP" => Ok(Operation::Swap),
            _ => Err(ParseMoveError::UnknownOperation(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Move {
    pub operation: Operation,
    pub col: usize,
}

impl Move {
    pub const fn new(operation: Operation, col: usize) -> Self {
        Self { operation, col }
    }

    pub const fn grab_or_drop(col: usize) -> Self {
        Self::new(Operation::GrabOrDrop, col)
    }

    pub const fn take(col: usize) -> Self {
        Self::new(Operation::Take, col)
    }

    pub const fn put(col: usize) -> Self {
        Self::new(Operation::Put, col)
    }

    pub const fn swap(col: usize) -> Self {
        Self::new(Operation::Swap, col)
    }

    pub fn compact(self) -> String {
        format!("{}{}", self.operation.tag(), self.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.operation, self.col)
    }
}

/// Accepts both `SWAP@3` and the compact `s3`.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (operation, col) = match s.split_once('@') {
            Some((op, col)) => (op.parse::<Operation>()?, col),
            None => {
                let mut chars = s.chars();
                let tag = chars
                    .next()
                    .ok_or_else(|| ParseMoveError::MissingColumn(s.to_string()))?;
                let op = Operation::from_tag(tag)
                    .ok_or_else(|| ParseMoveError::UnknownOperation(tag.to_string()))?;
                (op, chars.as_str())
            }
        };
        if col.is_empty() {
            return Err(ParseMoveError::MissingColumn(s.to_string()));
        }
        let col = col
            .parse::<usize>()
            .map_err(|_| ParseMoveError::InvalidColumn(col.to_string()))?;
        Ok(Move::new(operation, col))
    }
}
