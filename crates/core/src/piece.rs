//! Piece colors and the tile descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::BoardError;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    Red,
    Pink,
    Yellow,
    Teal,
    Purple,
    /// Tile the reader could not classify. Still matches other unknown tiles.
    Unknown,
}

impl PieceColor {
    pub const ALL: [PieceColor; 6] = [
        PieceColor::Red,
        PieceColor::Pink,
        PieceColor::Yellow,
        PieceColor::Teal,
        PieceColor::Purple,
        PieceColor::Unknown,
    ];

    /// Stable numeric index, used by the board hash and the compact notation.
    pub const fn index(self) -> u8 {
        match self {
            PieceColor::Red => 0,
            PieceColor::Pink => 1,
            PieceColor::Yellow => 2,
            PieceColor::Teal => 3,
            PieceColor::Purple => 4,
            PieceColor::Unknown => 5,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::Red => "RED",
            PieceColor::Pink => "PINK",
            PieceColor::Yellow => "YELLOW",
            PieceColor::Teal => "TEAL",
            PieceColor::Purple => "PURPLE",
            PieceColor::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single board tile. Two pieces are the same tile iff color and bomb flag match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub bomb: bool,
}

impl Piece {
    pub const fn new(color: PieceColor, bomb: bool) -> Self {
        Self { color, bomb }
    }

    pub const fn plain(color: PieceColor) -> Self {
        Self::new(color, false)
    }

    pub const fn bomb(color: PieceColor) -> Self {
        Self::new(color, true)
    }

    /// Connected cluster size at which this kind of piece clears.
    #[inline]
    pub const fn match_threshold(self) -> usize {
        if self.bomb {
            2
        } else {
            4
        }
    }

    /// Compact form: color index, then `!` for bombs (`3!`).
    pub fn compact(self) -> Compact {
        Compact(self)
    }

    /// Parse one piece in compact form off the front of `chars`.
    pub(crate) fn parse_compact(
        chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    ) -> Result<Self, BoardError> {
        let c = chars.next().ok_or(BoardError::UnexpectedEnd)?;
        let color = c
            .to_digit(10)
            .and_then(|d| PieceColor::from_index(d as u8))
            .ok_or(BoardError::InvalidCell(c))?;
        let bomb = chars.next_if_eq(&'!').is_some();
        Ok(Self::new(color, bomb))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)?;
        if self.bomb {
            f.write_str("!")?;
        }
        Ok(())
    }
}

/// Display adapter for [`Piece::compact`].
pub struct Compact(Piece);

impl fmt::Display for Compact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.color.index())?;
        if self.0.bomb {
            f.write_str("!")?;
        }
        Ok(())
    }
}
