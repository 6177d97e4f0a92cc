//! board representation - 7 columns of 9 optional pieces plus the held piece
//! structural hash computed once per board; boards never change after construction

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{BoardError, Piece};

pub const MAX_COLS: usize = 7;
pub const MAX_ROWS: usize = 9;

/// Column-major grid: `cells[x][y]`, row 0 is where a column starts stacking.
pub type Cells = [[Option<Piece>; MAX_ROWS]; MAX_COLS];

/// 4-directional neighbor offsets (dx, dy).
pub const NEIGHBORS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const HASH_SEED: u64 = 17;
const HASH_MULTIPLIER: u64 = 31;

/// Full solver state: grid plus the piece the player is carrying.
///
/// Columns never have holes: if `(x, y)` is empty so is every `(x, y')`
/// with `y' > y`. Every transition returns a new board and leaves `self`
/// untouched, so a board can sit in a visited map while its children are built.
#[derive(Clone, Debug)]
pub struct Board {
    cells: Cells,
    held: Option<Piece>,
    hash: u64,
}

fn compute_hash(cells: &Cells, held: Option<Piece>) -> u64 {
    let mut hash = HASH_SEED;
    for cell in cells.iter().flatten() {
        hash = hash.wrapping_mul(HASH_MULTIPLIER);
        if let Some(piece) = cell {
            mix_piece(&mut hash, *piece);
        }
    }
    if let Some(piece) = held {
        hash = hash.wrapping_mul(HASH_MULTIPLIER);
        mix_piece(&mut hash, piece);
    }
    hash
}

#[inline(always)]
fn mix_piece(hash: &mut u64, piece: Piece) {
    *hash = hash.wrapping_add(piece.color.index() as u64);
    *hash = hash.wrapping_mul(HASH_MULTIPLIER);
    *hash = hash.wrapping_add(piece.bomb as u64);
}

impl Board {
    pub fn empty() -> Self {
        Self::from_cells([[None; MAX_ROWS]; MAX_COLS], None)
    }

    /// Trusted constructor for the board reader. Does not check for holes.
    pub fn from_cells(cells: Cells, held: Option<Piece>) -> Self {
        let hash = compute_hash(&cells, held);
        Self { cells, held, hash }
    }

    /// Build from bottom-up column stacks. Missing columns are empty.
    pub fn from_stacks<S: AsRef<[Piece]>>(
        stacks: &[S],
        held: Option<Piece>,
    ) -> Result<Self, BoardError> {
        if stacks.len() > MAX_COLS {
            return Err(BoardError::TooManyColumns(stacks.len()));
        }
        let mut cells = [[None; MAX_ROWS]; MAX_COLS];
        for (x, stack) in stacks.iter().enumerate() {
            let stack = stack.as_ref();
            if stack.len() > MAX_ROWS {
                return Err(BoardError::ColumnOverflow {
                    col: x,
                    len: stack.len(),
                });
            }
            for (y, piece) in stack.iter().enumerate() {
                cells[x][y] = Some(*piece);
            }
        }
        Ok(Self::from_cells(cells, held))
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<Piece> {
        self.cells.get(x).and_then(|column| column.get(y)).copied().flatten()
    }

    #[inline]
    pub fn held(&self) -> Option<Piece> {
        self.held
    }

    #[inline]
    pub fn is_holding(&self) -> bool {
        self.held.is_some()
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Cached structural hash, identical for identical grids and held pieces.
    #[inline(always)]
    pub fn hash_value(&self) -> u64 {
        self.hash
    }

    /// Row index of the first empty cell; `MAX_ROWS` when the column is full.
    /// Columns past `MAX_COLS` count as empty.
    pub fn count_in_column(&self, x: usize) -> usize {
        self.cells.get(x).map_or(0, |column| {
            column
                .iter()
                .position(Option::is_none)
                .unwrap_or(MAX_ROWS)
        })
    }

    /// Occupied cells, plus one for a held piece.
    pub fn item_count(&self) -> usize {
        let on_grid = self.cells.iter().flatten().filter(|c| c.is_some()).count();
        on_grid + self.held.is_some() as usize
    }

    /// Row of the topmost piece in column `x`.
    pub fn top(&self, x: usize) -> Option<usize> {
        self.count_in_column(x).checked_sub(1)
    }

    /// In-bounds 4-directional neighbors of `(x, y)`.
    pub fn neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        NEIGHBORS.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < MAX_COLS && ny < MAX_ROWS).then_some((nx, ny))
        })
    }

    /// Move the top piece of column `x` into the hand.
    /// `None` when something is already held or the column is empty.
    pub fn lift(&self, x: usize) -> Option<Board> {
        if self.held.is_some() || x >= MAX_COLS {
            return None;
        }
        let y = self.top(x)?;
        Some(self.derive(|cells, held| {
            *held = cells[x][y].take();
        }))
    }

    /// Set the held piece on the first empty cell of column `x`.
    /// `None` when nothing is held or the column is full.
    pub fn place(&self, x: usize) -> Option<Board> {
        let piece = self.held?;
        if x >= MAX_COLS {
            return None;
        }
        let y = self.count_in_column(x);
        if y == MAX_ROWS {
            return None;
        }
        Some(self.derive(|cells, held| {
            cells[x][y] = Some(piece);
            *held = None;
        }))
    }

    /// Exchange the top two pieces of column `x`. Ignores the hand.
    pub fn swap_top(&self, x: usize) -> Option<Board> {
        if x >= MAX_COLS {
            return None;
        }
        let count = self.count_in_column(x);
        if count < 2 {
            return None;
        }
        Some(self.derive(|cells, _| {
            cells[x].swap(count - 1, count - 2);
        }))
    }

    /// Clone, apply one edit, and hash the result.
    fn derive(&self, edit: impl FnOnce(&mut Cells, &mut Option<Piece>)) -> Board {
        let mut cells = self.cells;
        let mut held = self.held;
        edit(&mut cells, &mut held);
        Board::from_cells(cells, held)
    }

    /// First hole found, scanning columns left to right.
    pub fn find_hole(&self) -> Option<(usize, usize)> {
        (0..MAX_COLS).find_map(|x| {
            let count = self.count_in_column(x);
            self.cells[x][count..]
                .iter()
                .any(Option::is_some)
                .then_some((x, count))
        })
    }

    fn stacks(&self) -> Vec<Vec<Piece>> {
        self.cells
            .iter()
            .map(|column| column.iter().map_while(|cell| *cell).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.held == other.held && self.cells == other.cells
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

/// Compact row-major notation, row 0 first: `_` for empty cells, compact
/// pieces otherwise, then the held piece if any.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..MAX_ROWS {
            for x in 0..MAX_COLS {
                match self.cells[x][y] {
                    Some(piece) => write!(f, "{}", piece.compact())?,
                    None => f.write_str("_")?,
                }
            }
        }
        if let Some(piece) = self.held {
            write!(f, "{}", piece.compact())?;
        }
        Ok(())
    }
}

/// Parses the notation written by `Display`. Whitespace is ignored so rows can
/// be laid out on separate lines.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let mut chars = compact.chars().peekable();
        let mut cells = [[None; MAX_ROWS]; MAX_COLS];
        for y in 0..MAX_ROWS {
            for column in cells.iter_mut() {
                if chars.next_if_eq(&'_').is_some() {
                    continue;
                }
                column[y] = Some(Piece::parse_compact(&mut chars)?);
            }
        }
        let held = match chars.peek() {
            Some(_) => Some(Piece::parse_compact(&mut chars)?),
            None => None,
        };
        let rest: String = chars.collect();
        if !rest.is_empty() {
            return Err(BoardError::TrailingInput(rest));
        }

        let board = Board::from_cells(cells, held);
        if let Some((col, row)) = board.find_hole() {
            return Err(BoardError::Hole { col, row });
        }
        Ok(board)
    }
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    columns: Vec<Vec<Piece>>,
    held: Option<Piece>,
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        BoardRepr {
            columns: self.stacks(),
            held: self.held,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let repr = BoardRepr::deserialize(deserializer)?;
        Board::from_stacks(&repr.columns, repr.held).map_err(serde::de::Error::custom)
    }
}
