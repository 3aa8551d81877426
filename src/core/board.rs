//! The 5×5 grid of pieces.
//!
//! `Board` is a small `Copy` value. The rules engine never holds on to a
//! board between calls: it reads the one it is given and returns a new one.
//!
//! ## Text form
//!
//! Five rows of `T`, `G` or `.`, top row first, separated by `/` or
//! newlines. Surrounding whitespace is ignored.
//!
//! ```
//! use baghchal::core::{Board, Piece, Position};
//!
//! let board: Board = "T...T/.G.../...../...../T...T".parse().unwrap();
//! assert_eq!(board.get(Position::new(1, 1)), Piece::Goat);
//! assert_eq!(board, {
//!     let mut b = Board::initial();
//!     b.set(Position::new(1, 1), Piece::Goat);
//!     b
//! });
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::player::Piece;
use super::position::{Position, BOARD_SIZE, CELL_COUNT};
use crate::error::RulesError;

/// Starting squares of the four tigers.
pub const TIGER_START: [Position; 4] = [
    Position::new(0, 0),
    Position::new(0, 4),
    Position::new(4, 0),
    Position::new(4, 4),
];

/// Contents of all 25 intersections, row-major.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Piece; CELL_COUNT],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Piece::Empty; CELL_COUNT],
        }
    }

    /// The opening position: tigers on the four corners, no goats.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::new();
        for pos in TIGER_START {
            board.set(pos, Piece::Tiger);
        }
        board
    }

    /// Piece at a position.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Position) -> Piece {
        self.cells[pos.index()]
    }

    /// Overwrite a cell.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Piece) {
        self.cells[pos.index()] = piece;
    }

    /// Check whether a cell is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Copy of this board with one cell replaced.
    #[must_use]
    pub fn with(mut self, pos: Position, piece: Piece) -> Self {
        self.set(pos, piece);
        self
    }

    /// Number of cells holding `piece`.
    #[must_use]
    pub fn count(&self, piece: Piece) -> usize {
        self.cells.iter().filter(|&&p| p == piece).count()
    }

    /// Positions holding `piece`, in index order.
    pub fn positions_of(&self, piece: Piece) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |&(_, &p)| p == piece)
            .map(|(i, _)| Position::from_index(i))
    }

    /// Empty positions, in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions_of(Piece::Empty)
    }

    /// All `(position, piece)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &p)| (Position::from_index(i), p))
    }

    /// Row-major cell slice.
    #[must_use]
    pub fn cells(&self) -> &[Piece; CELL_COUNT] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..BOARD_SIZE {
                let piece = self.cells[row * BOARD_SIZE + col];
                write!(f, "{}", piece.symbol())?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = self
            .cells
            .chunks(BOARD_SIZE)
            .map(|row| row.iter().map(|p| p.symbol()).collect())
            .collect();
        write!(f, "Board({})", rows.join("/"))
    }
}

impl FromStr for Board {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c| c == '/' || c == '\n')
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(RulesError::ParseBoard(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != BOARD_SIZE {
                return Err(RulesError::ParseBoard(format!(
                    "row {} has {} cells",
                    row,
                    symbols.len()
                )));
            }
            for (col, &c) in symbols.iter().enumerate() {
                let piece = Piece::from_symbol(c).ok_or_else(|| {
                    RulesError::ParseBoard(format!("unexpected symbol {:?} in row {}", c, row))
                })?;
                board.cells[row * BOARD_SIZE + col] = piece;
            }
        }

        Ok(board)
    }
}
