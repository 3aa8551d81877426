//! Intersections of the 5×5 board.
//!
//! A `Position` is a `(row, col)` pair with both coordinates in `0..5`.
//! Positions are indexed row-major, so `(0, 0)` is 0 and `(4, 4)` is 24.
//! Constructing an out-of-bounds position through [`Position::new`] is a
//! caller error and panics; [`Position::try_new`] is the fallible form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::RulesError;

/// Number of intersections along each side of the board.
pub const BOARD_SIZE: usize = 5;

/// Total number of intersections.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// An intersection on the board.
///
/// Deserializing checks bounds the same way [`Position::try_new`] does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Create a position.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..5`.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "Position out of bounds"
        );
        Self { row, col }
    }

    /// Create a position from signed coordinates, or `None` if off the board.
    ///
    /// ```
    /// use baghchal::core::Position;
    ///
    /// assert_eq!(Position::try_new(2, 4), Some(Position::new(2, 4)));
    /// assert_eq!(Position::try_new(-1, 0), None);
    /// assert_eq!(Position::try_new(0, 5), None);
    /// ```
    #[must_use]
    pub const fn try_new(row: i32, col: i32) -> Option<Self> {
        if row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32 {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Row-major index in `0..25`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Inverse of [`Position::index`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= 25`.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "Position index out of bounds");
        Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    /// Step by a signed offset, or `None` if the result leaves the board.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        Self::try_new(self.row as i32 + d_row, self.col as i32 + d_col)
    }

    /// Signed `(d_row, d_col)` from `self` to `other`.
    #[must_use]
    pub const fn delta(self, other: Self) -> (i32, i32) {
        (
            other.row as i32 - self.row as i32,
            other.col as i32 - self.col as i32,
        )
    }

    /// Iterate over all 25 positions in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(Position::from_index)
    }

    /// True for the four corner intersections.
    #[must_use]
    pub const fn is_corner(self) -> bool {
        (self.row == 0 || self.row == 4) && (self.col == 0 || self.col == 4)
    }
}

/// Unchecked wire form of a [`Position`].
#[derive(Deserialize)]
struct RawPosition {
    row: u8,
    col: u8,
}

impl TryFrom<RawPosition> for Position {
    type Error = RulesError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Self::try_new(i32::from(raw.row), i32::from(raw.col)).ok_or(RulesError::OutOfBounds {
            row: raw.row,
            col: raw.col,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
