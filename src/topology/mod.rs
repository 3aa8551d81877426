//! Board topology: which intersections are joined by a printed line.
//!
//! The graph is fixed, so it is computed once at compile time into a
//! 25-entry table and every query is a lookup.
//!
//! ## Lines
//!
//! - Orthogonal: every intersection is joined to its up/down/left/right
//!   neighbours that exist.
//! - Diagonal: lines start at the four corners, the centre `(2, 2)`, and the
//!   four edge midpoints `(0, 2)`, `(2, 0)`, `(2, 4)`, `(4, 2)`. Midpoints
//!   carry only their two inward diagonals. A line joins both of its ends,
//!   so the points it passes through, such as `(1, 1)`, are connected along
//!   it as well.
//!
//! Degrees, row by row:
//!
//! ```text
//! 3 3 5 3 3
//! 3 8 4 8 3
//! 5 4 8 4 5
//! 3 8 4 8 3
//! 3 3 5 3 3
//! ```
//!
//! ```
//! use baghchal::core::Position;
//! use baghchal::topology::{is_adjacent, neighbors};
//!
//! assert_eq!(neighbors(Position::new(0, 0)).len(), 3);
//! assert_eq!(neighbors(Position::new(2, 2)).len(), 8);
//! assert!(is_adjacent(Position::new(1, 1), Position::new(0, 0)));
//! assert!(!is_adjacent(Position::new(1, 2), Position::new(0, 1)));
//! ```

use crate::core::{Position, CELL_COUNT};

const UP_LEFT: u8 = 1;
const UP_RIGHT: u8 = 2;
const DOWN_LEFT: u8 = 4;
const DOWN_RIGHT: u8 = 8;
const ALL_DIAGONALS: u8 = UP_LEFT | UP_RIGHT | DOWN_LEFT | DOWN_RIGHT;

const ORTHOGONAL: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Direction offsets matching the `UP_LEFT..DOWN_RIGHT` bits.
const DIAGONAL: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Intersections a diagonal line starts from, with the directions it runs.
/// Directions leaving the board are clipped.
const DIAGONAL_SOURCES: [(u8, u8, u8); 9] = [
    (0, 0, ALL_DIAGONALS),
    (0, 4, ALL_DIAGONALS),
    (4, 0, ALL_DIAGONALS),
    (4, 4, ALL_DIAGONALS),
    (2, 2, ALL_DIAGONALS),
    (0, 2, DOWN_LEFT | DOWN_RIGHT),
    (2, 0, UP_RIGHT | DOWN_RIGHT),
    (2, 4, UP_LEFT | DOWN_LEFT),
    (4, 2, UP_LEFT | UP_RIGHT),
];

/// Maximum degree of any intersection.
pub const MAX_NEIGHBORS: usize = 8;

/// Adjacency entry for one intersection.
#[derive(Clone, Copy, Debug)]
struct Neighbors {
    len: u8,
    /// Bit `i` set when the intersection with index `i` is adjacent.
    mask: u32,
    cells: [Position; MAX_NEIGHBORS],
}

static ADJACENCY: [Neighbors; CELL_COUNT] = build_adjacency();

const fn build_adjacency() -> [Neighbors; CELL_COUNT] {
    let mut masks = [0u32; CELL_COUNT];

    let mut i = 0;
    while i < CELL_COUNT {
        let p = Position::from_index(i);
        let mut d = 0;
        while d < ORTHOGONAL.len() {
            if let Some(q) = p.offset(ORTHOGONAL[d].0, ORTHOGONAL[d].1) {
                masks[i] |= 1 << q.index();
            }
            d += 1;
        }
        i += 1;
    }

    let mut s = 0;
    while s < DIAGONAL_SOURCES.len() {
        let (row, col, dirs) = DIAGONAL_SOURCES[s];
        let p = Position::new(row, col);
        let mut d = 0;
        while d < DIAGONAL.len() {
            if dirs & (1 << d) != 0 {
                if let Some(q) = p.offset(DIAGONAL[d].0, DIAGONAL[d].1) {
                    masks[p.index()] |= 1 << q.index();
                    masks[q.index()] |= 1 << p.index();
                }
            }
            d += 1;
        }
        s += 1;
    }

    let empty = Neighbors {
        len: 0,
        mask: 0,
        cells: [Position::new(0, 0); MAX_NEIGHBORS],
    };
    let mut table = [empty; CELL_COUNT];

    let mut i = 0;
    while i < CELL_COUNT {
        table[i].mask = masks[i];
        let mut j = 0;
        while j < CELL_COUNT {
            if masks[i] & (1 << j) != 0 {
                let len = table[i].len as usize;
                table[i].cells[len] = Position::from_index(j);
                table[i].len += 1;
            }
            j += 1;
        }
        i += 1;
    }

    table
}

/// Intersections one line-step away from `position`, in index order.
///
/// Pure function of the position; occupancy is not considered.
#[inline]
#[must_use]
pub fn neighbors(position: Position) -> &'static [Position] {
    let entry = &ADJACENCY[position.index()];
    &entry.cells[..entry.len as usize]
}

/// True if a printed line joins `a` and `b` directly.
#[inline]
#[must_use]
pub fn is_adjacent(a: Position, b: Position) -> bool {
    ADJACENCY[a.index()].mask & (1 << b.index()) != 0
}

/// Number of lines meeting at `position`.
#[inline]
#[must_use]
pub fn degree(position: Position) -> usize {
    ADJACENCY[position.index()].len as usize
}

/// True if `position` has any diagonal line.
#[must_use]
pub fn has_diagonals(position: Position) -> bool {
    neighbors(position)
        .iter()
        .any(|&q| q.row != position.row && q.col != position.col)
}

/// True if the three points all lie on one of the two long diagonals,
/// `(0, 0)-(4, 4)` or `(0, 4)-(4, 0)`.
#[must_use]
pub fn is_main_diagonal_jump(from: Position, over: Position, to: Position) -> bool {
    let on_leading = |p: Position| p.row == p.col;
    let on_trailing = |p: Position| p.row + p.col == 4;

    (on_leading(from) && on_leading(over) && on_leading(to))
        || (on_trailing(from) && on_trailing(over) && on_trailing(to))
}
