//! Sides and board contents.
//!
//! ## Player
//!
//! The two sides: `Tiger` and `Goat`. Goats always move first.
//!
//! ## Piece
//!
//! What stands on an intersection. `Empty` is an explicit value; every
//! cell of a board holds exactly one `Piece`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Tiger,
    Goat,
}

impl Player {
    /// Both players, goat first.
    pub const ALL: [Player; 2] = [Player::Goat, Player::Tiger];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Tiger => Player::Goat,
            Player::Goat => Player::Tiger,
        }
    }

    /// The piece this player moves.
    #[must_use]
    pub const fn piece(self) -> Piece {
        match self {
            Player::Tiger => Piece::Tiger,
            Player::Goat => Piece::Goat,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Tiger => write!(f, "tiger"),
            Player::Goat => write!(f, "goat"),
        }
    }
}

/// Contents of a single intersection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    #[default]
    Empty,
    Tiger,
    Goat,
}

impl Piece {
    /// The player owning this piece, or `None` for an empty cell.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Piece::Empty => None,
            Piece::Tiger => Some(Player::Tiger),
            Piece::Goat => Some(Player::Goat),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// Single-character form used by the board text format.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Tiger => 'T',
            Piece::Goat => 'G',
        }
    }

    /// Parse a board-text symbol. Accepts either case.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' => Some(Piece::Empty),
            'T' | 't' => Some(Piece::Tiger),
            'G' | 'g' => Some(Piece::Goat),
            _ => None,
        }
    }
}

impl From<Player> for Piece {
    fn from(player: Player) -> Self {
        player.piece()
    }
}
