//! Moves, captures, and the actions a player can take.
//!
//! - `Capture`: a tiger jump as produced by capture generation
//! - `Move`: a from/to step, optionally removing a jumped goat
//! - `Action`: either a goat placement or a `Move`
//! - `MoveRecord`: an applied action with the mover and ply number

use serde::{Deserialize, Serialize};
use std::fmt;

use super::player::Player;
use super::position::Position;

/// A legal tiger jump from some origin: land on `to`, removing the goat on
/// `capture`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capture {
    pub to: Position,
    pub capture: Position,
}

/// A piece movement.
///
/// `capture` is present only for tiger jump-captures.
///
/// ```
/// use baghchal::core::{Move, Position};
///
/// let step = Move::step(Position::new(0, 0), Position::new(0, 1));
/// assert!(!step.is_capture());
///
/// let jump = Move::jump(Position::new(0, 0), Position::new(1, 1), Position::new(2, 2));
/// assert_eq!(jump.capture, Some(Position::new(1, 1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub capture: Option<Position>,
}

impl Move {
    /// A simple one-step move.
    #[must_use]
    pub const fn step(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            capture: None,
        }
    }

    /// A jump from `from` over `over` to `to`.
    #[must_use]
    pub const fn jump(from: Position, over: Position, to: Position) -> Self {
        Self {
            from,
            to,
            capture: Some(over),
        }
    }

    /// Build the move for a generated capture.
    #[must_use]
    pub const fn from_capture(from: Position, capture: Capture) -> Self {
        Self::jump(from, capture.capture, capture.to)
    }

    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// The same step played backwards. Captures have no inverse.
    #[must_use]
    pub const fn reversed(&self) -> Option<Self> {
        match self.capture {
            None => Some(Self::step(self.to, self.from)),
            Some(_) => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.capture {
            Some(over) => write!(f, "{} x{} -> {}", self.from, over, self.to),
            None => write!(f, "{} -> {}", self.from, self.to),
        }
    }
}

/// Something a player does on their turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put a new goat on an empty intersection (placing phase only).
    Place(Position),
    /// Move a piece already on the board.
    Move(Move),
}

impl Action {
    /// True if this action removes a goat.
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        match self {
            Action::Place(_) => false,
            Action::Move(mv) => mv.is_capture(),
        }
    }

    /// Destination intersection of the action.
    #[must_use]
    pub const fn target(&self) -> Position {
        match self {
            Action::Place(pos) => *pos,
            Action::Move(mv) => mv.to,
        }
    }
}

impl From<Move> for Action {
    fn from(mv: Move) -> Self {
        Action::Move(mv)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Place(pos) => write!(f, "place {}", pos),
            Action::Move(mv) => write!(f, "move {}", mv),
        }
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay, debugging, and the "last move" highlight a UI shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who acted.
    pub player: Player,

    /// The action taken.
    pub action: Action,

    /// Zero-based ply number of this action.
    pub ply: u32,
}

impl MoveRecord {
    #[must_use]
    pub const fn new(player: Player, action: Action, ply: u32) -> Self {
        Self {
            player,
            action,
            ply,
        }
    }
}
