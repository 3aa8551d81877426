//! Game state: board, turn, phase, counters, history.
//!
//! `GameState` is the authoritative record a caller keeps between turns.
//! It is plain data; the transitions between states are performed by
//! [`crate::rules::RulesEngine`], which validates an action before touching
//! the state so a rejected action leaves it exactly as it was.
//!
//! History lives in an `im::Vector`, so cloning a state (to explore a line
//! of play, or to keep an undo stack) is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::action::MoveRecord;
use super::board::Board;
use super::player::{Piece, Player};

/// Phase of the game.
///
/// `Placing` lasts until the last goat has been placed; the switch to
/// `Moving` happens once and is never undone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Placing,
    Moving,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Placing => write!(f, "placing"),
            Phase::Moving => write!(f, "moving"),
        }
    }
}

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) phase: Phase,
    pub(crate) placed_goats: u8,
    pub(crate) captured_goats: u8,
    pub(crate) winner: Option<Player>,
    pub(crate) history: Vector<MoveRecord>,
}

impl GameState {
    /// The opening state: tigers on the corners, goat to place.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::initial(),
            to_move: Player::Goat,
            phase: Phase::Placing,
            placed_goats: 0,
            captured_goats: 0,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Build a state from an arbitrary position, e.g. a puzzle or a test
    /// fixture.
    ///
    /// The winner is not evaluated here; call
    /// [`RulesEngine::evaluate`](crate::rules::RulesEngine::evaluate) if the
    /// position may already be decided.
    #[must_use]
    pub fn from_parts(
        board: Board,
        to_move: Player,
        phase: Phase,
        placed_goats: u8,
        captured_goats: u8,
    ) -> Self {
        Self {
            board,
            to_move,
            phase,
            placed_goats,
            captured_goats,
            winner: None,
            history: Vector::new(),
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Goats placed so far (including ones since captured).
    #[must_use]
    pub fn placed_goats(&self) -> u8 {
        self.placed_goats
    }

    /// Goats removed by tiger jumps.
    #[must_use]
    pub fn captured_goats(&self) -> u8 {
        self.captured_goats
    }

    /// Winner, once the game is decided.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Every action applied since this state was created.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// The most recent action.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Number of actions applied so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }

    /// Goats currently on the board.
    #[must_use]
    pub fn goats_on_board(&self) -> usize {
        self.board.count(Piece::Goat)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
