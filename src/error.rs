//! Errors reported when an action is rejected.
//!
//! Every variant is recoverable: the caller ignores the request (or
//! re-prompts) and the game state is unchanged.

use thiserror::Error;

use crate::core::{Phase, Player, Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("game is already over")]
    GameOver,

    #[error("not allowed during the {0} phase")]
    WrongPhase(Phase),

    #[error("it is not {0}'s turn")]
    NotYourTurn(Player),

    #[error("intersection {0} is occupied")]
    Occupied(Position),

    #[error("no piece on {0}")]
    NoPiece(Position),

    #[error("no legal move from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("{over} cannot be captured by jumping from {from} to {to}")]
    IllegalCapture {
        from: Position,
        over: Position,
        to: Position,
    },

    #[error("all goats have been placed")]
    NoGoatsLeft,

    #[error("invalid board text: {0}")]
    ParseBoard(String),

    #[error("({row}, {col}) is off the board")]
    OutOfBounds { row: u8, col: u8 },

    #[error("invalid rules configuration: {0}")]
    InvalidConfig(String),
}
