//! Core types: positions, pieces, boards, actions, state, configuration, RNG.
//!
//! Everything here is plain data. The rules that connect these types live in
//! [`crate::topology`] and [`crate::rules`].

pub mod position;
pub mod player;
pub mod board;
pub mod action;
pub mod config;
pub mod state;
pub mod rng;

pub use position::{Position, BOARD_SIZE, CELL_COUNT};
pub use player::{Piece, Player};
pub use board::{Board, TIGER_START};
pub use action::{Action, Capture, Move, MoveRecord};
pub use config::{CaptureRule, RulesConfig, GOATS_TO_WIN, TOTAL_GOATS};
pub use state::{GameState, Phase};
pub use rng::{GameRng, RngSnapshot};
