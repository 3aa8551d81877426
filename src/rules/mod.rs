//! Game rules.
//!
//! - `movegen`: simple moves and jump-captures
//! - `apply`: pure board transforms (`apply_placement`, `apply_move`)
//! - `outcome`: win evaluation
//! - `engine`: `RulesEngine`, the turn/phase state machine over `GameState`
//!
//! The free functions are the stateless contract a UI controller can call
//! directly. `RulesEngine` packages them with a `RulesConfig` and keeps a
//! `GameState` consistent.

pub mod movegen;
pub mod apply;
pub mod outcome;
pub mod engine;

pub use movegen::{
    can_move, capture_moves, capture_moves_with, landing, legal_destinations, legal_moves,
    legal_moves_with, Captures, Destinations, Moves,
};
pub use apply::{apply_move, apply_placement, validate_move};
pub use outcome::{evaluate_outcome, evaluate_outcome_with};
pub use engine::RulesEngine;
