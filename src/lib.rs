//! # baghchal
//!
//! A rules engine for Baghchal, the tigers-and-goats game played on the
//! 5×5 lattice of lines.
//!
//! ## Design Principles
//!
//! 1. **Pure rules, no I/O**: Board transforms are plain functions from one
//!    board to the next. Rendering, input and timers belong to the caller.
//!
//! 2. **Illegal means unchanged**: A refused placement or move never
//!    touches the board or the game state. The free functions hand back
//!    the input board; the engine reports why through [`RulesError`].
//!
//! 3. **Configuration Over Convention**: The goat supply, the capture
//!    threshold and the capture geometry live in [`RulesConfig`].
//!
//! ## Architecture
//!
//! - **Static topology**: Line adjacency is computed once at compile time.
//!   Every lookup is a table read.
//!
//! - **Persistent history**: `GameState` keeps its history in an `im`
//!   vector, so cloning a state to explore a line of play is O(1).
//!
//! - **Deterministic randomness**: Placeholder policies draw from a seeded
//!   ChaCha stream, so a self-play game replays exactly from its seed.
//!
//! ## Modules
//!
//! - `core`: Positions, pieces, board, actions, state, configuration, RNG
//! - `topology`: Which intersections are joined by a printed line
//! - `rules`: Move generation, board transforms, outcome, the engine
//! - `policy`: Random move selectors and a self-play driver
//! - `error`: Why an action was refused

pub mod core;
pub mod error;
pub mod policy;
pub mod rules;
pub mod topology;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, Capture, CaptureRule, GameRng, GameState, Move, MoveRecord, RngSnapshot,
    Phase, Piece, Player, Position, RulesConfig, BOARD_SIZE, GOATS_TO_WIN, TOTAL_GOATS,
};

pub use crate::error::RulesError;

pub use crate::rules::{
    apply_move, apply_placement, capture_moves, evaluate_outcome, legal_destinations,
    legal_moves, RulesEngine,
};

pub use crate::topology::{is_adjacent, neighbors};

pub use crate::policy::{play_out, CaptureFirstPolicy, MovePolicy, PlayoutEnd, RandomPolicy};
