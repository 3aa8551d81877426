//! Placeholder move selectors and a self-play driver.
//!
//! These are not a playing strength: they pick among legal actions at
//! random, so a UI has an opponent and tests have a source of varied,
//! reproducible games. Anything that returns a legal action can stand in
//! for them behind the same `RulesEngine` contract.

use tracing::{debug, warn};

use crate::core::{Action, GameRng, GameState, Player};
use crate::rules::RulesEngine;

/// Policy for choosing the next action.
pub trait MovePolicy: Send + Sync {
    /// Choose an action for the player to move.
    ///
    /// Returns `None` if no legal actions exist.
    fn choose_action(
        &self,
        engine: &RulesEngine,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Option<Action>;
}

/// Uniform random policy.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl MovePolicy for RandomPolicy {
    fn choose_action(
        &self,
        engine: &RulesEngine,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Option<Action> {
        let actions = engine.legal_actions(state);
        rng.choose(&actions).copied()
    }
}

/// Takes a goat whenever it can, otherwise plays at random.
///
/// Captures are chosen uniformly among themselves.
#[derive(Clone, Debug, Default)]
pub struct CaptureFirstPolicy;

impl MovePolicy for CaptureFirstPolicy {
    fn choose_action(
        &self,
        engine: &RulesEngine,
        state: &GameState,
        rng: &mut GameRng,
    ) -> Option<Action> {
        let actions = engine.legal_actions(state);
        let captures: Vec<Action> = actions.iter().copied().filter(Action::is_capture).collect();

        if captures.is_empty() {
            rng.choose(&actions).copied()
        } else {
            rng.choose(&captures).copied()
        }
    }
}

/// How a self-play game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayoutEnd {
    /// A side won.
    Won(Player),
    /// The player to move had no legal action.
    Stalled,
    /// The policy chose an action the engine refused. The state is as it
    /// was before that action.
    Rejected(Action),
    /// The ply limit was reached first.
    PlyLimit,
}

/// Play `policy` against itself from `state` until the game ends.
///
/// `max_plies` of 0 means no limit. The state is advanced in place.
pub fn play_out<P: MovePolicy + ?Sized>(
    engine: &RulesEngine,
    state: &mut GameState,
    policy: &P,
    rng: &mut GameRng,
    max_plies: u32,
) -> PlayoutEnd {
    let mut plies = 0;

    loop {
        if let Some(winner) = engine.is_terminal(state) {
            debug!(%winner, plies, "playout finished");
            return PlayoutEnd::Won(winner);
        }

        if max_plies > 0 && plies >= max_plies {
            return PlayoutEnd::PlyLimit;
        }

        let Some(action) = policy.choose_action(engine, state, rng) else {
            debug!(player = %state.to_move(), plies, "playout stalled");
            return PlayoutEnd::Stalled;
        };

        if let Err(error) = engine.apply_action(state, action) {
            warn!(%error, %action, plies, "policy chose an illegal action");
            return PlayoutEnd::Rejected(action);
        }

        plies += 1;
    }
}
