//! The rules engine: turn order, phases, and action validation.
//!
//! `RulesEngine` holds only its [`RulesConfig`]. Every method takes the
//! state it works on explicitly, so one engine can serve any number of
//! games.
//!
//! ## State machine
//!
//! - Placing, goat to move: the goat player places a goat on an empty
//!   intersection. When the last goat is placed the phase becomes Moving.
//! - Placing, tiger to move: tigers step or jump, exactly as in Moving.
//! - Moving: the player to move steps one of their pieces, or jumps with a
//!   tiger.
//!
//! The turn passes after every accepted action. The outcome is evaluated
//! after every accepted action; once there is a winner every further action
//! is refused.

use tracing::{debug, instrument};

use crate::core::{
    Action, Board, GameState, Move, MoveRecord, Phase, Piece, Player, Position, RulesConfig,
};
use crate::error::RulesError;

use super::apply::{execute_move, validate_move};
use super::movegen::{
    capture_moves_with, legal_destinations, legal_moves_with, Captures, Destinations, Moves,
};
use super::outcome::evaluate_outcome_with;

/// Rules engine.
///
/// ```
/// use baghchal::core::{Action, Phase, Player, Position};
/// use baghchal::rules::RulesEngine;
///
/// let engine = RulesEngine::default();
/// let mut state = engine.new_game();
///
/// engine.apply_action(&mut state, Action::Place(Position::new(2, 2))).unwrap();
/// assert_eq!(state.to_move(), Player::Tiger);
/// assert_eq!(state.placed_goats(), 1);
/// assert_eq!(state.phase(), Phase::Placing);
///
/// // Refused: the state is untouched.
/// let before = state.clone();
/// assert!(engine.place_goat(&mut state, Position::new(2, 2)).is_err());
/// assert_eq!(state, before);
/// ```
#[derive(Clone, Debug, Default)]
pub struct RulesEngine {
    config: RulesConfig,
}

impl RulesEngine {
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Get the rules configuration.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// A fresh game: tigers on the corners, goat to place.
    #[must_use]
    pub fn new_game(&self) -> GameState {
        GameState::new()
    }

    // === Move generation ===

    /// Empty neighbours of `position`.
    #[must_use]
    pub fn legal_destinations(&self, position: Position, board: &Board) -> Destinations {
        legal_destinations(position, board)
    }

    /// Jump-captures for a tiger on `position`, under the configured rule.
    #[must_use]
    pub fn capture_moves(&self, position: Position, board: &Board) -> Captures {
        capture_moves_with(position, board, self.config.capture_rule)
    }

    /// Steps and captures for the piece on `position`.
    #[must_use]
    pub fn legal_moves(&self, position: Position, board: &Board) -> Moves {
        legal_moves_with(position, board, self.config.capture_rule)
    }

    /// Every action available to the player to move.
    ///
    /// Empty once the game is over, including a position built already
    /// decided. In the moving phase it can also be empty for a goat player
    /// whose every goat is blocked; the rules give no remedy for that and
    /// the game stalls.
    #[must_use]
    pub fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if self.is_terminal(state).is_some() {
            return Vec::new();
        }

        let player = state.to_move;

        if state.phase == Phase::Placing && player == Player::Goat {
            if state.placed_goats >= self.config.total_goats {
                return Vec::new();
            }
            return state.board.empty_positions().map(Action::Place).collect();
        }

        state
            .board
            .positions_of(player.piece())
            .flat_map(|pos| self.legal_moves(pos, &state.board))
            .map(Action::Move)
            .collect()
    }

    // === Applying actions ===

    /// Check an action against the current state without applying it.
    ///
    /// # Errors
    ///
    /// Returns the first rule the action breaks; see [`RulesError`].
    pub fn validate_action(&self, state: &GameState, action: &Action) -> Result<(), RulesError> {
        if self.is_terminal(state).is_some() {
            return Err(RulesError::GameOver);
        }

        match action {
            Action::Place(pos) => {
                if state.to_move != Player::Goat {
                    return Err(RulesError::NotYourTurn(Player::Goat));
                }
                if state.phase != Phase::Placing {
                    return Err(RulesError::WrongPhase(state.phase));
                }
                if state.placed_goats >= self.config.total_goats {
                    return Err(RulesError::NoGoatsLeft);
                }
                if !state.board.is_empty(*pos) {
                    return Err(RulesError::Occupied(*pos));
                }
                Ok(())
            }
            Action::Move(mv) => {
                let owner = state
                    .board
                    .get(mv.from)
                    .owner()
                    .ok_or(RulesError::NoPiece(mv.from))?;
                if owner != state.to_move {
                    return Err(RulesError::NotYourTurn(owner));
                }
                if owner == Player::Goat && state.phase == Phase::Placing {
                    return Err(RulesError::WrongPhase(Phase::Placing));
                }
                validate_move(&state.board, mv, self.config.capture_rule)
            }
        }
    }

    /// Validate and apply an action.
    ///
    /// On success the state advances (board, counters, phase, turn, history)
    /// and the new outcome is returned. On error the state is untouched.
    ///
    /// # Errors
    ///
    /// See [`RulesEngine::validate_action`].
    #[instrument(level = "debug", skip(self, state), fields(player = %state.to_move, ply = state.ply()))]
    pub fn apply_action(
        &self,
        state: &mut GameState,
        action: Action,
    ) -> Result<Option<Player>, RulesError> {
        self.validate_action(state, &action)?;

        let player = state.to_move;
        match action {
            Action::Place(pos) => {
                state.board.set(pos, Piece::Goat);
                state.placed_goats += 1;
                if state.placed_goats >= self.config.total_goats {
                    state.phase = Phase::Moving;
                    debug!(placed = state.placed_goats, "all goats placed, moving phase");
                }
            }
            Action::Move(mv) => {
                state.board = execute_move(&state.board, &mv);
                if mv.is_capture() {
                    state.captured_goats += 1;
                    debug!(captured = state.captured_goats, over = ?mv.capture, "goat captured");
                }
            }
        }

        let ply = state.ply();
        state
            .history
            .push_back(MoveRecord::new(player, action, ply));
        state.to_move = player.opponent();

        state.winner = self.evaluate(state);
        if let Some(winner) = state.winner {
            debug!(%winner, ply, "game over");
        }

        Ok(state.winner)
    }

    /// Place a goat. Shorthand for `apply_action(state, Action::Place(..))`.
    ///
    /// # Errors
    ///
    /// See [`RulesEngine::validate_action`].
    pub fn place_goat(
        &self,
        state: &mut GameState,
        position: Position,
    ) -> Result<Option<Player>, RulesError> {
        self.apply_action(state, Action::Place(position))
    }

    /// Move the piece on `from` to `to`, jumping if `to` is a capture
    /// landing.
    ///
    /// This is what a board UI calls after the player picks a piece and then
    /// a destination: the caller need not know whether the destination is a
    /// step or a jump.
    ///
    /// # Errors
    ///
    /// See [`RulesEngine::validate_action`].
    pub fn move_piece(
        &self,
        state: &mut GameState,
        from: Position,
        to: Position,
    ) -> Result<Option<Player>, RulesError> {
        let mv = self
            .legal_moves(from, &state.board)
            .into_iter()
            .find(|m| m.to == to)
            .unwrap_or(Move::step(from, to));
        self.apply_action(state, Action::Move(mv))
    }

    // === Outcome ===

    /// Evaluate the position from scratch.
    #[must_use]
    pub fn evaluate(&self, state: &GameState) -> Option<Player> {
        evaluate_outcome_with(
            &state.board,
            state.captured_goats,
            self.config.goats_to_win,
            self.config.capture_rule,
        )
    }

    /// Winner if the game has ended.
    ///
    /// Uses the recorded winner when there is one, otherwise evaluates, so
    /// states built with [`GameState::from_parts`] are judged correctly.
    #[must_use]
    pub fn is_terminal(&self, state: &GameState) -> Option<Player> {
        state.winner.or_else(|| self.evaluate(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CaptureRule, TOTAL_GOATS};

    fn p(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_opening_actions_are_placements() {
        let engine = RulesEngine::default();
        let state = engine.new_game();

        let actions = engine.legal_actions(&state);
        assert_eq!(actions.len(), 21);
        assert!(actions.iter().all(|a| matches!(a, Action::Place(_))));
    }

    #[test]
    fn test_turn_alternates() {
        let engine = RulesEngine::default();
        let mut state = engine.new_game();

        engine.place_goat(&mut state, p(2, 2)).unwrap();
        assert_eq!(state.to_move(), Player::Tiger);

        engine.move_piece(&mut state, p(0, 0), p(0, 1)).unwrap();
        assert_eq!(state.to_move(), Player::Goat);
        assert_eq!(state.ply(), 2);
    }

    #[test]
    fn test_tiger_moves_during_placing() {
        let engine = RulesEngine::default();
        let mut state = engine.new_game();
        engine.place_goat(&mut state, p(2, 2)).unwrap();

        let actions = engine.legal_actions(&state);
        assert!(!actions.is_empty());
        assert!(actions.iter().all(|a| matches!(a, Action::Move(_))));
        assert_eq!(state.phase(), Phase::Placing);
    }

    #[test]
    fn test_goat_cannot_move_while_placing() {
        let engine = RulesEngine::default();
        let mut state = engine.new_game();
        engine.place_goat(&mut state, p(2, 2)).unwrap();
        engine.move_piece(&mut state, p(0, 0), p(0, 1)).unwrap();

        let before = state.clone();
        let result = engine.move_piece(&mut state, p(2, 2), p(2, 3));
        assert_eq!(result, Err(RulesError::WrongPhase(Phase::Placing)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_wrong_player_refused() {
        let engine = RulesEngine::default();
        let mut state = engine.new_game();

        let result = engine.move_piece(&mut state, p(0, 0), p(0, 1));
        assert_eq!(result, Err(RulesError::NotYourTurn(Player::Tiger)));

        engine.place_goat(&mut state, p(2, 2)).unwrap();
        let result = engine.place_goat(&mut state, p(3, 3));
        assert_eq!(result, Err(RulesError::NotYourTurn(Player::Goat)));
    }

    #[test]
    fn test_occupied_placement_refused() {
        let engine = RulesEngine::default();
        let mut state = engine.new_game();
        let before = state.clone();

        assert_eq!(
            engine.place_goat(&mut state, p(0, 0)),
            Err(RulesError::Occupied(p(0, 0)))
        );
        assert_eq!(state, before);
        assert_eq!(state.placed_goats(), 0);
    }

    #[test]
    fn test_move_piece_resolves_capture() {
        let engine = RulesEngine::default();
        let board: Board = "T...T/.G.../...../...../T...T".parse().unwrap();
        let mut state = GameState::from_parts(board, Player::Tiger, Phase::Moving, 20, 0);

        engine.move_piece(&mut state, p(0, 0), p(2, 2)).unwrap();

        assert_eq!(state.board().get(p(2, 2)), Piece::Tiger);
        assert!(state.board().is_empty(p(0, 0)));
        assert!(state.board().is_empty(p(1, 1)));
        assert_eq!(state.captured_goats(), 1);
        assert_eq!(
            state.last_move().map(|r| r.action),
            Some(Action::Move(Move::jump(p(0, 0), p(1, 1), p(2, 2))))
        );
    }

    #[test]
    fn test_phase_switch_after_last_goat() {
        let engine = RulesEngine::new(RulesConfig::default().with_total_goats(2));
        let mut state = engine.new_game();

        engine.place_goat(&mut state, p(2, 2)).unwrap();
        assert_eq!(state.phase(), Phase::Placing);
        engine.move_piece(&mut state, p(0, 0), p(0, 1)).unwrap();
        engine.place_goat(&mut state, p(3, 2)).unwrap();
        assert_eq!(state.phase(), Phase::Moving);

        engine.move_piece(&mut state, p(0, 1), p(0, 0)).unwrap();
        assert_eq!(
            engine.place_goat(&mut state, p(1, 2)),
            Err(RulesError::WrongPhase(Phase::Moving))
        );
        engine.move_piece(&mut state, p(3, 2), p(3, 1)).unwrap();
        assert_eq!(state.phase(), Phase::Moving);
    }

    #[test]
    fn test_game_over_refuses_actions() {
        let engine = RulesEngine::default();
        let board: Board = "TG..T/...../...../...../T...T".parse().unwrap();
        let mut state = GameState::from_parts(board, Player::Tiger, Phase::Moving, 20, 4);

        let result = engine.move_piece(&mut state, p(0, 0), p(0, 2)).unwrap();
        assert_eq!(result, Some(Player::Tiger));
        assert!(state.is_over());
        assert!(engine.legal_actions(&state).is_empty());

        let before = state.clone();
        assert_eq!(
            engine.move_piece(&mut state, p(0, 4), p(1, 4)),
            Err(RulesError::GameOver)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_capture_rule_from_config() {
        let engine = RulesEngine::new(
            RulesConfig::default().with_capture_rule(CaptureRule::NoMainDiagonal),
        );
        let board: Board = "T...T/.G.../...../...../T...T".parse().unwrap();
        let mut state = GameState::from_parts(board, Player::Tiger, Phase::Moving, 20, 0);

        assert!(engine.capture_moves(p(0, 0), state.board()).is_empty());
        assert!(matches!(
            engine.apply_action(
                &mut state,
                Action::Move(Move::jump(p(0, 0), p(1, 1), p(2, 2)))
            ),
            Err(RulesError::IllegalCapture { .. })
        ));
        assert_eq!(state.captured_goats(), 0);
    }

    #[test]
    fn test_is_terminal_on_built_state() {
        let engine = RulesEngine::default();
        let board: Board = "TGGGT/GG.GG/GGGGG/GGGGG/TGGGT".parse().unwrap();
        let state = GameState::from_parts(board, Player::Tiger, Phase::Moving, 20, 0);

        assert_eq!(state.winner(), None);
        assert_eq!(engine.is_terminal(&state), Some(Player::Goat));
    }

    #[test]
    fn test_decided_position_refuses_actions() {
        let engine = RulesEngine::default();
        let board: Board = "TG..T/...../...../...../T...T".parse().unwrap();
        let mut state = GameState::from_parts(board, Player::Tiger, Phase::Moving, 20, 5);
        let before = state.clone();

        assert!(engine.legal_actions(&state).is_empty());
        assert_eq!(
            engine.move_piece(&mut state, p(0, 0), p(0, 2)),
            Err(RulesError::GameOver)
        );
        assert_eq!(state, before);
        assert_eq!(state.captured_goats(), 5);
    }

    #[test]
    fn test_blocked_tigers_refuse_actions() {
        let engine = RulesEngine::default();
        let board: Board = "TGGGT/GG.GG/GGGGG/GGGGG/TGGGT".parse().unwrap();
        let mut state = GameState::from_parts(board, Player::Goat, Phase::Moving, 20, 0);

        assert!(engine.legal_actions(&state).is_empty());
        assert_eq!(
            engine.move_piece(&mut state, p(1, 1), p(1, 2)),
            Err(RulesError::GameOver)
        );
    }

    #[test]
    fn test_full_placement_phase() {
        let engine = RulesEngine::default();
        let mut state = engine.new_game();
        let mut rng = crate::core::GameRng::new(0);

        // Steps are preferred over captures. Seed 0 plays through the whole
        // placing phase.
        while state.phase() == Phase::Placing {
            let actions = engine.legal_actions(&state);
            let quiet: Vec<Action> = actions.iter().copied().filter(|a| !a.is_capture()).collect();
            let pool = if quiet.is_empty() { &actions } else { &quiet };
            let action = *rng.choose(pool).unwrap();
            engine.apply_action(&mut state, action).unwrap();
        }

        assert!(!state.is_over());
        assert_eq!(state.placed_goats(), TOTAL_GOATS);
        assert_eq!(state.phase(), Phase::Moving);
        assert_eq!(state.to_move(), Player::Tiger);
    }
}
