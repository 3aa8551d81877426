//! Rules integration tests: capture geometry, the placing/moving state
//! machine, and win detection.

use baghchal::core::{
    Action, Board, CaptureRule, GameRng, GameState, Move, Phase, Piece, Player, Position,
    RulesConfig, TOTAL_GOATS,
};
use baghchal::error::RulesError;
use baghchal::rules::{
    apply_move, apply_placement, capture_moves, capture_moves_with, evaluate_outcome,
    legal_destinations, RulesEngine,
};

fn p(row: u8, col: u8) -> Position {
    Position::new(row, col)
}

fn board(text: &str) -> Board {
    text.parse().unwrap()
}

fn landings(from: Position, b: &Board, rule: CaptureRule) -> Vec<Position> {
    let mut to: Vec<Position> = capture_moves_with(from, b, rule)
        .iter()
        .map(|c| c.to)
        .collect();
    to.sort();
    to
}

// =============================================================================
// Capture Geometry
// =============================================================================

/// A tiger in the centre ringed by goats can jump in all eight directions.
#[test]
fn test_center_tiger_jumps_every_line() {
    let b = board("...../.GGG./.GTG./.GGG./.....");

    assert_eq!(
        landings(p(2, 2), &b, CaptureRule::AnyLine),
        vec![
            p(0, 0),
            p(0, 2),
            p(0, 4),
            p(2, 0),
            p(2, 4),
            p(4, 0),
            p(4, 2),
            p(4, 4),
        ]
    );
}

/// The restrictive rule drops only the jumps along the long diagonals.
#[test]
fn test_restrictive_rule_drops_main_diagonals() {
    let b = board("...../.GGG./.GTG./.GGG./.....");

    assert_eq!(
        landings(p(2, 2), &b, CaptureRule::NoMainDiagonal),
        vec![p(0, 2), p(2, 0), p(2, 4), p(4, 2)]
    );
}

/// From a point without diagonals only orthogonal jumps exist, even with a
/// goat diagonally next to it.
#[test]
fn test_orthogonal_only_point() {
    let b = board("...../.GTG./.GG../...../.....");

    assert_eq!(
        landings(p(1, 2), &b, CaptureRule::AnyLine),
        vec![p(1, 0), p(1, 4), p(3, 2)]
    );
}

#[test]
fn test_capture_blocked_by_any_piece() {
    let b = board("TGT../...../...../...../.....");
    assert!(capture_moves(p(0, 0), &b).is_empty());

    let b = board("TGG../...../...../...../.....");
    assert!(capture_moves(p(0, 0), &b).is_empty());
}

#[test]
fn test_tigers_are_not_captured() {
    let b = board("TT.../...../...../...../.....");
    assert!(capture_moves(p(0, 0), &b).is_empty());
}

#[test]
fn test_capture_removes_exactly_one_goat() {
    let b = board("T...T/.G.../...../...../T...T");
    let next = apply_move(&b, &Move::jump(p(0, 0), p(1, 1), p(2, 2)));

    assert_eq!(next.count(Piece::Goat), b.count(Piece::Goat) - 1);
    assert_eq!(next.count(Piece::Tiger), 4);
    assert_eq!(next.get(p(2, 2)), Piece::Tiger);
}

// =============================================================================
// Pure Transforms
// =============================================================================

#[test]
fn test_illegal_transforms_leave_board_unchanged() {
    let b = Board::initial();

    assert_eq!(apply_placement(&b, p(0, 4)), b);
    assert_eq!(apply_move(&b, &Move::step(p(0, 0), p(0, 2))), b);
    assert_eq!(apply_move(&b, &Move::step(p(1, 2), p(1, 3))), b);
}

#[test]
fn test_destinations_ignore_occupant() {
    let b = board("T...T/...../..G../...../T...T");

    assert_eq!(legal_destinations(p(2, 2), &b).len(), 8);
    assert_eq!(legal_destinations(p(1, 1), &b).len(), 6);
}

// =============================================================================
// State Machine
// =============================================================================

/// Plays seeded random non-capturing actions until the goat supply is used.
fn play_placement(engine: &RulesEngine, seed: u64) -> GameState {
    let mut state = engine.new_game();
    let mut rng = GameRng::new(seed);

    while state.phase() == Phase::Placing && !state.is_over() {
        let actions = engine.legal_actions(&state);
        let quiet: Vec<Action> = actions.iter().copied().filter(|a| !a.is_capture()).collect();
        let pool = if quiet.is_empty() { &actions } else { &quiet };
        let Some(&action) = rng.choose(pool) else {
            break;
        };

        let placed_before = state.placed_goats();
        engine.apply_action(&mut state, action).unwrap();
        assert!(state.placed_goats() >= placed_before);
        assert!(state.placed_goats() <= TOTAL_GOATS);
    }
    state
}

#[test]
fn test_twenty_placements_switch_to_moving() {
    let engine = RulesEngine::default();

    for seed in 0..8 {
        let state = play_placement(&engine, seed);
        assert!(!state.is_over(), "seed {} ended during placing", seed);
        assert_eq!(state.placed_goats(), TOTAL_GOATS);
        assert_eq!(state.phase(), Phase::Moving);
        assert_eq!(state.to_move(), Player::Tiger);
    }
}

#[test]
fn test_moving_phase_is_permanent() {
    let engine = RulesEngine::default();
    let mut state = play_placement(&engine, 11);
    let mut rng = GameRng::new(11);

    for _ in 0..60 {
        if state.is_over() {
            break;
        }
        let actions = engine.legal_actions(&state);
        let Some(&action) = rng.choose(&actions) else {
            break;
        };
        engine.apply_action(&mut state, action).unwrap();
        assert_eq!(state.phase(), Phase::Moving);
        assert_eq!(state.placed_goats(), TOTAL_GOATS);
    }
}

#[test]
fn test_goats_move_once_placing_is_over() {
    let engine = RulesEngine::default();
    let b = board("T...T/...../..G../...../T...T");
    let mut state = GameState::from_parts(b, Player::Goat, Phase::Moving, 20, 0);

    assert!(engine
        .legal_actions(&state)
        .iter()
        .all(|a| matches!(a, Action::Move(m) if m.from == p(2, 2))));

    engine.move_piece(&mut state, p(2, 2), p(1, 1)).unwrap();
    assert_eq!(state.board().get(p(1, 1)), Piece::Goat);
    assert_eq!(state.to_move(), Player::Tiger);
}

#[test]
fn test_goat_cannot_jump() {
    let engine = RulesEngine::default();
    let b = board("GT.../...../...../...../T...T");
    let mut state = GameState::from_parts(b, Player::Goat, Phase::Moving, 20, 0);
    let before = state.clone();

    let result = engine.apply_action(&mut state, Action::Move(Move::jump(p(0, 0), p(0, 1), p(0, 2))));
    assert!(matches!(result, Err(RulesError::IllegalCapture { .. })));
    assert_eq!(state, before);
}

#[test]
fn test_placement_refused_when_occupied() {
    let engine = RulesEngine::default();
    let mut state = engine.new_game();
    engine.place_goat(&mut state, p(2, 2)).unwrap();
    engine.move_piece(&mut state, p(0, 0), p(1, 1)).unwrap();

    let before = state.clone();
    assert_eq!(
        engine.place_goat(&mut state, p(1, 1)),
        Err(RulesError::Occupied(p(1, 1)))
    );
    assert_eq!(state, before);
}

#[test]
fn test_history_records_every_action() {
    let engine = RulesEngine::default();
    let mut state = engine.new_game();

    engine.place_goat(&mut state, p(2, 2)).unwrap();
    engine.move_piece(&mut state, p(4, 4), p(3, 3)).unwrap();

    let history: Vec<_> = state.history().iter().copied().collect();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].player, Player::Goat);
    assert_eq!(history[0].action, Action::Place(p(2, 2)));
    assert_eq!(history[1].player, Player::Tiger);
    assert_eq!(history[1].ply, 1);
}

// =============================================================================
// Outcome
// =============================================================================

#[test]
fn test_fifth_capture_wins_for_tiger() {
    let engine = RulesEngine::default();
    let b = board("T...T/.G.../...../...../T...T");
    let mut state = GameState::from_parts(b, Player::Tiger, Phase::Moving, 20, 4);

    assert_eq!(engine.move_piece(&mut state, p(0, 0), p(2, 2)), Ok(Some(Player::Tiger)));
    assert_eq!(state.winner(), Some(Player::Tiger));
    assert_eq!(state.captured_goats(), 5);
}

/// Five captures win even on a board where no tiger could move.
#[test]
fn test_capture_threshold_ignores_mobility() {
    let b = board("TGGGT/GG.GG/GGGGG/GGGGG/TGGGT");
    assert_eq!(evaluate_outcome(&b, 5), Some(Player::Tiger));
    assert_eq!(evaluate_outcome(&b, 4), Some(Player::Goat));
}

/// The goat move that closes the last gap wins, four captures or not.
#[test]
fn test_blocking_move_wins_for_goat() {
    let engine = RulesEngine::default();
    let b = board("TGGGT/GGGGG/GG.GG/GGGGG/TGGGT");
    let mut state = GameState::from_parts(b, Player::Goat, Phase::Moving, 20, 4);

    assert_eq!(engine.is_terminal(&state), None);
    assert_eq!(engine.move_piece(&mut state, p(1, 2), p(2, 2)), Ok(Some(Player::Goat)));
    assert!(engine.legal_actions(&state).is_empty());
}

#[test]
fn test_custom_config_threshold() {
    let engine = RulesEngine::new(RulesConfig::default().with_goats_to_win(1));
    let b = board("TG..T/...../...../...../T...T");
    let mut state = GameState::from_parts(b, Player::Tiger, Phase::Moving, 20, 0);

    assert_eq!(engine.move_piece(&mut state, p(0, 0), p(0, 2)), Ok(Some(Player::Tiger)));
}

/// A snapshot that is already decided is over, whether or not it was
/// reached by play.
#[test]
fn test_decided_snapshot_refuses_actions() {
    let engine = RulesEngine::default();
    let b = board("TG..T/...../...../...../T...T");
    let mut state = GameState::from_parts(b, Player::Tiger, Phase::Moving, 20, 7);

    assert_eq!(engine.is_terminal(&state), Some(Player::Tiger));
    assert!(engine.legal_actions(&state).is_empty());
    assert_eq!(
        engine.move_piece(&mut state, p(0, 0), p(0, 2)),
        Err(RulesError::GameOver)
    );
    assert_eq!(state.captured_goats(), 7);
    assert_eq!(state.board().get(p(0, 1)), Piece::Goat);
}
