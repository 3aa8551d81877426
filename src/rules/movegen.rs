//! Move generation: simple steps and tiger jump-captures.
//!
//! A jump from `P` over a goat on `G` lands on `L = P + 2·(G − P)`. It is
//! legal when `L` is on the board and empty, and both legs `P→G` and `G→L`
//! follow printed lines. Checking the second leg against the topology (and
//! not just the arithmetic) is what keeps a jump on one straight line.

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Board, Capture, CaptureRule, Move, Piece, Position};
use crate::topology::{is_adjacent, is_main_diagonal_jump, neighbors, MAX_NEIGHBORS};

/// Destinations of simple moves from one intersection.
pub type Destinations = SmallVec<[Position; MAX_NEIGHBORS]>;

/// Jump-captures from one intersection.
pub type Captures = SmallVec<[Capture; MAX_NEIGHBORS]>;

/// Every move of one piece.
pub type Moves = SmallVec<[Move; 16]>;

/// Empty neighbours of `position`.
///
/// The piece on `position` (if any) is not consulted, so this also answers
/// "where could something standing here step to".
#[must_use]
pub fn legal_destinations(position: Position, board: &Board) -> Destinations {
    neighbors(position)
        .iter()
        .copied()
        .filter(|&q| board.is_empty(q))
        .collect()
}

/// Jump-captures for a tiger on `tiger_position`, using the permissive
/// [`CaptureRule::AnyLine`] geometry.
///
/// Returns an empty set when the position does not hold a tiger.
#[must_use]
pub fn capture_moves(tiger_position: Position, board: &Board) -> Captures {
    capture_moves_with(tiger_position, board, CaptureRule::AnyLine)
}

/// Jump-captures for a tiger on `tiger_position` under `rule`.
#[must_use]
pub fn capture_moves_with(tiger_position: Position, board: &Board, rule: CaptureRule) -> Captures {
    let mut captures = Captures::new();

    if board.get(tiger_position) != Piece::Tiger {
        return captures;
    }

    for &over in neighbors(tiger_position) {
        if board.get(over) != Piece::Goat {
            continue;
        }
        if let Some(to) = landing(tiger_position, over) {
            if capture_allowed(board, tiger_position, over, to, rule) {
                captures.push(Capture { to, capture: over });
            }
        }
    }

    if !captures.is_empty() {
        trace!(from = %tiger_position, count = captures.len(), "captures available");
    }
    captures
}

/// Simple moves and captures for the piece on `position`.
///
/// Empty if the intersection is empty. Goats only ever get simple moves.
#[must_use]
pub fn legal_moves(position: Position, board: &Board) -> Moves {
    legal_moves_with(position, board, CaptureRule::AnyLine)
}

/// [`legal_moves`] under a specific capture rule.
#[must_use]
pub fn legal_moves_with(position: Position, board: &Board, rule: CaptureRule) -> Moves {
    if board.is_empty(position) {
        return Moves::new();
    }

    let mut moves: Moves = legal_destinations(position, board)
        .into_iter()
        .map(|to| Move::step(position, to))
        .collect();

    moves.extend(
        capture_moves_with(position, board, rule)
            .into_iter()
            .map(|c| Move::from_capture(position, c)),
    );

    moves
}

/// True if the piece on `position` has at least one move.
///
/// Cheaper than building the move list; used by outcome evaluation.
#[must_use]
pub fn can_move(position: Position, board: &Board, rule: CaptureRule) -> bool {
    if neighbors(position).iter().any(|&q| board.is_empty(q)) {
        return true;
    }
    !capture_moves_with(position, board, rule).is_empty()
}

/// Reflection of `from` through `over`, if it is on the board.
#[must_use]
pub fn landing(from: Position, over: Position) -> Option<Position> {
    let (dr, dc) = from.delta(over);
    over.offset(dr, dc)
}

/// Geometry and occupancy check for one jump. Does not look at the piece on
/// `from`.
pub(crate) fn capture_allowed(
    board: &Board,
    from: Position,
    over: Position,
    to: Position,
    rule: CaptureRule,
) -> bool {
    if board.get(over) != Piece::Goat || !board.is_empty(to) {
        return false;
    }
    if landing(from, over) != Some(to) {
        return false;
    }
    if !is_adjacent(from, over) || !is_adjacent(over, to) {
        return false;
    }
    match rule {
        CaptureRule::AnyLine => true,
        CaptureRule::NoMainDiagonal => !is_main_diagonal_jump(from, over, to),
    }
}
