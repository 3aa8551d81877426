//! Pure board transforms.
//!
//! These functions take a board and return a new one. An illegal request is
//! a no-op: the input board comes back unchanged. Callers that need to know
//! why a request was refused use [`validate_move`].

use crate::core::{Board, CaptureRule, Move, Piece, Position};
use crate::error::RulesError;
use crate::topology::is_adjacent;

use super::movegen::capture_allowed;

/// Put a goat on `position`.
///
/// Returns the board unchanged if the intersection is occupied. Phase and
/// goat supply are the caller's concern.
///
/// ```
/// use baghchal::core::{Board, Piece, Position};
/// use baghchal::rules::apply_placement;
///
/// let board = Board::initial();
/// let next = apply_placement(&board, Position::new(2, 2));
/// assert_eq!(next.get(Position::new(2, 2)), Piece::Goat);
///
/// // Placing on a tiger does nothing.
/// assert_eq!(apply_placement(&board, Position::new(0, 0)), board);
/// ```
#[must_use]
pub fn apply_placement(board: &Board, position: Position) -> Board {
    if board.is_empty(position) {
        board.with(position, Piece::Goat)
    } else {
        *board
    }
}

/// Play `mv` on `board`.
///
/// The piece on `mv.from` moves to `mv.to`, and for a capture the goat on
/// `mv.capture` is removed. Returns the board unchanged if the move is not
/// geometrically legal (see [`validate_move`] with
/// [`CaptureRule::AnyLine`]). Whose turn it is is not checked.
#[must_use]
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    match validate_move(board, mv, CaptureRule::AnyLine) {
        Ok(()) => execute_move(board, mv),
        Err(_) => *board,
    }
}

/// Check that `mv` is a legal step or jump on `board` under `rule`.
///
/// # Errors
///
/// - [`RulesError::NoPiece`] if `mv.from` is empty
/// - [`RulesError::Occupied`] if `mv.to` is not empty
/// - [`RulesError::IllegalMove`] if a simple move does not follow a line
/// - [`RulesError::IllegalCapture`] if a jump is made by a goat, or does not
///   pass over a goat along one straight line
pub fn validate_move(board: &Board, mv: &Move, rule: CaptureRule) -> Result<(), RulesError> {
    let piece = board.get(mv.from);
    if piece.is_empty() {
        return Err(RulesError::NoPiece(mv.from));
    }
    if !board.is_empty(mv.to) {
        return Err(RulesError::Occupied(mv.to));
    }

    match mv.capture {
        None => {
            if is_adjacent(mv.from, mv.to) {
                Ok(())
            } else {
                Err(RulesError::IllegalMove {
                    from: mv.from,
                    to: mv.to,
                })
            }
        }
        Some(over) => {
            if piece == Piece::Tiger && capture_allowed(board, mv.from, over, mv.to, rule) {
                Ok(())
            } else {
                Err(RulesError::IllegalCapture {
                    from: mv.from,
                    over,
                    to: mv.to,
                })
            }
        }
    }
}

/// Move without validation.
pub(crate) fn execute_move(board: &Board, mv: &Move) -> Board {
    let mut next = *board;
    let piece = next.get(mv.from);
    next.set(mv.to, piece);
    next.set(mv.from, Piece::Empty);
    if let Some(over) = mv.capture {
        next.set(over, Piece::Empty);
    }
    next
}
