//! Win evaluation.
//!
//! Tigers win on reaching the capture threshold. Goats win when no tiger
//! can make any move. There is no draw.

use crate::core::{Board, CaptureRule, Piece, Player, GOATS_TO_WIN};

use super::movegen::can_move;

/// Winner of the position, or `None` while the game continues.
///
/// Uses the standard threshold of five captures and the permissive capture
/// geometry.
///
/// ```
/// use baghchal::core::{Board, Player};
/// use baghchal::rules::evaluate_outcome;
///
/// assert_eq!(evaluate_outcome(&Board::initial(), 0), None);
/// assert_eq!(evaluate_outcome(&Board::initial(), 5), Some(Player::Tiger));
/// ```
#[must_use]
pub fn evaluate_outcome(board: &Board, captured_goats: u8) -> Option<Player> {
    evaluate_outcome_with(board, captured_goats, GOATS_TO_WIN, CaptureRule::AnyLine)
}

/// [`evaluate_outcome`] with an explicit threshold and capture rule.
///
/// The capture count is checked first; the tiger scan only runs if the
/// tigers have not already won.
#[must_use]
pub fn evaluate_outcome_with(
    board: &Board,
    captured_goats: u8,
    goats_to_win: u8,
    rule: CaptureRule,
) -> Option<Player> {
    if captured_goats >= goats_to_win {
        return Some(Player::Tiger);
    }

    let tiger_can_move = board
        .positions_of(Piece::Tiger)
        .any(|tiger| can_move(tiger, board, rule));

    if tiger_can_move {
        None
    } else {
        Some(Player::Goat)
    }
}
