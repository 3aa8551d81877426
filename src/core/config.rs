//! Rules configuration.
//!
//! `RulesConfig` fixes the numbers the game is played with and selects the
//! capture geometry. The defaults are the standard game: 20 goats, tigers
//! win at 5 captures, jumps allowed along every printed line.

use serde::{Deserialize, Serialize};

use super::position::CELL_COUNT;
use crate::error::RulesError;

/// Goats available to the goat player.
pub const TOTAL_GOATS: u8 = 20;

/// Captures that win the game for the tigers.
pub const GOATS_TO_WIN: u8 = 5;

/// Which straight lines a tiger may jump along.
///
/// Two variants of the rules circulate. The permissive one lets a tiger
/// jump along any printed line; the other forbids jumps along the two long
/// corner-to-corner diagonals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureRule {
    /// Any jump whose both legs follow board lines.
    #[default]
    AnyLine,
    /// As `AnyLine`, but no jumps along the main diagonals.
    NoMainDiagonal,
}

/// Rules configuration.
///
/// Deserialized configs go through [`RulesConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRulesConfig")]
pub struct RulesConfig {
    /// Goats placed before the game switches to the moving phase.
    pub total_goats: u8,

    /// Captured goats needed for a tiger win.
    pub goats_to_win: u8,

    /// Capture geometry variant.
    pub capture_rule: CaptureRule,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            total_goats: TOTAL_GOATS,
            goats_to_win: GOATS_TO_WIN,
            capture_rule: CaptureRule::AnyLine,
        }
    }
}

impl RulesConfig {
    /// Check the goat total fits the empty cells and the win threshold is
    /// positive.
    ///
    /// # Errors
    ///
    /// [`RulesError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), RulesError> {
        let free_cells = (CELL_COUNT - 4) as u8;
        if self.total_goats == 0 || self.total_goats > free_cells {
            return Err(RulesError::InvalidConfig(format!(
                "total_goats must be 1-{}, got {}",
                free_cells, self.total_goats
            )));
        }
        if self.goats_to_win == 0 {
            return Err(RulesError::InvalidConfig(
                "goats_to_win must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Use a different capture variant.
    pub fn with_capture_rule(mut self, rule: CaptureRule) -> Self {
        self.capture_rule = rule;
        self
    }

    /// Use a different goat total.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero or more than the 21 empty cells left by the
    /// four tigers.
    pub fn with_total_goats(mut self, count: u8) -> Self {
        assert!((1..=21).contains(&count), "Goat total must be 1-21");
        self.total_goats = count;
        self
    }

    /// Use a different win threshold.
    ///
    /// # Panics
    ///
    /// Panics if `count` is zero.
    pub fn with_goats_to_win(mut self, count: u8) -> Self {
        assert!(count > 0, "Win threshold must be positive");
        self.goats_to_win = count;
        self
    }
}

/// Unchecked wire form of a [`RulesConfig`].
#[derive(Deserialize)]
struct RawRulesConfig {
    total_goats: u8,
    goats_to_win: u8,
    capture_rule: CaptureRule,
}

impl TryFrom<RawRulesConfig> for RulesConfig {
    type Error = RulesError;

    fn try_from(raw: RawRulesConfig) -> Result<Self, Self::Error> {
        let config = Self {
            total_goats: raw.total_goats,
            goats_to_win: raw.goats_to_win,
            capture_rule: raw.capture_rule,
        };
        config.validate()?;
        Ok(config)
    }
}
