//! Game configuration and mode selection.
//!
//! The win threshold is configuration, not a magic number scattered through
//! the rules: the engine consults [`GameConfig::is_win`] after every hold.
//! Dice count and sides are carried here too; the rule set supports exactly
//! two six-sided dice and the constructor enforces that.

use serde::{Deserialize, Serialize};

/// Who sits in the second seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans alternating at the same input.
    #[default]
    HumanVsHuman,
    /// Seat 1 is driven by an opponent policy.
    HumanVsComputer,
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use pig_dice::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_win_threshold(50)
///     .with_player_names("Ron", "Dani");
///
/// assert!(config.is_win(50));
/// assert!(!config.is_win(49));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Banked total that ends the game.
    pub win_threshold: u32,

    /// Dice rolled per turn action. Fixed at 2.
    pub dice_count: u8,

    /// Faces per die. Fixed at 6.
    pub dice_sides: u8,

    /// Display names for seats 0 and 1.
    pub player_names: [String; 2],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            win_threshold: 100,
            dice_count: 2,
            dice_sides: 6,
            player_names: ["Player 1".to_string(), "Player 2".to_string()],
        }
    }
}

impl GameConfig {
    /// Create a configuration with the defaults (threshold 100, two
    /// six-sided dice).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the winning threshold.
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is 0; the game would be over before it began.
    #[must_use]
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        assert!(threshold > 0, "Win threshold must be positive");
        self.win_threshold = threshold;
        self
    }

    /// Set both players' display names.
    #[must_use]
    pub fn with_player_names(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
    ) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    /// Check whether a banked total wins the game.
    #[must_use]
    pub fn is_win(&self, total: u32) -> bool {
        total >= self.win_threshold
    }

    /// Validate the fixed parts of the configuration.
    ///
    /// Called by the engine at construction. Kept separate from the
    /// builders so a deserialized config gets the same checks.
    ///
    /// # Panics
    ///
    /// Panics on unsupported dice parameters or a zero threshold.
    pub fn validate(&self) {
        assert!(self.win_threshold > 0, "Win threshold must be positive");
        assert!(self.dice_count == 2, "Exactly two dice are supported");
        assert!(self.dice_sides == 6, "Exactly six-sided dice are supported");
    }
}
