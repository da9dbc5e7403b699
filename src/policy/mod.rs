//! Decision policies for the automated opponent.
//!
//! A policy only answers one question: given the computer's scores right
//! now, roll again or hold? Driving the engine with that answer belongs to
//! the [`ModeController`](crate::control::ModeController), which re-asks
//! after every roll because a double can wipe the unbanked score mid-turn.

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, Player};

/// What the automated opponent wants to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Roll the dice again.
    Roll,
    /// Bank the unbanked points and end the turn.
    Hold,
}

/// A turn decision function for the automated opponent.
///
/// Implementations see only the computer's own player state and the game
/// configuration; they cannot touch the engine. `&mut self` allows
/// stateful or RNG-backed policies.
pub trait OpponentPolicy {
    /// Decide the next move from live state.
    fn decide(&mut self, player: &Player, config: &GameConfig) -> Decision;
}

/// Hold-at-target heuristic, the classic pig strategy.
///
/// Rolls while the unbanked score is below `target` and banking would not
/// already win; holds otherwise. With the default target of 20 the computer
/// banks roughly every third or fourth roll. Deterministic: the same state
/// always produces the same decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdPolicy {
    /// Unbanked score at which the policy banks.
    pub target: u32,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self { target: 20 }
    }
}

impl ThresholdPolicy {
    /// Create a policy that banks once the unbanked score reaches `target`.
    ///
    /// # Panics
    ///
    /// Panics if `target` is 0; the policy would hold with nothing banked
    /// and never roll.
    #[must_use]
    pub fn new(target: u32) -> Self {
        assert!(target > 0, "Hold target must be positive");
        Self { target }
    }
}

impl OpponentPolicy for ThresholdPolicy {
    fn decide(&mut self, player: &Player, config: &GameConfig) -> Decision {
        let reach = player.total_score() + player.current_score();

        // Bank immediately once the reach crosses the threshold.
        if config.is_win(reach) {
            return Decision::Hold;
        }
        if player.current_score() < self.target {
            Decision::Roll
        } else {
            Decision::Hold
        }
    }
}
