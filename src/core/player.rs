//! Player identification and per-player score state.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for a two-player game.
//!
//! ## Player
//!
//! Per-player scores: the banked `total_score` and the unbanked
//! `current_score` accumulated during the running turn. Both are unsigned,
//! so scores can never go negative; `total_score` only grows, and only
//! through [`Player::bank`].

use serde::{Deserialize, Serialize};

/// Seat identifier for a two-player game.
///
/// Seats are 0-based: the first player is `PlayerId::new(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not 0 or 1.
    #[must_use]
    pub fn new(id: u8) -> Self {
        assert!(id < 2, "Seat must be 0 or 1");
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the other seat.
    ///
    /// ```
    /// use pig_dice::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).opponent(), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).opponent(), PlayerId::new(0));
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - self.0)
    }

    /// Iterate over both seats in order.
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..2u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player's score state.
///
/// `current_score` holds the points accumulated during the running turn;
/// they are either moved into `total_score` by [`bank`](Player::bank) or
/// forfeited by [`forfeit_turn`](Player::forfeit_turn) when a double is
/// rolled. Mutation goes through these methods so the invariants hold by
/// construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    total_score: u32,
    current_score: u32,
}

impl Player {
    /// Create a player with zeroed scores.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            current_score: 0,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Banked points.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Unbanked points accumulated this turn.
    #[must_use]
    pub fn current_score(&self) -> u32 {
        self.current_score
    }

    /// Add rolled points to the unbanked score.
    pub fn add_points(&mut self, points: u32) {
        self.current_score += points;
    }

    /// Move the unbanked score into the total.
    ///
    /// Returns the amount banked.
    pub fn bank(&mut self) -> u32 {
        let banked = self.current_score;
        self.total_score += banked;
        self.current_score = 0;
        banked
    }

    /// Drop the unbanked score (a double was rolled).
    ///
    /// Returns the forfeited amount.
    pub fn forfeit_turn(&mut self) -> u32 {
        std::mem::take(&mut self.current_score)
    }

    /// Reset both scores to zero, keeping the name.
    pub fn reset(&mut self) {
        self.total_score = 0;
        self.current_score = 0;
    }
}
