//! Events the core emits for the presentation layer.
//!
//! The engine never renders anything; it records what happened into an
//! [`EventLog`] and the host drains the log after each command. Every
//! mutating command ends with a [`GameEvent::StateChanged`] snapshot, after
//! any domain events it produced, so a renderer that only understands
//! snapshots still stays current.

use serde::{Deserialize, Serialize};

use crate::core::{GameState, PlayerId, RollOutcome};

/// Something the presentation layer should react to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The state changed; a full snapshot for renderers.
    StateChanged(GameState),

    /// Two dice were rolled and resolved.
    RollResolved {
        /// The player who rolled.
        player: PlayerId,
        /// The resolved outcome (faces, double flag, points).
        outcome: RollOutcome,
    },

    /// A double wiped the active player's unbanked points; their turn ends.
    TurnLost {
        /// The player who lost the turn.
        player: PlayerId,
    },

    /// A hold pushed the winner's total past the threshold.
    GameOver {
        /// The winning seat.
        winner: PlayerId,
        /// The winner's final banked total.
        winning_total: u32,
    },

    /// Hold was requested with nothing to bank. Not fatal; show a message.
    NothingToHold {
        /// The player who tried to hold.
        player: PlayerId,
    },
}

/// Ordered collection of pending events.
///
/// The engine pushes, the host drains. Draining returns events oldest
/// first and leaves the log empty.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True when nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Peek at pending events without draining.
    #[must_use]
    pub fn pending(&self) -> &[GameEvent] {
        &self.events
    }
}
