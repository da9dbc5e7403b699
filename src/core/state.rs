//! Game state: the one mutable object in the crate.
//!
//! `GameState` is owned and mutated exclusively by the
//! [`TurnEngine`](crate::engine::TurnEngine); everything else sees it
//! through `&` or a cloned snapshot. The turn history uses a persistent
//! vector so snapshots clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::config::{GameConfig, GameMode};
use super::player::{Player, PlayerId};
use super::roll::RollOutcome;

/// One entry in the turn history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnEntry {
    /// The active player rolled.
    Rolled(RollOutcome),
    /// The active player banked `banked` points, reaching `total`.
    Held { banked: u32, total: u32 },
}

/// A recorded turn action, for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// The player who acted.
    pub player: PlayerId,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// What happened.
    pub entry: TurnEntry,
}

/// Complete state of one game.
///
/// Created zeroed by [`GameState::new`], replaced wholesale on a new-game
/// reset. Invariants (enforced by the engine's command guards):
///
/// - exactly one seat is active at a time
/// - `roll_in_progress` is true only while a roll resolves and is false
///   again before any further command is accepted
/// - `game_active` turns false exactly once, when a banked total first
///   reaches the win threshold, and only a reset turns it true again
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    players: [Player; 2],

    /// Whose turn it is.
    pub active_player: PlayerId,

    /// False once a player has won; commands are rejected until a reset.
    pub game_active: bool,

    /// Current opponent mode.
    pub mode: GameMode,

    /// Re-entrancy guard: true only while a roll is being resolved.
    pub roll_in_progress: bool,

    /// Turn counter, starting at 1. Bumped on every turn switch.
    pub turn_number: u32,

    history: Vector<TurnRecord>,
}

impl GameState {
    /// Create a fresh state: both players zeroed, seat 0 active, game on.
    #[must_use]
    pub fn new(config: &GameConfig, mode: GameMode) -> Self {
        Self {
            players: [
                Player::new(config.player_names[0].clone()),
                Player::new(config.player_names[1].clone()),
            ],
            active_player: PlayerId::new(0),
            game_active: true,
            mode,
            roll_in_progress: false,
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Get a player's state.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id.index()]
    }

    /// The active player's state.
    #[must_use]
    pub fn active(&self) -> &Player {
        self.player(self.active_player)
    }

    pub(crate) fn active_mut(&mut self) -> &mut Player {
        let id = self.active_player;
        self.player_mut(id)
    }

    /// The automated seat, if the current mode has one.
    ///
    /// Under [`GameMode::HumanVsComputer`] the computer always sits at
    /// seat 1.
    #[must_use]
    pub fn automated_player(&self) -> Option<PlayerId> {
        match self.mode {
            GameMode::HumanVsComputer => Some(PlayerId::new(1)),
            GameMode::HumanVsHuman => None,
        }
    }

    /// True when the game is running and it is the automated seat's turn.
    #[must_use]
    pub fn is_automated_turn(&self) -> bool {
        self.game_active && self.automated_player() == Some(self.active_player)
    }

    /// Hand the turn to the other seat.
    pub(crate) fn advance_turn(&mut self) {
        self.active_player = self.active_player.opponent();
        self.turn_number += 1;
    }

    /// Append to the turn history.
    pub(crate) fn record(&mut self, entry: TurnEntry) {
        self.history.push_back(TurnRecord {
            player: self.active_player,
            turn: self.turn_number,
            entry,
        });
    }

    /// The turn history, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }
}

impl Index<PlayerId> for GameState {
    type Output = Player;

    fn index(&self, id: PlayerId) -> &Self::Output {
        self.player(id)
    }
}

impl IndexMut<PlayerId> for GameState {
    fn index_mut(&mut self, id: PlayerId) -> &mut Self::Output {
        self.player_mut(id)
    }
}
