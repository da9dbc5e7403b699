//! The turn engine: the single place that mutates `GameState`.
//!
//! Commands arrive from the input layer (and from the
//! [`ModeController`](crate::control::ModeController) when the computer
//! plays); the engine validates them against the current state, applies the
//! transition, and emits events for the presentation layer. A rejected
//! command leaves the state untouched.
//!
//! `roll()` is atomic from the core's point of view: draw, resolve, update,
//! emit. Any dice-shaking animation happens outside, against the emitted
//! events; the `roll_in_progress` flag exists so a presentation layer that
//! stretches a roll across wall-clock time has an explicit guard to check
//! commands against.

use thiserror::Error;

use crate::core::{
    DiceSource, GameConfig, GameMode, GameRng, GameState, RollOutcome, TurnEntry,
};
use crate::events::{EventLog, GameEvent};

/// Why a command was rejected. Never fatal; the state is unchanged and the
/// caller may simply issue a valid command next.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// The game is over or a roll is in flight.
    #[error("command ignored: {reason}")]
    InvalidState {
        /// What the engine was doing instead.
        reason: &'static str,
    },

    /// Hold requested with zero unbanked points.
    #[error("no unbanked points to hold")]
    NothingToHold,
}

/// The turn/scoring state machine.
///
/// Generic over its [`DiceSource`] so tests can script exact rolls; real
/// play uses the default [`GameRng`].
///
/// ## Example
///
/// ```
/// use pig_dice::core::{GameConfig, GameMode, ScriptedDice};
/// use pig_dice::engine::TurnEngine;
///
/// let mut engine = TurnEngine::with_dice(GameConfig::new(), ScriptedDice::new([3, 4]));
/// let outcome = engine.roll().unwrap();
/// assert_eq!(outcome.points_gained, 7);
/// assert_eq!(engine.state().active().current_score(), 7);
/// ```
pub struct TurnEngine<D: DiceSource = GameRng> {
    config: GameConfig,
    state: GameState,
    dice: D,
    events: EventLog,
}

impl TurnEngine<GameRng> {
    /// Create an engine with OS-seeded dice.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self::with_dice(config, GameRng::from_entropy())
    }

    /// Create an engine with seeded dice, for reproducible games.
    #[must_use]
    pub fn with_seed(config: GameConfig, seed: u64) -> Self {
        Self::with_dice(config, GameRng::new(seed))
    }
}

impl<D: DiceSource> TurnEngine<D> {
    /// Create an engine with an injected dice source.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (see
    /// [`GameConfig::validate`]).
    #[must_use]
    pub fn with_dice(config: GameConfig, dice: D) -> Self {
        config.validate();
        let state = GameState::new(&config, GameMode::default());
        Self {
            config,
            state,
            dice,
            events: EventLog::new(),
        }
    }

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Take all events emitted since the last drain, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Peek at pending events without draining them.
    #[must_use]
    pub fn pending_events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    /// Roll both dice for the active player.
    ///
    /// A double wipes the active player's unbanked points, emits
    /// [`GameEvent::TurnLost`], and hands the turn over; the switch follows
    /// the double deterministically and cannot be skipped. Any other pair
    /// adds the face sum to the unbanked score.
    ///
    /// # Errors
    ///
    /// [`CommandError::InvalidState`] if the game is over or a roll is
    /// already in flight. The state is untouched.
    pub fn roll(&mut self) -> Result<RollOutcome, CommandError> {
        self.guard_command()?;

        self.state.roll_in_progress = true;
        let die1 = self.dice.roll_face(self.config.dice_sides);
        let die2 = self.dice.roll_face(self.config.dice_sides);
        let outcome = RollOutcome::resolve(die1, die2);

        let player = self.state.active_player;
        self.state.record(TurnEntry::Rolled(outcome));
        self.events.emit(GameEvent::RollResolved { player, outcome });

        if outcome.is_double {
            self.state.active_mut().forfeit_turn();
            self.events.emit(GameEvent::TurnLost { player });
            self.state.roll_in_progress = false;
            self.switch_turn();
        } else {
            self.state.active_mut().add_points(outcome.points_gained);
            self.state.roll_in_progress = false;
            self.emit_snapshot();
        }

        Ok(outcome)
    }

    /// Bank the active player's unbanked points and end the turn.
    ///
    /// If the new total reaches the win threshold the game ends with
    /// [`GameEvent::GameOver`] and the turn does **not** switch; otherwise
    /// the other player becomes active.
    ///
    /// # Errors
    ///
    /// [`CommandError::InvalidState`] if the game is over or a roll is in
    /// flight; [`CommandError::NothingToHold`] if there is nothing banked
    /// this turn (also surfaced as an event). The state is untouched in
    /// both cases.
    pub fn hold(&mut self) -> Result<(), CommandError> {
        self.guard_command()?;

        let player = self.state.active_player;
        if self.state.active().current_score() == 0 {
            self.events.emit(GameEvent::NothingToHold { player });
            return Err(CommandError::NothingToHold);
        }

        let banked = self.state.active_mut().bank();
        let total = self.state.active().total_score();
        self.state.record(TurnEntry::Held { banked, total });

        if self.config.is_win(total) {
            self.state.game_active = false;
            self.events.emit(GameEvent::GameOver {
                winner: player,
                winning_total: total,
            });
            self.emit_snapshot();
        } else {
            self.switch_turn();
        }

        Ok(())
    }

    /// Hand the turn to the other seat.
    ///
    /// The engine calls this itself after a double or a non-winning hold;
    /// it is public so hosts observe the same transition path the engine
    /// uses internally.
    pub fn switch_turn(&mut self) {
        self.state.advance_turn();
        self.emit_snapshot();
    }

    /// Discard the current game and start a fresh one in the given mode.
    pub fn new_game(&mut self, mode: GameMode) {
        self.state = GameState::new(&self.config, mode);
        self.emit_snapshot();
    }

    /// Select an opponent mode. Always starts a new game, matching the
    /// behavior of the original mode selector.
    ///
    /// # Errors
    ///
    /// [`CommandError::InvalidState`] while a roll is in flight.
    pub fn set_mode(&mut self, mode: GameMode) -> Result<(), CommandError> {
        if self.state.roll_in_progress {
            return Err(CommandError::InvalidState {
                reason: "a roll is in progress",
            });
        }
        self.new_game(mode);
        Ok(())
    }

    fn guard_command(&self) -> Result<(), CommandError> {
        if !self.state.game_active {
            return Err(CommandError::InvalidState {
                reason: "the game is over",
            });
        }
        if self.state.roll_in_progress {
            return Err(CommandError::InvalidState {
                reason: "a roll is in progress",
            });
        }
        Ok(())
    }

    fn emit_snapshot(&mut self) {
        self.events.emit(GameEvent::StateChanged(self.state.clone()));
    }
}
