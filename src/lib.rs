//! # pig-dice
//!
//! Rule core for a two-player "pig"-style dice game: roll two dice to pile
//! up unbanked points, hold to bank them, lose them on a double, first
//! banked total at the threshold wins.
//!
//! ## Design Principles
//!
//! 1. **One mutation point**: a single owned `GameState`, mutated only by
//!    the `TurnEngine` in response to commands. No ambient globals.
//!
//! 2. **Rendering-free**: the core knows nothing about dice faces on
//!    screen, messages, or animation pacing. It emits typed events; a
//!    presentation layer consumes them and feeds commands back.
//!
//! 3. **No privileged computer player**: the automated opponent issues the
//!    same public commands a human does, re-validated by the same guards.
//!
//! ## Modules
//!
//! - `core`: players, dice sources, roll resolution, state, configuration
//! - `events`: the event stream the presentation layer drains
//! - `engine`: the turn/scoring state machine (`roll`, `hold`, `new_game`,
//!   `set_mode`)
//! - `policy`: opponent decision policies
//! - `control`: the mode controller driving the automated seat
//!
//! ## Quick start
//!
//! ```
//! use pig_dice::control::ModeController;
//! use pig_dice::core::{GameConfig, GameMode};
//! use pig_dice::engine::TurnEngine;
//!
//! let mut engine = TurnEngine::with_seed(GameConfig::new(), 42);
//! let mut controller = ModeController::default();
//! engine.set_mode(GameMode::HumanVsComputer).unwrap();
//!
//! // One human turn action, then let the computer react: a hold or a
//! // rolled double may have handed it the turn.
//! engine.roll().unwrap();
//! let _ = engine.hold();
//! controller.run_opponent(&mut engine).unwrap();
//!
//! for event in engine.take_events() {
//!     // hand to the renderer
//!     let _ = event;
//! }
//! ```

pub mod control;
pub mod core;
pub mod engine;
pub mod events;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{
    DiceSource, GameConfig, GameMode, GameRng, GameState, Player, PlayerId, RollOutcome,
    ScriptedDice, TurnEntry, TurnRecord,
};

pub use crate::control::ModeController;
pub use crate::engine::{CommandError, TurnEngine};
pub use crate::events::{EventLog, GameEvent};
pub use crate::policy::{Decision, OpponentPolicy, ThresholdPolicy};
