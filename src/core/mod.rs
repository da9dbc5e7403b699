//! Core types: players, dice, roll resolution, state, configuration.
//!
//! Everything here is either a pure function or plain data; the only
//! mutation point is `GameState`, which belongs to the engine.

pub mod config;
pub mod player;
pub mod rng;
pub mod roll;
pub mod state;

pub use config::{GameConfig, GameMode};
pub use player::{Player, PlayerId};
pub use rng::{DiceSource, GameRng, ScriptedDice};
pub use roll::RollOutcome;
pub use state::{GameState, TurnEntry, TurnRecord};
