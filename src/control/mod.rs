//! Driving the automated opponent through the public engine API.
//!
//! The computer has no privileged path into the rules: it issues the same
//! `roll()` and `hold()` commands a human would, and every command is
//! re-validated by the engine's own guards. The host calls
//! [`ModeController::run_opponent`] after each of its own commands; the
//! call returns immediately unless the automated seat is the active one.

use crate::core::DiceSource;
use crate::engine::{CommandError, TurnEngine};
use crate::policy::{Decision, OpponentPolicy, ThresholdPolicy};

/// Runs the automated seat's turn when it becomes active.
///
/// The drive loop re-reads live state before every decision: a rolled
/// double wipes the unbanked score and ends the turn through the engine's
/// own switch, so a stale target must never be retried. Two bounds keep
/// the loop finite:
///
/// - `max_rolls_per_turn` forces a hold once reached
/// - a `NothingToHold` rejection (fresh turn, nothing banked) converts to
///   exactly one more roll, after which either points exist and a hold can
///   succeed, or a double already handed the turn over
///
/// ## Example
///
/// ```
/// use pig_dice::control::ModeController;
/// use pig_dice::core::{GameConfig, GameMode};
/// use pig_dice::engine::TurnEngine;
///
/// let mut engine = TurnEngine::with_seed(GameConfig::new(), 7);
/// let mut controller = ModeController::default();
///
/// engine.set_mode(GameMode::HumanVsComputer).unwrap();
///
/// // After every human command, give the computer its chance: a hold or
/// // a rolled double may have handed the turn over.
/// engine.roll().unwrap();
/// let _ = engine.hold();
/// controller.run_opponent(&mut engine).unwrap();
/// assert!(!engine.state().is_automated_turn());
/// ```
pub struct ModeController<P: OpponentPolicy = ThresholdPolicy> {
    policy: P,
    max_rolls_per_turn: u32,
}

impl Default for ModeController<ThresholdPolicy> {
    fn default() -> Self {
        Self::new(ThresholdPolicy::default())
    }
}

impl<P: OpponentPolicy> ModeController<P> {
    /// Create a controller around a policy.
    #[must_use]
    pub fn new(policy: P) -> Self {
        Self {
            policy,
            max_rolls_per_turn: 32,
        }
    }

    /// Override the per-turn roll cap.
    ///
    /// # Panics
    ///
    /// Panics if `cap` is 0; the opponent must be allowed at least one
    /// roll.
    #[must_use]
    pub fn with_max_rolls(mut self, cap: u32) -> Self {
        assert!(cap > 0, "Roll cap must be positive");
        self.max_rolls_per_turn = cap;
        self
    }

    /// The wrapped policy.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Play out the automated seat's turn, if it is active.
    ///
    /// No-op when the mode has no automated seat, the game is over, or a
    /// human is active. Otherwise issues roll/hold commands until the turn
    /// passes back to the human or the game ends.
    ///
    /// # Errors
    ///
    /// Propagates any engine rejection other than the `NothingToHold` the
    /// loop handles itself. With the engine's guards re-checked each
    /// iteration this does not happen in normal operation.
    pub fn run_opponent<D: DiceSource>(
        &mut self,
        engine: &mut TurnEngine<D>,
    ) -> Result<(), CommandError> {
        let Some(seat) = engine.state().automated_player() else {
            return Ok(());
        };

        let mut rolls = 0u32;
        while engine.state().is_automated_turn() {
            let decision = if rolls >= self.max_rolls_per_turn {
                Decision::Hold
            } else {
                self.policy
                    .decide(engine.state().player(seat), engine.config())
            };

            match decision {
                Decision::Roll => {
                    engine.roll()?;
                    rolls += 1;
                }
                Decision::Hold => match engine.hold() {
                    Ok(()) => {}
                    Err(CommandError::NothingToHold) => {
                        engine.roll()?;
                        rolls += 1;
                    }
                    Err(err) => return Err(err),
                },
            }
        }

        Ok(())
    }
}
