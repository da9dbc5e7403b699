//! Roll resolution: two faces in, outcome out.

use serde::{Deserialize, Serialize};

/// The resolved outcome of rolling two dice.
///
/// A double (both faces equal) gains nothing and costs the turn; any other
/// pair gains the face sum. The faces are kept so the presentation layer
/// can draw them.
///
/// ## Example
///
/// ```
/// use pig_dice::core::RollOutcome;
///
/// let normal = RollOutcome::resolve(3, 4);
/// assert!(!normal.is_double);
/// assert_eq!(normal.points_gained, 7);
///
/// let double = RollOutcome::resolve(5, 5);
/// assert!(double.is_double);
/// assert_eq!(double.points_gained, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOutcome {
    /// First die face.
    pub die1: u8,

    /// Second die face.
    pub die2: u8,

    /// Both faces equal.
    pub is_double: bool,

    /// Points this roll is worth: 0 on a double, face sum otherwise.
    pub points_gained: u32,
}

impl RollOutcome {
    /// Resolve two die faces. Pure; no hidden state.
    ///
    /// # Panics
    ///
    /// Panics if either face is outside `[1, 6]`. Faces come from a
    /// [`DiceSource`](crate::core::DiceSource); anything else is a
    /// programming error.
    #[must_use]
    pub fn resolve(die1: u8, die2: u8) -> Self {
        assert!((1..=6).contains(&die1), "Die face must be in 1..=6");
        assert!((1..=6).contains(&die2), "Die face must be in 1..=6");

        let is_double = die1 == die2;
        let points_gained = if is_double {
            0
        } else {
            u32::from(die1) + u32::from(die2)
        };

        Self {
            die1,
            die2,
            is_double,
            points_gained,
        }
    }
}

impl std::fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_double {
            write!(f, "double {}s", self.die1)
        } else {
            write!(f, "{} and {}", self.die1, self.die2)
        }
    }
}
