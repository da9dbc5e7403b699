//! Die-face generation behind a substitutable source.
//!
//! ## Key Features
//!
//! - **Substitutable**: the engine draws faces through [`DiceSource`], so
//!   tests inject scripted dice instead of randomness
//! - **Deterministic**: `GameRng::new(seed)` produces an identical face
//!   sequence for the same seed
//!
//! ## Usage
//!
//! ```
//! use pig_dice::core::{DiceSource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let face = rng.roll_face(6);
//! assert!((1..=6).contains(&face));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of die faces.
///
/// `roll_face(sides)` returns a uniformly distributed face in `[1, sides]`.
/// The engine is generic over this trait; real play uses [`GameRng`], tests
/// use [`ScriptedDice`].
pub trait DiceSource {
    /// Draw one face in `[1, sides]`.
    fn roll_face(&mut self, sides: u8) -> u8;
}

/// Pseudorandom dice backed by ChaCha8.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality
/// randomness. Reproducibility is not a gameplay requirement, but a seeded
/// constructor keeps replays and tests deterministic.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a seeded RNG. Same seed, same face sequence.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }
}

impl DiceSource for GameRng {
    fn roll_face(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides)
    }
}

/// Deterministic dice that replay a fixed sequence of faces.
///
/// Pops faces front-to-back. Running out of faces is a hard failure: the
/// game cannot proceed without dice, so exhaustion panics rather than
/// degrading silently.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: std::collections::VecDeque<u8>,
}

impl ScriptedDice {
    /// Create a scripted source from a face sequence.
    ///
    /// # Panics
    ///
    /// Panics if any face is outside `[1, 6]`.
    #[must_use]
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: std::collections::VecDeque<u8> = faces.into_iter().collect();
        for &face in &faces {
            assert!((1..=6).contains(&face), "Scripted face must be in 1..=6");
        }
        Self { faces }
    }

    /// Faces remaining in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_face(&mut self, sides: u8) -> u8 {
        let face = self
            .faces
            .pop_front()
            .expect("scripted dice exhausted: no faces left to roll");
        assert!(
            face <= sides,
            "scripted face {face} exceeds configured die sides {sides}"
        );
        face
    }
}
