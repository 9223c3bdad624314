//! Injectable random sources for die faces.
//!
//! Every face the engine ever shows comes from a [`RollSource`] handed in by
//! the caller. Two implementations ship with the crate:
//!
//! - [`GameRng`]: seeded ChaCha8 stream. Same seed, same game.
//! - [`ScriptedRolls`]: replays a fixed list of faces, for tests and demos.
//!
//! ```
//! use yahtzee_engine::core::{GameRng, RollSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll_face(6), b.roll_face(6));
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of die faces.
///
/// Implementations should return a value in `1..=sides`. A die clamps
/// anything else into that range (0 becomes 1, values above `sides` become
/// `sides`), so a source that breaks the range skews its dice silently
/// instead of failing.
pub trait RollSource {
    /// Draw one face for a die with `sides` sides.
    fn roll_face(&mut self, sides: u8) -> u8;
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll_face(&mut self, sides: u8) -> u8 {
        (**self).roll_face(sides)
    }
}

/// Deterministic RNG for die rolls.
///
/// Uses ChaCha8 for speed while keeping a reproducible stream per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RollSource for GameRng {
    fn roll_face(&mut self, sides: u8) -> u8 {
        self.inner.gen_range(1..=sides.max(1))
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture and restore are O(1)
/// regardless of how many faces were drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of faces, cycling when exhausted.
///
/// A scripted face larger than the die's side count is wrapped into range,
/// so the returned face is always valid.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRolls {
    faces: VecDeque<u8>,
    drawn: usize,
}

impl ScriptedRolls {
    /// Create a source replaying `faces` in order.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
            drawn: 0,
        }
    }

    /// Append more faces to the end of the script.
    pub fn extend(&mut self, faces: impl IntoIterator<Item = u8>) {
        self.faces.extend(faces);
    }

    /// Number of faces drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    /// Faces left before the script starts cycling.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len().saturating_sub(self.drawn)
    }
}

impl RollSource for ScriptedRolls {
    fn roll_face(&mut self, sides: u8) -> u8 {
        let sides = sides.max(1);
        if self.faces.is_empty() {
            return 1;
        }
        let raw = self.faces[self.drawn % self.faces.len()];
        self.drawn += 1;
        (raw.max(1) - 1) % sides + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_face(6), rng2.roll_face(6));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_face(6)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_face(6)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_faces_in_range() {
        let mut rng = GameRng::new(7);
        for sides in 1..=20u8 {
            for _ in 0..50 {
                let face = rng.roll_face(sides);
                assert!((1..=sides).contains(&face));
            }
        }
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.roll_face(6);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_face(6)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_face(6)).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_replays_in_order_then_cycles() {
        let mut rolls = ScriptedRolls::new([3, 1, 6]);
        let seq: Vec<_> = (0..5).map(|_| rolls.roll_face(6)).collect();
        assert_eq!(seq, vec![3, 1, 6, 3, 1]);
        assert_eq!(rolls.drawn(), 5);
        assert_eq!(rolls.remaining(), 0);
    }

    #[test]
    fn test_scripted_wraps_out_of_range_faces() {
        let mut rolls = ScriptedRolls::new([8, 0, 4]);
        assert_eq!(rolls.roll_face(6), 2);
        assert_eq!(rolls.roll_face(6), 1);
        assert_eq!(rolls.roll_face(4), 4);
    }

    #[test]
    fn test_scripted_extend() {
        let mut rolls = ScriptedRolls::new([2]);
        rolls.extend([5, 5]);
        assert_eq!(rolls.remaining(), 3);
        assert_eq!(rolls.roll_face(6), 2);
        assert_eq!(rolls.roll_face(6), 5);
    }

    #[test]
    fn test_mut_ref_is_a_source() {
        fn draw(mut source: impl RollSource) -> u8 {
            source.roll_face(6)
        }

        let mut rolls = ScriptedRolls::new([4, 2]);
        assert_eq!(draw(&mut rolls), 4);
        assert_eq!(draw(&mut rolls), 2);
    }
}
