//! Seedable random source for root-word draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed draws the same sequence of root words
//! - **Uniform**: Every pool entry is equally likely on each draw, including
//!   words drawn in earlier rounds
//! - **Serializable**: O(1) state capture and restore for session snapshots
//!
//! ```
//! use word_scramble::core::GameRng;
//!
//! let pool = vec!["listen".to_string(), "garden".to_string()];
//!
//! let mut rng1 = GameRng::new(7);
//! let mut rng2 = GameRng::new(7);
//! assert_eq!(rng1.choose(&pool), rng2.choose(&pool));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used to pick root words.
///
/// Uses ChaCha8 for speed; the word position makes snapshots O(1).
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

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random index in `0..len`.
    ///
    /// Returns `None` if `len` is zero.
    pub fn index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.inner.gen_range(0..len))
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for snapshots.
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

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.index(1000), rng2.index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_bounds() {
        let mut rng = GameRng::new(3);
        assert_eq!(rng.index(0), None);
        assert_eq!(rng.index(1), Some(0));
        for _ in 0..200 {
            let i = rng.index(5).unwrap();
            assert!(i < 5);
        }
    }

    #[test]
    fn test_choose_covers_pool() {
        let mut rng = GameRng::new(42);
        let items = vec!["a", "b", "c", "d"];

        let mut seen = [false; 4];
        for _ in 0..200 {
            let chosen = rng.choose(&items).unwrap();
            let pos = items.iter().position(|i| i == chosen).unwrap();
            seen[pos] = true;
        }
        assert!(seen.iter().all(|&s| s));

        let empty: Vec<&str> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.index(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.index(1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.index(1000)).collect();

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
}
