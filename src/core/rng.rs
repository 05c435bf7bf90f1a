//! Seeded random number generation for shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Replayable**: A generator seeded from entropy still records its seed
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use solitaire_deck::collections::Sequence;
//! use solitaire_deck::core::ShuffleRng;
//!
//! let mut a: Sequence<u32> = (0..10).collect();
//! let mut b = a.clone();
//!
//! a.randomize(&mut ShuffleRng::new(42));
//! b.randomize(&mut ShuffleRng::new(42));
//!
//! // Same seed, same permutation
//! assert_eq!(a, b);
//! ```

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used to drive shuffles.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
/// Implements [`RngCore`], so it can be handed to anything taking a
/// `rand::Rng`, including [`Sequence::randomize`](crate::collections::Sequence::randomize).
#[derive(Clone, Debug)]
pub struct ShuffleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ShuffleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn seed.
    ///
    /// The seed is kept, so `seed()` can be logged and the run replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this generator started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> ShuffleRngState {
        ShuffleRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &ShuffleRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl RngCore for ShuffleRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
