//! Seeded random source for the placeholder move selectors.
//!
//! The engine itself is deterministic and never draws random numbers. Only
//! the policies in [`crate::policy`] do, and they take a `GameRng` so that a
//! self-play game is reproducible from its seed.
//!
//! ## Streams
//!
//! One seed covers a whole batch of games: [`GameRng::game`] selects the
//! ChaCha stream numbered after the game, so game 17 draws the same moves
//! whether or not games 0-16 were played first.
//!
//! ```
//! use baghchal::core::GameRng;
//!
//! let batch = GameRng::new(7);
//! let mut a = batch.game(3);
//! let mut b = GameRng::new(7).game(3);
//! assert_eq!(a.gen_index(25), b.gen_index(25));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic ChaCha8-backed RNG.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Stream 0 of `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Stream number this RNG draws from.
    #[must_use]
    pub fn stream(&self) -> u64 {
        self.inner.get_stream()
    }

    /// A fresh RNG for game `index` of this seed's batch.
    ///
    /// Independent of how much `self` has been used.
    #[must_use]
    pub fn game(&self, index: u64) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(self.seed);
        inner.set_stream(index);
        Self {
            inner,
            seed: self.seed,
        }
    }

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Uniformly pick one element, or `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Where this RNG is, so a paused playout can resume with the same
    /// draws.
    #[must_use]
    pub fn snapshot(&self) -> RngSnapshot {
        RngSnapshot {
            seed: self.seed,
            stream: self.inner.get_stream(),
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Continue from a [`RngSnapshot`].
    #[must_use]
    pub fn resume(snapshot: &RngSnapshot) -> Self {
        let mut rng = Self::new(snapshot.seed).game(snapshot.stream);
        rng.inner.set_word_pos(snapshot.word_pos);
        rng
    }
}

/// Serializable position in a [`GameRng`] stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngSnapshot {
    pub seed: u64,
    pub stream: u64,
    pub word_pos: u128,
}
