//! Deterministic random number generation for trials and shuffling.
//!
//! A run is reproducible from its seed: the driver draws every random
//! choice (player count, kingdom, zone contents, engine seeds) from one
//! `GameRng`, and the reference engine shuffles with its own `GameRng`
//! seeded by `initialize_game`.
//!
//! ```
//! use dominion_check::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! assert_eq!(a.gen_inclusive(2, 4), b.gen_inclusive(2, 4));
//! ```

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded ChaCha8 RNG.
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

    /// Create an RNG from an OS-provided seed.
    ///
    /// The chosen seed is available from [`GameRng::seed`] so the run can
    /// be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `min..=max`. Returns `min` when `max <= min`.
    pub fn gen_inclusive(&mut self, min: usize, max: usize) -> usize {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    /// Fresh seed for a downstream RNG (e.g. an engine game).
    pub fn next_seed(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}
