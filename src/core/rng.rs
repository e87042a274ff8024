//! Deterministic random number generation for deals.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same deals
//! - **Forkable**: Each new game draws from an independent stream
//!
//! ```
//! use klondike_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut game_rng = rng.fork();
//!
//! let mut rng2 = GameRng::new(42);
//! let mut game_rng2 = rng2.fork();
//!
//! assert_eq!(game_rng.gen_range_usize(0..52), game_rng2.gen_range_usize(0..52));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Generate a uniformly distributed usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
