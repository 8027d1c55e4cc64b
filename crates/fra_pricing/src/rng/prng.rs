//! Pseudo-random number generator wrapper for Monte Carlo simulations.
//!
//! This module provides [`SimulationRng`], a seeded PRNG wrapper that offers
//! reproducible standard-normal draws with batch operations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Mixes a base seed with a stream index (SplitMix64 finaliser).
///
/// Consecutive stream indices map to well-separated seeds, so neighbouring
/// grid cells do not start from correlated `StdRng` states.
///
/// # Examples
///
/// ```rust
/// use fra_pricing::rng::derive_seed;
///
/// assert_eq!(derive_seed(42, 3), derive_seed(42, 3));
/// assert_ne!(derive_seed(42, 3), derive_seed(42, 4));
/// ```
#[inline]
pub fn derive_seed(base: u64, stream: u64) -> u64 {
    let mut z = base ^ stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Monte Carlo simulation random number generator.
///
/// Provides seeded, reproducible random number generation for the
/// path simulator.
///
/// # Examples
///
/// ```rust
/// use fra_pricing::rng::SimulationRng;
///
/// let mut rng1 = SimulationRng::from_seed(42);
/// let mut rng2 = SimulationRng::from_seed(42);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// assert_eq!(rng1.seed(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl SimulationRng {
    /// Creates a new RNG instance initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates an RNG seeded from the thread-local entropy source.
    ///
    /// The drawn seed is retained and reported by [`seed`](Self::seed), so the
    /// run can be reproduced with [`from_seed`](Self::from_seed).
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        Self::from_seed(seed)
    }

    /// Seeded generator when `seed` is given, entropy-seeded otherwise.
    #[inline]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent child generator for stream `stream`.
    ///
    /// Depends only on this generator's seed, not on how many numbers have
    /// been drawn from it.
    #[inline]
    pub fn derive(&self, stream: u64) -> Self {
        Self::from_seed(derive_seed(self.seed, stream))
    }

    /// Generates a single standard normal variate (mean=0, std=1).
    ///
    /// Uses the Ziggurat algorithm via `rand_distr::StandardNormal`.
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Fills the buffer with standard normal variates.
    ///
    /// Zero-allocation; empty buffers are a no-op.
    #[inline]
    pub fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = StandardNormal.sample(&mut self.inner);
        }
    }
}
