//! Seeded random number generator for the simulation.
//!
//! Every stochastic choice in the engine (role shuffle, chatter gate,
//! speaker choice, phrase choice, vote coin flips) draws from this single
//! stream, so a seed fully determines a run.

use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Seeded random number generator wrapper.
pub struct SimRng(pub SmallRng);

impl SimRng {
    /// Creates a generator from a 64-bit seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}
