//! Deterministic layout randomness.
//!
//! Every scene assembly derives a fresh `ChaCha8Rng` from the session's
//! `LayoutSeed`, so re-assembling with unchanged selections reproduces the
//! layout bit for bit. Systems never touch `rand::thread_rng()`.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Default seed used when the host does not provide one.
const DEFAULT_SEED: u64 = 42;

/// Seed for all procedural layout randomness this session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSeed(pub u64);

impl Default for LayoutSeed {
    fn default() -> Self {
        Self(DEFAULT_SEED)
    }
}

impl LayoutSeed {
    /// A fresh deterministic RNG for one assembly pass.
    pub fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.0)
    }
}
