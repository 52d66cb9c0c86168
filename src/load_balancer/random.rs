//! Uniform random selection.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use url::Url;

use crate::load_balancer::{DestinationSet, SelectionStrategy};

/// Picks an index uniformly at random for every request.
///
/// The random source is owned by the strategy. Seed it for reproducible
/// sequences in tests.
#[derive(Debug)]
pub struct UniformRandom<R = StdRng> {
    rng: Mutex<R>,
}

impl UniformRandom<StdRng> {
    /// Seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> UniformRandom<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: Rng + Send> SelectionStrategy for UniformRandom<R> {
    fn select<'a>(&self, destinations: &'a DestinationSet) -> &'a Url {
        let len = destinations.len();
        let index = match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..len),
            // The RNG holds no invariant a panic could break.
            Err(poisoned) => poisoned.into_inner().gen_range(0..len),
        };
        &destinations.as_slice()[index]
    }
}
