//! Randomness behind pacing and style selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform random numbers.
pub trait RandomSource {
    /// A value in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A fair coin.
    fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }
}

/// [`RandomSource`] over any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible source, mostly useful in tests and demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn coin(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}
