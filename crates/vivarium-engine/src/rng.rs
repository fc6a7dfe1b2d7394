//! Seeded production [`Chooser`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use vivarium_core::Chooser;

/// Uniform chooser backed by ChaCha8, reproducible from a `u64` seed.
#[derive(Clone, Debug)]
pub struct SeededChooser {
    rng: ChaCha8Rng,
}

impl SeededChooser {
    /// A chooser whose picks are fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Chooser for SeededChooser {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}
