/// Random index selection for shuffling and picking questions
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Return an index in `0..bound`. A `bound` of 0 or 1 always yields 0.
    fn below(&mut self, bound: usize) -> usize;
}

/// `rand` generator seeded from `crypto.getRandomValues` in the browser
/// (and the OS generator in native builds)
#[derive(Debug, Clone)]
pub struct BrowserRng {
    rng: SmallRng,
}

impl BrowserRng {
    pub fn new() -> Self {
        BrowserRng {
            rng: SmallRng::from_entropy(),
        }
    }
}

impl Default for BrowserRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for BrowserRng {
    fn below(&mut self, bound: usize) -> usize {
        if bound <= 1 {
            return 0;
        }
        self.rng.gen_range(0..bound)
    }
}
