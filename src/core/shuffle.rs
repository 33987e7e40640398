use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of permutations for the assignment engine.
pub trait Shuffler {
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<S: Shuffler> Shuffler for &mut S {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        (**self).shuffle(items)
    }
}

/// Uniform Fisher–Yates shuffle over any random number generator, via `SliceRandom::shuffle`.
#[derive(Debug, Clone)]
pub struct FisherYates<R: Rng> {
    rng: R,
}

impl<R: Rng> FisherYates<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl FisherYates<StdRng> {
    /// Reproducible sequence for fixtures and `--seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Shuffler for FisherYates<R> {
    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, &mut self.rng);
    }
}

/// Leaves every sequence in its input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepOrder;

impl Shuffler for KeepOrder {
    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
