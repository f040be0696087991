use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for the first-mover coin flip and the difficulty
/// perturbation. Tests substitute a scripted implementation.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn random_unit(&mut self) -> f64;

    /// Uniform index in `0..len`. `len` is never zero.
    fn random_index(&mut self, len: usize) -> usize;

    fn random_bool(&mut self) -> bool;
}

pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SessionRng {
    fn random_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn random_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }

    fn random_bool(&mut self) -> bool {
        self.rng.random()
    }
}
