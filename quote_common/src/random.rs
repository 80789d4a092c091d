//! Uniform index selection behind a substitutable trait.
//!
//! The session never touches `rand` directly; it asks a `RandomSource` for an index.
//! Production code uses the thread-local generator, reproducible runs use a seeded
//! `StdRng`, and tests plug in a source that always returns a fixed index.
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of indices for random quote selection.
pub trait RandomSource {
    /// Returns an index uniformly distributed over `[0, len)`.
    ///
    /// Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Thread-local generator seeded from the OS.
#[derive(Debug, Default)]
pub struct ThreadRandom(ThreadRng);

impl ThreadRandom {
    /// Create a new instance backed by `rand::rng()`.
    pub fn new() -> Self {
        ThreadRandom(rand::rng())
    }
}

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Deterministic generator for reproducible sessions.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Create a generator from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        SeededRandom(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_random_stays_in_range() {
        let mut rng = ThreadRandom::new();
        for len in 1..50 {
            for _ in 0..20 {
                assert!(rng.pick_index(len) < len);
            }
        }
    }

    #[test]
    fn single_element_always_picks_zero() {
        let mut rng = ThreadRandom::new();
        assert_eq!(rng.pick_index(1), 0);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = SeededRandom::from_seed(42);
        let mut b = SeededRandom::from_seed(42);
        let left: Vec<usize> = (0..32).map(|_| a.pick_index(100)).collect();
        let right: Vec<usize> = (0..32).map(|_| b.pick_index(100)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn covers_every_index_eventually() {
        let mut rng = SeededRandom::from_seed(7);
        let mut seen = [false; 5];
        for _ in 0..1000 {
            seen[rng.pick_index(5)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
