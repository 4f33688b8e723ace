//! Random sources for stat allocation.
//!
//! The allocator never touches `rand` directly; it draws from a
//! [`RandomSource`], so tests can script the draws and the CLI can replay a
//! seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the two kinds of draws the allocator needs.
pub trait RandomSource {
    /// A value in `[0.0, 1.0)`.
    fn random_f64(&mut self) -> f64;

    /// A uniformly chosen index in `0..len`. `len` is never zero.
    fn random_index(&mut self, len: usize) -> usize;
}

/// Production source backed by `rand::thread_rng()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn random_f64(&mut self) -> f64 {
        rand::thread_rng().gen()
    }

    fn random_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible source seeded from a `u64`.
///
/// # Examples
///
/// ```rust
/// use petbase::random::{RandomSource, SeededRandom};
///
/// let mut a = SeededRandom::new(7);
/// let mut b = SeededRandom::new(7);
/// assert_eq!(a.random_index(4), b.random_index(4));
/// ```
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn random_f64(&mut self) -> f64 {
        self.rng.gen()
    }

    fn random_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Scripted source for deterministic tests.
///
/// Returns values from a fixed sequence, cycling when exhausted. Index
/// draws map the value onto `0..len` the same way a uniform draw would.
#[derive(Debug, Clone)]
pub struct FixedRandom {
    values: Vec<f64>,
    position: usize,
}

impl FixedRandom {
    /// Values are clamped into `[0.0, 1.0)`. An empty sequence behaves as
    /// a constant `0.0`.
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 0.999_999))
            .collect();
        Self {
            values,
            position: 0,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    fn next_value(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

impl RandomSource for FixedRandom {
    fn random_f64(&mut self) -> f64 {
        self.next_value()
    }

    fn random_index(&mut self, len: usize) -> usize {
        ((self.next_value() * len as f64) as usize).min(len.saturating_sub(1))
    }
}
