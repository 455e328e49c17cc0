//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct wraps a seedable `StdRng` and provides
//! the handful of draws the genetic operators need.
//!
//! There is no process-wide generator. A run owns one seed; the coordinating
//! thread draws from a stream seeded directly from it, and every concurrent
//! offspring task draws from its own stream derived from the seed, the
//! generation and the task's slot. Two runs with the same seed therefore make
//! the same draws no matter how rayon schedules the tasks.
//!
//! ## Example
//!
//! ```rust
//! use genfit::rng::RandomNumberGenerator;
//!
//! let mut a = RandomNumberGenerator::for_task(42, 10, 3);
//! let mut b = RandomNumberGenerator::for_task(42, 10, 3);
//! assert_eq!(a.uniform(), b.uniform());
//!
//! let numbers = a.fetch_uniform(0.0, 1.0, 5);
//! assert_eq!(numbers.len(), 5);
//! ```

use rand::{
    distributions::uniform::{SampleRange, SampleUniform},
    rngs::StdRng,
    seq::index,
    Rng, SeedableRng,
};
use std::collections::VecDeque;

/// SplitMix64 finalizer, used to decorrelate derived stream seeds.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// A wrapper around the `rand` crate's `StdRng` that provides methods for generating
/// random numbers within a specified range.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates the independent stream used by one offspring task.
    ///
    /// # Arguments
    ///
    /// * `seed` - The run seed.
    /// * `generation` - The generation the task belongs to.
    /// * `slot` - The task's offspring slot within the generation.
    pub fn for_task(seed: u64, generation: usize, slot: usize) -> Self {
        let stream = mix(mix(seed ^ mix(generation as u64)) ^ slot as u64);
        Self::from_seed(stream)
    }

    /// Draws a fresh seed from system entropy.
    pub fn entropy_seed() -> u64 {
        rand::thread_rng().gen()
    }

    /// Returns a uniform float in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Generates a random number in the given range.
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: SampleUniform,
        R: SampleRange<T>,
    {
        self.rng.gen_range(range)
    }

    /// Picks `amount` distinct indices out of `0..length` in random order.
    ///
    /// # Panics
    ///
    /// Panics if `amount > length`.
    pub fn distinct_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount).into_vec()
    }

    /// Generates a specified number of random floating-point numbers within the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.rng.gen_range(from..to)));
        uniform_numbers
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_uniform_with_positive_range() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let result = rng.fetch_uniform(0.0, 1.0, 5);

        assert_eq!(result.len(), 5);
        for &num in result.iter() {
            assert!((0.0..1.0).contains(&num));
        }
    }

    #[test]
    fn test_fetch_uniform_with_empty_result() {
        let mut rng = RandomNumberGenerator::new();
        let result = rng.fetch_uniform(1.0, 2.0, 0);

        assert!(result.is_empty());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = RandomNumberGenerator::from_seed(42);

        let nums1 = rng1.fetch_uniform(0.0, 1.0, 5);
        let nums2 = rng2.fetch_uniform(0.0, 1.0, 5);

        assert_eq!(nums1, nums2);
    }

    #[test]
    fn test_task_streams_are_reproducible_and_distinct() {
        let first: Vec<f64> = (0..4)
            .map(|_| RandomNumberGenerator::for_task(7, 3, 0).uniform())
            .collect();
        assert!(first.windows(2).all(|w| w[0] == w[1]));

        let mut slot0 = RandomNumberGenerator::for_task(7, 3, 0);
        let mut slot1 = RandomNumberGenerator::for_task(7, 3, 1);
        let mut next_gen = RandomNumberGenerator::for_task(7, 4, 0);
        let a = slot0.fetch_uniform(0.0, 1.0, 8);
        let b = slot1.fetch_uniform(0.0, 1.0, 8);
        let c = next_gen.fetch_uniform(0.0, 1.0, 8);

        assert_ne!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_distinct_indices() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        let mut picked = rng.distinct_indices(10, 10);
        picked.sort_unstable();

        assert_eq!(picked, (0..10).collect::<Vec<_>>());
        assert_eq!(rng.distinct_indices(10, 3).len(), 3);
    }
}
