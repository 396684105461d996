//! Random number source consumed by the shuffle styles.

use rand::{Rng, RngCore};

/// Uniform integer draws used by the shuffle styles.
///
/// Every [`RngCore`] implements this trait, so a seeded
/// [`ChaCha8Rng`](rand_chacha::ChaCha8Rng) gives reproducible shuffles.
/// Implement it directly to replay a fixed sequence of draws.
///
/// Neither method panics on an empty range.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`, or 0 when `bound` is 0.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Returns a value in `[low, high)`, or `low` when `high <= low`.
    fn next_between(&mut self, low: usize, high: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            0
        } else {
            self.random_range(0..bound)
        }
    }

    fn next_between(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            low
        } else {
            self.random_range(low..high)
        }
    }
}
