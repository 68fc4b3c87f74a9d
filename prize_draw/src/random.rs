use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform random indices.
///
/// The allocation only needs one capability from its random source, which
/// makes it easy to substitute a scripted source in tests.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from `[0, upper_inclusive]`.
    fn next_index(&mut self, upper_inclusive: usize) -> usize;
}

/// Adapts any generator from the `rand` crate.
///
/// ```
/// use prize_draw::random::{RandomSource, RngSource};
///
/// let mut a = RngSource::seeded(7);
/// let mut b = RngSource::seeded(7);
/// assert_eq!(a.next_index(100), b.next_index(100));
/// ```
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> RngSource<R> {
        RngSource { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// A reproducible source: the same seed always yields the same draw.
    pub fn seeded(seed: u64) -> RngSource<ChaCha8Rng> {
        RngSource::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// A source seeded by the operating system.
    pub fn from_entropy() -> RngSource<ChaCha8Rng> {
        RngSource::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_index(&mut self, upper_inclusive: usize) -> usize {
        self.rng.gen_range(0..=upper_inclusive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_range() {
        let mut src = RngSource::seeded(3);
        for upper in 0..50 {
            for _ in 0..20 {
                assert!(src.next_index(upper) <= upper);
            }
        }
    }

    #[test]
    fn zero_bound_is_always_zero() {
        let mut src = RngSource::from_entropy();
        for _ in 0..10 {
            assert_eq!(src.next_index(0), 0);
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = RngSource::seeded(1234);
        let mut b = RngSource::seeded(1234);
        let xs: Vec<usize> = (0..32).map(|_| a.next_index(1000)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.next_index(1000)).collect();
        assert_eq!(xs, ys);
    }
}
