//! Randomness for effect placement, behind a trait so tests can script every draw.

/// A source of uniformly distributed integers.
///
/// Every randomized decision an effect makes goes through this trait, which keeps the
/// engine deterministic under test.
pub trait RandomSource {
    /// Returns an integer drawn uniformly from the half-open range `[low, high)`.
    ///
    /// A degenerate range (`high <= low`) yields `low`.
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;

    /// Returns `0` or `4` with equal probability: one of the two boundary coordinates.
    fn boundary(&mut self) -> i32 {
        self.uniform_int(0, 2) * 4
    }
}

/// A [`RandomSource`] backed by `fastrand`.
///
/// # Examples
/// ```
/// use led_cube::core::{FastRandom, RandomSource};
///
/// let mut a = FastRandom::seeded(42);
/// let mut b = FastRandom::seeded(42);
/// assert_eq!(a.uniform_int(0, 100), b.uniform_int(0, 100));
/// ```
#[derive(Debug, Clone)]
pub struct FastRandom {
    rng: fastrand::Rng,
}

impl FastRandom {
    /// Creates a generator seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible animations.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for FastRandom {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return low;
        }
        self.rng.i32(low..high)
    }
}
