//! The shared random source every generator draws from.
//!
//! Generators never own randomness directly. They hold a [`Random`] handle
//! and fork a short-lived [`ChaCha8Rng`] for each generation call, so the
//! handle can be shared across threads without external locking. A
//! [`SeededRandom`] source makes a sequence of calls reproducible.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::GenerationError;

/// ASCII digits.
pub(crate) const DIGITS: &[u8] = b"0123456789";

/// ASCII uppercase letters.
pub(crate) const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// ASCII lowercase letters.
pub(crate) const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// A source of per-call random generators.
///
/// Implementations must be safe to call from many threads at once.
pub trait RandomSource: Send + Sync + fmt::Debug {
    /// Derives a fresh generator for a single generation call.
    fn fork(&self) -> ChaCha8Rng;
}

/// Draws from the thread-local generator provided by `rand`.
///
/// Each OS thread has its own generator, so concurrent callers never
/// contend. Output is not reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn fork(&self) -> ChaCha8Rng {
        ChaCha8Rng::from_rng(&mut rand::rng())
    }
}

/// A reproducible source seeded from a `u64`.
///
/// The same seed and the same sequence of calls yield the same values.
pub struct SeededRandom {
    seed: u64,
    state: Mutex<ChaCha8Rng>,
}

impl SeededRandom {
    /// Creates a source from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            state: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the seed this source was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl fmt::Debug for SeededRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeededRandom")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl RandomSource for SeededRandom {
    fn fork(&self) -> ChaCha8Rng {
        // A poisoned lock still holds a usable generator state.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        ChaCha8Rng::from_rng(&mut *state)
    }
}

/// Cheaply cloneable handle to a shared [`RandomSource`].
///
/// # Example
///
/// ```
/// use data_mocker::Random;
///
/// let random = Random::seeded(7);
/// let value = random.int_between(1, 6).expect("valid range");
/// assert!((1..=6).contains(&value));
/// ```
#[derive(Debug, Clone)]
pub struct Random {
    source: Arc<dyn RandomSource>,
}

impl Random {
    /// Wraps an arbitrary source.
    #[must_use]
    pub fn new(source: Arc<dyn RandomSource>) -> Self {
        Self { source }
    }

    /// Returns a handle backed by the thread-local generator.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(Arc::new(ThreadRandom))
    }

    /// Returns a handle backed by a reproducible seeded generator.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(Arc::new(SeededRandom::new(seed)))
    }

    /// Forks a generator for one generation call.
    #[must_use]
    pub fn rng(&self) -> ChaCha8Rng {
        self.source.fork()
    }

    /// Draws an index uniformly from `[0, n)`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `n` is zero.
    pub fn index(&self, n: usize) -> Result<usize, GenerationError> {
        if n == 0 {
            return Err(GenerationError::invalid_argument(
                "index bound must be positive",
            ));
        }
        Ok(self.rng().random_range(0..n))
    }

    /// Draws an integer uniformly from the inclusive range `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidRange`] when `min > max`.
    pub fn int_between(&self, min: i64, max: i64) -> Result<i64, GenerationError> {
        if min > max {
            return Err(GenerationError::invalid_range(format!(
                "min {min} is greater than max {max}"
            )));
        }
        Ok(self.rng().random_range(min..=max))
    }

    /// Draws a long uniformly from `[0, n)`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidArgument`] when `n` is zero.
    pub fn long_below(&self, n: u64) -> Result<u64, GenerationError> {
        if n == 0 {
            return Err(GenerationError::invalid_argument(
                "long bound must be positive",
            ));
        }
        Ok(self.rng().random_range(0..n))
    }

    /// Draws a double uniformly from `[0, 1)`.
    #[must_use]
    pub fn unit(&self) -> f64 {
        self.rng().random::<f64>()
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::thread()
    }
}

/// Picks one element of a lookup table.
pub(crate) fn pick<T, R>(rng: &mut R, items: &[T], what: &str) -> Result<T, GenerationError>
where
    T: Copy,
    R: Rng + ?Sized,
{
    items
        .choose(rng)
        .copied()
        .ok_or_else(|| GenerationError::invalid_argument(format!("{what} must not be empty")))
}

/// Builds a string of `len` characters drawn from an ASCII alphabet.
pub(crate) fn from_alphabet<R>(rng: &mut R, alphabet: &[u8], len: usize) -> String
where
    R: Rng + ?Sized,
{
    (0..len)
        .filter_map(|_| alphabet.choose(rng).copied().map(char::from))
        .collect()
}

/// Builds a string of `len` random decimal digits.
pub(crate) fn digits<R>(rng: &mut R, len: usize) -> String
where
    R: Rng + ?Sized,
{
    from_alphabet(rng, DIGITS, len)
}

/// Draws one ASCII digit.
pub(crate) fn digit<R>(rng: &mut R) -> char
where
    R: Rng + ?Sized,
{
    char::from(b'0' + rng.random_range(0..10_u8))
}

/// Draws one ASCII uppercase letter.
pub(crate) fn upper_letter<R>(rng: &mut R) -> char
where
    R: Rng + ?Sized,
{
    char::from(b'A' + rng.random_range(0..26_u8))
}
