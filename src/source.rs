//! Pseudo-random sources for shuffling.
//!
//! [`ShuffleSource`] is the injectable source: hold one and pass it to
//! [`Shuffle`](crate::transform::Shuffle) for reproducible results. A
//! process-wide default also exists for [`shuffle`](crate::transform::shuffle);
//! it is seeded from the clock on first use (or from a fixed seed without
//! `std`) and can be replaced with [`reseed`].

use alloc::vec::Vec;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::sync::Mutex;

/// Seed for the process-wide source when there is no clock to read.
#[cfg(not(feature = "std"))]
const FALLBACK_SEED: u64 = 0;

static DEFAULT_SOURCE: Mutex<Option<ShuffleSource>> = Mutex::new(None);

/// Deterministic random source for shuffling.
///
/// The same seed always yields the same sequence of permutations.
///
/// ```
/// use cardeck::{ShuffleSource, standard_deck};
///
/// let deck = standard_deck();
/// let a = ShuffleSource::new(7).shuffled(&deck);
/// let b = ShuffleSource::new(7).shuffled(&deck);
/// assert_eq!(a, b);
/// ```
#[derive(Debug, Clone)]
pub struct ShuffleSource {
    rng: ChaCha8Rng,
}

impl ShuffleSource {
    /// Creates a source from a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from the current time in seconds.
    #[cfg(feature = "std")]
    #[must_use]
    pub fn from_time() -> Self {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        Self::new(seed)
    }

    /// Returns a shuffled copy of `cards`, leaving the input untouched.
    pub fn shuffled(&mut self, cards: &[Card]) -> Vec<Card> {
        shuffled(cards, &mut self.rng)
    }

    /// Shuffles `cards` in place.
    pub fn shuffle_in_place(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }

    #[cfg(feature = "std")]
    fn process_default() -> Self {
        Self::from_time()
    }

    #[cfg(not(feature = "std"))]
    fn process_default() -> Self {
        Self::new(FALLBACK_SEED)
    }
}

impl RngCore for ShuffleSource {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        self.rng.fill_bytes(dst);
    }
}

/// Returns a uniformly shuffled copy of `cards` using `rng`.
///
/// Uses a Fisher-Yates shuffle; every card of the input appears exactly once
/// in the output.
pub fn shuffled<R: Rng + ?Sized>(cards: &[Card], rng: &mut R) -> Vec<Card> {
    let mut out = cards.to_vec();
    out.shuffle(rng);
    out
}

/// Replaces the process-wide source with one seeded from `seed`.
///
/// Later calls to [`shuffle`](crate::transform::shuffle) become reproducible.
pub fn reseed(seed: u64) {
    *DEFAULT_SOURCE.lock() = Some(ShuffleSource::new(seed));
}

/// Runs `f` with exclusive access to the process-wide source.
pub(crate) fn with_default_source<T>(f: impl FnOnce(&mut ShuffleSource) -> T) -> T {
    let mut source = DEFAULT_SOURCE.lock();
    f(source.get_or_insert_with(ShuffleSource::process_default))
}
