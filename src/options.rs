//! Deck configuration options.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::DeckBuilder;
use crate::source::ShuffleSource;
use crate::transform::{decks, default_sort, jokers};

/// Declarative deck configuration.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardeck::DeckOptions;
///
/// let cards = DeckOptions::default()
///     .with_decks(6)
///     .with_jokers(2)
///     .with_shuffle_seed(42)
///     .build();
/// assert_eq!(cards.len(), 6 * 52 + 2);
/// ```
///
/// [`DeckOptions::build`] applies the steps in a fixed order: replicate the
/// deck, append jokers, sort, then shuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of standard decks combined into one.
    pub decks: usize,
    /// Number of jokers appended after replication.
    pub jokers: u8,
    /// Whether to apply the default sort.
    pub sorted: bool,
    /// Seed for shuffling; `None` leaves the deck unshuffled.
    pub shuffle_seed: Option<u64>,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self {
            decks: 1,
            jokers: 0,
            sorted: false,
            shuffle_seed: None,
        }
    }
}

impl DeckOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the number of jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_jokers(3);
    /// assert_eq!(options.jokers, 3);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, jokers: u8) -> Self {
        self.jokers = jokers;
        self
    }

    /// Sets whether the deck is sorted.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_sorted(true);
    /// assert!(options.sorted);
    /// ```
    #[must_use]
    pub const fn with_sorted(mut self, sorted: bool) -> Self {
        self.sorted = sorted;
        self
    }

    /// Enables shuffling with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_shuffle_seed(7);
    /// assert_eq!(options.shuffle_seed, Some(7));
    /// ```
    #[must_use]
    pub const fn with_shuffle_seed(mut self, seed: u64) -> Self {
        self.shuffle_seed = Some(seed);
        self
    }

    /// Disables shuffling.
    #[must_use]
    pub const fn without_shuffle(mut self) -> Self {
        self.shuffle_seed = None;
        self
    }

    /// Returns a builder with the configured steps queued.
    #[must_use]
    pub fn builder(&self) -> DeckBuilder<'static> {
        let mut builder = DeckBuilder::new()
            .with(decks(self.decks))
            .with(jokers(self.jokers));
        if self.sorted {
            builder = builder.with(default_sort);
        }
        if let Some(seed) = self.shuffle_seed {
            let mut source = ShuffleSource::new(seed);
            builder = builder.with(move |mut cards: Vec<Card>| {
                source.shuffle_in_place(&mut cards);
                cards
            });
        }
        builder
    }

    /// Builds a deck from these options.
    #[must_use]
    pub fn build(&self) -> Vec<Card> {
        self.builder().build()
    }
}
