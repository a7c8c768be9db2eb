//! Deck construction.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::transform::Transform;

/// Returns the 52 standard cards.
///
/// Suits come in the order Spade, Diamond, Club, Heart, each from Ace to King.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Builds a standard deck and threads it through `transforms` in order.
///
/// ```
/// use cardeck::{decks, default_sort, jokers, new_deck};
///
/// let cards = new_deck(&mut [&mut decks(2), &mut jokers(2), &mut default_sort]);
/// assert_eq!(cards.len(), 106);
///
/// assert_eq!(new_deck(&mut []).len(), 52);
/// ```
pub fn new_deck(transforms: &mut [&mut dyn Transform]) -> Vec<Card> {
    transforms
        .iter_mut()
        .fold(standard_deck(), |cards, step| step.transform(cards))
}

/// Chainable deck builder owning its transformations.
///
/// ```
/// use cardeck::{DeckBuilder, ShuffleSource, Shuffle, jokers};
///
/// let mut source = ShuffleSource::new(3);
/// let cards = DeckBuilder::new()
///     .with(jokers(1))
///     .with(Shuffle::new(&mut source))
///     .build();
/// assert_eq!(cards.len(), 53);
/// ```
#[derive(Default)]
pub struct DeckBuilder<'a> {
    transforms: Vec<Box<dyn Transform + 'a>>,
}

impl<'a> DeckBuilder<'a> {
    /// Creates a builder with no transformations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transformation to the pipeline.
    #[must_use]
    pub fn with<T: Transform + 'a>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    /// Returns the number of queued transformations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns whether no transformations are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Builds the deck, applying every transformation in insertion order.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        self.transforms
            .into_iter()
            .fold(standard_deck(), |cards, mut step| step.transform(cards))
    }
}

impl fmt::Debug for DeckBuilder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}
