//! Deck transformations.
//!
//! Every transformation maps one card sequence to another and can be passed
//! to [`new_deck`](crate::deck::new_deck) or
//! [`DeckBuilder::with`](crate::deck::DeckBuilder::with), or called directly.
//! Parameterized transformations are factories returning a closure.

use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::Card;
use crate::source;

/// A single step in a deck-building pipeline.
///
/// Implemented for every `FnMut(Vec<Card>) -> Vec<Card>`, so plain functions
/// such as [`default_sort`] and the closures returned by [`jokers`],
/// [`decks`], [`filter`] and [`sort`] all qualify.
pub trait Transform {
    /// Consumes a card sequence and returns the transformed sequence.
    fn transform(&mut self, cards: Vec<Card>) -> Vec<Card>;
}

impl<F> Transform for F
where
    F: FnMut(Vec<Card>) -> Vec<Card>,
{
    fn transform(&mut self, cards: Vec<Card>) -> Vec<Card> {
        self(cards)
    }
}

/// Index-pair predicate used by [`default_sort`].
///
/// Returns whether `cards[i]` has a lower [`Card::abs_rank`] than `cards[j]`.
#[must_use]
pub fn less(cards: &[Card], i: usize, j: usize) -> bool {
    cards[i].abs_rank() < cards[j].abs_rank()
}

/// Sorts by suit, then rank (Spade, Diamond, Club, Heart), by [`Card::abs_rank`].
///
/// The sort is stable. Joker 0 ties with the King of Heart and keeps its
/// input order relative to it; jokers 1 and up sort after every heart.
#[must_use]
pub fn default_sort(cards: Vec<Card>) -> Vec<Card> {
    sort(less)(cards)
}

/// Returns a stable sort driven by an index-pair less-than predicate.
///
/// `less(cards, i, j)` is called with the sequence being sorted and two
/// positions in it, so an ordering may depend on the sequence's own content.
/// The predicate must describe a strict weak ordering.
///
/// # Panics
///
/// The returned transformation may panic if `less` is not a strict weak
/// ordering, as [`slice::sort_by`] does.
///
/// ```
/// use cardeck::{Card, Rank, Suit, sort, standard_deck};
///
/// // Kings first, then everything else in deck order.
/// let mut kings_first = sort(|cards: &[Card], i: usize, j: usize| {
///     cards[i].rank() == Some(Rank::King) && cards[j].rank() != Some(Rank::King)
/// });
/// let cards = kings_first(standard_deck());
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::King));
/// assert_eq!(cards[4], Card::new(Suit::Spade, Rank::Ace));
/// ```
pub fn sort<F>(mut less: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: FnMut(&[Card], usize, usize) -> bool,
{
    move |cards: Vec<Card>| {
        let mut order: Vec<usize> = (0..cards.len()).collect();
        order.sort_by(|&i, &j| {
            if less(&cards, i, j) {
                Ordering::Less
            } else if less(&cards, j, i) {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        order.into_iter().map(|i| cards[i]).collect()
    }
}

/// Shuffles with the process-wide source.
///
/// Seeded from the clock on first use; call [`reseed`](crate::source::reseed)
/// for reproducible output. Prefer [`Shuffle`] with an owned
/// [`ShuffleSource`](crate::source::ShuffleSource) when the caller can hold one.
#[must_use]
pub fn shuffle(mut cards: Vec<Card>) -> Vec<Card> {
    source::with_default_source(|rng| rng.shuffle_in_place(&mut cards));
    cards
}

/// Shuffle transformation drawing from a caller-supplied random source.
///
/// ```
/// use cardeck::{Shuffle, ShuffleSource, new_deck};
///
/// let mut source = ShuffleSource::new(42);
/// let cards = new_deck(&mut [&mut Shuffle::new(&mut source)]);
/// assert_eq!(cards.len(), 52);
/// ```
#[derive(Debug)]
pub struct Shuffle<'a, R: ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: Rng + ?Sized> Shuffle<'a, R> {
    /// Creates a shuffle step that borrows `rng` for its lifetime.
    pub const fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + ?Sized> Transform for Shuffle<'_, R> {
    fn transform(&mut self, mut cards: Vec<Card>) -> Vec<Card> {
        cards.shuffle(&mut *self.rng);
        cards
    }
}

/// Appends `n` jokers numbered `0..n` to the end of the deck.
pub fn jokers(n: u8) -> impl Fn(Vec<Card>) -> Vec<Card> {
    move |mut cards: Vec<Card>| {
        cards.extend((0..n).map(Card::joker));
        cards
    }
}

/// Concatenates `n` copies of the deck, as for a multi-deck shoe.
///
/// `n == 0` yields an empty deck.
pub fn decks(n: usize) -> impl Fn(Vec<Card>) -> Vec<Card> {
    move |cards: Vec<Card>| cards.repeat(n)
}

/// Removes every card for which `exclude` returns `true`.
///
/// **Note the sense of the predicate:** it selects cards to *drop*, the
/// opposite of [`Iterator::filter`] and [`Vec::retain`].
///
/// ```
/// use cardeck::{Rank, filter, new_deck};
///
/// let cards = new_deck(&mut [&mut filter(|card| {
///     matches!(card.rank(), Some(Rank::Two | Rank::Three))
/// })]);
/// assert_eq!(cards.len(), 44);
/// ```
pub fn filter<P>(mut exclude: P) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    P: FnMut(&Card) -> bool,
{
    move |mut cards: Vec<Card>| {
        cards.retain(|card| !exclude(card));
        cards
    }
}
