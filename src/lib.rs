//! A playing-card deck model with optional `no_std` support.
//!
//! The crate builds standard 52-card decks and threads them through
//! composable [transformations](transform): sorting, shuffling, replicating,
//! adding jokers, and filtering.
//!
//! # Example
//!
//! ```
//! use cardeck::{Card, Rank, ShuffleSource, Shuffle, Suit, jokers, new_deck};
//!
//! let mut source = ShuffleSource::new(42);
//! let cards = new_deck(&mut [&mut jokers(2), &mut Shuffle::new(&mut source)]);
//! assert_eq!(cards.len(), 54);
//! assert_eq!(Card::new(Suit::Spade, Rank::Three).to_string(), "Three of Spade");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod source;
mod sync;
pub mod transform;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{DeckBuilder, new_deck, standard_deck};
pub use error::{CardError, ParseCardError};
pub use options::DeckOptions;
pub use source::{ShuffleSource, reseed, shuffled};
pub use transform::{
    Shuffle, Transform, decks, default_sort, filter, jokers, less, shuffle, sort,
};
