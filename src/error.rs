//! Error types for checked card construction and parsing.

use thiserror::Error;

/// Errors that can occur when building a card from raw ordinals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit ordinal is outside `0..=4`.
    #[error("invalid suit ordinal {0}")]
    InvalidSuit(u8),
    /// Rank ordinal is outside `1..=13`.
    #[error("invalid rank ordinal {0}")]
    InvalidRank(u8),
}

/// Errors that can occur when parsing a card from its display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Suit name not recognized.
    #[error("unknown suit name")]
    UnknownSuit,
    /// Rank name not recognized.
    #[error("unknown rank name")]
    UnknownRank,
    /// Input is neither `"Joker"` nor `"<Rank> of <Suit>"`.
    #[error("malformed card string")]
    Malformed,
}
