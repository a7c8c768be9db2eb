//! Card types and deck constants.

use alloc::format;
use core::fmt;
use core::str::FromStr;

use crate::error::{CardError, ParseCardError};

/// Card suit.
///
/// The declaration order is the order suits appear in a freshly built deck
/// and the major key of the default sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spade = 0,
    /// Diamonds.
    Diamond = 1,
    /// Clubs.
    Club = 2,
    /// Hearts.
    Heart = 3,
    /// Sentinel suit carried by joker cards.
    Joker = 4,
}

impl Suit {
    /// The four playable suits, in deck order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Every suit including [`Suit::Joker`].
    pub const ALL: [Self; 5] = [
        Self::Spade,
        Self::Diamond,
        Self::Club,
        Self::Heart,
        Self::Joker,
    ];

    /// Returns the suit's ordinal (`Spade` = 0 through `Joker` = 4).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the suit for an ordinal, or `None` if it is out of range.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Spade),
            1 => Some(Self::Diamond),
            2 => Some(Self::Club),
            3 => Some(Self::Heart),
            4 => Some(Self::Joker),
            _ => None,
        }
    }

    /// Returns the canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spade => "Spade",
            Self::Diamond => "Diamond",
            Self::Club => "Club",
            Self::Heart => "Heart",
            Self::Joker => "Joker",
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal).ok_or(CardError::InvalidSuit(ordinal))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.name() == s)
            .ok_or(ParseCardError::UnknownSuit)
    }
}

/// Card rank, ordered `Ace < Two < ... < King`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Rank {
    /// Ace.
    Ace = 1,
    /// Two.
    Two = 2,
    /// Three.
    Three = 3,
    /// Four.
    Four = 4,
    /// Five.
    Five = 5,
    /// Six.
    Six = 6,
    /// Seven.
    Seven = 7,
    /// Eight.
    Eight = 8,
    /// Nine.
    Nine = 9,
    /// Ten.
    Ten = 10,
    /// Jack.
    Jack = 11,
    /// Queen.
    Queen = 12,
    /// King.
    King = 13,
}

impl Rank {
    /// Lowest rank.
    pub const MIN: Self = Self::Ace;
    /// Highest rank.
    pub const MAX: Self = Self::King;

    /// Every rank from Ace to King.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the rank's ordinal (`Ace` = 1 through `King` = 13).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the rank for an ordinal, or `None` if it is outside `1..=13`.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            1..=13 => Some(Self::ALL[ordinal as usize - 1]),
            _ => None,
        }
    }

    /// Returns the canonical display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ace => "Ace",
            Self::Two => "Two",
            Self::Three => "Three",
            Self::Four => "Four",
            Self::Five => "Five",
            Self::Six => "Six",
            Self::Seven => "Seven",
            Self::Eight => "Eight",
            Self::Nine => "Nine",
            Self::Ten => "Ten",
            Self::Jack => "Jack",
            Self::Queen => "Queen",
            Self::King => "King",
        }
    }
}

impl TryFrom<u8> for Rank {
    type Error = CardError;

    fn try_from(ordinal: u8) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal).ok_or(CardError::InvalidRank(ordinal))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.name() == s)
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// A playing card.
///
/// A standard card pairs a playable suit with a [`Rank`]. A joker carries
/// [`Suit::Joker`] and stores a sequence number in place of the rank, so
/// several jokers in one deck stay distinguishable.
///
/// ```
/// use cardeck::{Card, Rank, Suit};
///
/// assert_eq!(Card::new(Suit::Heart, Rank::King).to_string(), "King of Heart");
/// assert_eq!(Card::joker(3).to_string(), "Joker");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Passing [`Suit::Joker`] yields a joker whose sequence number is the
    /// rank's ordinal; use [`Card::joker`] to pick the number directly.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank: rank.ordinal(),
        }
    }

    /// Creates a joker with the given sequence number.
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self {
            suit: Suit::Joker,
            rank: index,
        }
    }

    /// Creates a card from a suit and a raw rank byte.
    ///
    /// For jokers any byte is accepted as the sequence number.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the suit is playable and `rank`
    /// is outside `1..=13`.
    pub const fn try_from_parts(suit: Suit, rank: u8) -> Result<Self, CardError> {
        if matches!(suit, Suit::Joker) {
            return Ok(Self::joker(rank));
        }
        match Rank::from_ordinal(rank) {
            Some(rank) => Ok(Self::new(suit, rank)),
            None => Err(CardError::InvalidRank(rank)),
        }
    }

    /// Returns the card's suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Returns the card's rank, or `None` for a joker.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        if self.is_joker() {
            None
        } else {
            Rank::from_ordinal(self.rank)
        }
    }

    /// Returns the joker's sequence number, or `None` for a standard card.
    #[must_use]
    pub const fn joker_index(self) -> Option<u8> {
        if self.is_joker() {
            Some(self.rank)
        } else {
            None
        }
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Returns the card's absolute rank, `suit * 13 + rank`.
    ///
    /// Orders suits first, then ranks. A joker's key is `52 + index`, so
    /// joker 0 ties with the King of Heart and a stable sort keeps the two
    /// in input order; later jokers follow every heart.
    #[must_use]
    pub const fn abs_rank(self) -> u16 {
        self.suit.ordinal() as u16 * Rank::MAX.ordinal() as u16 + self.rank as u16
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank() {
            Some(rank) => f.pad(&format!("{rank} of {}", self.suit)),
            None => f.pad(Suit::Joker.name()),
        }
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the display form. A parsed joker gets sequence number 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Suit::Joker.name() {
            return Ok(Self::joker(0));
        }
        let (rank, suit) = s.split_once(" of ").ok_or(ParseCardError::Malformed)?;
        let rank: Rank = rank.parse()?;
        match suit.parse::<Suit>()? {
            Suit::Joker => Err(ParseCardError::Malformed),
            suit => Ok(Self::new(suit, rank)),
        }
    }
}

/// Number of cards per standard deck.
pub const DECK_SIZE: usize = 52;
