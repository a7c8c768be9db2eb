//! Property tests for deck transformations.

use std::collections::HashMap;

use cardeck::{
    Card, DECK_SIZE, Rank, ShuffleSource, Suit, decks, default_sort, filter, jokers,
    standard_deck,
};
use proptest::prelude::*;

fn counts(cards: &[Card]) -> HashMap<Card, usize> {
    let mut map = HashMap::new();
    for c in cards {
        *map.entry(*c).or_insert(0) += 1;
    }
    map
}

fn any_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        (0..4u8, 1..=13u8).prop_map(|(suit, rank)| {
            let suit = Suit::try_from(suit).unwrap_or(Suit::Spade);
            let rank = Rank::try_from(rank).unwrap_or(Rank::Ace);
            Card::new(suit, rank)
        }),
        any::<u8>().prop_map(Card::joker),
    ]
}

proptest! {
    #[test]
    fn shuffle_preserves_multiset(seed in any::<u64>(), cards in prop::collection::vec(any_card(), 0..120)) {
        let out = ShuffleSource::new(seed).shuffled(&cards);
        prop_assert_eq!(out.len(), cards.len());
        prop_assert_eq!(counts(&out), counts(&cards));
    }

    #[test]
    fn shuffle_is_deterministic(seed in any::<u64>()) {
        let deck = standard_deck();
        prop_assert_eq!(
            ShuffleSource::new(seed).shuffled(&deck),
            ShuffleSource::new(seed).shuffled(&deck)
        );
    }

    #[test]
    fn jokers_add_exactly_n(n in any::<u8>(), cards in prop::collection::vec(any_card(), 0..60)) {
        let before = cards.iter().filter(|c| c.is_joker()).count();
        let len = cards.len();
        let out = jokers(n)(cards);
        prop_assert_eq!(out.len(), len + n as usize);
        prop_assert_eq!(out.iter().filter(|c| c.is_joker()).count(), before + n as usize);
    }

    #[test]
    fn replicate_multiplies_length(n in 0..8usize, cards in prop::collection::vec(any_card(), 0..60)) {
        let len = cards.len();
        prop_assert_eq!(decks(n)(cards).len(), len * n);
    }

    #[test]
    fn filter_removes_only_matches(rank in 1..=13u8) {
        let rank = Rank::try_from(rank).unwrap_or(Rank::Ace);
        let out = filter(|c: &Card| c.rank() == Some(rank))(standard_deck());
        prop_assert_eq!(out.len(), DECK_SIZE - 4);
        prop_assert!(out.iter().all(|c| c.rank() != Some(rank)));
    }

    #[test]
    fn default_sort_is_idempotent(cards in prop::collection::vec(any_card(), 0..120)) {
        let once = default_sort(cards.clone());
        prop_assert!(once.windows(2).all(|w| w[0].abs_rank() <= w[1].abs_rank()));
        prop_assert_eq!(counts(&once), counts(&cards));
        prop_assert_eq!(default_sort(once.clone()), once);
    }
}
