//! CLI deck printer example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use cardeck::{Card, DeckOptions, Suit};

fn main() {
    println!("Deck printer example (empty input keeps the default)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let decks = prompt_usize("Number of decks [1]: ").unwrap_or(1);
    let jokers = prompt_usize("Number of jokers [0]: ")
        .and_then(|n| u8::try_from(n).ok())
        .unwrap_or(0);

    let mut options = DeckOptions::default().with_decks(decks).with_jokers(jokers);
    match prompt_line("Order (s = sorted, r = shuffled, n = as built) [r]: ").as_str() {
        "s" | "sorted" => options = options.with_sorted(true),
        "n" | "none" => {}
        _ => options = options.with_shuffle_seed(seed),
    }

    let cards = options.build();
    for (i, card) in cards.iter().enumerate() {
        println!("{:>4}  {}", i + 1, card);
    }
    println!("{} card(s), {} joker(s)", cards.len(), count_jokers(&cards));

    let query = prompt_line("Look up a card (e.g. \"Queen of Club\"): ");
    if query.is_empty() {
        return;
    }
    match query.parse::<Card>() {
        Ok(card) => print_positions(&cards, card),
        Err(err) => println!("Parse error: {err}"),
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    prompt_line(prompt).parse().ok()
}

fn count_jokers(cards: &[Card]) -> usize {
    cards.iter().filter(|card| card.suit() == Suit::Joker).count()
}

fn print_positions(cards: &[Card], wanted: Card) {
    let positions: Vec<String> = cards
        .iter()
        .enumerate()
        .filter(|(_, card)| {
            if wanted.is_joker() {
                card.is_joker()
            } else {
                **card == wanted
            }
        })
        .map(|(i, _)| (i + 1).to_string())
        .collect();

    if positions.is_empty() {
        println!("{wanted} is not in the deck.");
    } else {
        println!("{wanted} found at {}", positions.join(", "));
    }
}
