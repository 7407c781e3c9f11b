//! Deck module - standard 52-card deck construction and seeded shuffling
//!
//! The deck is an ordered `Vec<Card>` consumed from the back via `pop`.
//! Deck order is a pure function of the seed string.

use crate::core::rng::SeededRng;
use crate::types::{Card, Rank, Suit, DECK_SIZE};

/// Build a fresh 52-card deck in a fixed, reproducible order.
///
/// Suits follow `Suit::ALL` and ranks follow `Rank::ALL`, so the pre-shuffle
/// order is identical on every run.
pub fn create_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for &suit in Suit::ALL.iter() {
        for &rank in Rank::ALL.iter() {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Build and shuffle a deck for the given seed.
pub fn shuffled_deck(seed: &str) -> Vec<Card> {
    let mut deck = create_deck();
    SeededRng::from_seed(seed).shuffle(&mut deck);
    deck
}
