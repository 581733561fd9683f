//! Deterministic deck construction and dealing.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::rules::DECK_SIZE;

/// Generate a full 40-card deck in canonical suit-then-rank order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card { suit, rank });
        }
    }
    deck
}

/// Fisher-Yates shuffle driven by a seeded ChaCha stream.
///
/// Equal seeds produce equal orderings, which keeps rounds reproducible.
pub fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = ChaCha12Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
}

/// Draw up to `n` cards from the top of the deck.
pub fn draw(deck: &mut Vec<Card>, n: usize) -> Vec<Card> {
    let count = n.min(deck.len());
    deck.split_off(deck.len() - count)
}
