//! Round scoring: cards, coins, sette bello, primiera, scopa bonuses.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::rules::PLAYERS;

/// Final point totals for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    pub points: [u8; PLAYERS],
}

/// Score a finished round from both players' piles and scopa counts.
///
/// Each comparative category awards one point to the strictly better side;
/// ties award nobody. Scopa bonuses are additive, uncapped, and independent
/// of the other categories.
pub fn score_round(captured: [&[Card]; PLAYERS], scopas: [u8; PLAYERS]) -> RoundScore {
    let mut points = [0u8; PLAYERS];

    // Most cards
    award(&mut points, captured[0].len(), captured[1].len());

    // Most coins
    award(&mut points, coins_count(captured[0]), coins_count(captured[1]));

    // Sette bello: exactly one side can hold the 7 of Coins
    if has_sette_bello(captured[0]) {
        points[0] += 1;
    } else if has_sette_bello(captured[1]) {
        points[1] += 1;
    }

    // Primiera, contested only when both sides cover all four suits
    if let (Some(a), Some(b)) = (primiera_total(captured[0]), primiera_total(captured[1])) {
        award(&mut points, a, b);
    }

    for (pts, scopa) in points.iter_mut().zip(scopas) {
        *pts += scopa;
    }

    RoundScore { points }
}

fn award<T: Ord>(points: &mut [u8; PLAYERS], a: T, b: T) {
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => points[0] += 1,
        std::cmp::Ordering::Less => points[1] += 1,
        std::cmp::Ordering::Equal => {}
    }
}

fn coins_count(cards: &[Card]) -> usize {
    cards.iter().filter(|c| c.suit == Suit::Coins).count()
}

fn has_sette_bello(cards: &[Card]) -> bool {
    cards
        .iter()
        .any(|c| c.suit == Suit::Coins && c.value() == 7)
}

/// Primiera weight of a rank. Sevens are the strongest, court cards weakest.
fn primiera_value(rank: Rank) -> u8 {
    match rank.value() {
        7 => 21,
        6 => 18,
        1 => 16,
        5 => 15,
        4 => 14,
        3 => 13,
        2 => 12,
        _ => 10, // Jack, Knight, King
    }
}

/// Best-card-per-suit primiera total, or `None` when the pile does not
/// cover all four suits.
fn primiera_total(cards: &[Card]) -> Option<u16> {
    let mut best: [Option<u8>; 4] = [None; 4];
    for card in cards {
        let slot = &mut best[card.suit as usize];
        let value = primiera_value(card.rank);
        if slot.map_or(true, |current| value > current) {
            *slot = Some(value);
        }
    }
    best.iter()
        .try_fold(0u16, |acc, slot| slot.map(|v| acc + u16::from(v)))
}
