//! Core card types for the Italian 40-card deck: Card, Rank, Suit.

use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Coins,
    Cups,
    Swords,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Coins, Suit::Cups, Suit::Swords, Suit::Clubs];

    pub fn display_name(self) -> &'static str {
        match self {
            Suit::Coins => "Coins",
            Suit::Cups => "Cups",
            Suit::Swords => "Swords",
            Suit::Clubs => "Clubs",
        }
    }
}

/// Ranks of the 40-card deck. The three court cards Jack, Knight, and King
/// carry the capture values 8, 9, and 10.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Jack,
    Knight,
    King,
}

impl Rank {
    pub const ALL: [Rank; 10] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Jack,
        Rank::Knight,
        Rank::King,
    ];

    /// Numeric capture value, 1..=10.
    pub fn value(self) -> u8 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Jack => 8,
            Rank::Knight => 9,
            Rank::King => 10,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Jack => "Jack",
            Rank::Knight => "Knight",
            Rank::King => "King",
        }
    }

    /// Inverse of [`Rank::value`].
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ALL.into_iter().find(|r| r.value() == value)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn value(self) -> u8 {
        self.rank.value()
    }
}

// Note: Ord on Card is only for stable sorting (suit order then rank order).
// Capture matching compares value() alone and ignores this ordering.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Card {
    // Example: Seven of Coins (7)
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} of {} ({})",
            self.rank.display_name(),
            self.suit.display_name(),
            self.value()
        )
    }
}
