//! Serialization and deserialization for card types
//!
//! A card crosses the wire with three independent fields: the suit name,
//! the rank display name, and the numeric value 1..=10.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::cards_types::{Card, Rank, Suit};

// Suit serde
impl Serialize for Suit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for Suit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "Coins" => Ok(Suit::Coins),
            "Cups" => Ok(Suit::Cups),
            "Swords" => Ok(Suit::Swords),
            "Clubs" => Ok(Suit::Clubs),
            _ => Err(serde::de::Error::custom(format!("Invalid suit: {s}"))),
        }
    }
}

// Rank serde
impl Serialize for Rank {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for Rank {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Rank::ALL
            .into_iter()
            .find(|r| r.display_name() == s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid rank: {s}")))
    }
}

// Card serde: { "suit": "Coins", "rank": "Seven", "value": 7 }
impl Serialize for Card {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Card", 3)?;
        state.serialize_field("suit", &self.suit)?;
        state.serialize_field("rank", &self.rank)?;
        state.serialize_field("value", &self.value())?;
        state.end()
    }
}

/// Incoming card shape. The value field is redundant with the rank and is
/// only checked for consistency when present.
#[derive(Deserialize)]
struct CardWire {
    suit: Suit,
    rank: Rank,
    #[serde(default)]
    value: Option<u8>,
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = CardWire::deserialize(deserializer)?;
        let card = Card {
            suit: wire.suit,
            rank: wire.rank,
        };
        if let Some(value) = wire.value {
            if value != card.value() {
                return Err(serde::de::Error::custom(format!(
                    "value {value} does not match rank {}",
                    card.rank.display_name()
                )));
            }
        }
        Ok(card)
    }
}
