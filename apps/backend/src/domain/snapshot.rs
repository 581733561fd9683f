//! Public snapshot API for observing round state over the wire.

use serde::{Deserialize, Serialize};

use crate::domain::cards_types::Card;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Phase, Player, PlayerId, RoundState};
use crate::domain::turns::is_round_over;

/// Public info about one seat: name, full hand, pile size, scopa count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPublic {
    pub name: String,
    pub hand: Vec<Card>,
    pub captured: usize,
    pub scopas: u8,
}

/// Top-level view of a round for the transport layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    /// False until the first round has been dealt.
    pub started: bool,
    pub table: Vec<Card>,
    pub players: [PlayerPublic; PLAYERS],
    pub to_act: PlayerId,
    pub deck_size: usize,
    pub round_over: bool,
}

/// Entry point: produce a snapshot of the current round state.
/// Never panics; an undealt round yields an empty snapshot.
pub fn snapshot(state: &RoundState) -> RoundSnapshot {
    RoundSnapshot {
        started: state.phase == Phase::Playing,
        table: state.table.clone(),
        players: [
            player_public(&state.players[0]),
            player_public(&state.players[1]),
        ],
        to_act: state.turn,
        deck_size: state.deck.len(),
        round_over: is_round_over(state),
    }
}

fn player_public(player: &Player) -> PlayerPublic {
    PlayerPublic {
        name: player.name.clone(),
        hand: player.hand.clone(),
        captured: player.captured.len(),
        scopas: player.scopa_count,
    }
}
