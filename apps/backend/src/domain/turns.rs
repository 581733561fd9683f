//! Round progression: dealing waves, plays, finalization.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::captures::{possible_captures, CaptureOption};
use crate::domain::cards_types::Card;
use crate::domain::dealing::{draw, full_deck, shuffle_with_seed};
use crate::domain::rules::{HAND_SIZE, INITIAL_TABLE_CARDS};
use crate::domain::state::{next_player, Phase, PlayerId, RoundState};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a single play did to the round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    /// The card taken out of the acting player's hand.
    pub played: Card,
    /// Cards moved off the table into the acting player's pile (the played
    /// card itself excluded); empty when the card was laid down.
    pub captured: Vec<Card>,
    /// Whether the capture swept the table for a scopa point.
    pub scopa: bool,
    /// Whether this play triggered a dealing wave.
    pub redealt: bool,
}

/// Table sweep performed at round end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalizeOutcome {
    /// Who received the leftover table cards. `None` when the table was
    /// already empty, or when no capture ever happened this round.
    pub awarded_to: Option<PlayerId>,
    /// The cards that were still on the table.
    pub remainder: Vec<Card>,
}

/// Start a fresh round: reshuffle, clear all piles and counters, deal 3
/// cards to each player and 4 to the table.
///
/// Always succeeds and may be called again at any time to restart.
pub fn start_new_round(state: &mut RoundState, seed: u64) {
    let mut deck = full_deck();
    shuffle_with_seed(&mut deck, seed);

    state.deck = deck;
    state.table.clear();
    for player in state.players.iter_mut() {
        player.reset_for_round();
    }
    state.turn = 0;
    state.last_capturer = None;
    state.seed = seed;
    state.phase = Phase::Playing;

    for idx in 0..state.players.len() {
        let cards = draw(&mut state.deck, HAND_SIZE);
        state.players[idx].hand.extend(cards);
    }
    let table_cards = draw(&mut state.deck, INITIAL_TABLE_CARDS);
    state.table.extend(table_cards);

    debug!(seed, "round dealt");
}

/// Legal capture options for the acting player's card at `hand_index`.
///
/// Read-only; the returned options are valid until the table next changes.
pub fn legal_captures(
    state: &RoundState,
    hand_index: usize,
) -> Result<Vec<CaptureOption>, DomainError> {
    require_playing(state, "legal_captures")?;
    let hand = &state.players[state.turn as usize].hand;
    let card = hand.get(hand_index).copied().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::InvalidHandIndex,
            format!(
                "hand index {hand_index} out of range for hand of {}",
                hand.len()
            ),
        )
    })?;
    Ok(possible_captures(card.value(), &state.table))
}

/// Play the card at `hand_index` for the player whose turn it is.
///
/// `capture_choice` selects one of the options [`legal_captures`] would
/// return for that card; `None` or an out-of-range index lays the card on
/// the table instead — captures are never applied implicitly, and declining
/// one is always allowed. The call either fully applies (hand removal,
/// table/pile mutation, turn switch, possible re-deal wave) or fully
/// rejects with the state untouched.
pub fn play_card(
    state: &mut RoundState,
    hand_index: usize,
    capture_choice: Option<usize>,
) -> Result<PlayOutcome, DomainError> {
    require_playing(state, "play_card")?;

    let actor = state.turn;
    let hand_len = state.players[actor as usize].hand.len();
    if hand_index >= hand_len {
        return Err(DomainError::validation(
            ValidationKind::InvalidHandIndex,
            format!("hand index {hand_index} out of range for hand of {hand_len}"),
        ));
    }

    let total_before = state.card_count();
    let played = state.players[actor as usize].hand.remove(hand_index);
    let options = possible_captures(played.value(), &state.table);
    let chosen = capture_choice.and_then(|idx| options.get(idx));

    let mut outcome = PlayOutcome {
        played,
        captured: Vec::new(),
        scopa: false,
        redealt: false,
    };

    match chosen {
        Some(option) => {
            let taken = option.cards(&state.table);
            // Remove the selected positions back-to-front so the earlier
            // indices stay valid.
            for &idx in option.indices.iter().rev() {
                state.table.remove(idx);
            }
            let pile = &mut state.players[actor as usize].captured;
            pile.push(played);
            pile.extend(taken.iter().copied());
            state.last_capturer = Some(actor);

            if state.table.is_empty() && !state.deck.is_empty() {
                state.players[actor as usize].scopa_count += 1;
                outcome.scopa = true;
            }
            outcome.captured = taken;
        }
        None => {
            state.table.push(played);
        }
    }

    state.turn = next_player(actor);

    if state.players.iter().all(|p| p.hand.is_empty()) && !state.deck.is_empty() {
        for idx in 0..state.players.len() {
            let cards = draw(&mut state.deck, HAND_SIZE);
            state.players[idx].hand.extend(cards);
        }
        outcome.redealt = true;
    }

    debug_assert_eq!(state.card_count(), total_before);
    debug!(
        player = actor,
        played = %outcome.played,
        captured = outcome.captured.len(),
        scopa = outcome.scopa,
        "play applied"
    );
    Ok(outcome)
}

/// Whether the round has reached its terminal state: deck exhausted and
/// both hands played out.
pub fn is_round_over(state: &RoundState) -> bool {
    state.phase == Phase::Playing
        && state.deck.is_empty()
        && state.players.iter().all(|p| p.hand.is_empty())
}

/// Award the leftover table cards to the last capturer and clear the table.
///
/// Rejected with `RoundNotOver` while cards remain in play. When no capture
/// ever happened this round, the remainder is cleared without being awarded
/// to anyone — an explicit policy. Calling again after success is a no-op.
pub fn finalize_round(state: &mut RoundState) -> Result<FinalizeOutcome, DomainError> {
    require_playing(state, "finalize_round")?;
    if !is_round_over(state) {
        return Err(DomainError::validation(
            ValidationKind::RoundNotOver,
            "round is not over yet",
        ));
    }

    let remainder = std::mem::take(&mut state.table);
    let awarded_to = if remainder.is_empty() {
        None
    } else {
        state.last_capturer
    };
    if let Some(capturer) = awarded_to {
        state.players[capturer as usize]
            .captured
            .extend(remainder.iter().copied());
    }

    debug!(?awarded_to, remainder = remainder.len(), "round finalized");
    Ok(FinalizeOutcome {
        awarded_to,
        remainder,
    })
}

fn require_playing(state: &RoundState, ctx: &'static str) -> Result<(), DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::validation(
            ValidationKind::NotStarted,
            format!("no round in progress ({ctx})"),
        ));
    }
    Ok(())
}
