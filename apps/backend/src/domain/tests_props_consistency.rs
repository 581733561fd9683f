//! Property tests for round progression (pure domain, no transport).
//!
//! Properties tested:
//! - The 40-card conservation invariant holds after every play
//! - The turn alternates strictly, never skipping a seat
//! - Hands never exceed 3 cards between dealing waves
//! - Every round terminates after exactly 36 plays
//! - A rejected play leaves the state bit-for-bit unchanged

use proptest::prelude::*;

use crate::domain::rules::DECK_SIZE;
use crate::domain::state::RoundState;
use crate::domain::turns::{
    finalize_round, is_round_over, legal_captures, play_card, start_new_round,
};

fn fresh(seed: u64) -> RoundState {
    let mut state = RoundState::new(["P1".to_string(), "P2".to_string()]);
    start_new_round(&mut state, seed);
    state
}

proptest! {
    #[test]
    fn random_rounds_conserve_cards_and_alternate_turns(
        seed in any::<u64>(),
        hints in prop::collection::vec(any::<usize>(), 36),
    ) {
        let mut state = fresh(seed);
        let mut plays = 0usize;

        for hint in hints {
            if is_round_over(&state) {
                break;
            }
            let hand_len = state.players[state.turn as usize].hand.len();
            prop_assert!(hand_len > 0, "the acting player must hold cards");

            let hand_index = hint % hand_len;
            let options = legal_captures(&state, hand_index).unwrap();
            // Pick an option by hint, sometimes deliberately declining.
            let pick = (hint / 7) % (options.len() + 1);
            let choice = (pick < options.len()).then_some(pick);

            let turn_before = state.turn;
            play_card(&mut state, hand_index, choice).unwrap();
            plays += 1;

            prop_assert_eq!(state.card_count(), DECK_SIZE);
            prop_assert_ne!(state.turn, turn_before);
            prop_assert_eq!(state.turn as usize, plays % 2);
            for player in &state.players {
                prop_assert!(player.hand.len() <= 3);
            }
        }

        prop_assert_eq!(plays, 36);
        prop_assert!(is_round_over(&state));

        let captured_before: usize =
            state.players.iter().map(|p| p.captured.len()).sum();
        let table_len = state.table.len();
        let outcome = finalize_round(&mut state).unwrap();
        prop_assert!(state.table.is_empty());
        prop_assert_eq!(outcome.remainder.len(), table_len);

        let captured_after: usize =
            state.players.iter().map(|p| p.captured.len()).sum();
        if outcome.awarded_to.is_some() {
            prop_assert_eq!(captured_after, DECK_SIZE);
        } else {
            prop_assert_eq!(captured_after, captured_before);
        }
    }

    #[test]
    fn rejected_plays_never_mutate(
        seed in any::<u64>(),
        excess in 0usize..10,
    ) {
        let mut state = fresh(seed);
        let hand_len = state.players[0].hand.len();
        let before = state.clone();

        let result = play_card(&mut state, hand_len + excess, Some(0));
        prop_assert!(result.is_err());
        prop_assert_eq!(state, before);
    }

    #[test]
    fn scopa_counts_only_rise_on_sweeps_with_deck_remaining(
        seed in any::<u64>(),
        hints in prop::collection::vec(any::<usize>(), 36),
    ) {
        let mut state = fresh(seed);
        for hint in hints {
            if is_round_over(&state) {
                break;
            }
            let actor = state.turn as usize;
            let hand_len = state.players[actor].hand.len();
            let hand_index = hint % hand_len;
            let options = legal_captures(&state, hand_index).unwrap();
            let choice = (!options.is_empty()).then_some(hint % options.len().max(1));

            let scopas_before = [state.players[0].scopa_count, state.players[1].scopa_count];
            let deck_before = state.deck.len();
            let outcome = play_card(&mut state, hand_index, choice).unwrap();

            if outcome.scopa {
                // Only the actor's counter moves, by exactly one, and only
                // when the capture emptied the table with cards undealt.
                prop_assert!(deck_before > 0);
                prop_assert!(!outcome.captured.is_empty());
                prop_assert_eq!(
                    state.players[actor].scopa_count,
                    scopas_before[actor] + 1
                );
                prop_assert_eq!(
                    state.players[1 - actor].scopa_count,
                    scopas_before[1 - actor]
                );
            } else {
                prop_assert_eq!(
                    [state.players[0].scopa_count, state.players[1].scopa_count],
                    scopas_before
                );
            }
        }
    }
}
