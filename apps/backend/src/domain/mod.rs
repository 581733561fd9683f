//! Domain layer: pure game logic types and helpers.

pub mod captures;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod turns;


#[cfg(test)]
mod tests_props_captures;
#[cfg(test)]
mod tests_props_consistency;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use captures::{possible_captures, CaptureOption};
pub use cards_types::{Card, Rank, Suit};
pub use scoring::{score_round, RoundScore};
pub use snapshot::{snapshot, RoundSnapshot};
pub use state::{next_player, Phase, Player, PlayerId, RoundState};
pub use turns::{
    finalize_round, is_round_over, legal_captures, play_card, start_new_round, FinalizeOutcome,
    PlayOutcome,
};
