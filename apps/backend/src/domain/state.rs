use crate::domain::cards_types::Card;
use crate::domain::rules::PLAYERS;

pub type PlayerId = u8; // 0..=1

/// Round lifecycle phases.
///
/// Round-over is a derived predicate over `Playing` (deck and both hands
/// empty), not a phase of its own; see [`crate::domain::turns::is_round_over`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Game created but no round dealt yet.
    Init,
    /// A round is in progress.
    Playing,
}

/// A player's per-round accounting: hand, winnings, scopa sweeps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub hand: Vec<Card>,
    pub captured: Vec<Card>,
    pub scopa_count: u8,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            captured: Vec::new(),
            scopa_count: 0,
        }
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.hand.clear();
        self.captured.clear();
        self.scopa_count = 0;
    }
}

/// Entire round container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub phase: Phase,
    /// Undealt cards; drawn from the back.
    pub deck: Vec<Card>,
    /// Face-up cards. Capture options index into this view.
    pub table: Vec<Card>,
    pub players: [Player; PLAYERS],
    /// Player who acts next. Alternates after every completed play.
    pub turn: PlayerId,
    /// Player who most recently completed a capture this round, if any.
    pub last_capturer: Option<PlayerId>,
    /// Shuffle seed of the current round, kept for reproducibility.
    pub seed: u64,
}

impl RoundState {
    pub fn new(names: [String; PLAYERS]) -> Self {
        Self {
            phase: Phase::Init,
            deck: Vec::new(),
            table: Vec::new(),
            players: names.map(Player::new),
            turn: 0,
            last_capturer: None,
            seed: 0,
        }
    }

    /// Cards accounted for across deck, table, hands, and captured piles.
    /// Equals `DECK_SIZE` at all times while a round is live.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.table.len()
            + self
                .players
                .iter()
                .map(|p| p.hand.len() + p.captured.len())
                .sum::<usize>()
    }
}

/// The other seat (0 ↔ 1).
#[inline]
pub fn next_player(p: PlayerId) -> PlayerId {
    debug_assert!((p as usize) < PLAYERS);
    p ^ 1
}
