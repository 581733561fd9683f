//! Fixed parameters of the two-player game.

pub const PLAYERS: usize = 2;
pub const DECK_SIZE: usize = 40;

/// Cards dealt to each player at round start and at every re-deal wave.
pub const HAND_SIZE: usize = 3;

/// Cards dealt face-up to the table at round start.
pub const INITIAL_TABLE_CARDS: usize = 4;
