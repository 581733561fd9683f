//! In-memory registry of live games.
//!
//! Each round lives behind its own mutex; a handler holds the lock for the
//! full duration of one engine call, so observers never see a half-applied
//! play. The registry itself is a `DashMap`, so unrelated games never
//! contend.

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::Mutex;
use tracing::info;
use ulid::Ulid;

use crate::domain::rules::PLAYERS;
use crate::domain::snapshot::{snapshot, RoundSnapshot};
use crate::domain::state::RoundState;
use crate::domain::turns::start_new_round;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Default display names, matching the original two-seat setup.
const DEFAULT_NAMES: [&str; PLAYERS] = ["Player 1", "Player 2"];

#[derive(Default)]
pub struct GameService {
    games: DashMap<String, Arc<Mutex<RoundState>>>,
}

impl GameService {
    pub fn new() -> Self {
        Self {
            games: DashMap::new(),
        }
    }

    /// Create a game, deal its first round, and return its id and view.
    pub fn create(&self, names: Option<[String; PLAYERS]>) -> (String, RoundSnapshot) {
        let id = Ulid::new().to_string();
        let names = names.unwrap_or_else(|| DEFAULT_NAMES.map(String::from));
        let mut state = RoundState::new(names);
        let seed: u64 = rand::random();
        start_new_round(&mut state, seed);
        let snap = snapshot(&state);
        self.games.insert(id.clone(), Arc::new(Mutex::new(state)));
        info!(game_id = %id, "game created");
        (id, snap)
    }

    /// Start a fresh round for an existing game with a new shuffle.
    pub fn restart(&self, id: &str) -> Result<RoundSnapshot, DomainError> {
        let seed: u64 = rand::random();
        self.with_round(id, |state| {
            start_new_round(state, seed);
            info!(game_id = %id, "round restarted");
            Ok(snapshot(state))
        })
    }

    /// Run `f` with exclusive access to the identified round.
    pub fn with_round<T>(
        &self,
        id: &str,
        f: impl FnOnce(&mut RoundState) -> Result<T, DomainError>,
    ) -> Result<T, DomainError> {
        let entry = self.games.get(id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, format!("no game with id {id}"))
        })?;
        let round = Arc::clone(entry.value());
        // Release the map shard before taking the round lock.
        drop(entry);
        let mut guard = round.lock();
        f(&mut guard)
    }
}
