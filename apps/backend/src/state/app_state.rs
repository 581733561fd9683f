use std::sync::Arc;

use crate::services::games::GameService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Registry of live games
    pub games: Arc<GameService>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            games: Arc::new(GameService::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
