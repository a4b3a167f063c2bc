use std::sync::Arc;

use crate::adapters::InMemoryDeckRepo;
use crate::repos::DeckRepo;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    repo: Option<Arc<dyn DeckRepo>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self { repo: None }
    }

    /// Use a specific deck store instead of the in-memory default.
    pub fn with_repo(mut self, repo: Arc<dyn DeckRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn build(self) -> AppState {
        let repo = self
            .repo
            .unwrap_or_else(|| Arc::new(InMemoryDeckRepo::new()));
        AppState::new(repo)
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
