use std::sync::Arc;

use crate::repos::DeckRepo;
use crate::services::DeckService;

/// Application state shared with every handler
#[derive(Clone)]
pub struct AppState {
    /// Deck use cases over the configured store
    pub decks: Arc<DeckService>,
}

impl AppState {
    /// Create a new AppState over the given deck store
    pub fn new(repo: Arc<dyn DeckRepo>) -> Self {
        Self {
            decks: Arc::new(DeckService::new(repo)),
        }
    }
}
