//! In-memory adapter for the deck repository.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::Deck;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::decks::DeckRepo;

/// Process-lifetime deck storage backed by a sharded concurrent map.
///
/// Reads hand out clones, so callers never hold a shard lock across an
/// await point.
#[derive(Debug, Default)]
pub struct InMemoryDeckRepo {
    decks: DashMap<Uuid, Deck>,
}

impl InMemoryDeckRepo {
    pub fn new() -> Self {
        Self {
            decks: DashMap::with_capacity(52),
        }
    }
}

#[async_trait]
impl DeckRepo for InMemoryDeckRepo {
    async fn create(&self, deck: Deck) -> Result<Deck, DomainError> {
        self.decks.insert(deck.id(), deck.clone());
        Ok(deck)
    }

    async fn get(&self, id: Uuid) -> Result<Deck, DomainError> {
        self.decks
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| {
                DomainError::not_found(NotFoundKind::Deck, format!("Deck {id} not found"))
            })
    }

    async fn update(&self, deck: Deck) -> Result<Deck, DomainError> {
        self.decks.insert(deck.id(), deck.clone());
        Ok(deck)
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.decks.len())
    }
}
