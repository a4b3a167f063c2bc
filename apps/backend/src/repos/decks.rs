//! Deck repository trait (storage port for the deck service).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Deck;
use crate::errors::domain::DomainError;

/// Keyed deck storage.
///
/// Implementations must be safe to call concurrently; the service adds
/// per-deck serialization for read-modify-write sequences on top.
#[async_trait]
pub trait DeckRepo: Send + Sync {
    /// Insert under the deck's own id, replacing any existing entry.
    async fn create(&self, deck: Deck) -> Result<Deck, DomainError>;

    /// Exact-key lookup. Fails with `NotFound(Deck)` when absent.
    async fn get(&self, id: Uuid) -> Result<Deck, DomainError>;

    /// Full replace under the deck's id.
    async fn update(&self, deck: Deck) -> Result<Deck, DomainError>;

    /// Number of stored decks.
    async fn count(&self) -> Result<usize, DomainError>;
}
