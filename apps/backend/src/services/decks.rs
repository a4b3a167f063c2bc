//! Deck domain service: create, open and draw.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::{try_parse_cards, DeckBuilder};
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};
use crate::protocol::decks::card_views;
use crate::protocol::{
    CreateDeckRequest, CreateDeckResponse, DrawCardsRequest, DrawCardsResponse, OpenDeckRequest,
    OpenDeckResponse,
};
use crate::repos::DeckRepo;

/// Deck use cases on top of a [`DeckRepo`].
///
/// Draws are serialized per deck: a draw holds that deck's mutex for its
/// whole read-draw-write sequence, so concurrent draws on one deck never
/// hand out the same card. Draws on different decks do not contend.
pub struct DeckService {
    repo: Arc<dyn DeckRepo>,
    draw_locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl DeckService {
    pub fn new(repo: Arc<dyn DeckRepo>) -> Self {
        Self {
            repo,
            draw_locks: DashMap::new(),
        }
    }

    /// Build a deck from the requested codes (or the full 52) and store it.
    pub async fn create_deck(
        &self,
        req: CreateDeckRequest,
    ) -> Result<CreateDeckResponse, DomainError> {
        let cards = try_parse_cards(&req.cards)?;

        let deck = DeckBuilder::new()
            .cards(cards)
            .shuffled(req.shuffled)
            .build()?;

        let deck = self
            .repo
            .create(deck)
            .await
            .map_err(|e| e.wrap_infra(InfraErrorKind::CreateFailed))?;

        info!(
            deck_id = %deck.id(),
            shuffled = deck.is_shuffled(),
            remaining = deck.remaining(),
            "deck created"
        );

        Ok(CreateDeckResponse::from(&deck))
    }

    /// Return the deck with every remaining card in draw order.
    pub async fn open_deck(&self, req: OpenDeckRequest) -> Result<OpenDeckResponse, DomainError> {
        let id = parse_deck_id(&req.deck_id)?;
        let deck = self.repo.get(id).await?;
        Ok(OpenDeckResponse::from(&deck))
    }

    /// Draw up to `count` cards from the front of the deck.
    pub async fn draw_cards(
        &self,
        req: DrawCardsRequest,
    ) -> Result<DrawCardsResponse, DomainError> {
        let id = parse_deck_id(&req.deck_id)?;

        let lock = self.draw_lock(id).await?;
        let _guard = lock.lock().await;

        let mut deck = self.repo.get(id).await?;
        let drawn = deck.draw(req.count as usize);
        let remaining = deck.remaining();

        self.repo
            .update(deck)
            .await
            .map_err(|e| e.wrap_infra(InfraErrorKind::UpdateFailed))?;

        debug!(
            deck_id = %id,
            requested = req.count,
            drawn = drawn.len(),
            remaining,
            "cards drawn"
        );

        Ok(DrawCardsResponse {
            cards: card_views(&drawn),
        })
    }

    /// Number of decks currently stored.
    pub async fn deck_count(&self) -> Result<usize, DomainError> {
        self.repo.count().await
    }

    /// Per-deck mutex, created on first draw. Unknown ids are rejected before
    /// an entry is made so the lock map only grows with stored decks.
    async fn draw_lock(&self, id: Uuid) -> Result<Arc<Mutex<()>>, DomainError> {
        let existing = self.draw_locks.get(&id).map(|entry| entry.value().clone());
        if let Some(lock) = existing {
            return Ok(lock);
        }

        self.repo.get(id).await?;
        Ok(self.draw_locks.entry(id).or_default().value().clone())
    }
}

/// Parse a deck identifier; malformed input is a client error.
pub fn parse_deck_id(raw: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|e| {
        DomainError::validation(
            ValidationKind::InvalidDeckId,
            format!("Invalid deck id '{raw}': {e}"),
        )
    })
}
