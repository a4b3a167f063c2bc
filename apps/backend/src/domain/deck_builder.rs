//! Deck construction: identifier, card sequence and optional shuffle.

use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{SeedableRng, TryRngCore};
use rand_chacha::ChaCha20Rng;
use uuid::Uuid;

use super::cards_types::{standard_deck, Card};
use super::deck::Deck;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Builder for [`Deck`].
///
/// Defaults: fresh random identifier, full canonical 52-card sequence,
/// no shuffle.
#[derive(Debug, Default, Clone)]
pub struct DeckBuilder {
    id: Option<Uuid>,
    shuffled: bool,
    cards: Vec<Card>,
    seed: Option<u64>,
}

impl DeckBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed identifier. The nil UUID counts as "not set".
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn shuffled(mut self, shuffled: bool) -> Self {
        self.shuffled = shuffled;
        self
    }

    /// Explicit card sequence, used verbatim (duplicates kept). An empty
    /// sequence falls back to the full deck.
    pub fn cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    pub fn add_card(mut self, card: Card) -> Self {
        self.cards.push(card);
        self
    }

    /// Make the shuffle reproducible. Has no effect unless `shuffled(true)`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Result<Deck, DomainError> {
        let id = match self.id {
            Some(id) if !id.is_nil() => id,
            _ => generate_id()?,
        };

        let mut cards = if self.cards.is_empty() {
            standard_deck()
        } else {
            self.cards
        };

        // remaining is fixed by from_parts before any shuffle
        if self.shuffled {
            match self.seed {
                Some(seed) => cards.shuffle(&mut ChaCha20Rng::seed_from_u64(seed)),
                None => cards.shuffle(&mut rand::rng()),
            }
        }

        Ok(Deck::from_parts(id, self.shuffled, cards))
    }
}

/// Random (v4) UUID from the operating system's secure source.
fn generate_id() -> Result<Uuid, DomainError> {
    let mut bytes = [0u8; 16];
    OsRng.try_fill_bytes(&mut bytes).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::GenerationFailed,
            format!("secure randomness unavailable: {e}"),
        )
    })?;
    Ok(uuid::Builder::from_random_bytes(bytes).into_uuid())
}
