use serde::{Deserialize, Serialize};

use crate::domain::{Card, Deck, Rank, Suit};

/// Display form of a card. `value` and `suit` serialize through the
/// domain's canonical strings ("10", "ACE", "CLUBS").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub value: Rank,
    pub suit: Suit,
    pub code: String,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            value: card.rank,
            suit: card.suit,
            code: card.code(),
        }
    }
}

pub fn card_views(cards: &[Card]) -> Vec<CardView> {
    cards.iter().map(CardView::from).collect()
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CreateDeckRequest {
    /// Card codes; empty means the full 52-card deck.
    pub cards: Vec<String>,
    pub shuffled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateDeckResponse {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
}

impl From<&Deck> for CreateDeckResponse {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id().to_string(),
            shuffled: deck.is_shuffled(),
            remaining: deck.remaining(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpenDeckRequest {
    pub deck_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDeckResponse {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<CardView>,
}

impl From<&Deck> for OpenDeckResponse {
    fn from(deck: &Deck) -> Self {
        Self {
            deck_id: deck.id().to_string(),
            shuffled: deck.is_shuffled(),
            remaining: deck.remaining(),
            cards: card_views(deck.cards()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCardsRequest {
    pub deck_id: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCardsResponse {
    pub cards: Vec<CardView>,
}
