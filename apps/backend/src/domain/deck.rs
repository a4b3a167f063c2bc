//! Deck aggregate and its draw mutation.

use uuid::Uuid;

use super::cards_types::Card;

/// An ordered, mutable sequence of cards. Index 0 is the next card drawn.
///
/// `remaining` always equals `cards.len()`; it is tracked separately because
/// it is part of every response and is never recomputed from the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: Uuid,
    shuffled: bool,
    remaining: usize,
    cards: Vec<Card>,
}

impl Deck {
    /// Assemble a deck from already-ordered parts. Use `DeckBuilder` for
    /// anything that needs an identifier generated or a shuffle applied.
    pub(crate) fn from_parts(id: Uuid, shuffled: bool, cards: Vec<Card>) -> Self {
        Self {
            id,
            shuffled,
            remaining: cards.len(),
            cards,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Remove up to `count` cards from the front and return them in draw
    /// order. Drawing from an exhausted deck returns fewer cards (possibly
    /// none) rather than failing.
    pub fn draw(&mut self, count: usize) -> Vec<Card> {
        let take = count.min(self.remaining);
        let drawn: Vec<Card> = self.cards.drain(..take).collect();
        self.remaining -= drawn.len();
        debug_assert_eq!(self.remaining, self.cards.len());
        drawn
    }
}
