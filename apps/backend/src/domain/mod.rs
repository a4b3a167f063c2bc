//! Domain layer: pure card and deck types and helpers.

pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod deck_builder;

#[cfg(test)]
mod test_prelude;

// Re-exports for ergonomics
pub use cards_parsing::{card_for_code, try_parse_cards};
pub use cards_types::{standard_deck, Card, Rank, Suit};
pub use deck::Deck;
pub use deck_builder::DeckBuilder;
