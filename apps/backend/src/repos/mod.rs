//! Repository traits for domain layer.

pub mod decks;

pub use decks::DeckRepo;
