//! Adapters for storage backends.

pub mod decks_memory;

pub use decks_memory::InMemoryDeckRepo;
