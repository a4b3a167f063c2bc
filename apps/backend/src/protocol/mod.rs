//! Request/response shapes shared by the deck service and HTTP layer.

pub mod decks;

pub use decks::{
    CardView, CreateDeckRequest, CreateDeckResponse, DrawCardsRequest, DrawCardsResponse,
    OpenDeckRequest, OpenDeckResponse,
};
