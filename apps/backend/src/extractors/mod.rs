pub mod create_deck_query;
pub mod deck_id;
pub mod validated_json;

pub use create_deck_query::CreateDeckQuery;
pub use deck_id::DeckId;
pub use validated_json::ValidatedJson;
