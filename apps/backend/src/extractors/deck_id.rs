use std::fmt;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use uuid::Uuid;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::decks::parse_deck_id;

/// Deck ID extracted from the `{deck_id}` route path parameter.
/// Only the format is checked here; existence is the service's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckId(pub Uuid);

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromRequest for DeckId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.match_info().get("deck_id") {
            Some(raw) => parse_deck_id(raw).map(DeckId).map_err(AppError::from),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidDeckId,
                "Missing deck_id parameter",
            )),
        };
        ready(result)
    }
}
