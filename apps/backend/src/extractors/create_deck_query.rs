//! Query-string extractor for deck creation.
//!
//! `?cards=AS,KH&shuffled=true`: `cards` is a comma-separated list of card
//! codes, `shuffled` a leniently parsed boolean. Both are optional; when a
//! parameter is repeated the first occurrence wins.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use tracing::warn;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::protocol::CreateDeckRequest;

/// Create request assembled from the query string.
#[derive(Debug)]
pub struct CreateDeckQuery(pub CreateDeckRequest);

impl CreateDeckQuery {
    pub fn into_inner(self) -> CreateDeckRequest {
        self.0
    }
}

impl FromRequest for CreateDeckQuery {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .map_err(|e| {
                AppError::bad_request(ErrorCode::BadRequest, format!("Invalid query string: {e}"))
            })
            .map(|q| CreateDeckQuery(to_request(&q.into_inner())));
        ready(result)
    }
}

fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn to_request(pairs: &[(String, String)]) -> CreateDeckRequest {
    let cards = first(pairs, "cards").map(split_codes).unwrap_or_default();

    // Exact spellings only: " true" is not a boolean
    let shuffled = match first(pairs, "shuffled") {
        None | Some("") => false,
        Some(value) => parse_lenient_bool(value).unwrap_or_else(|| {
            warn!(value = %value, "unrecognized shuffled value, defaulting to false");
            false
        }),
    };

    CreateDeckRequest { cards, shuffled }
}

/// Split a comma list into trimmed codes. A blank list means "no explicit
/// cards"; an empty entry inside a non-blank list is kept so that card
/// parsing rejects it instead of it silently disappearing.
fn split_codes(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|code| code.trim().to_string()).collect()
}

/// Accepts 1/t/T/TRUE/true/True and 0/f/F/FALSE/false/False.
fn parse_lenient_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
