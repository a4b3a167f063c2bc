//! Card parsing from short codes (e.g., "AS", "10C")

use std::collections::HashMap;
use std::str::FromStr;

use once_cell::sync::Lazy;

use super::cards_types::{standard_deck, Card};
use crate::errors::domain::{DomainError, ValidationKind};

/// Every standard code mapped to its card.
static CARDS_BY_CODE: Lazy<HashMap<String, Card>> = Lazy::new(|| {
    standard_deck()
        .into_iter()
        .map(|card| (card.code(), card))
        .collect()
});

/// Look up a card by its exact (case-sensitive) code.
pub fn card_for_code(code: &str) -> Option<Card> {
    CARDS_BY_CODE.get(code).copied()
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        card_for_code(s).ok_or_else(|| {
            DomainError::validation(
                ValidationKind::UnknownCardCode,
                format!("Unknown card code: {s}"),
            )
        })
    }
}

/// Non-panicking helper to parse card codes into Card instances.
/// Fails on the first unknown code.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
