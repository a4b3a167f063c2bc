//! Error codes for the deck API.
//!
//! This module defines all error codes used throughout the application.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the deck API.
///
/// Each variant maps to a canonical SCREAMING_SNAKE_CASE string that appears
/// in HTTP responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Deck id is not a valid UUID
    InvalidDeckId,
    /// Card code outside the standard 52
    UnknownCardCode,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Deck not found
    DeckNotFound,
    /// General not found error
    NotFound,

    // Storage / System Errors
    /// Deck could not be stored
    DeckCreateFailed,
    /// Deck could not be replaced after a draw
    DeckUpdateFailed,
    /// Deck identifier could not be generated
    IdGenerationFailed,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    ///
    /// This is the exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidDeckId => "INVALID_DECK_ID",
            Self::UnknownCardCode => "UNKNOWN_CARD_CODE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::DeckNotFound => "DECK_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DeckCreateFailed => "DECK_CREATE_FAILED",
            Self::DeckUpdateFailed => "DECK_UPDATE_FAILED",
            Self::IdGenerationFailed => "ID_GENERATION_FAILED",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
