use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::AppError;
use crate::errors::ErrorCode;

pub mod decks;
pub mod health;

/// Register every application route.
///
/// `main.rs` wraps these in the request middleware; tests register the same
/// configuration without wrappers so endpoint behavior can be exercised
/// directly.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Deck routes: /api/deck/**
    cfg.service(web::scope("/api/deck").configure(decks::configure_routes));
}

/// Fallback for unmatched paths, rendered as problem details.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, AppError> {
    Err(AppError::not_found(
        ErrorCode::NotFound,
        format!("No route for {} {}", req.method(), req.path()),
    ))
}
