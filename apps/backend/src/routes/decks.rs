//! Deck endpoints.
//!
//! - `POST /api/deck?cards=AS,KH&shuffled=true` create
//! - `GET  /api/deck/{deck_id}` open
//! - `PUT  /api/deck` draw, body `{"deck_id": "...", "count": 3}`

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::{CreateDeckQuery, DeckId, ValidatedJson};
use crate::protocol::{DrawCardsRequest, OpenDeckRequest};
use crate::state::app_state::AppState;

async fn create_deck(
    query: CreateDeckQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let response = app_state.decks.create_deck(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn open_deck(
    deck_id: DeckId,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let response = app_state
        .decks
        .open_deck(OpenDeckRequest {
            deck_id: deck_id.to_string(),
        })
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

async fn draw_cards(
    body: ValidatedJson<DrawCardsRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let response = app_state.decks.draw_cards(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::post().to(create_deck))
            .route(web::put().to(draw_cards)),
    )
    .route("/{deck_id}", web::get().to(open_deck));
}
