use std::sync::Arc;

use backend::errors::domain::{InfraErrorKind, NotFoundKind, ValidationKind};
use backend::protocol::{CreateDeckRequest, DrawCardsRequest, OpenDeckRequest};
use backend::{DeckService, DomainError, InMemoryDeckRepo};
use uuid::Uuid;

use crate::support::FailingDeckRepo;

fn service() -> DeckService {
    DeckService::new(Arc::new(InMemoryDeckRepo::new()))
}

fn create(cards: &[&str], shuffled: bool) -> CreateDeckRequest {
    CreateDeckRequest {
        cards: cards.iter().map(|c| c.to_string()).collect(),
        shuffled,
    }
}

#[tokio::test]
async fn shuffled_full_deck_keeps_every_card() {
    let svc = service();
    let created = svc.create_deck(create(&[], true)).await.unwrap();
    assert!(created.shuffled);
    assert_eq!(created.remaining, 52);

    let opened = svc
        .open_deck(OpenDeckRequest {
            deck_id: created.deck_id,
        })
        .await
        .unwrap();
    let mut codes: Vec<String> = opened.cards.into_iter().map(|c| c.code).collect();
    codes.sort();
    codes.dedup();
    assert_eq!(codes.len(), 52);
}

#[tokio::test]
async fn duplicate_codes_are_kept() {
    let svc = service();
    let created = svc
        .create_deck(create(&["AS", "AS", "KH"], false))
        .await
        .unwrap();
    assert_eq!(created.remaining, 3);

    let drawn = svc
        .draw_cards(DrawCardsRequest {
            deck_id: created.deck_id,
            count: 2,
        })
        .await
        .unwrap();
    let codes: Vec<&str> = drawn.cards.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["AS", "AS"]);
}

#[tokio::test]
async fn draw_zero_changes_nothing() {
    let svc = service();
    let created = svc.create_deck(create(&[], false)).await.unwrap();
    let open = || OpenDeckRequest {
        deck_id: created.deck_id.clone(),
    };

    let before = svc.open_deck(open()).await.unwrap();
    let drawn = svc
        .draw_cards(DrawCardsRequest {
            deck_id: created.deck_id.clone(),
            count: 0,
        })
        .await
        .unwrap();
    let after = svc.open_deck(open()).await.unwrap();

    assert!(drawn.cards.is_empty());
    assert_eq!(before, after);
}

#[tokio::test]
async fn draining_a_deck_ends_at_zero() {
    let svc = service();
    let created = svc.create_deck(create(&[], false)).await.unwrap();

    let mut total = 0;
    for _ in 0..6 {
        let drawn = svc
            .draw_cards(DrawCardsRequest {
                deck_id: created.deck_id.clone(),
                count: 10,
            })
            .await
            .unwrap();
        total += drawn.cards.len();
    }
    assert_eq!(total, 52);

    let opened = svc
        .open_deck(OpenDeckRequest {
            deck_id: created.deck_id,
        })
        .await
        .unwrap();
    assert_eq!(opened.remaining, 0);
    assert!(opened.cards.is_empty());
}

#[tokio::test]
async fn unknown_and_malformed_ids() {
    let svc = service();

    let err = svc
        .open_deck(OpenDeckRequest {
            deck_id: Uuid::new_v4().to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Deck, _)));

    let err = svc
        .draw_cards(DrawCardsRequest {
            deck_id: "".into(),
            count: 1,
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidDeckId, _)
    ));
}

#[tokio::test]
async fn store_failures_are_wrapped() {
    let repo = Arc::new(FailingDeckRepo::new());
    let svc = DeckService::new(repo.clone());

    let created = svc.create_deck(create(&[], false)).await.unwrap();

    repo.fail_updates(true);
    let err = svc
        .draw_cards(DrawCardsRequest {
            deck_id: created.deck_id.clone(),
            count: 1,
        })
        .await
        .unwrap_err();
    match err {
        DomainError::Infra(InfraErrorKind::UpdateFailed, cause) => {
            assert!(cause.contains("store offline"))
        }
        other => panic!("expected UpdateFailed, got {other:?}"),
    }

    repo.fail_creates(true);
    let err = svc.create_deck(create(&["AS"], false)).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::CreateFailed, _)
    ));
    assert_eq!(svc.deck_count().await.unwrap(), 1);
}
