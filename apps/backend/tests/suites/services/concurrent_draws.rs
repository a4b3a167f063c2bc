//! Concurrent draws on one deck must never hand out a card twice.

use std::collections::HashSet;
use std::sync::Arc;

use backend::protocol::{CreateDeckRequest, DrawCardsRequest, OpenDeckRequest};
use backend::{DeckService, InMemoryDeckRepo};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_draws_partition_the_deck() {
    let svc = Arc::new(DeckService::new(Arc::new(InMemoryDeckRepo::new())));
    let created = svc
        .create_deck(CreateDeckRequest::default())
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..20 {
        let svc = svc.clone();
        let deck_id = created.deck_id.clone();
        handles.push(tokio::spawn(async move {
            svc.draw_cards(DrawCardsRequest { deck_id, count: 3 })
                .await
                .unwrap()
        }));
    }

    let mut seen = HashSet::new();
    let mut total = 0;
    for handle in handles {
        for card in handle.await.unwrap().cards {
            total += 1;
            assert!(seen.insert(card.code.clone()), "{} drawn twice", card.code);
        }
    }
    assert_eq!(total, 52);

    let opened = svc
        .open_deck(OpenDeckRequest {
            deck_id: created.deck_id,
        })
        .await
        .unwrap();
    assert_eq!(opened.remaining, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn draws_on_separate_decks_are_independent() {
    let svc = Arc::new(DeckService::new(Arc::new(InMemoryDeckRepo::new())));

    let mut ids = Vec::new();
    for _ in 0..8 {
        ids.push(
            svc.create_deck(CreateDeckRequest::default())
                .await
                .unwrap()
                .deck_id,
        );
    }

    let mut handles = Vec::new();
    for id in &ids {
        for _ in 0..4 {
            let svc = svc.clone();
            let deck_id = id.clone();
            handles.push(tokio::spawn(async move {
                svc.draw_cards(DrawCardsRequest { deck_id, count: 5 })
                    .await
                    .unwrap()
            }));
        }
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().cards.len(), 5);
    }

    for id in ids {
        let opened = svc.open_deck(OpenDeckRequest { deck_id: id }).await.unwrap();
        assert_eq!(opened.remaining, 32);
    }
}
