use actix_web::test;
use backend::infra::state::build_state;
use uuid::Uuid;

use crate::common::{assert_problem, codes, read_ok_json};
use crate::support::create_test_app;

#[actix_web::test]
async fn open_returns_cards_in_stored_order() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/deck?cards=AS,KD,AC,2C,KH")
        .to_request();
    let created = read_ok_json(test::call_service(&app, req).await).await;
    let id = created["deck_id"].as_str().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/api/deck/{id}"))
        .to_request();
    let json = read_ok_json(test::call_service(&app, req).await).await;

    assert_eq!(json["deck_id"], id);
    assert_eq!(json["shuffled"], false);
    assert_eq!(json["remaining"], 5);
    assert_eq!(codes(&json["cards"]), ["AS", "KD", "AC", "2C", "KH"]);
    assert_eq!(
        json["cards"][0],
        serde_json::json!({"value": "ACE", "suit": "SPADES", "code": "AS"})
    );
    assert_eq!(
        json["cards"][1],
        serde_json::json!({"value": "KING", "suit": "DIAMONDS", "code": "KD"})
    );
}

#[actix_web::test]
async fn open_is_idempotent() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/api/deck?shuffled=true")
        .to_request();
    let created = read_ok_json(test::call_service(&app, req).await).await;
    let uri = format!("/api/deck/{}", created["deck_id"].as_str().unwrap());

    let first =
        read_ok_json(test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await)
            .await;
    let second =
        read_ok_json(test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await)
            .await;

    assert_eq!(first, second);
    assert_eq!(first["cards"].as_array().unwrap().len(), 52);
}

#[actix_web::test]
async fn open_unknown_deck_is_404() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/deck/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(resp, 404, "DECK_NOT_FOUND", Some("not found")).await;
}

#[actix_web::test]
async fn open_malformed_id_is_400() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri("/api/deck/not-a-uuid")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(resp, 400, "INVALID_DECK_ID", Some("not-a-uuid")).await;
}
