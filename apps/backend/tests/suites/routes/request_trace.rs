use actix_web::test;
use backend::infra::state::build_state;
use uuid::Uuid;

use crate::support::create_test_app;

fn header(resp: &actix_web::dev::ServiceResponse, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

#[actix_web::test]
async fn every_response_carries_a_request_id() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let a = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    let b = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    let a = header(&a, "x-request-id").expect("x-request-id on first response");
    let b = header(&b, "x-request-id").expect("x-request-id on second response");
    assert!(Uuid::parse_str(&a).is_ok());
    assert_ne!(a, b);
}

#[actix_web::test]
async fn error_trace_id_matches_request_id() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/deck/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let request_id = header(&resp, "x-request-id").expect("x-request-id");
    let trace_id = header(&resp, "x-trace-id").expect("x-trace-id");
    assert_eq!(request_id, trace_id);
}
