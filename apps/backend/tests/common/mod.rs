#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::{
    assert_problem_details_from_service_response, ProblemDetailsLike,
};
use serde_json::Value;

// Logging is auto-installed for every integration test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert a problem details response and return its body.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: u16,
    expected_code: &str,
    expected_detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    let status = StatusCode::from_u16(expected_status).expect("valid status code");
    assert_problem_details_from_service_response(
        resp,
        expected_code,
        status,
        expected_detail_contains,
    )
    .await
}

/// Assert 200 with a JSON body and return the parsed body.
pub async fn read_ok_json(resp: ServiceResponse<BoxBody>) -> Value {
    let status = resp.status();
    let body = test::read_body(resp).await;
    let body_str = std::str::from_utf8(&body).expect("response body should be valid UTF-8");
    assert_eq!(status, StatusCode::OK, "unexpected status, body: {body_str}");
    serde_json::from_str(body_str).unwrap_or_else(|e| panic!("invalid JSON ({e}): {body_str}"))
}

/// Card codes out of a `cards` array.
pub fn codes(cards: &Value) -> Vec<String> {
    cards
        .as_array()
        .expect("cards should be an array")
        .iter()
        .map(|c| c["code"].as_str().expect("code should be a string").to_string())
        .collect()
}
