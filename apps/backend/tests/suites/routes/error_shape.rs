use actix_web::{test, web, HttpResponse};
use backend::errors::domain::{DomainError, InfraErrorKind};
use backend::infra::state::build_state;
use backend::{AppError, ErrorCode};

use crate::common::assert_problem;
use crate::support::create_test_app;

async fn bad_request() -> Result<HttpResponse, AppError> {
    Err(AppError::bad_request(
        ErrorCode::BadRequest,
        "Invalid request format",
    ))
}

async fn config_error() -> Result<HttpResponse, AppError> {
    Err(AppError::config("BACKEND_PORT is not a port"))
}

async fn infra_failure() -> Result<HttpResponse, AppError> {
    Err(DomainError::infra(InfraErrorKind::GenerationFailed, "entropy source closed").into())
}

// handler-only: validates the error contract without deck state
#[actix_web::test]
async fn error_responses_conform_to_problem_details() {
    let app = create_test_app(build_state().build())
        .with_routes(|cfg| {
            cfg.route("/_test/bad_request", web::get().to(bad_request))
                .route("/_test/config", web::get().to(config_error))
                .route("/_test/infra", web::get().to(infra_failure));
        })
        .build()
        .await;

    let cases = [
        ("/_test/bad_request", 400, "BAD_REQUEST", "Invalid request format"),
        ("/_test/config", 500, "CONFIG_ERROR", "BACKEND_PORT"),
        ("/_test/infra", 500, "ID_GENERATION_FAILED", "unable to generate deck id"),
    ];

    for (uri, status, code, detail) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem(resp, status, code, Some(detail)).await;
    }
}

#[actix_web::test]
async fn internal_cause_is_not_leaked() {
    let app = create_test_app(build_state().build())
        .with_routes(|cfg| {
            cfg.route("/_test/infra", web::get().to(infra_failure));
        })
        .build()
        .await;

    let req = test::TestRequest::get().uri("/_test/infra").to_request();
    let resp = test::call_service(&app, req).await;
    let problem = assert_problem(resp, 500, "ID_GENERATION_FAILED", None).await;

    assert!(!problem.detail.contains("entropy"));
    assert_eq!(problem.title, "Id Generation Failed");
}

#[actix_web::test]
async fn unmatched_route_is_problem_details_404() {
    let app = create_test_app(build_state().build())
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/api/decks").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem(resp, 404, "NOT_FOUND", Some("/api/decks")).await;
}
