//! Health check and fallback routing

#[macro_use]
mod common;

use actix_web::test;
use tr_api::create_app;
use tr_shared::config::Environment;

use common::test_app;

#[actix_web::test]
async fn test_health_reports_active_resets() {
    let ctx = test_app(60);
    let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

    send!(app, test::TestRequest::post().uri("/api/v1/password-reset"));
    let (status, body, _) = send!(app, test::TestRequest::get().uri("/health"));

    assert_eq!(status, 200);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "in-memory");
    assert_eq!(body["active_resets"], 1);
}

#[actix_web::test]
async fn test_unknown_route_returns_json_404() {
    let ctx = test_app(60);
    let app = test::init_service(create_app(ctx.state.clone(), Environment::Development)).await;

    let (status, body, _) = send!(app, test::TestRequest::get().uri("/api/v1/nothing-here"));

    assert_eq!(status, 404);
    assert_eq!(body["error"], "NOT_FOUND");
}
