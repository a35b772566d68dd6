use actix_web::http::header::{CACHE_CONTROL, COOKIE};
use actix_web::http::StatusCode;
use actix_web::test;
use portal::auth::Role;
use serde_json::Value;

use crate::support::app_builder::{test_security, test_state};
use crate::support::auth::{mint_expired_token, mint_test_token, session_cookie};
use crate::support::create_test_app;

#[actix_web::test]
async fn me_returns_verified_user() {
    let security = test_security();
    let token = mint_test_token(Role::Receptionist, "desk@example.com", &security);
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header((COOKIE, session_cookie(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get(CACHE_CONTROL).and_then(|v| v.to_str().ok()),
        Some("no-store")
    );

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], "desk@example.com");
    assert_eq!(body["user"]["role"], "receptionist");
    assert_eq!(body["user"]["sub"], "sub-receptionist");
}

#[actix_web::test]
async fn me_without_cookie_is_401_with_null_user() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get().uri("/api/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, serde_json::json!({ "user": null }));
}

#[actix_web::test]
async fn me_with_expired_token_is_401_with_null_user() {
    let security = test_security();
    let token = mint_expired_token(Role::Patient, "pat@example.com", &security);
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header((COOKIE, session_cookie(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["user"].is_null());
}

#[actix_web::test]
async fn me_ignores_secondary_cookie() {
    let security = test_security();
    let token = mint_test_token(Role::Patient, "pat@example.com", &security);
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header((COOKIE, format!("client_token={token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}
