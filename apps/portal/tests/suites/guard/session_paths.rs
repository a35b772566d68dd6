//! The three read paths (request guard, server page, client hydration)
//! must derive the same identity from one cookie write.

use actix_web::http::header::COOKIE;
use actix_web::http::StatusCode;
use actix_web::test;
use portal::auth::Role;
use portal::cookies::{CookieReader, DocumentCookieJar, Transport, PRIMARY_COOKIE};
use portal::session::{sign_in, sign_out, InMemorySessionStore, SessionHydrator, UnverifiedDecoder};
use serde_json::Value;

use crate::common::location;
use crate::support::app_builder::{test_security, test_state};
use crate::support::auth::mint_test_token;
use crate::support::create_test_app;

#[actix_web::test]
async fn cookie_written_by_client_is_accepted_by_all_paths() {
    let security = test_security();
    let token = mint_test_token(Role::Doctor, "doc@example.com", &security);

    let store = InMemorySessionStore::new();
    let mut jar = DocumentCookieJar::new(Transport::Https);
    sign_in(&store, &mut jar, &token, UnverifiedDecoder);

    let cookie_value = jar.cookie(PRIMARY_COOKIE).expect("token cookie written");
    let app = create_test_app(test_state()).await;

    // Request-time gate
    let req = test::TestRequest::get()
        .uri("/dashboard/doctor")
        .insert_header((COOKIE, format!("{PRIMARY_COOKIE}={cookie_value}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Server-side identity
    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header((COOKIE, format!("{PRIMARY_COOKIE}={cookie_value}")))
        .to_request();
    let me: Value = test::read_body_json(test::call_service(&app, req).await).await;

    // Client hydration on a fresh store, from the cookie alone
    let fresh_store = InMemorySessionStore::new();
    let hydrated = SessionHydrator::new(&fresh_store, &jar)
        .hydrate()
        .expect("hydrated user");

    assert_eq!(me["user"]["sub"], hydrated.sub.as_str());
    assert_eq!(me["user"]["email"], hydrated.email.as_str());
}

#[actix_web::test]
async fn cleared_cookie_is_treated_as_logged_out() {
    let security = test_security();
    let token = mint_test_token(Role::Patient, "pat@example.com", &security);

    let store = InMemorySessionStore::new();
    let mut jar = DocumentCookieJar::new(Transport::Http);
    sign_in(&store, &mut jar, &token, UnverifiedDecoder);
    sign_out(&store, &mut jar);

    assert_eq!(jar.cookie(PRIMARY_COOKIE), None);
    assert_eq!(SessionHydrator::new(&store, &jar).hydrate(), None);

    let app = create_test_app(test_state()).await;
    let req = test::TestRequest::get().uri("/dashboard").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(location(&resp).as_deref(), Some("/login"));
}
