use actix_web::http::header::COOKIE;
use actix_web::http::StatusCode;
use actix_web::test;
use portal::auth::Role;
use portal_test_support::problem_details::assert_problem_details_from_parts;

use crate::common::location;
use crate::support::app_builder::{test_security, test_state};
use crate::support::auth::{mint_test_token, session_cookie};
use crate::support::create_test_app;

#[actix_web::test]
async fn matching_role_sees_its_dashboard() {
    let security = test_security();
    let app = create_test_app(test_state()).await;

    for (role, path) in [
        (Role::Patient, "/dashboard/patient"),
        (Role::Doctor, "/dashboard/doctor"),
        (Role::Receptionist, "/dashboard/receptionist"),
        (Role::Admin, "/dashboard/admin"),
    ] {
        let token = mint_test_token(role, "user@example.com", &security);
        let req = test::TestRequest::get()
            .uri(path)
            .insert_header((COOKIE, session_cookie(&token)))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK, "{path}");
    }
}

#[actix_web::test]
async fn role_mismatch_redirects_to_unauthorized() {
    let security = test_security();
    let token = mint_test_token(Role::Patient, "pat@example.com", &security);
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/dashboard/admin")
        .insert_header((COOKIE, session_cookie(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp).as_deref(), Some("/unauthorized"));
}

#[actix_web::test]
async fn unknown_dashboard_is_problem_details_404() {
    let security = test_security();
    let token = mint_test_token(Role::Admin, "root@example.com", &security);
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/dashboard/janitor")
        .insert_header((COOKIE, session_cookie(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let status = resp.status();
    let headers = resp.headers().clone();
    let body = test::read_body(resp).await;
    assert_problem_details_from_parts(
        status,
        &headers,
        &body,
        "NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("janitor"),
    );
}

#[actix_web::test]
async fn dashboard_links_to_role_dashboard() {
    let security = test_security();
    let token = mint_test_token(Role::Doctor, "doc@example.com", &security);
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .insert_header((COOKIE, session_cookie(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("/dashboard/doctor"));
    assert!(body.contains("doc@example.com"));
}

#[actix_web::test]
async fn unrecognised_role_gets_no_dashboard_link() {
    let security = test_security();
    let token = mint_test_token(
        Role::Other("pharmacist".to_string()),
        "rx@example.com",
        &security,
    );
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/dashboard")
        .insert_header((COOKIE, session_cookie(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("href=\"/unauthorized\""));
    assert!(!body.contains("/dashboard/pharmacist"));
}

#[actix_web::test]
async fn home_greets_user_with_escaped_identity() {
    let security = test_security();
    let token = mint_test_token(Role::Patient, "<script>@example.com", &security);
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get()
        .uri("/")
        .insert_header((COOKIE, session_cookie(&token)))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get("x-frame-options")
            .and_then(|v| v.to_str().ok()),
        Some("DENY")
    );
    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("&lt;script&gt;@example.com"));
    assert!(!body.contains("<script>"));
}
