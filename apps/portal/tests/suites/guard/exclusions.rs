use actix_web::http::header::COOKIE;
use actix_web::http::StatusCode;
use actix_web::test;
use portal::guard::RouteTable;

use crate::common::location;
use crate::support::app_builder::test_state;
use crate::support::create_test_app;

#[actix_web::test]
async fn health_is_not_guarded() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get("x-request-id").is_some());

    let body = test::read_body(resp).await;
    assert_eq!(body, "ok");
}

#[actix_web::test]
async fn static_assets_are_not_redirected() {
    let app = create_test_app(test_state()).await;

    for uri in ["/favicon.ico", "/_next/static/chunks/main.js", "/assets/logo.png"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header((COOKIE, "token=garbage"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(location(&resp), None, "{uri}");
    }
}

#[actix_web::test]
async fn api_routes_answer_for_themselves() {
    let app = create_test_app(test_state()).await;

    let req = test::TestRequest::get().uri("/api/me").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(location(&resp), None);
}

#[actix_web::test]
async fn configured_routes_change_classification() {
    let routes = RouteTable::default()
        .with_auth_route("/forgot-password")
        .with_excluded_prefix("/public/");
    let app = create_test_app(test_state().with_routes(routes)).await;

    // No session on an added auth route: allowed through to the router.
    let req = test::TestRequest::get().uri("/forgot-password").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(location(&resp), None);

    let req = test::TestRequest::get().uri("/public/brochure").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(location(&resp), None);

    let req = test::TestRequest::get().uri("/billing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&resp).as_deref(), Some("/login"));
}
