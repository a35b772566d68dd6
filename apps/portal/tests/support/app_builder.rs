use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use portal::middleware::{RequestTrace, RouteGuard, SecurityHeaders, StructuredLogger, TraceSpan};
use portal::routes;
use portal::state::{AppState, SecurityConfig};

pub const TEST_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

pub fn test_state() -> AppState {
    AppState::new(test_security())
}

/// Build the portal with the production middleware stack, in the same
/// order `main.rs` wires it.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(RouteGuard)
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .configure(routes::configure),
    )
    .await
}
