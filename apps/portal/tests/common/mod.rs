#![allow(dead_code)]

use actix_web::dev::ServiceResponse;
use actix_web::http::header::LOCATION;

// Logging is auto-installed for every test binary that includes `common`
#[ctor::ctor]
fn init_logging() {
    portal_test_support::logging::init();
}

/// `Location` header of a response, if any.
pub fn location<B>(resp: &ServiceResponse<B>) -> Option<String> {
    resp.headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
