//! Request-side cookie reads. No write path: the server never sets or
//! clears the session cookie.

use actix_web::dev::ServiceRequest;
use actix_web::http::header::{HeaderMap, COOKIE};
use actix_web::HttpRequest;

use super::CookieReader;

/// Find `name` in the `Cookie` headers, returning the literal value
/// (not percent-decoded; that is the codec's job).
fn cookie_from_headers(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .filter_map(|value| value.to_str().ok())
        .flat_map(|line| line.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
}

impl CookieReader for HeaderMap {
    fn cookie(&self, name: &str) -> Option<String> {
        cookie_from_headers(self, name)
    }
}

impl CookieReader for HttpRequest {
    fn cookie(&self, name: &str) -> Option<String> {
        cookie_from_headers(self.headers(), name)
    }
}

impl CookieReader for ServiceRequest {
    fn cookie(&self, name: &str) -> Option<String> {
        cookie_from_headers(self.headers(), name)
    }
}
