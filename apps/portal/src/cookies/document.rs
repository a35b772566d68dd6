//! Browser-document cookie context.
//!
//! `DocumentCookieJar` models `document.cookie` for a page served over a
//! given transport: writes produce `Set-Cookie`-shaped strings and update
//! the jar the way a browser would (a zero max-age deletes). `NoDocument`
//! stands in for execution contexts with no document, where reads are
//! always empty.

use std::collections::BTreeMap;

use actix_web::cookie::time::Duration;
use actix_web::cookie::{Cookie, SameSite};
use tracing::debug;

use super::{CookieReader, DEFAULT_MAX_AGE_SECS, PRIMARY_COOKIE, SECONDARY_COOKIE};
use crate::auth::codec;

/// Transport the page was loaded over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Https,
    Http,
}

impl Transport {
    /// From a URL scheme such as `"https"` or `"http:"`.
    pub fn from_scheme(scheme: &str) -> Self {
        if scheme.trim_end_matches(':').eq_ignore_ascii_case("https") {
            Transport::Https
        } else {
            Transport::Http
        }
    }
}

#[derive(Debug)]
pub struct DocumentCookieJar {
    transport: Transport,
    values: BTreeMap<String, String>,
    written: Vec<String>,
}

impl DocumentCookieJar {
    pub fn new(transport: Transport) -> Self {
        Self {
            transport,
            values: BTreeMap::new(),
            written: Vec::new(),
        }
    }

    /// Write `token` under both session cookie names with the default max-age.
    pub fn set_session_cookie(&mut self, token: &str) {
        self.set_session_cookie_for(token, DEFAULT_MAX_AGE_SECS);
    }

    /// Write `token` under both session cookie names.
    ///
    /// HTTPS pages get `SameSite=None; Secure`; plain HTTP gets
    /// `SameSite=Lax` because browsers drop `Secure` cookies there.
    pub fn set_session_cookie_for(&mut self, token: &str, max_age_secs: i64) {
        let value = codec::encode(token);
        for name in [PRIMARY_COOKIE, SECONDARY_COOKIE] {
            self.write(name, &value, max_age_secs);
        }
        debug!(max_age_secs, transport = ?self.transport, "session cookies written");
    }

    /// Expire both session cookies.
    pub fn clear_session_cookie(&mut self) {
        for name in [PRIMARY_COOKIE, SECONDARY_COOKIE] {
            self.write(name, "", 0);
        }
        debug!("session cookies cleared");
    }

    /// Every `Set-Cookie` string written so far, oldest first.
    pub fn written(&self) -> &[String] {
        &self.written
    }

    fn write(&mut self, name: &str, value: &str, max_age_secs: i64) {
        let mut cookie = Cookie::new(name.to_string(), value.to_string());
        cookie.set_path("/");
        cookie.set_max_age(Duration::seconds(max_age_secs));
        match self.transport {
            Transport::Https => {
                cookie.set_same_site(SameSite::None);
                cookie.set_secure(true);
            }
            Transport::Http => cookie.set_same_site(SameSite::Lax),
        }
        self.written.push(cookie.to_string());

        if max_age_secs <= 0 {
            self.values.remove(name);
        } else {
            self.values.insert(name.to_string(), value.to_string());
        }
    }
}

impl CookieReader for DocumentCookieJar {
    fn cookie(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Context without a browser document.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDocument;

impl CookieReader for NoDocument {
    fn cookie(&self, _name: &str) -> Option<String> {
        None
    }
}
