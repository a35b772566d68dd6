//! Session cookie access.
//!
//! One read capability, [`CookieReader`], implemented per execution
//! context: incoming requests (read-only), the browser document jar
//! (read/write) and contexts with no document at all.

pub mod document;
pub mod request;

pub use document::{DocumentCookieJar, NoDocument, Transport};

use crate::auth::codec;

/// Primary cookie, read by the route guard and server pages.
pub const PRIMARY_COOKIE: &str = "token";
/// Secondary cookie carrying the same value under a client-written name.
pub const SECONDARY_COOKIE: &str = "client_token";
/// Seven days.
pub const DEFAULT_MAX_AGE_SECS: i64 = 604_800;

/// Read access to a cookie store.
pub trait CookieReader {
    /// Literal value of the named cookie, if present.
    fn cookie(&self, name: &str) -> Option<String>;
}

/// Session token from `token`, falling back to `client_token`.
///
/// Empty values count as absent. The value is passed through the codec.
pub fn read_session_cookie<R>(reader: &R) -> Option<String>
where
    R: CookieReader + ?Sized,
{
    [PRIMARY_COOKIE, SECONDARY_COOKIE]
        .into_iter()
        .find_map(|name| codec::decode(reader.cookie(name).as_deref()))
}
