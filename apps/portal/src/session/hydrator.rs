use tracing::debug;

use super::store::{SessionSnapshot, SessionStore};
use crate::auth::jwt::{decode_unverified, VerifyError};
use crate::auth::UnverifiedClaims;
use crate::cookies::{read_session_cookie, CookieReader, DocumentCookieJar};

/// Turns a token into display claims without a secret.
pub trait ClaimsDecoder {
    fn decode(&self, token: &str) -> Result<UnverifiedClaims, VerifyError>;
}

impl<T: ClaimsDecoder + ?Sized> ClaimsDecoder for &T {
    fn decode(&self, token: &str) -> Result<UnverifiedClaims, VerifyError> {
        (**self).decode(token)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UnverifiedDecoder;

impl ClaimsDecoder for UnverifiedDecoder {
    fn decode(&self, token: &str) -> Result<UnverifiedClaims, VerifyError> {
        decode_unverified(token)
    }
}

/// Resolves the current user once per mount.
///
/// Order: user already in the store, then token in the store, then the
/// readable session cookie. A decoded user is written back to the store
/// so the next mount takes the fast path.
pub struct SessionHydrator<'a, D = UnverifiedDecoder> {
    store: &'a dyn SessionStore,
    cookies: &'a dyn CookieReader,
    decoder: D,
}

impl<'a> SessionHydrator<'a> {
    pub fn new(store: &'a dyn SessionStore, cookies: &'a dyn CookieReader) -> Self {
        Self {
            store,
            cookies,
            decoder: UnverifiedDecoder,
        }
    }
}

impl<'a, D: ClaimsDecoder> SessionHydrator<'a, D> {
    pub fn with_decoder<E: ClaimsDecoder>(self, decoder: E) -> SessionHydrator<'a, E> {
        SessionHydrator {
            store: self.store,
            cookies: self.cookies,
            decoder,
        }
    }

    pub fn hydrate(&self) -> Option<UnverifiedClaims> {
        let snapshot = self.store.state();
        if let Some(user) = snapshot.user {
            debug!(source = "state", "session hydrated");
            return Some(user);
        }

        let token = match snapshot.token.filter(|t| !t.is_empty()) {
            Some(token) => token,
            None => match read_session_cookie(self.cookies) {
                Some(token) => token,
                None => {
                    debug!("no session token to hydrate");
                    return None;
                }
            },
        };

        match self.decoder.decode(&token) {
            Ok(user) => {
                self.store.set_state(SessionSnapshot {
                    user: Some(user.clone()),
                    token: Some(token),
                });
                debug!(source = "token", "session hydrated");
                Some(user)
            }
            Err(err) => {
                debug!(reason = err.reason(), "session token could not be decoded");
                None
            }
        }
    }
}

/// Client side of a successful login: write both cookies and seed the store.
pub fn sign_in<D: ClaimsDecoder>(
    store: &dyn SessionStore,
    jar: &mut DocumentCookieJar,
    token: &str,
    decoder: D,
) -> Option<UnverifiedClaims> {
    jar.set_session_cookie(token);
    let user = decoder.decode(token).ok();
    store.set_state(SessionSnapshot {
        user: user.clone(),
        token: Some(token.to_string()),
    });
    user
}

/// Client side of logout: expire both cookies and forget the user.
pub fn sign_out(store: &dyn SessionStore, jar: &mut DocumentCookieJar) {
    jar.clear_session_cookie();
    store.clear();
}
