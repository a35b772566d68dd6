//! Request-time route guard decisions.
//!
//! The decision is a pure function of the route's classification and the
//! session state derived from the `token` cookie. The actix adapter lives
//! in [`crate::middleware::route_guard`].

use crate::auth::jwt::{verify_session_token, VerifyError};
use crate::auth::VerifiedClaims;
use crate::state::security_config::SecurityConfig;

pub const LOGIN_PATH: &str = "/login";
pub const HOME_PATH: &str = "/";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// How the guard treats a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Never guarded: assets, framework internals, API, health.
    Excluded,
    /// Login/registration: reverse-redirected when already signed in.
    Auth,
    /// Everything else.
    Protected,
}

/// Static route classification.
#[derive(Debug, Clone)]
pub struct RouteTable {
    auth_routes: Vec<String>,
    excluded_prefixes: Vec<String>,
    excluded_paths: Vec<String>,
    excluded_extensions: Vec<String>,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            auth_routes: vec![LOGIN_PATH.to_string(), "/register".to_string()],
            excluded_prefixes: ["/api/", "/_next/", "/static/", "/assets/"]
                .map(String::from)
                .to_vec(),
            excluded_paths: ["/favicon.ico", "/robots.txt", "/health"]
                .map(String::from)
                .to_vec(),
            excluded_extensions: [
                "png", "jpg", "jpeg", "gif", "svg", "webp", "ico", "css", "js", "map", "woff",
                "woff2",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

impl RouteTable {
    pub fn with_auth_route(mut self, path: impl Into<String>) -> Self {
        self.auth_routes.push(path.into());
        self
    }

    pub fn with_excluded_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.excluded_prefixes.push(prefix.into());
        self
    }

    pub fn classify(&self, path: &str) -> RouteClass {
        if self.is_excluded(path) {
            return RouteClass::Excluded;
        }

        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        if self.auth_routes.iter().any(|r| r == normalized) {
            RouteClass::Auth
        } else {
            RouteClass::Protected
        }
    }

    fn is_excluded(&self, path: &str) -> bool {
        if self.excluded_paths.iter().any(|p| p == path) {
            return true;
        }
        if self
            .excluded_prefixes
            .iter()
            .any(|p| path.starts_with(p.as_str()) || path == p.trim_end_matches('/'))
        {
            return true;
        }

        let last_segment = path.rsplit('/').next().unwrap_or_default();
        match last_segment.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => self
                .excluded_extensions
                .iter()
                .any(|e| e.eq_ignore_ascii_case(ext)),
            _ => false,
        }
    }
}

/// Session state derived from the request's token.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Unauthenticated,
    AuthenticatedValid(VerifiedClaims),
    AuthenticatedInvalid(VerifyError),
}

impl SessionState {
    /// Verify `token` if present. Never fails: a rejected token is the
    /// `AuthenticatedInvalid` state.
    pub fn resolve(token: Option<&str>, security: &SecurityConfig) -> Self {
        match token {
            None => SessionState::Unauthenticated,
            Some(token) => match verify_session_token(token, security) {
                Ok(claims) => SessionState::AuthenticatedValid(claims),
                Err(err) => SessionState::AuthenticatedInvalid(err),
            },
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SessionState::Unauthenticated => "unauthenticated",
            SessionState::AuthenticatedValid(_) => "authenticated_valid",
            SessionState::AuthenticatedInvalid(_) => "authenticated_invalid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

pub fn decide(class: RouteClass, state: &SessionState) -> GuardDecision {
    match (class, state) {
        (RouteClass::Excluded, _) => GuardDecision::Allow,
        (RouteClass::Auth, SessionState::Unauthenticated) => GuardDecision::Allow,
        (RouteClass::Protected, SessionState::Unauthenticated) => {
            GuardDecision::Redirect(LOGIN_PATH)
        }
        (RouteClass::Auth, SessionState::AuthenticatedValid(_)) => {
            GuardDecision::Redirect(HOME_PATH)
        }
        (RouteClass::Protected, SessionState::AuthenticatedValid(_)) => GuardDecision::Allow,
        (_, SessionState::AuthenticatedInvalid(_)) => GuardDecision::Redirect(LOGIN_PATH),
    }
}
