#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod cookies;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod guard;
pub mod logging;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod telemetry;
pub mod trace_ctx;

pub use auth::{
    decode_unverified, mint_session_token, verify_session_token, Claims, Role, UnverifiedClaims,
    VerifiedClaims, VerifyError,
};
pub use config::PortalConfig;
pub use error::AppError;
pub use extractors::SessionUser;
pub use middleware::{RequestTrace, RouteGuard, SecurityHeaders, StructuredLogger, TraceSpan};
pub use state::{AppState, SecurityConfig};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    portal_test_support::logging::init();
}
