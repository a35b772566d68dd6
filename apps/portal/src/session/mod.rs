//! Client-side session state and hydration.
//!
//! Everything here works with `UnverifiedClaims` only. It drives what the
//! UI shows; access decisions go through the route guard and
//! `SessionUser`, which verify.

pub mod hydrator;
pub mod store;

pub use hydrator::{sign_in, sign_out, ClaimsDecoder, SessionHydrator, UnverifiedDecoder};
pub use store::{InMemorySessionStore, SessionSnapshot, SessionStore};
