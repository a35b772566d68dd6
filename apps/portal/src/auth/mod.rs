//! Session token handling: cookie-value normalisation, verification and
//! the optimistic client-side decode.

pub mod claims;
pub mod codec;
pub mod jwt;

pub use claims::{Claims, Role, UnverifiedClaims, UserId, VerifiedClaims};
pub use jwt::{decode_unverified, mint_session_token, verify_session_token, VerifyError};
