use std::time::{Duration, SystemTime, UNIX_EPOCH};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::debug;

use super::claims::{Claims, Role, UnverifiedClaims, VerifiedClaims};
use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

/// Why a token was not accepted. Every variant means "unauthenticated".
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerifyError {
    #[error("token missing")]
    Missing,
    #[error("token expired")]
    Expired,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
}

impl VerifyError {
    /// Stable reason string for logs.
    pub fn reason(&self) -> &'static str {
        match self {
            VerifyError::Missing => "token_missing",
            VerifyError::Expired => "token_expired",
            VerifyError::InvalidSignature => "invalid_signature",
            VerifyError::Malformed => "invalid_token",
        }
    }
}

/// Build the claims the API would issue for a user, valid for `ttl` from `now`.
pub fn claims_for(
    sub: &str,
    email: &str,
    role: Role,
    now: SystemTime,
    ttl: Duration,
) -> Result<Claims, AppError> {
    let iat = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time"))?
        .as_secs() as i64;

    Ok(Claims {
        sub: sub.to_string(),
        id: None,
        email: email.to_string(),
        role: Some(role),
        name: None,
        iat,
        exp: iat + ttl.as_secs() as i64,
    })
}

/// Sign claims with the shared secret.
///
/// Tokens are normally issued by the remote API; this exists for local
/// development and tests, which need tokens the verifier accepts.
pub fn mint_session_token(claims: &Claims, security: &SecurityConfig) -> Result<String, AppError> {
    encode(
        &Header::new(security.algorithm),
        claims,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| AppError::internal(format!("Failed to encode JWT: {e}")))
}

/// Verify signature and expiry and return the claims.
///
/// The algorithm is pinned and no clock leeway is granted: a token whose
/// `exp` has passed is rejected.
pub fn verify_session_token(
    token: &str,
    security: &SecurityConfig,
) -> Result<VerifiedClaims, VerifyError> {
    if token.trim().is_empty() {
        return Err(VerifyError::Missing);
    }

    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = true;
    validation.leeway = 0;

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map_err(|e| {
        let err = match e.kind() {
            ErrorKind::ExpiredSignature => VerifyError::Expired,
            ErrorKind::InvalidSignature => VerifyError::InvalidSignature,
            _ => VerifyError::Malformed,
        };
        debug!(reason = err.reason(), "session token rejected");
        err
    })?;

    // jsonwebtoken still accepts `exp == now`; the token must expire strictly
    // after the current second.
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .map_err(|_| VerifyError::Expired)?;
    if data.claims.exp <= now {
        debug!(
            reason = VerifyError::Expired.reason(),
            "session token rejected"
        );
        return Err(VerifyError::Expired);
    }

    Ok(VerifiedClaims::new(data.claims))
}

/// Decode the payload segment without a secret.
///
/// Neither signature nor expiry is checked. The result is for display only.
pub fn decode_unverified(token: &str) -> Result<UnverifiedClaims, VerifyError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(VerifyError::Missing);
    }

    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(VerifyError::Malformed),
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| VerifyError::Malformed)?;

    serde_json::from_slice::<Claims>(&bytes)
        .map(UnverifiedClaims::new)
        .map_err(|_| VerifyError::Malformed)
}
