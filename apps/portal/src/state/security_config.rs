use std::fmt;

use jsonwebtoken::Algorithm;

/// Shared-secret settings used to verify session tokens.
#[derive(Clone)]
pub struct SecurityConfig {
    /// HMAC secret shared with the API that issues tokens
    pub jwt_secret: Vec<u8>,
    /// Pinned signing algorithm
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(b"test_secret_key_for_testing_purposes_only".to_vec())
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
