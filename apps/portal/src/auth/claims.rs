//! Session token claims at their two trust levels.
//!
//! `VerifiedClaims` can only be produced by signature verification and is
//! the only type accepted for access decisions. `UnverifiedClaims` is a
//! display-only decode of the payload. Neither converts into the other.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Portal roles.
///
/// Known roles are matched case-insensitively and always serialize in
/// lowercase, so a token carrying `"Doctor"` is reported as `"doctor"`.
/// Unrecognised strings are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Patient,
    Doctor,
    Receptionist,
    Admin,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Receptionist => "receptionist",
            Role::Admin => "admin",
            Role::Other(s) => s,
        }
    }

    /// Parse a known role; `None` for anything outside the four portal roles.
    pub fn parse_known(s: &str) -> Option<Self> {
        match Role::from(s.to_string()) {
            Role::Other(_) => None,
            role => Some(role),
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "patient" => Role::Patient,
            "doctor" => Role::Doctor,
            "receptionist" => Role::Receptionist,
            "admin" => Role::Admin,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database id as issued by the API, which sends either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{n}"),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

/// Payload carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier
    pub sub: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued-at (seconds since epoch)
    #[serde(default)]
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Claims whose signature and expiry were checked against the shared secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VerifiedClaims(Claims);

impl VerifiedClaims {
    pub(crate) fn new(claims: Claims) -> Self {
        Self(claims)
    }
}

impl Deref for VerifiedClaims {
    type Target = Claims;

    fn deref(&self) -> &Claims {
        &self.0
    }
}

/// Claims decoded without any signature check. Display only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct UnverifiedClaims(Claims);

impl UnverifiedClaims {
    pub(crate) fn new(claims: Claims) -> Self {
        Self(claims)
    }
}

impl Deref for UnverifiedClaims {
    type Target = Claims;

    fn deref(&self) -> &Claims {
        &self.0
    }
}
