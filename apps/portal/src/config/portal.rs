//! Process configuration loaded from the environment.
//!
//! `JWT_SECRET` is mandatory: without it no token can be verified, so its
//! absence is a startup failure rather than a per-request one.

use std::env;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct PortalConfig {
    pub host: String,
    pub port: u16,
    pub security: SecurityConfig,
}

impl PortalConfig {
    /// Load from `PORTAL_HOST`, `PORTAL_PORT` and `JWT_SECRET`.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("PORTAL_HOST")
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORTAL_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AppError::config(format!("PORTAL_PORT must be a valid port number, got {raw:?}"))
            })?,
            None => DEFAULT_PORT,
        };

        let secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::config("JWT_SECRET must be set"))?;

        Ok(Self {
            host,
            port,
            security: SecurityConfig::new(secret.into_bytes()),
        })
    }
}
