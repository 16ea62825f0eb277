//! Environment-backed configuration.
//!
//! This is the "secrets loader" collaborator: it is the only place the
//! crate touches the environment. The service itself receives its key by
//! constructor injection and never reads it from the environment or disk.

use crate::error::TokenError;
use crate::token::{SecretKey, TokenService};
use std::env;

/// Name of the environment variable holding the shared secret.
pub const SECRET_VAR: &str = "TOKEN_SECRET";

/// Name of the environment variable overriding the default TTL.
pub const TTL_VAR: &str = "TOKEN_TTL_MINUTES";

/// Startup configuration for the token service.
#[derive(Debug)]
pub struct Config {
    /// Shared HMAC secret. Required; there is no development fallback — a
    /// fresh random key every boot would silently invalidate every
    /// outstanding token.
    pub secret: SecretKey,
    /// Default token TTL in minutes.
    pub default_ttl_minutes: i64,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if
    /// present).
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Config`] if `TOKEN_SECRET` is missing or
    /// empty, or `TOKEN_TTL_MINUTES` is set but not an integer.
    pub fn from_env() -> Result<Self, TokenError> {
        dotenvy::dotenv().ok();

        let secret = env::var(SECRET_VAR)
            .map_err(|_| TokenError::config(format!("{SECRET_VAR} must be set")))?;
        if secret.is_empty() {
            return Err(TokenError::config(format!("{SECRET_VAR} must not be empty")));
        }

        let default_ttl_minutes = parse_env(TTL_VAR, 60)?;

        Ok(Config {
            secret: SecretKey::from(secret),
            default_ttl_minutes,
        })
    }

    /// Consume the configuration and build the service it describes.
    #[must_use]
    pub fn into_service(self) -> TokenService {
        TokenService::new(self.secret)
    }
}

/// Parse environment variable with default value.
fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> Result<T, TokenError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| TokenError::config(format!("Invalid {name}: {e}"))),
        Err(_) => Ok(default),
    }
}
