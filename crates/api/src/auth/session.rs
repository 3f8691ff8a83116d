//! Session-token verification.
//!
//! The identity provider issues HS256-signed session JWTs. The caller sends
//! one as `Authorization: Bearer <token>` or in the `__session` cookie; a
//! valid signature and unexpired `exp` identify the caller by `sub`.

use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::HeaderMap;
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::config::optional_env;

/// Cookie carrying the session token for browser callers.
pub const SESSION_COOKIE: &str = "__session";

/// Default identity provider backend API base URL.
pub const DEFAULT_IDENTITY_API_URL: &str = "https://api.clerk.com/v1";

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the identity provider's user id.
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    #[serde(default)]
    pub iat: i64,
}

/// Identity provider configuration.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HMAC-SHA256 secret used to verify session tokens.
    pub jwt_secret: String,
    /// Backend API base URL for user metadata updates.
    pub api_url: String,
    /// Backend API secret key.
    pub secret_key: String,
}

impl SessionConfig {
    /// Load identity configuration from environment variables.
    ///
    /// | Env Var               | Required | Default                    |
    /// |-----------------------|----------|----------------------------|
    /// | `SESSION_JWT_SECRET`  | **yes**  | --                         |
    /// | `IDENTITY_SECRET_KEY` | **yes**  | --                         |
    /// | `IDENTITY_API_URL`    | no       | `https://api.clerk.com/v1` |
    ///
    /// # Panics
    ///
    /// Panics if a required variable is unset or empty.
    pub fn from_env() -> Self {
        let jwt_secret =
            optional_env("SESSION_JWT_SECRET").expect("SESSION_JWT_SECRET must be set");
        let secret_key =
            optional_env("IDENTITY_SECRET_KEY").expect("IDENTITY_SECRET_KEY must be set");
        let api_url =
            optional_env("IDENTITY_API_URL").unwrap_or_else(|| DEFAULT_IDENTITY_API_URL.into());

        Self {
            jwt_secret,
            api_url,
            secret_key,
        }
    }
}

/// Validate and decode a session token, returning its [`Claims`].
///
/// Checks the signature and expiration.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Pull the raw session token out of the request headers.
///
/// The `Authorization` header wins over the cookie when both are present.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if bearer.is_some() {
        return bearer;
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value)
        .filter(|t| !t.is_empty())
}
