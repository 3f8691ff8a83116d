//! Identity provider capability: who is calling, and where their quota
//! metadata lives.

use async_trait::async_trait;
use axum::http::HeaderMap;
use logoforge_core::quota::QuotaMetadata;
use serde::Serialize;

use crate::auth::session::{session_token, validate_token, SessionConfig};

/// The authenticated caller as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    /// Opaque provider user id. Used as the quota partition key.
    pub user_id: String,
}

/// Errors from the identity provider's backend API.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The identity API returned a non-2xx status code.
    #[error("Identity API error ({status}): {body}")]
    Api { status: u16, body: String },
}

/// Capability exposed by the identity provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve the caller from request headers. `None` means anonymous.
    async fn current_user(&self, headers: &HeaderMap) -> Option<CallerIdentity>;

    /// Replace the caller's quota metadata.
    async fn update_user_metadata(
        &self,
        user_id: &str,
        metadata: &QuotaMetadata,
    ) -> Result<(), IdentityError>;
}

/// Metadata update body: quota state lives in the user's unsafe
/// (client-readable) metadata so the front end can display it.
#[derive(Serialize)]
struct MetadataPatch<'a> {
    unsafe_metadata: &'a QuotaMetadata,
}

/// [`IdentityProvider`] backed by signed session tokens and the provider's
/// backend REST API.
pub struct SessionIdentityProvider {
    client: reqwest::Client,
    config: SessionConfig,
}

impl SessionIdentityProvider {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create a provider reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: SessionConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl IdentityProvider for SessionIdentityProvider {
    async fn current_user(&self, headers: &HeaderMap) -> Option<CallerIdentity> {
        let token = session_token(headers)?;
        match validate_token(token, &self.config.jwt_secret) {
            Ok(claims) => Some(CallerIdentity {
                user_id: claims.sub,
            }),
            Err(e) => {
                tracing::debug!(error = %e, "Rejected session token");
                None
            }
        }
    }

    async fn update_user_metadata(
        &self,
        user_id: &str,
        metadata: &QuotaMetadata,
    ) -> Result<(), IdentityError> {
        let url = format!(
            "{}/users/{}/metadata",
            self.config.api_url.trim_end_matches('/'),
            user_id
        );

        let response = self
            .client
            .patch(url)
            .bearer_auth(&self.config.secret_key)
            .json(&MetadataPatch {
                unsafe_metadata: metadata,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(IdentityError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

/// Write quota metadata without letting a failure reach the caller.
///
/// Awaited so the record is current before the response goes out, but any
/// error is only logged.
pub async fn record_remaining(
    identity: &dyn IdentityProvider,
    user_id: &str,
    metadata: QuotaMetadata,
) {
    if let Err(e) = identity.update_user_metadata(user_id, &metadata).await {
        tracing::warn!(
            user_id,
            remaining = ?metadata.remaining,
            error = %e,
            "Best-effort quota metadata update failed"
        );
    }
}
