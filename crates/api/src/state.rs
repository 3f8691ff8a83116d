use std::sync::Arc;

use logoforge_together::ImageGenerator;

use crate::auth::identity::IdentityProvider;
use crate::config::ServerConfig;
use crate::quota::QuotaLimiter;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; every collaborator sits behind an `Arc` and is built
/// once at startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Identity provider (caller lookup + metadata writes).
    pub identity: Arc<dyn IdentityProvider>,
    /// Quota limiter. `None` when no rate-limit store is configured.
    pub quota: Option<Arc<dyn QuotaLimiter>>,
    /// Image generation provider.
    pub generator: Arc<dyn ImageGenerator>,
}

impl AppState {
    /// The limiter to enforce for this request, if any.
    ///
    /// Callers who bring their own key are never rate limited, even when a
    /// store is configured.
    pub fn quota_for(&self, byok: bool) -> Option<&dyn QuotaLimiter> {
        if byok {
            return None;
        }
        self.quota.as_deref()
    }

    /// Whether generation calls are tagged through the observability proxy.
    pub fn observability_enabled(&self) -> bool {
        self.config.helicone_api_key.is_some()
    }
}
