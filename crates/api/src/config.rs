use logoforge_together::client::DEFAULT_BASE_URL;
use logoforge_together::ObservabilityProxy;

use crate::auth::session::SessionConfig;

/// Default observability proxy base URL (Helicone's Together gateway).
pub const DEFAULT_HELICONE_BASE_URL: &str = "https://together.helicone.ai/v1";

/// Server configuration loaded from environment variables.
///
/// All fields except the identity secrets have defaults suitable for local
/// development. Optional integrations stay off when their variable is unset
/// or empty.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `120`).
    pub request_timeout_secs: u64,
    /// Operator credential for the image provider.
    pub together_api_key: Option<String>,
    /// Image provider base URL.
    pub together_base_url: String,
    /// Observability proxy credential. Enables proxy routing when set.
    pub helicone_api_key: Option<String>,
    /// Observability proxy base URL.
    pub helicone_base_url: String,
    /// Rate-limit store address. Enables quota enforcement when set.
    pub redis_url: Option<String>,
    /// Identity provider settings (session verification + metadata API).
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                            |
    /// |------------------------|------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                          |
    /// | `PORT`                 | `3000`                             |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`            |
    /// | `REQUEST_TIMEOUT_SECS` | `120`                              |
    /// | `TOGETHER_API_KEY`     | unset                              |
    /// | `TOGETHER_BASE_URL`    | `https://api.together.xyz/v1`      |
    /// | `HELICONE_API_KEY`     | unset (no observability proxy)     |
    /// | `HELICONE_BASE_URL`    | `https://together.helicone.ai/v1`  |
    /// | `REDIS_URL`            | unset (no quota enforcement)       |
    ///
    /// See [`SessionConfig::from_env`] for the identity variables.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "120".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            together_api_key: optional_env("TOGETHER_API_KEY"),
            together_base_url: optional_env("TOGETHER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.into()),
            helicone_api_key: optional_env("HELICONE_API_KEY"),
            helicone_base_url: optional_env("HELICONE_BASE_URL")
                .unwrap_or_else(|| DEFAULT_HELICONE_BASE_URL.into()),
            redis_url: optional_env("REDIS_URL"),
            session: SessionConfig::from_env(),
        }
    }

    /// The observability proxy, if a proxy credential is configured.
    pub fn observability_proxy(&self) -> Option<ObservabilityProxy> {
        self.helicone_api_key
            .as_ref()
            .map(|api_key| ObservabilityProxy {
                api_key: api_key.clone(),
                base_url: self.helicone_base_url.clone(),
            })
    }
}

/// Read an env var, treating unset and empty the same.
pub(crate) fn optional_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
