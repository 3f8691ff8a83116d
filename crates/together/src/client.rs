//! REST client for the Together `/images/generations` endpoint.

use async_trait::async_trait;
use logoforge_core::generation::GenerationRequest;

use crate::error::{classify_error, GenerationError};
use crate::image::{GeneratedImage, ImagesResponse};

/// Public Together API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.together.xyz/v1";

/// Header authenticating against the observability proxy.
pub const PROXY_AUTH_HEADER: &str = "Helicone-Auth";
/// Proxy property header recording whether the caller brought their own key.
pub const PROXY_BYOK_HEADER: &str = "Helicone-Property-BYOK";

/// Anything that can turn a [`GenerationRequest`] into an image.
///
/// The API layer depends on this trait rather than on [`TogetherClient`] so
/// tests can substitute an in-memory generator.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
        options: &CallOptions,
    ) -> Result<GeneratedImage, GenerationError>;
}

/// Per-call options.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Caller-supplied credential. Overrides the client's default key for
    /// this call only.
    pub api_key_override: Option<String>,
}

impl CallOptions {
    pub fn with_api_key(key: impl Into<String>) -> Self {
        Self {
            api_key_override: Some(key.into()),
        }
    }

    /// Whether this call uses a caller-supplied credential.
    pub fn is_byok(&self) -> bool {
        self.api_key_override.is_some()
    }
}

/// Logging proxy that sits in front of the provider.
#[derive(Debug, Clone)]
pub struct ObservabilityProxy {
    /// Proxy credential, sent as `Helicone-Auth: Bearer <key>`.
    pub api_key: String,
    /// Proxy base URL replacing the provider base URL.
    pub base_url: String,
}

/// HTTP client for the Together image API.
pub struct TogetherClient {
    client: reqwest::Client,
    base_url: String,
    default_api_key: Option<String>,
    proxy: Option<ObservabilityProxy>,
}

impl TogetherClient {
    /// Create a client against `base_url`, e.g. `https://api.together.xyz/v1`.
    ///
    /// * `default_api_key` - Operator credential used when the caller does
    ///   not bring their own.
    pub fn new(base_url: String, default_api_key: Option<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url, default_api_key)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(
        client: reqwest::Client,
        base_url: String,
        default_api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: trim_base(base_url),
            default_api_key,
            proxy: None,
        }
    }

    /// Route every call through an observability proxy.
    pub fn with_proxy(mut self, proxy: ObservabilityProxy) -> Self {
        self.proxy = Some(ObservabilityProxy {
            base_url: trim_base(proxy.base_url),
            ..proxy
        });
        self
    }

    /// Whether calls are routed through the observability proxy.
    pub fn is_proxied(&self) -> bool {
        self.proxy.is_some()
    }

    fn endpoint(&self) -> String {
        let base = self
            .proxy
            .as_ref()
            .map_or(self.base_url.as_str(), |p| p.base_url.as_str());
        format!("{base}/images/generations")
    }

    /// Submit a generation request and return the first image.
    pub async fn generate_image(
        &self,
        request: &GenerationRequest,
        options: &CallOptions,
    ) -> Result<GeneratedImage, GenerationError> {
        let mut builder = self.client.post(self.endpoint()).json(request);

        let api_key = options
            .api_key_override
            .as_deref()
            .or(self.default_api_key.as_deref());
        if let Some(key) = api_key {
            builder = builder.bearer_auth(key);
        }

        if let Some(proxy) = &self.proxy {
            builder = builder
                .header(PROXY_AUTH_HEADER, format!("Bearer {}", proxy.api_key))
                .header(PROXY_BYOK_HEADER, options.is_byok().to_string());
        }

        tracing::debug!(
            model = request.model,
            seed = request.seed,
            byok = options.is_byok(),
            proxied = self.is_proxied(),
            "Submitting image generation request"
        );

        let response = builder.send().await?;
        let response = Self::ensure_success(response).await?;
        let body: ImagesResponse = response.json().await?;

        body.data
            .into_iter()
            .next()
            .ok_or(GenerationError::EmptyResponse)
    }

    // ---- private helpers ----

    /// Return the response unchanged on success, or a classified
    /// [`GenerationError`] built from the status and body on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, GenerationError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(classify_error(status.as_u16(), body));
        }
        Ok(response)
    }
}

#[async_trait]
impl ImageGenerator for TogetherClient {
    async fn generate(
        &self,
        request: &GenerationRequest,
        options: &CallOptions,
    ) -> Result<GeneratedImage, GenerationError> {
        self.generate_image(request, options).await
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
