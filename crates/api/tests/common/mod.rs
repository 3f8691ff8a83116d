#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{HeaderMap, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use logoforge_api::auth::identity::{CallerIdentity, IdentityError, IdentityProvider};
use logoforge_api::auth::session::SessionConfig;
use logoforge_api::config::ServerConfig;
use logoforge_api::quota::{QuotaError, QuotaLimiter};
use logoforge_api::router::build_app_router;
use logoforge_api::state::AppState;
use logoforge_core::generation::GenerationRequest;
use logoforge_core::quota::{QuotaDecision, QuotaMetadata, RemainingCredits};
use logoforge_together::{CallOptions, GeneratedImage, GenerationError, ImageGenerator};

/// Header the fake identity provider reads the caller id from.
pub const TEST_USER_HEADER: &str = "x-test-user";

/// Build a test `ServerConfig` with safe defaults and no optional
/// integrations.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        together_api_key: Some("operator-key".to_string()),
        together_base_url: "http://together.invalid/v1".to_string(),
        helicone_api_key: None,
        helicone_base_url: "http://helicone.invalid/v1".to_string(),
        redis_url: None,
        session: SessionConfig {
            jwt_secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            api_url: "http://identity.invalid/v1".to_string(),
            secret_key: "identity-secret".to_string(),
        },
    }
}

// ---------------------------------------------------------------------------
// Fake identity provider
// ---------------------------------------------------------------------------

/// Treats the `x-test-user` header as the caller id and records every
/// metadata write.
#[derive(Default)]
pub struct FakeIdentity {
    pub updates: Mutex<Vec<(String, RemainingCredits)>>,
    pub fail_updates: bool,
}

impl FakeIdentity {
    pub fn failing() -> Self {
        Self {
            fail_updates: true,
            ..Self::default()
        }
    }

    pub fn updates(&self) -> Vec<(String, RemainingCredits)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn current_user(&self, headers: &HeaderMap) -> Option<CallerIdentity> {
        headers
            .get(TEST_USER_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(|id| CallerIdentity {
                user_id: id.to_string(),
            })
    }

    async fn update_user_metadata(
        &self,
        user_id: &str,
        metadata: &QuotaMetadata,
    ) -> Result<(), IdentityError> {
        self.updates
            .lock()
            .unwrap()
            .push((user_id.to_string(), metadata.remaining));
        if self.fail_updates {
            return Err(IdentityError::Api {
                status: 503,
                body: "identity service unavailable".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fake quota limiter
// ---------------------------------------------------------------------------

/// In-memory fixed-window counter that never resets.
pub struct FakeQuota {
    pub limit: u32,
    pub used: Mutex<HashMap<String, u32>>,
    pub calls: AtomicUsize,
}

impl FakeQuota {
    pub fn new(limit: u32) -> Self {
        Self {
            limit,
            used: Mutex::new(HashMap::new()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuotaLimiter for FakeQuota {
    async fn consume(&self, key: &str) -> Result<QuotaDecision, QuotaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let mut used = self.used.lock().unwrap();
        let count = used.entry(key.to_string()).or_insert(0);
        if *count < self.limit {
            *count += 1;
            Ok(QuotaDecision::allowed(self.limit - *count))
        } else {
            Ok(QuotaDecision::denied())
        }
    }
}

// ---------------------------------------------------------------------------
// Fake image generator
// ---------------------------------------------------------------------------

/// What the fake generator answers with.
#[derive(Debug, Clone, Copy)]
pub enum FakeOutcome {
    Image,
    InvalidApiKey,
    AccountBlocked,
    ServerError,
}

pub struct FakeGenerator {
    pub outcome: FakeOutcome,
    pub calls: Mutex<Vec<(GenerationRequest, CallOptions)>>,
}

impl FakeGenerator {
    pub fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(GenerationRequest, CallOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn sample_image() -> GeneratedImage {
    serde_json::from_value(serde_json::json!({ "index": 0, "b64_json": "aW1hZ2U=" })).unwrap()
}

#[async_trait]
impl ImageGenerator for FakeGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
        options: &CallOptions,
    ) -> Result<GeneratedImage, GenerationError> {
        self.calls
            .lock()
            .unwrap()
            .push((request.clone(), options.clone()));
        match self.outcome {
            FakeOutcome::Image => Ok(sample_image()),
            FakeOutcome::InvalidApiKey => Err(GenerationError::InvalidApiKey),
            FakeOutcome::AccountBlocked => Err(GenerationError::AccountBlocked {
                message: "needs billing".to_string(),
            }),
            FakeOutcome::ServerError => Err(GenerationError::Api {
                status: 500,
                body: "upstream exploded".to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// App harness
// ---------------------------------------------------------------------------

/// The fakes behind a test app, kept so tests can inspect them.
pub struct TestHarness {
    pub app: Router,
    pub identity: Arc<FakeIdentity>,
    pub quota: Option<Arc<FakeQuota>>,
    pub generator: Arc<FakeGenerator>,
}

/// Build the full application router (same middleware stack as production)
/// over the given fakes.
pub fn build_test_app(
    config: ServerConfig,
    identity: Arc<FakeIdentity>,
    quota: Option<Arc<FakeQuota>>,
    generator: Arc<FakeGenerator>,
) -> TestHarness {
    let state = AppState {
        config: Arc::new(config.clone()),
        identity: identity.clone(),
        quota: quota.clone().map(|q| q as Arc<dyn QuotaLimiter>),
        generator: generator.clone(),
    };

    TestHarness {
        app: build_app_router(state, &config),
        identity,
        quota,
        generator,
    }
}

/// Default harness: quota enforced with the standard limit of 3, generator
/// succeeds.
pub fn default_harness() -> TestHarness {
    build_test_app(
        test_config(),
        Arc::new(FakeIdentity::default()),
        Some(Arc::new(FakeQuota::new(3))),
        Arc::new(FakeGenerator::new(FakeOutcome::Image)),
    )
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub fn logo_body() -> serde_json::Value {
    serde_json::json!({
        "companyName": "Acme",
        "selectedStyle": "Minimal",
        "selectedPrimaryColor": "#112233",
        "selectedBackgroundColor": "#ffffff",
    })
}

/// POST a raw body to `uri`, optionally as an authenticated user.
pub async fn post_raw(app: Router, uri: &str, user: Option<&str>, body: String) -> Response<Body> {
    let mut builder = Request::post(uri).header("content-type", "application/json");
    if let Some(user) = user {
        builder = builder.header(TEST_USER_HEADER, user);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(
    app: Router,
    uri: &str,
    user: Option<&str>,
    body: &serde_json::Value,
) -> Response<Body> {
    post_raw(app, uri, user, body.to_string()).await
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
