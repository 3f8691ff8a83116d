use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logoforge_api::auth::identity::{IdentityProvider, SessionIdentityProvider};
use logoforge_api::config::ServerConfig;
use logoforge_api::quota::{QuotaLimiter, RedisQuotaLimiter};
use logoforge_api::router::build_app_router;
use logoforge_api::state::AppState;
use logoforge_together::{ImageGenerator, TogetherClient};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "logoforge_api=debug,logoforge_together=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    let http = reqwest::Client::new();

    // --- Identity provider ---
    let identity: Arc<dyn IdentityProvider> = Arc::new(SessionIdentityProvider::with_client(
        http.clone(),
        config.session.clone(),
    ));

    // --- Quota limiter ---
    let quota: Option<Arc<dyn QuotaLimiter>> = match &config.redis_url {
        Some(url) => {
            let limiter = RedisQuotaLimiter::connect(url)
                .await
                .expect("Failed to connect to rate-limit store");
            tracing::info!("Quota enforcement enabled");
            Some(Arc::new(limiter))
        }
        None => {
            tracing::warn!("REDIS_URL not set, quota enforcement disabled");
            None
        }
    };

    // --- Image provider ---
    let mut together = TogetherClient::with_client(
        http,
        config.together_base_url.clone(),
        config.together_api_key.clone(),
    );
    match config.observability_proxy() {
        Some(proxy) => {
            tracing::info!(base_url = %proxy.base_url, "Routing generation through observability proxy");
            together = together.with_proxy(proxy);
        }
        None => tracing::info!("HELICONE_API_KEY not set, observability proxy disabled"),
    }
    let generator: Arc<dyn ImageGenerator> = Arc::new(together);

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        identity,
        quota,
        generator,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT or SIGTERM to initiate graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
