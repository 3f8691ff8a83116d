pub mod health;
pub mod logo;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /generate-logo                                   generate (requires auth)
/// /styles                                          list styles (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(logo::router())
        .route("/styles", get(handlers::styles::list_styles))
}
