//! Route definitions for logo generation.
//!
//! ```text
//! POST   /generate-logo                  generate_logo
//! ```

use axum::routing::post;
use axum::Router;

use crate::handlers::logo;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/generate-logo", post(logo::generate_logo))
}
