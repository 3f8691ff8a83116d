//! Handler for logo generation.
//!
//! Routes:
//! - `POST /generate-logo`: validate, enforce quota, render prompt, generate

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use logoforge_core::generation::GenerationRequest;
use logoforge_core::prompt::render_prompt;
use logoforge_core::quota::{quota_key, QuotaMetadata, RemainingCredits};
use logoforge_core::request::parse_logo_request;
use logoforge_together::CallOptions;

use crate::auth::identity::record_remaining;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// POST /api/v1/generate-logo
///
/// Pipeline: authenticate (via [`AuthUser`]), validate the body, pick the
/// quota policy, consume quota, render the prompt, call the provider.
///
/// A caller-supplied `userAPIKey` replaces the operator key for this call
/// only, marks the caller's metadata as `BYOK`, and skips rate limiting.
/// Otherwise, when a limiter is configured, one unit is consumed and the
/// remaining count is written back to the caller's metadata whether or not
/// the unit was granted.
pub async fn generate_logo(
    State(state): State<AppState>,
    user: AuthUser,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let input = parse_logo_request(&body)?;

    let options = match input.byok_key() {
        Some(key) => CallOptions::with_api_key(key),
        None => CallOptions::default(),
    };
    let byok = options.is_byok();

    if byok {
        record_remaining(
            state.identity.as_ref(),
            &user.user_id,
            QuotaMetadata {
                remaining: RemainingCredits::Byok,
            },
        )
        .await;
    }

    if let Some(limiter) = state.quota_for(byok) {
        let decision = limiter.consume(&quota_key(&user.user_id)).await?;

        record_remaining(
            state.identity.as_ref(),
            &user.user_id,
            QuotaMetadata {
                remaining: decision.into(),
            },
        )
        .await;

        if !decision.allowed {
            tracing::info!(user_id = %user.user_id, "Quota exhausted");
            return Err(AppError::QuotaExhausted);
        }
    }

    let request = GenerationRequest::new(render_prompt(&input));

    tracing::info!(
        user_id = %user.user_id,
        style = %input.selected_style,
        byok,
        observability = state.observability_enabled(),
        seed = request.seed,
        "Generating logo"
    );

    let image = state.generator.generate(&request, &options).await?;

    Ok(Json(image))
}
