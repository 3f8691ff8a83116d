use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use logoforge_core::error::CoreError;
use logoforge_together::GenerationError;
use serde_json::json;

use crate::quota::QuotaError;

/// Body returned with 429 when a caller's quota is exhausted.
pub const QUOTA_EXHAUSTED_MESSAGE: &str = "You've used up all your credits. Enter your own \
     Together API key to generate more logos.";

/// Body returned with 401 when the provider rejects the credential.
pub const INVALID_API_KEY_MESSAGE: &str = "Your API key is invalid.";

/// Body returned with 403 when the provider account needs billing details.
pub const BILLING_REQUIRED_MESSAGE: &str = "Your Together AI account needs billing information \
     to use this model. Please add a payment method at: https://api.together.xyz/settings/billing";

/// Application-level error type for HTTP handlers.
///
/// Wraps domain and collaborator errors and adds the policy rejections.
/// Implements [`IntoResponse`]: policy rejections and the two actionable
/// provider failures become fixed plain-text responses, everything else the
/// standard JSON error envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `logoforge_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An image-generation failure.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// A rate-limit store failure.
    #[error(transparent)]
    Quota(#[from] QuotaError),

    /// No authenticated caller. Answered with a bare 404 so the endpoint
    /// does not reveal itself to anonymous probes.
    #[error("Unauthenticated")]
    Unauthenticated,

    /// The caller has no credits left in the current window.
    #[error("Quota exhausted")]
    QuotaExhausted,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- Policy rejections and classified provider failures ---
            AppError::Unauthenticated => return StatusCode::NOT_FOUND.into_response(),
            AppError::QuotaExhausted => {
                return (StatusCode::TOO_MANY_REQUESTS, QUOTA_EXHAUSTED_MESSAGE).into_response()
            }
            AppError::Generation(GenerationError::InvalidApiKey) => {
                return (StatusCode::UNAUTHORIZED, INVALID_API_KEY_MESSAGE).into_response()
            }
            AppError::Generation(GenerationError::AccountBlocked { .. }) => {
                return (StatusCode::FORBIDDEN, BILLING_REQUIRED_MESSAGE).into_response()
            }

            // --- CoreError variants ---
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }

            // --- Unclassified collaborator failures ---
            AppError::Generation(err) => {
                tracing::error!(error = %err, "Image generation failed");
                internal()
            }
            AppError::Quota(err) => {
                tracing::error!(error = %err, "Rate-limit store failed");
                internal()
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
