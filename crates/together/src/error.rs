//! Provider failure classification.

use serde::Deserialize;

/// Provider error code for a rejected credential.
pub const CODE_INVALID_API_KEY: &str = "invalid_api_key";
/// Provider error type for an account that cannot use the model (billing).
pub const TYPE_REQUEST_BLOCKED: &str = "request_blocked";

/// Errors from an image-generation call.
///
/// The first two variants are the failures callers can act on; everything
/// else is an operator-side problem.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The provider rejected the credential.
    #[error("Provider rejected the API key")]
    InvalidApiKey,

    /// The account is blocked from this model until billing is set up.
    #[error("Provider account is blocked: {message}")]
    AccountBlocked { message: String },

    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status we do not classify.
    #[error("Provider API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response carried no image.
    #[error("Provider returned no images")]
    EmptyResponse,
}

/// Error envelope returned by the provider: `{"error": {...}}`.
#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    code: Option<String>,
}

/// Classify a non-2xx provider response by the structure of its body.
///
/// Matching is on `error.code` and `error.type` only, never on message text.
pub fn classify_error(status: u16, body: String) -> GenerationError {
    let Ok(parsed) = serde_json::from_str::<ProviderErrorBody>(&body) else {
        return GenerationError::Api { status, body };
    };
    let detail = parsed.error;

    if detail.code.as_deref() == Some(CODE_INVALID_API_KEY) {
        return GenerationError::InvalidApiKey;
    }
    if detail.kind.as_deref() == Some(TYPE_REQUEST_BLOCKED) {
        return GenerationError::AccountBlocked {
            message: detail.message.unwrap_or_default(),
        };
    }
    GenerationError::Api { status, body }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
