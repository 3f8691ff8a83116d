//! Image payloads returned by the provider.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One generated image exactly as the provider describes it.
///
/// The object is held as raw JSON and serialized back key for key, so the
/// caller receives whatever fields the provider sent (including explicit
/// `null`s) and nothing more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratedImage(Map<String, Value>);

impl GeneratedImage {
    /// Position of this image in the provider's `data` array, if reported.
    pub fn index(&self) -> Option<u64> {
        self.0.get("index").and_then(Value::as_u64)
    }

    /// Inline base64 image data (requested via `response_format: "base64"`).
    pub fn b64_json(&self) -> Option<&str> {
        self.0.get("b64_json").and_then(Value::as_str)
    }

    /// Hosted image URL, when the provider returns one instead of inline data.
    pub fn url(&self) -> Option<&str> {
        self.0.get("url").and_then(Value::as_str)
    }

    /// The raw provider object.
    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Response body of `POST /images/generations`.
#[derive(Debug, Deserialize)]
pub(crate) struct ImagesResponse {
    #[serde(default)]
    pub data: Vec<GeneratedImage>,
}
