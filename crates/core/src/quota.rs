//! Usage quota constants and the values exchanged with the rate-limit store
//! and the identity provider's user metadata.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Generations allowed per caller per window.
pub const QUOTA_LIMIT: u32 = 3;

/// Fixed window length: 60 days.
pub const QUOTA_WINDOW_SECS: u64 = 60 * 24 * 60 * 60;

/// Namespace prefix for every counter key.
pub const QUOTA_KEY_PREFIX: &str = "logoforge";

/// Metadata marker recorded for callers who bring their own key.
pub const BYOK_MARKER: &str = "BYOK";

/// Counter key for a caller.
pub fn quota_key(user_id: &str) -> String {
    format!("{QUOTA_KEY_PREFIX}:{user_id}")
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

/// Outcome of consuming one unit from the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaDecision {
    pub allowed: bool,
    pub remaining: u32,
}

impl QuotaDecision {
    pub fn allowed(remaining: u32) -> Self {
        Self {
            allowed: true,
            remaining,
        }
    }

    pub fn denied() -> Self {
        Self {
            allowed: false,
            remaining: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Caller-visible metadata
// ---------------------------------------------------------------------------

/// Remaining-credit value written to the caller's identity record.
///
/// Serializes as a bare number or the string `"BYOK"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemainingCredits {
    Count(u32),
    Byok,
}

impl Serialize for RemainingCredits {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RemainingCredits::Count(n) => serializer.serialize_u32(*n),
            RemainingCredits::Byok => serializer.serialize_str(BYOK_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for RemainingCredits {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Marker(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(RemainingCredits::Count(n)),
            Raw::Marker(s) if s == BYOK_MARKER => Ok(RemainingCredits::Byok),
            Raw::Marker(other) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{BYOK_MARKER}\", got \"{other}\""
            ))),
        }
    }
}

impl From<QuotaDecision> for RemainingCredits {
    fn from(decision: QuotaDecision) -> Self {
        RemainingCredits::Count(decision.remaining)
    }
}

/// The metadata document pushed to the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaMetadata {
    pub remaining: RemainingCredits,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
