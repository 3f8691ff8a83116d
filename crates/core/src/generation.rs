//! Fixed image-generation parameters and the per-call request built from a
//! rendered prompt.

use rand::Rng;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Fixed parameters
// ---------------------------------------------------------------------------

/// Model identifier sent to the image provider.
pub const MODEL: &str = "black-forest-labs/FLUX.1-schnell";
/// Square output edge in pixels.
pub const IMAGE_SIZE: u32 = 1024;
/// Diffusion steps. The schnell model is distilled for very few steps.
pub const STEPS: u32 = 4;
/// Images per call. Only the first one is returned to the caller.
pub const IMAGE_COUNT: u32 = 1;
/// Prompt adherence strength.
pub const GUIDANCE: f32 = 3.5;
/// Ask for inline base64 image data instead of a hosted URL.
pub const RESPONSE_FORMAT: &str = "base64";
/// Negative prompt discouraging drift away from the requested palette.
pub const NEGATIVE_PROMPT: &str = "wrong colors, color shifts, off-palette tones, extra colors, \
     gradients that change the requested hues, desaturated or tinted versions of the requested colors";

/// Inclusive seed range. Uniform over positive 32-bit signed integers.
pub const SEED_MIN: i64 = 1;
pub const SEED_MAX: i64 = i32::MAX as i64;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Body of one image-generation call.
///
/// Every field except `prompt` and `seed` is fixed. The seed is drawn fresh
/// for each call so repeated identical requests yield distinct images.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub model: &'static str,
    pub prompt: String,
    pub negative_prompt: &'static str,
    pub width: u32,
    pub height: u32,
    pub steps: u32,
    pub n: u32,
    pub guidance: f32,
    pub seed: i64,
    pub response_format: &'static str,
}

impl GenerationRequest {
    /// Build a request for `prompt` with a randomly drawn seed.
    pub fn new(prompt: String) -> Self {
        Self::with_seed(prompt, random_seed())
    }

    /// Build a request with an explicit seed.
    pub fn with_seed(prompt: String, seed: i64) -> Self {
        Self {
            model: MODEL,
            prompt,
            negative_prompt: NEGATIVE_PROMPT,
            width: IMAGE_SIZE,
            height: IMAGE_SIZE,
            steps: STEPS,
            n: IMAGE_COUNT,
            guidance: GUIDANCE,
            seed,
            response_format: RESPONSE_FORMAT,
        }
    }
}

/// Draw a seed uniformly from [`SEED_MIN`]..=[`SEED_MAX`].
pub fn random_seed() -> i64 {
    rand::rng().random_range(SEED_MIN..=SEED_MAX)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_within_range() {
        for _ in 0..1_000 {
            let seed = random_seed();
            assert!((SEED_MIN..=SEED_MAX).contains(&seed));
        }
    }

    #[test]
    fn identical_prompts_get_different_seeds() {
        // Ten draws over a 2^31 range.
        let seeds: std::collections::HashSet<i64> = (0..10)
            .map(|_| GenerationRequest::new("same".into()).seed)
            .collect();
        assert!(seeds.len() > 1);
    }

    #[test]
    fn only_prompt_and_seed_vary() {
        let a = GenerationRequest::with_seed("p".into(), 1);
        let b = GenerationRequest::with_seed("p".into(), 2);
        assert_ne!(a, b);
        assert_eq!(a, GenerationRequest { seed: 1, ..b });
    }

    #[test]
    fn serializes_provider_field_names() {
        let value = serde_json::to_value(GenerationRequest::with_seed("p".into(), 7)).unwrap();
        assert_eq!(value["model"], MODEL);
        assert_eq!(value["width"], IMAGE_SIZE);
        assert_eq!(value["height"], IMAGE_SIZE);
        assert_eq!(value["steps"], STEPS);
        assert_eq!(value["n"], 1);
        assert_eq!(value["seed"], 7);
        assert_eq!(value["negative_prompt"], NEGATIVE_PROMPT);
        assert_eq!(value["response_format"], "base64");
    }
}
