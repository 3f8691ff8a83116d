//! Style lexicon: the fixed set of logo styles a caller can pick and the
//! descriptive prompt fragment each one contributes.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Style names
// ---------------------------------------------------------------------------

/// A logo style selectable by the caller.
///
/// Deserializes from the exact display name (`"Minimal"`, `"Tech"`, ...).
/// Anything else is rejected, so a rendered prompt never carries an
/// undefined fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LogoStyle {
    Tech,
    Flashy,
    Modern,
    Playful,
    Abstract,
    Minimal,
}

/// Every style in the order the style picker shows them.
pub const ALL_STYLES: [LogoStyle; 6] = [
    LogoStyle::Tech,
    LogoStyle::Flashy,
    LogoStyle::Modern,
    LogoStyle::Playful,
    LogoStyle::Abstract,
    LogoStyle::Minimal,
];

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

impl LogoStyle {
    /// The display name, identical to the wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            LogoStyle::Tech => "Tech",
            LogoStyle::Flashy => "Flashy",
            LogoStyle::Modern => "Modern",
            LogoStyle::Playful => "Playful",
            LogoStyle::Abstract => "Abstract",
            LogoStyle::Minimal => "Minimal",
        }
    }

    /// Descriptive prompt fragment for this style.
    pub fn fragment(self) -> &'static str {
        match self {
            LogoStyle::Tech => {
                "highly detailed, sharp focus, cinematic, photorealistic, minimalist, clean and \
                 sleek, neutral color palette with subtle accents, clean lines, soft shadows, flat"
            }
            LogoStyle::Flashy => {
                "flashy, attention grabbing, bold, futuristic and eye-catching, vibrant neon \
                 colors with metallic, shiny and glossy accents"
            }
            LogoStyle::Modern => {
                "modern, forward-thinking, flat design, geometric shapes, clean lines, natural \
                 colors with subtle accents, strategic negative space to create visual interest"
            }
            LogoStyle::Playful => {
                "playful, lighthearted, bright bold colors, rounded shapes, lively"
            }
            LogoStyle::Abstract => {
                "abstract, artistic, creative, unique shapes, patterns and textures that make a \
                 visually interesting and wild logo"
            }
            LogoStyle::Minimal => {
                "minimal, simple, timeless, versatile, single color logo, negative space, flat \
                 design with minimal details, light, soft and subtle"
            }
        }
    }
}

impl std::fmt::Display for LogoStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_has_six_distinct_fragments() {
        let mut fragments: Vec<_> = ALL_STYLES.iter().map(|s| s.fragment()).collect();
        fragments.sort_unstable();
        fragments.dedup();
        assert_eq!(fragments.len(), 6);
    }

    #[test]
    fn deserializes_from_display_name() {
        let style: LogoStyle = serde_json::from_str("\"Playful\"").unwrap();
        assert_eq!(style, LogoStyle::Playful);
    }

    #[test]
    fn deserialize_rejects_unknown_name() {
        assert!(serde_json::from_str::<LogoStyle>("\"Retro\"").is_err());
    }

    #[test]
    fn deserialize_is_case_sensitive() {
        assert!(serde_json::from_str::<LogoStyle>("\"minimal\"").is_err());
    }

    #[test]
    fn serializes_as_display_name() {
        for style in ALL_STYLES {
            assert_eq!(serde_json::to_value(style).unwrap(), style.as_str());
        }
    }
}
