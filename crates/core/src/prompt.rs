//! Prompt rendering for logo generation.
//!
//! [`render_prompt`] is a pure function of the validated request: the same
//! input always produces the same text. Both hex colors and the company
//! name are embedded verbatim.

use std::fmt::Write as _;

use crate::request::LogoRequest;

/// Quality and format requirements appended to every prompt.
const QUALITY_REQUIREMENTS: &str = "\
Requirements:
- Vector-style artwork with crisp edges, suitable for a brand mark
- Centered composition on a plain square canvas
- No photographic backgrounds, mockups, or watermarks
- Text, if rendered, must be legible and spelled exactly as given
- High contrast between the mark and the background";

/// Render the generation prompt for a validated request.
pub fn render_prompt(request: &LogoRequest) -> String {
    let primary = &request.selected_primary_color;
    let background = &request.selected_background_color;

    let mut prompt = String::new();

    // `write!` into a String cannot fail.
    let _ = writeln!(
        prompt,
        "Use exactly these colors: primary color {primary} and background color {background}. \
         Match the hex values precisely."
    );
    let _ = writeln!(
        prompt,
        "Design a single professional logo in this style: {}.",
        request.selected_style.fragment()
    );
    let _ = writeln!(
        prompt,
        "The company name is \"{}\" and it must appear in the logo.",
        request.company_name
    );
    if let Some(info) = request.additional_info() {
        let _ = writeln!(prompt, "Additional details: {info}");
    }
    let _ = writeln!(prompt, "{QUALITY_REQUIREMENTS}");
    let _ = write!(
        prompt,
        "Most important: the primary color must be exactly {primary} and the background must be \
         exactly {background}, with no other dominant colors."
    );

    prompt
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::LogoStyle;

    fn acme() -> LogoRequest {
        LogoRequest {
            user_api_key: None,
            company_name: "Acme".to_string(),
            selected_style: LogoStyle::Minimal,
            selected_primary_color: "#112233".to_string(),
            selected_background_color: "#ffffff".to_string(),
            additional_info: None,
        }
    }

    #[test]
    fn prompt_embeds_colors_name_and_style_fragment() {
        let prompt = render_prompt(&acme());
        assert!(prompt.contains("#112233"));
        assert!(prompt.contains("#ffffff"));
        assert!(prompt.contains("\"Acme\""));
        assert!(prompt.contains(LogoStyle::Minimal.fragment()));
    }

    #[test]
    fn prompt_repeats_color_emphasis_at_the_end() {
        let prompt = render_prompt(&acme());
        let last = prompt.lines().last().unwrap();
        assert!(last.contains("#112233") && last.contains("#ffffff"));
    }

    #[test]
    fn additional_info_line_only_when_present() {
        let without = render_prompt(&acme());
        assert!(!without.contains("Additional details"));

        let mut req = acme();
        req.additional_info = Some("a small rocket".to_string());
        let with = render_prompt(&req);
        assert!(with.contains("Additional details: a small rocket"));
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_prompt(&acme()), render_prompt(&acme()));
    }

    #[test]
    fn company_name_is_not_altered() {
        let mut req = acme();
        req.company_name = "  ÜberCo & Sons  ".to_string();
        assert!(render_prompt(&req).contains("\"  ÜberCo & Sons  \""));
    }

    #[test]
    fn includes_quality_block() {
        assert!(render_prompt(&acme()).contains(QUALITY_REQUIREMENTS));
    }
}
