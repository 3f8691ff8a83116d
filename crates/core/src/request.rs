//! The logo generation request body and its validation.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::style::LogoStyle;

/// Body of `POST /generate-logo`.
///
/// Validation is all-or-nothing: [`parse_logo_request`] either returns a
/// fully valid request or a single [`CoreError::Validation`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LogoRequest {
    /// Caller-supplied provider credential (bring-your-own-key).
    #[serde(rename = "userAPIKey", default, skip_serializing_if = "Option::is_none")]
    pub user_api_key: Option<String>,

    #[serde(rename = "companyName")]
    #[validate(custom(function = "non_blank"))]
    pub company_name: String,

    #[serde(rename = "selectedStyle")]
    pub selected_style: LogoStyle,

    /// Hex color text, passed through to the prompt untouched.
    #[serde(rename = "selectedPrimaryColor")]
    pub selected_primary_color: String,

    /// Hex color text, passed through to the prompt untouched.
    #[serde(rename = "selectedBackgroundColor")]
    pub selected_background_color: String,

    #[serde(rename = "additionalInfo", default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl LogoRequest {
    /// The caller's own credential, if one was supplied. An empty string
    /// counts as absent.
    pub fn byok_key(&self) -> Option<&str> {
        self.user_api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    /// Free-text detail, if present and not blank.
    pub fn additional_info(&self) -> Option<&str> {
        self.additional_info
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("non_blank");
        err.message = Some("must not be empty".into());
        return Err(err);
    }
    Ok(())
}

/// Parse and validate a raw JSON body.
pub fn parse_logo_request(body: &[u8]) -> Result<LogoRequest, CoreError> {
    let request: LogoRequest = serde_json::from_slice(body)
        .map_err(|e| CoreError::Validation(format!("Invalid request body: {e}")))?;
    request.validate()?;
    Ok(request)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn body(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    fn valid() -> serde_json::Value {
        json!({
            "companyName": "Acme",
            "selectedStyle": "Minimal",
            "selectedPrimaryColor": "#112233",
            "selectedBackgroundColor": "#ffffff",
        })
    }

    #[test]
    fn parses_minimal_valid_body() {
        let req = parse_logo_request(&body(valid())).unwrap();
        assert_eq!(req.company_name, "Acme");
        assert_eq!(req.selected_style, LogoStyle::Minimal);
        assert_eq!(req.selected_primary_color, "#112233");
        assert_eq!(req.selected_background_color, "#ffffff");
        assert!(req.byok_key().is_none());
        assert!(req.additional_info().is_none());
    }

    #[test]
    fn parses_optional_fields() {
        let mut value = valid();
        value["userAPIKey"] = json!("tg-123");
        value["additionalInfo"] = json!("a rocket");
        let req = parse_logo_request(&body(value)).unwrap();
        assert_eq!(req.byok_key(), Some("tg-123"));
        assert_eq!(req.additional_info(), Some("a rocket"));
    }

    #[test]
    fn empty_api_key_counts_as_absent() {
        let mut value = valid();
        value["userAPIKey"] = json!("");
        let req = parse_logo_request(&body(value)).unwrap();
        assert!(req.byok_key().is_none());
    }

    #[test]
    fn blank_additional_info_is_dropped() {
        let mut value = valid();
        value["additionalInfo"] = json!("   ");
        let req = parse_logo_request(&body(value)).unwrap();
        assert!(req.additional_info().is_none());
    }

    #[test]
    fn rejects_missing_company_name() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("companyName");
        assert_matches!(
            parse_logo_request(&body(value)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_blank_company_name() {
        let mut value = valid();
        value["companyName"] = json!("  ");
        assert_matches!(
            parse_logo_request(&body(value)),
            Err(CoreError::Validation(msg)) if msg.contains("company_name")
        );
    }

    #[test]
    fn rejects_unknown_style() {
        let mut value = valid();
        value["selectedStyle"] = json!("Vaporwave");
        assert_matches!(
            parse_logo_request(&body(value)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn rejects_missing_color() {
        let mut value = valid();
        value.as_object_mut().unwrap().remove("selectedBackgroundColor");
        assert!(parse_logo_request(&body(value)).is_err());
    }

    #[test]
    fn rejects_non_json_body() {
        assert_matches!(
            parse_logo_request(b"companyName=Acme"),
            Err(CoreError::Validation(_))
        );
    }
}
