//! Handler for the style catalogue.

use axum::response::IntoResponse;
use axum::Json;
use logoforge_core::style::{LogoStyle, ALL_STYLES};
use serde::Serialize;

use crate::response::DataResponse;

/// One entry in the style picker.
#[derive(Debug, Serialize)]
pub struct StyleInfo {
    pub name: LogoStyle,
    pub description: &'static str,
}

/// GET /api/v1/styles
///
/// Lists every style accepted by `selectedStyle`, in picker order.
pub async fn list_styles() -> impl IntoResponse {
    let data: Vec<StyleInfo> = ALL_STYLES
        .iter()
        .map(|&style| StyleInfo {
            name: style,
            description: style.fragment(),
        })
        .collect();

    Json(DataResponse { data })
}
