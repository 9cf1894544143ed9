use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;

use super::params::parse_limit;
use super::schema::{ColorListResponse, PaletteSummary, SwatchResponse};
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::PaletteStore;

/// Query parameters for /api/colors
#[derive(Debug, Default, Deserialize)]
pub struct ColorsQuery {
    pub search: Option<String>,
    pub limit: Option<String>,
}

/// List or search palette entries
///
/// Case-insensitive substring search over names and codes, in palette order.
/// Without `search` the palette is listed from the start.
#[utoipa::path(
    get,
    path = "/api/colors",
    responses(
        (status = 200, description = "Palette entries", body = ColorListResponse),
        (status = 400, description = "Invalid limit"),
    ),
    params(
        ("search" = Option<String>, Query, description = "Substring of a name or code (e.g. '2097')"),
        ("limit" = Option<usize>, Query, description = "Maximum entries returned"),
    ),
    tag = "Palette"
)]
pub async fn handle_list_colors(
    State(config): State<Arc<AppConfig>>,
    State(palette): State<Arc<PaletteStore>>,
    Query(query): Query<ColorsQuery>,
) -> Result<Json<ColorListResponse>, ApiError> {
    let limit = parse_limit(query.limit.as_deref(), &config)?;
    let colors: Vec<SwatchResponse> = palette
        .search(query.search.as_deref().unwrap_or(""), limit)
        .into_iter()
        .map(SwatchResponse::from)
        .collect();

    Ok(Json(ColorListResponse {
        count: colors.len(),
        colors,
    }))
}

/// Look up one palette entry by code
#[utoipa::path(
    get,
    path = "/api/colors/{code}",
    responses(
        (status = 200, description = "Palette entry", body = SwatchResponse),
        (status = 404, description = "No entry with this code"),
    ),
    params(
        ("code" = String, Path, description = "Palette code, case-insensitive (e.g. '2097 C')"),
    ),
    tag = "Palette"
)]
pub async fn handle_get_color(
    State(palette): State<Arc<PaletteStore>>,
    Path(code): Path<String>,
) -> Result<Json<SwatchResponse>, ApiError> {
    palette
        .get_by_code(&code)
        .map(|reference| Json(SwatchResponse::from(reference)))
        .ok_or_else(|| ApiError::NotFound(format!("color {code}")))
}

/// Summary of the loaded palette and matching defaults
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Palette summary", body = PaletteSummary),
    ),
    tag = "Palette"
)]
pub async fn handle_palette_summary(
    State(config): State<Arc<AppConfig>>,
    State(palette): State<Arc<PaletteStore>>,
) -> Json<PaletteSummary> {
    Json(PaletteSummary {
        count: palette.len(),
        default_metric: config.default_metric.to_string(),
        default_limit: config.default_limit,
        max_limit: config.max_limit,
    })
}
