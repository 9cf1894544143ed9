use axum::{extract::Query, response::Json};
use serde::Deserialize;

use super::params::require_color;
use super::schema::ColorInfo;
use crate::error::ApiError;

/// Query parameters for /api/convert
#[derive(Debug, Default, Deserialize)]
pub struct ConvertQuery {
    pub color: Option<String>,
}

/// Convert a hex color to RGB, CIELAB and HSL
#[utoipa::path(
    get,
    path = "/api/convert",
    responses(
        (status = 200, description = "Color in all representations", body = ColorInfo),
        (status = 400, description = "Missing or invalid color"),
    ),
    params(
        ("color" = String, Query, description = "Hex color, 3 or 6 digits, '#' optional"),
    ),
    tag = "Colors"
)]
pub async fn handle_convert(Query(query): Query<ConvertQuery>) -> Result<Json<ColorInfo>, ApiError> {
    let rgb = require_color(query.color.as_deref())?;
    Ok(Json(ColorInfo::from(rgb)))
}
