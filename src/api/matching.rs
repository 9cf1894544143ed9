use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use std::sync::Arc;
use swatch_color::rgb_to_lab;

use super::params::{parse_limit, parse_metric, require_color};
use super::schema::{ColorInfo, MatchEntry, MatchResponse};
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::PaletteStore;

/// Query parameters for /api/match
#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    pub color: Option<String>,
    pub limit: Option<String>,
    pub metric: Option<String>,
}

/// Find the nearest palette colors
///
/// Converts the query color to CIELAB and ranks every palette entry by
/// color difference. Results are ordered nearest first; entries at equal
/// distance keep their palette order.
#[utoipa::path(
    get,
    path = "/api/match",
    responses(
        (status = 200, description = "Ranked matches", body = MatchResponse),
        (status = 400, description = "Invalid color, limit or metric"),
    ),
    params(
        ("color" = String, Query, description = "Hex color, 3 or 6 digits, '#' optional (e.g. '5F3EFF')"),
        ("limit" = Option<usize>, Query, description = "Number of matches (default from config, capped at max_limit)"),
        ("metric" = Option<String>, Query, description = "Distance metric: 'cie76' or 'ciede2000'"),
    ),
    tag = "Matching"
)]
pub async fn handle_match(
    State(config): State<Arc<AppConfig>>,
    State(palette): State<Arc<PaletteStore>>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<MatchResponse>, ApiError> {
    let rgb = require_color(query.color.as_deref())?;
    let limit = parse_limit(query.limit.as_deref(), &config)?;
    let metric = parse_metric(query.metric.as_deref(), &config)?;

    let matches = palette.rank(rgb_to_lab(rgb), limit, metric);

    tracing::debug!(
        color = %rgb,
        %metric,
        limit,
        best = matches.first().map(|m| m.reference.code()),
        "Match request"
    );

    Ok(Json(MatchResponse {
        query: ColorInfo::from(rgb),
        metric: metric.to_string(),
        matches: matches.iter().map(MatchEntry::from).collect(),
    }))
}
