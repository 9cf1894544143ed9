//! Query parameter parsing for the color endpoints.
//!
//! Parameters arrive as raw strings so that bad values produce the JSON
//! error body instead of axum's plain-text rejection.

use swatch_color::{DistanceMetric, Rgb};

use crate::error::ApiError;
use crate::models::AppConfig;

/// Parse the required `color` parameter. The leading `#` is optional, which
/// spares clients from percent-encoding it.
pub fn require_color(color: Option<&str>) -> Result<Rgb, ApiError> {
    let color = color
        .filter(|c| !c.is_empty())
        .ok_or_else(|| ApiError::InvalidParameter("missing required parameter: color".into()))?;
    color
        .parse::<Rgb>()
        .map_err(|e| ApiError::invalid_color(color, e))
}

/// Parse `limit`, falling back to the configured default and capping at
/// `max_limit`.
pub fn parse_limit(limit: Option<&str>, config: &AppConfig) -> Result<usize, ApiError> {
    let requested = limit
        .map(|raw| {
            raw.parse::<usize>().map_err(|_| {
                ApiError::InvalidParameter(format!(
                    "limit must be a non-negative integer, got {raw:?}"
                ))
            })
        })
        .transpose()?;
    Ok(config.effective_limit(requested))
}

/// Parse `metric`, falling back to the configured default.
pub fn parse_metric(metric: Option<&str>, config: &AppConfig) -> Result<DistanceMetric, ApiError> {
    match metric {
        None | Some("") => Ok(config.default_metric),
        Some(raw) => raw
            .parse::<DistanceMetric>()
            .map_err(|e| ApiError::InvalidParameter(e.to_string())),
    }
}
