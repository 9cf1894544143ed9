//! Response bodies shared by the HTTP handlers.

use serde::Serialize;
use swatch_color::{rgb_to_hsl, rgb_to_lab, MatchResult, ReferenceColor, Rgb};
use utoipa::ToSchema;

use crate::models::{HslValue, LabValue, RgbValue};

/// A color in every representation the service knows
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorInfo {
    /// Canonical `#RRGGBB`
    pub hex: String,
    pub rgb: RgbValue,
    pub lab: LabValue,
    pub hsl: HslValue,
}

impl From<Rgb> for ColorInfo {
    fn from(rgb: Rgb) -> Self {
        Self {
            hex: rgb.to_hex(),
            rgb: rgb.into(),
            lab: rgb_to_lab(rgb).into(),
            hsl: rgb_to_hsl(rgb).into(),
        }
    }
}

/// A palette entry
#[derive(Debug, Serialize, ToSchema)]
pub struct SwatchResponse {
    /// Display name, e.g. "PANTONE 2097 C"
    pub name: String,
    /// Palette code, e.g. "2097 C"
    pub code: String,
    pub hex: String,
    pub rgb: RgbValue,
    /// Lab as stored in the palette
    pub lab: LabValue,
}

impl From<&ReferenceColor> for SwatchResponse {
    fn from(reference: &ReferenceColor) -> Self {
        Self {
            name: reference.name().to_string(),
            code: reference.code().to_string(),
            hex: reference.hex().to_string(),
            rgb: reference.rgb().into(),
            lab: reference.lab().into(),
        }
    }
}

/// One ranked palette entry
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchEntry {
    pub name: String,
    pub code: String,
    pub hex: String,
    pub rgb: RgbValue,
    pub lab: LabValue,
    /// Color difference to the query under the requested metric
    pub distance: f64,
    /// Perfect, Excellent, Good, Fair or Poor
    pub quality: String,
    pub quality_description: String,
}

impl From<&MatchResult<'_>> for MatchEntry {
    fn from(m: &MatchResult<'_>) -> Self {
        let swatch = SwatchResponse::from(m.reference);
        Self {
            name: swatch.name,
            code: swatch.code,
            hex: swatch.hex,
            rgb: swatch.rgb,
            lab: swatch.lab,
            distance: m.distance,
            quality: m.quality.label().to_string(),
            quality_description: m.quality.description().to_string(),
        }
    }
}

/// Response from /api/match
#[derive(Debug, Serialize, ToSchema)]
pub struct MatchResponse {
    pub query: ColorInfo,
    /// Metric used for ranking ("cie76" or "ciede2000")
    pub metric: String,
    /// Nearest entries first
    pub matches: Vec<MatchEntry>,
}

/// Response from /api/colors
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorListResponse {
    /// Number of entries returned
    pub count: usize,
    pub colors: Vec<SwatchResponse>,
}

/// Response from /api/palette
#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteSummary {
    /// Number of entries in the loaded palette
    pub count: usize,
    pub default_metric: String,
    pub default_limit: usize,
    pub max_limit: usize,
}
