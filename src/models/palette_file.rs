use serde::{Deserialize, Serialize};
use swatch_color::{hex_to_rgb, Hsl, Lab, ReferenceColor, Rgb};
use utoipa::ToSchema;

use crate::error::PaletteLoadError;

/// One record of a palette JSON file
///
/// Either `hex` or `rgb` must be present. `lab` is computed when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rgb: Option<RgbValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lab: Option<LabValue>,
}

/// 8-bit sRGB channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RgbValue {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// CIELAB coordinates (D65)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LabValue {
    /// Lightness, 0..100
    #[serde(rename = "L")]
    pub l: f64,
    /// Green (-) to red (+)
    pub a: f64,
    /// Blue (-) to yellow (+)
    pub b: f64,
}

/// HSL with hue in degrees and saturation/lightness in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct HslValue {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl From<Rgb> for RgbValue {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

impl From<RgbValue> for Rgb {
    fn from(value: RgbValue) -> Self {
        Rgb::new(value.r, value.g, value.b)
    }
}

impl From<Lab> for LabValue {
    fn from(lab: Lab) -> Self {
        Self {
            l: lab.l,
            a: lab.a,
            b: lab.b,
        }
    }
}

impl From<LabValue> for Lab {
    fn from(value: LabValue) -> Self {
        Lab::new(value.l, value.a, value.b)
    }
}

impl From<Hsl> for HslValue {
    fn from(hsl: Hsl) -> Self {
        Self {
            h: hsl.h,
            s: hsl.s,
            l: hsl.l,
        }
    }
}

impl PaletteEntry {
    /// Resolve the entry's RGB source; `hex` wins over `rgb`.
    pub fn resolve_rgb(&self, index: usize) -> Result<Rgb, PaletteLoadError> {
        match (&self.hex, self.rgb) {
            (Some(hex), _) => hex_to_rgb(hex).map_err(|e| PaletteLoadError::InvalidEntry {
                index,
                reason: format!("invalid hex {hex:?}: {e}"),
            }),
            (None, Some(rgb)) => Ok(rgb.into()),
            (None, None) => Err(PaletteLoadError::InvalidEntry {
                index,
                reason: "entry needs a hex or rgb value".to_string(),
            }),
        }
    }

    /// Convert into a matcher record, computing Lab if the file omitted it.
    ///
    /// `index` is the entry's position in the file, used in error messages.
    pub fn into_reference(self, index: usize) -> Result<ReferenceColor, PaletteLoadError> {
        if self.code.trim().is_empty() {
            return Err(PaletteLoadError::InvalidEntry {
                index,
                reason: "entry has an empty code".to_string(),
            });
        }

        let rgb = self.resolve_rgb(index)?;
        Ok(match self.lab {
            Some(lab) => ReferenceColor::with_lab(self.name, self.code, rgb, lab.into()),
            None => ReferenceColor::new(self.name, self.code, rgb),
        })
    }
}
