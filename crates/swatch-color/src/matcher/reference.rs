//! Reference palette entries.

use crate::color::{rgb_to_lab, Lab, Rgb};

/// An immutable entry of the reference palette.
///
/// Stores every representation the matcher and the presentation layer
/// need: the 8-bit color, its hex form and its Lab coordinates. Lab is
/// computed once at construction (or taken from prepared data) so that
/// queries never convert palette entries.
///
/// # Example
///
/// ```
/// use swatch_color::{ReferenceColor, Rgb};
///
/// let entry = ReferenceColor::new("PANTONE 2097 C", "2097 C", Rgb::new(0x5F, 0x3E, 0xFF));
/// assert_eq!(entry.hex(), "#5F3EFF");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceColor {
    name: String,
    code: String,
    rgb: Rgb,
    hex: String,
    lab: Lab,
}

impl ReferenceColor {
    /// Create an entry, deriving hex and Lab from `rgb`.
    pub fn new(name: impl Into<String>, code: impl Into<String>, rgb: Rgb) -> Self {
        Self::with_lab(name, code, rgb, rgb_to_lab(rgb))
    }

    /// Create an entry with precomputed Lab values.
    ///
    /// Used for prepared palette files, whose Lab values were produced by
    /// the same converter and stored (typically rounded to two decimals).
    pub fn with_lab(name: impl Into<String>, code: impl Into<String>, rgb: Rgb, lab: Lab) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            rgb,
            hex: rgb.to_hex(),
            lab,
        }
    }

    /// Display name, e.g. `"PANTONE 2097 C"`.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Short palette code, e.g. `"2097 C"`.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    /// `#RRGGBB`, uppercase.
    #[inline]
    pub fn hex(&self) -> &str {
        &self.hex
    }

    #[inline]
    pub fn lab(&self) -> Lab {
        self.lab
    }
}
