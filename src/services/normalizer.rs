//! Palette preparation: fill in derived color fields before shipping a file.

use swatch_color::{lab_to_rgb, rgb_to_lab, Lab, Rgb};

use crate::error::PaletteLoadError;
use crate::models::{LabValue, PaletteEntry, RgbValue};

/// Decimal places kept for stored Lab values
pub const LAB_DECIMALS: u32 = 2;

/// What `normalize_entries` had to derive
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub total: usize,
    pub hex_filled: usize,
    pub rgb_filled: usize,
    pub lab_filled: usize,
}

/// Complete every entry so it carries `hex`, `rgb` and `lab`.
///
/// The RGB source is `hex`, then `rgb`, then (for Lab-only records, e.g.
/// measured spot colors) the gamut-clamped `lab_to_rgb` of `lab`. A stored
/// Lab is kept as is; a missing one is computed from RGB and rounded to
/// [`LAB_DECIMALS`]. Hex strings are rewritten in canonical `#RRGGBB` form.
pub fn normalize_entries(
    entries: &mut [PaletteEntry],
) -> Result<NormalizeReport, PaletteLoadError> {
    let mut report = NormalizeReport {
        total: entries.len(),
        ..NormalizeReport::default()
    };

    for (index, entry) in entries.iter_mut().enumerate() {
        let rgb: Rgb = match (&entry.hex, entry.rgb, entry.lab) {
            (None, None, Some(lab)) => {
                report.rgb_filled += 1;
                lab_to_rgb(Lab::from(lab))
            }
            _ => entry.resolve_rgb(index)?,
        };

        if entry.hex.is_none() {
            report.hex_filled += 1;
        }
        if entry.rgb.is_none() && entry.hex.is_some() {
            report.rgb_filled += 1;
        }
        if entry.lab.is_none() {
            report.lab_filled += 1;
            entry.lab = Some(LabValue::from(rgb_to_lab(rgb).rounded(LAB_DECIMALS)));
        }

        entry.hex = Some(rgb.to_hex());
        entry.rgb = Some(RgbValue::from(rgb));
    }

    tracing::debug!(
        total = report.total,
        hex_filled = report.hex_filled,
        rgb_filled = report.rgb_filled,
        lab_filled = report.lab_filled,
        "Normalized palette entries"
    );

    Ok(report)
}
