#![allow(clippy::excessive_precision, clippy::unreadable_literal)]

//! swatch-color: Perceptual matching against spot-color palettes
//!
//! This library converts device colors (hex / 8-bit sRGB) into CIELAB,
//! measures perceptual differences with CIE76 or CIEDE2000, and ranks the
//! entries of a reference palette by distance to a query color.
//!
//! # Quick Start
//!
//! ```
//! use swatch_color::{find_matches, hex_to_lab, DistanceMetric, ReferenceColor, Rgb};
//!
//! let palette = vec![
//!     ReferenceColor::new("PANTONE 2097 C", "2097 C", Rgb::new(0x5F, 0x3E, 0xFF)),
//!     ReferenceColor::new("PANTONE Black C", "Black C", Rgb::new(0x2D, 0x29, 0x26)),
//! ];
//!
//! let query = hex_to_lab("#5F3EFF").unwrap();
//! let matches = find_matches(query, &palette, 5, DistanceMetric::Cie76);
//!
//! assert_eq!(matches[0].reference.name(), "PANTONE 2097 C");
//! assert_eq!(matches[0].distance, 0.0);
//! ```
//!
//! # Components
//!
//! - [`color`]: the converter (hex ↔ [`Rgb`], [`Rgb`] ↔ [`Lab`], [`Hsl`])
//! - [`difference`]: [`delta_e_76`], [`delta_e_2000`] and [`DistanceMetric`]
//! - [`quality`]: [`MatchQuality`] tiers for displaying a distance
//! - [`matcher`]: [`ReferenceColor`] and [`find_matches`]
//!
//! Everything is a pure function or an immutable value. Nothing here
//! allocates global state, logs, or performs I/O; malformed input is
//! reported through [`ParseColorError`] values.
//!
//! # Color Science
//!
//! ## Why CIELAB
//!
//! Euclidean distance in sRGB does not track perceived difference: the
//! gamma curve compresses highlights and the three channels contribute very
//! unequally to perceived lightness. CIELAB was designed so that equal
//! distances look roughly equally different, which makes a nearest-neighbor
//! search meaningful.
//!
//! ## Conversion Pipeline
//!
//! ```text
//! hex "#5F3EFF"
//!     |
//!     v
//! Rgb (95, 62, 255)               8-bit sRGB
//!     |  / 255, inverse gamma
//!     v
//! linear RGB                      0.0..=1.0
//!     |  D65 matrix
//!     v
//! XYZ                             / (95.047, 100.0, 108.883) * 100
//!     |  cube root (linear below 0.008856)
//!     v
//! Lab (42.91, 64.24, -90.10)
//! ```
//!
//! Palette files prepared offline store Lab values produced by this exact
//! chain (rounded to two decimals), so the constants must not drift.
//!
//! ## Choosing a Metric
//!
//! | Metric | Cost | Notes |
//! |--------|------|-------|
//! | **CIE76** | one sqrt | A true metric; overstates differences between saturated colors |
//! | **CIEDE2000** | ~20 trig calls | Corrects hue, chroma and lightness non-uniformity and the blue-region rotation |
//!
//! [`DistanceMetric::Cie76`] is the default. Rankings under the two metrics
//! usually agree on the top candidate but can reorder the tail, especially
//! for blues and near-neutrals.
//!
//! ## Quality Tiers
//!
//! | ΔE | Tier |
//! |----|------|
//! | < 1 | Perfect |
//! | < 2 | Excellent |
//! | < 10 | Good |
//! | < 50 | Fair |
//! | otherwise | Poor |

pub mod color;
pub mod difference;
pub mod matcher;
pub mod quality;


pub use color::{
    hex_to_lab, hex_to_rgb, is_valid_hex, lab_to_rgb, rgb_to_hex, rgb_to_hsl, rgb_to_lab, Hsl,
    Lab, ParseColorError, Rgb,
};
pub use difference::{delta_e_2000, delta_e_76, DistanceMetric, ParseMetricError};
pub use matcher::{find_matches, find_matches_by, MatchResult, ReferenceColor};
pub use quality::MatchQuality;
