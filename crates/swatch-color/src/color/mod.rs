//! Color types and conversion utilities
//!
//! This module is the color space converter: hex strings and 8-bit sRGB in,
//! CIELAB (for matching) and HSL (for display) out.
//!
//! # Color Spaces
//!
//! - **Rgb**: 8-bit sRGB, what users type and what palette files store.
//! - **Lab**: CIELAB (D65), where perceptual distances are computed.
//! - **Hsl**: Hue/saturation/lightness, presentational only.
//!
//! # Example
//!
//! ```
//! use swatch_color::{hex_to_lab, Lab, Rgb};
//!
//! // Parse user input
//! let rgb: Rgb = "#5F3EFF".parse().unwrap();
//!
//! // Convert to Lab for matching
//! let lab = Lab::from(rgb);
//! assert_eq!(lab, hex_to_lab("5f3eff").unwrap());
//! ```

mod error;
mod hsl;
mod lab;
mod rgb;

pub use error::ParseColorError;
pub use hsl::{rgb_to_hsl, Hsl};
pub use lab::{hex_to_lab, lab_to_rgb, rgb_to_lab, Lab};
pub use rgb::{hex_to_rgb, is_valid_hex, rgb_to_hex, Rgb};
