//! 8-bit sRGB color type and hex string handling
//!
//! `Rgb` is the device-facing representation: what users type in as a hex
//! code and what palette files store. All perceptual math happens after
//! converting to [`Lab`](super::Lab).

use std::fmt;
use std::str::FromStr;

use super::error::ParseColorError;

/// A color in 8-bit sRGB.
///
/// Channels are always in 0..=255 by construction. Values produced from
/// floating-point math go through [`Rgb::from_f64`], which clamps and rounds
/// instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new Rgb color from 8-bit channel values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from floating-point channel values.
    ///
    /// Each channel is clamped to 0.0..=255.0 and rounded to the nearest
    /// integer.
    ///
    /// # Example
    /// ```
    /// use swatch_color::Rgb;
    /// let c = Rgb::from_f64(300.0, -4.0, 127.6);
    /// assert_eq!(c, Rgb::new(255, 0, 128));
    /// ```
    #[inline]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as `#RRGGBB` (uppercase, zero-padded).
    ///
    /// # Example
    /// ```
    /// use swatch_color::Rgb;
    /// assert_eq!(Rgb::new(255, 87, 51).to_hex(), "#FF5733");
    /// ```
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - standard 6-digit hex, with or without hash
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (each digit is duplicated)
    ///
    /// Parsing is case-insensitive. Whitespace is not trimmed and any other
    /// digit count is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use swatch_color::Rgb;
    ///
    /// let orange: Rgb = "#FF5733".parse().unwrap();
    /// assert_eq!(orange, Rgb::new(255, 87, 51));
    ///
    /// let magenta: Rgb = "F0A".parse().unwrap();
    /// assert_eq!(magenta, Rgb::new(0xFF, 0x00, 0xAA));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        let count = digits.chars().count();
        if count != 3 && count != 6 {
            return Err(ParseColorError::InvalidLength);
        }

        let nibbles = digits
            .chars()
            .map(|c| {
                c.to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(ParseColorError::InvalidHex(c))
            })
            .collect::<Result<Vec<u8>, _>>()?;

        // Shorthand expands by duplication: 0xF -> 0xFF
        let rgb = match nibbles.as_slice() {
            &[r, g, b] => Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b),
            &[r1, r0, g1, g0, b1, b0] => Rgb::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0),
            _ => return Err(ParseColorError::InvalidLength),
        };
        Ok(rgb)
    }
}

/// Parse a hex color string into [`Rgb`].
///
/// Equivalent to `hex.parse::<Rgb>()`.
///
/// # Errors
///
/// Returns [`ParseColorError::InvalidLength`] unless the string holds
/// exactly 3 or 6 digits after an optional `#`, and
/// [`ParseColorError::InvalidHex`] for a non-hex digit.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ParseColorError> {
    hex.parse()
}

/// Format floating-point channels as a `#RRGGBB` hex string.
///
/// Channels are clamped to 0..=255 and rounded before formatting.
///
/// # Example
/// ```
/// use swatch_color::rgb_to_hex;
/// assert_eq!(rgb_to_hex(255.0, 87.2, 50.5), "#FF5733");
/// assert_eq!(rgb_to_hex(-10.0, 512.0, 0.0), "#00FF00");
/// ```
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb::from_f64(r, g, b).to_hex()
}

/// Check whether a string is a well-formed hex color.
///
/// True iff the string holds exactly 3 or 6 hex digits after stripping an
/// optional leading `#`. Nothing is parsed or expanded.
///
/// # Example
/// ```
/// use swatch_color::is_valid_hex;
/// assert!(is_valid_hex("#f00"));
/// assert!(!is_valid_hex("FF00"));
/// ```
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

#[inline]
fn clamp_channel(v: f64) -> u8 {
    v.clamp(0.0, 255.0).round() as u8
}
