//! CIELAB color space (D65 reference white)
//!
//! CIELAB is the space in which palette matching happens. Both difference
//! metrics in [`crate::difference`] operate on [`Lab`] triples.
//!
//! The forward pipeline is fixed: palette files prepared offline store Lab
//! values produced by exactly this chain, so any deviation (a different
//! matrix, the exact CIE epsilon instead of `0.008856`) shifts every query
//! relative to the stored palette.

use super::error::ParseColorError;
use super::rgb::{hex_to_rgb, Rgb};

/// D65 reference white, scaled to Y = 100.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

/// Threshold of the forward Lab nonlinearity.
const EPSILON: f64 = 0.008856;
/// Slope of the linear segment of the Lab nonlinearity.
const KAPPA_SLOPE: f64 = 7.787;
/// Offset of the linear segment (16/116).
const OFFSET: f64 = 16.0 / 116.0;
/// Threshold of the inverse nonlinearity (cube root of `EPSILON`).
const INVERSE_EPSILON: f64 = 0.206897;

/// A color in CIELAB space.
///
/// # Components
///
/// - `l`: Lightness, 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis (negative = green, positive = red)
/// - `b`: Blue-yellow axis (negative = blue, positive = yellow)
///
/// `a` and `b` are unbounded; real sRGB colors fall roughly in -128..=127.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness: 0.0 (black) to 100.0 (white)
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Chroma: distance from the neutral axis, `sqrt(a² + b²)`.
    #[inline]
    pub fn chroma(self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Round each component to `decimals` decimal places.
    ///
    /// Only for storage: prepared palette files keep two decimals. The
    /// query path works with full precision.
    ///
    /// # Example
    /// ```
    /// use swatch_color::Lab;
    /// let lab = Lab::new(42.907911, 64.235989, -90.097287).rounded(2);
    /// assert_eq!(lab, Lab::new(42.91, 64.24, -90.1));
    /// ```
    pub fn rounded(self, decimals: u32) -> Self {
        let factor = 10f64.powi(decimals as i32);
        Self {
            l: (self.l * factor).round() / factor,
            a: (self.a * factor).round() / factor,
            b: (self.b * factor).round() / factor,
        }
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        rgb_to_lab(rgb)
    }
}

impl From<Lab> for Rgb {
    fn from(lab: Lab) -> Self {
        lab_to_rgb(lab)
    }
}

/// Convert an sRGB color to CIELAB.
///
/// Pipeline: normalize to 0..=1, inverse sRGB gamma, linear RGB to XYZ with
/// the D65 matrix, normalize by the D65 white, apply the Lab nonlinearity.
///
/// # Example
/// ```
/// use swatch_color::{rgb_to_lab, Rgb};
/// let white = rgb_to_lab(Rgb::new(255, 255, 255));
/// assert!((white.l - 100.0).abs() < 1e-3);
/// assert!(white.a.abs() < 1e-3 && white.b.abs() < 1e-3);
/// ```
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    let r = srgb_to_linear(rgb.r as f64 / 255.0);
    let g = srgb_to_linear(rgb.g as f64 / 255.0);
    let b = srgb_to_linear(rgb.b as f64 / 255.0);

    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let fx = lab_f(x / WHITE_X * 100.0);
    let fy = lab_f(y / WHITE_Y * 100.0);
    let fz = lab_f(z / WHITE_Z * 100.0);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// Convert a CIELAB color back to sRGB.
///
/// Exact inverse of [`rgb_to_lab`], followed by clamp-and-round to 0..=255.
/// Out-of-gamut Lab values clamp per channel; no gamut mapping is done.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let x = lab_f_inverse(fx) * WHITE_X / 100.0;
    let y = lab_f_inverse(fy) * WHITE_Y / 100.0;
    let z = lab_f_inverse(fz) * WHITE_Z / 100.0;

    let r = 3.2404542 * x - 1.5371385 * y - 0.4985314 * z;
    let g = -0.9692660 * x + 1.8760108 * y + 0.0415560 * z;
    let b = 0.0556434 * x - 0.2040259 * y + 1.0572252 * z;

    Rgb::from_f64(
        linear_to_srgb(r) * 255.0,
        linear_to_srgb(g) * 255.0,
        linear_to_srgb(b) * 255.0,
    )
}

/// Parse a hex color and convert it to CIELAB.
///
/// # Errors
///
/// Propagates the [`ParseColorError`] from [`hex_to_rgb`].
pub fn hex_to_lab(hex: &str) -> Result<Lab, ParseColorError> {
    hex_to_rgb(hex).map(rgb_to_lab)
}

/// IEC 61966-2-1 gamma decode
#[inline]
fn srgb_to_linear(v: f64) -> f64 {
    if v > 0.04045 {
        ((v + 0.055) / 1.055).powf(2.4)
    } else {
        v / 12.92
    }
}

/// IEC 61966-2-1 gamma encode
#[inline]
fn linear_to_srgb(v: f64) -> f64 {
    if v > 0.0031308 {
        1.055 * v.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * v
    }
}

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

#[inline]
fn lab_f_inverse(t: f64) -> f64 {
    if t > INVERSE_EPSILON {
        t * t * t
    } else {
        (t - OFFSET) / KAPPA_SLOPE
    }
}
