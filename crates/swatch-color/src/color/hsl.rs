//! HSL representation (for display only)

use std::fmt;

use super::rgb::Rgb;

/// A color in HSL (hue, saturation, lightness).
///
/// Not used for matching. HSL is shown next to hex/RGB/Lab so users can
/// reason about a swatch in familiar terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, 0.0..360.0
    pub h: f64,
    /// Saturation in percent, 0.0..=100.0
    pub s: f64,
    /// Lightness in percent, 0.0..=100.0
    pub l: f64,
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.h.round(),
            self.s.round(),
            self.l.round()
        )
    }
}

/// Convert sRGB to HSL using the max/min channel derivation.
///
/// Achromatic colors (all channels equal) have hue 0 and saturation 0.
///
/// # Example
/// ```
/// use swatch_color::{rgb_to_hsl, Rgb};
/// let red = rgb_to_hsl(Rgb::new(255, 0, 0));
/// assert_eq!((red.h, red.s, red.l), (0.0, 100.0, 50.0));
/// ```
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl {
        h: h * 60.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hsl(rgb: Rgb, h: f64, s: f64, l: f64) {
        let hsl = rgb_to_hsl(rgb);
        assert!(
            (hsl.h - h).abs() < 0.05 && (hsl.s - s).abs() < 0.05 && (hsl.l - l).abs() < 0.05,
            "{rgb:?}: got {hsl:?}, expected ({h}, {s}, {l})"
        );
    }

    #[test]
    fn test_primaries_and_secondaries() {
        assert_hsl(Rgb::new(255, 0, 0), 0.0, 100.0, 50.0);
        assert_hsl(Rgb::new(0, 255, 0), 120.0, 100.0, 50.0);
        assert_hsl(Rgb::new(0, 0, 255), 240.0, 100.0, 50.0);
        assert_hsl(Rgb::new(255, 255, 0), 60.0, 100.0, 50.0);
        assert_hsl(Rgb::new(0, 255, 255), 180.0, 100.0, 50.0);
        assert_hsl(Rgb::new(255, 0, 255), 300.0, 100.0, 50.0);
    }

    #[test]
    fn test_achromatic() {
        let gray = rgb_to_hsl(Rgb::new(128, 128, 128));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert!((gray.l - 50.196).abs() < 0.01);

        let white = rgb_to_hsl(Rgb::new(255, 255, 255));
        assert_eq!((white.h, white.s, white.l), (0.0, 0.0, 100.0));
        let black = rgb_to_hsl(Rgb::new(0, 0, 0));
        assert_eq!((black.h, black.s, black.l), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_hue_wraps_below_360() {
        // Red-dominant with blue > green lands in the 300..360 range
        assert_hsl(Rgb::new(255, 0, 51), 348.0, 100.0, 50.0);
        assert_hsl(Rgb::new(255, 87, 51), 10.59, 100.0, 60.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Hsl::from(Rgb::new(255, 87, 51)).to_string(), "hsl(11, 100%, 60%)");
    }
}
