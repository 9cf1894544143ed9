//! Match quality tiers
//!
//! Maps a ΔE distance onto a small set of human-readable tiers. The
//! thresholds are evaluated top-down and the first match wins; each bound
//! is exclusive, so a distance of exactly 50.0 is [`MatchQuality::Poor`].

use std::fmt;

/// Human-readable quality tier for a color difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MatchQuality {
    /// ΔE < 1.0
    Perfect,
    /// ΔE < 2.0
    Excellent,
    /// ΔE < 10.0
    Good,
    /// ΔE < 50.0
    Fair,
    /// Everything else
    Poor,
}

impl MatchQuality {
    /// All tiers, best first.
    pub const ALL: [MatchQuality; 5] = [
        MatchQuality::Perfect,
        MatchQuality::Excellent,
        MatchQuality::Good,
        MatchQuality::Fair,
        MatchQuality::Poor,
    ];

    /// Classify a distance.
    ///
    /// NaN compares false against every threshold and lands in `Poor`.
    ///
    /// # Example
    /// ```
    /// use swatch_color::MatchQuality;
    /// assert_eq!(MatchQuality::from_distance(0.5), MatchQuality::Perfect);
    /// assert_eq!(MatchQuality::from_distance(50.0), MatchQuality::Poor);
    /// ```
    pub fn from_distance(distance: f64) -> Self {
        if distance < 1.0 {
            MatchQuality::Perfect
        } else if distance < 2.0 {
            MatchQuality::Excellent
        } else if distance < 10.0 {
            MatchQuality::Good
        } else if distance < 50.0 {
            MatchQuality::Fair
        } else {
            MatchQuality::Poor
        }
    }

    /// Short label, e.g. `"Excellent"`.
    pub fn label(self) -> &'static str {
        match self {
            MatchQuality::Perfect => "Perfect",
            MatchQuality::Excellent => "Excellent",
            MatchQuality::Good => "Good",
            MatchQuality::Fair => "Fair",
            MatchQuality::Poor => "Poor",
        }
    }

    /// One-line description for display next to the label.
    pub fn description(self) -> &'static str {
        match self {
            MatchQuality::Perfect => "Not perceptible by the human eye",
            MatchQuality::Excellent => "Perceptible only through close observation",
            MatchQuality::Good => "Perceptible at a glance",
            MatchQuality::Fair => "Colors are more similar than opposite",
            MatchQuality::Poor => "Colors are clearly different",
        }
    }
}

impl fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiers() {
        assert_eq!(MatchQuality::from_distance(0.0), MatchQuality::Perfect);
        assert_eq!(MatchQuality::from_distance(0.5), MatchQuality::Perfect);
        assert_eq!(MatchQuality::from_distance(1.5), MatchQuality::Excellent);
        assert_eq!(MatchQuality::from_distance(9.9), MatchQuality::Good);
        assert_eq!(MatchQuality::from_distance(49.9), MatchQuality::Fair);
        assert_eq!(MatchQuality::from_distance(50.0), MatchQuality::Poor);
        assert_eq!(MatchQuality::from_distance(250.0), MatchQuality::Poor);
    }

    #[test]
    fn test_boundaries_are_exclusive() {
        assert_eq!(MatchQuality::from_distance(1.0), MatchQuality::Excellent);
        assert_eq!(MatchQuality::from_distance(2.0), MatchQuality::Good);
        assert_eq!(MatchQuality::from_distance(10.0), MatchQuality::Fair);
    }

    #[test]
    fn test_nan_is_poor() {
        assert_eq!(MatchQuality::from_distance(f64::NAN), MatchQuality::Poor);
    }

    #[test]
    fn test_labels_and_descriptions() {
        for tier in MatchQuality::ALL {
            assert_eq!(tier.to_string(), tier.label());
            assert!(!tier.description().is_empty());
        }
        // Ordered best to worst
        assert!(MatchQuality::Perfect < MatchQuality::Poor);
    }
}
