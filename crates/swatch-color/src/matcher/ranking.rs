//! Nearest-neighbor ranking over a reference palette.

use super::reference::ReferenceColor;
use crate::color::Lab;
use crate::difference::DistanceMetric;
use crate::quality::MatchQuality;

/// One ranked candidate for a query color.
///
/// Borrows the palette entry rather than copying it; the palette outlives
/// every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'a> {
    /// The matched palette entry
    pub reference: &'a ReferenceColor,
    /// Distance from the query under the metric used for ranking
    pub distance: f64,
    /// Tier derived from `distance`
    pub quality: MatchQuality,
}

impl<'a> MatchResult<'a> {
    fn new(reference: &'a ReferenceColor, distance: f64) -> Self {
        Self {
            reference,
            distance,
            quality: MatchQuality::from_distance(distance),
        }
    }
}

/// Rank `references` by distance to `query` and keep the best `k`.
///
/// # Example
///
/// ```
/// use swatch_color::{find_matches, hex_to_lab, DistanceMetric, ReferenceColor, Rgb};
///
/// let palette = vec![
///     ReferenceColor::new("Black", "BK", Rgb::new(0, 0, 0)),
///     ReferenceColor::new("White", "WH", Rgb::new(255, 255, 255)),
/// ];
/// let query = hex_to_lab("#EEEEEE").unwrap();
/// let matches = find_matches(query, &palette, 1, DistanceMetric::Cie76);
/// assert_eq!(matches[0].reference.code(), "WH");
/// ```
pub fn find_matches(
    query: Lab,
    references: &[ReferenceColor],
    k: usize,
    metric: DistanceMetric,
) -> Vec<MatchResult<'_>> {
    find_matches_by(query, references, k, |a, b| metric.distance(a, b))
}

/// Rank `references` with an arbitrary distance function.
///
/// Full scan: one distance per entry, then a stable ascending sort, so
/// entries at equal distance keep their palette order. Returns
/// `min(k, references.len())` results; an empty palette or `k == 0` yields
/// an empty vector. The palette is never modified.
pub fn find_matches_by<F>(
    query: Lab,
    references: &[ReferenceColor],
    k: usize,
    distance_fn: F,
) -> Vec<MatchResult<'_>>
where
    F: Fn(Lab, Lab) -> f64,
{
    if k == 0 {
        return Vec::new();
    }

    let mut results: Vec<MatchResult<'_>> = references
        .iter()
        .map(|reference| MatchResult::new(reference, distance_fn(query, reference.lab())))
        .collect();

    // sort_by is stable: ties keep palette order
    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    results.truncate(k);
    results
}
