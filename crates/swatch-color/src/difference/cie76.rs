//! CIE76 color difference (Euclidean distance in CIELAB)

use crate::color::Lab;

/// CIE76 color difference: `sqrt(ΔL² + Δa² + Δb²)`.
///
/// A true metric: symmetric, zero only for identical triples, and it
/// satisfies the triangle inequality. Cheap, but overstates differences
/// between saturated colors compared to [`delta_e_2000`](super::delta_e_2000).
///
/// # Example
/// ```
/// use swatch_color::{delta_e_76, Lab};
/// let d = delta_e_76(Lab::new(50.0, 0.0, 0.0), Lab::new(50.0, 3.0, 4.0));
/// assert!((d - 5.0).abs() < 1e-12);
/// ```
#[inline]
pub fn delta_e_76(lab1: Lab, lab2: Lab) -> f64 {
    let dl = lab1.l - lab2.l;
    let da = lab1.a - lab2.a;
    let db = lab1.b - lab2.b;
    (dl * dl + da * da + db * db).sqrt()
}
