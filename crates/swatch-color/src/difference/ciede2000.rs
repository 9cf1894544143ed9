//! CIEDE2000 color difference
//!
//! Implements the CIE Technical Report 142-2001 formula (ΔE00) with the
//! graphic-arts parametric factors kL = kC = kH = 1.
//!
//! The formula is numerically delicate around the 0°/360° hue wrap and when
//! either chroma is zero. The branches below follow the published formula
//! exactly; "simplifications" such as a naive mean hue produce plausible
//! but wrong numbers without any error. The Sharma, Wu & Dalal (2005) test
//! pairs in the tests pin the branch behavior.

use crate::color::Lab;

/// 25^7, the chroma pivot of the G and RC terms.
const POW25_7: f64 = 6_103_515_625.0;

const KL: f64 = 1.0;
const KC: f64 = 1.0;
const KH: f64 = 1.0;

/// CIEDE2000 color difference (ΔE00).
///
/// Symmetric under swapping its arguments and zero for identical inputs.
/// Every finite input produces a finite, non-negative result.
///
/// # Example
/// ```
/// use swatch_color::{delta_e_2000, Lab};
/// let d = delta_e_2000(
///     Lab::new(50.0, 2.6772, -79.7751),
///     Lab::new(50.0, 0.0, -82.7485),
/// );
/// assert!((d - 2.0425).abs() < 1e-4);
/// ```
pub fn delta_e_2000(lab1: Lab, lab2: Lab) -> f64 {
    // Step 1-2: mean chroma and the G correction for a*
    let c1 = lab1.a.hypot(lab1.b);
    let c2 = lab2.a.hypot(lab2.b);
    let c_mean = (c1 + c2) / 2.0;
    let c_mean7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

    // Step 3-4: a', C', h'
    let a1_prime = (1.0 + g) * lab1.a;
    let a2_prime = (1.0 + g) * lab2.a;
    let c1_prime = a1_prime.hypot(lab1.b);
    let c2_prime = a2_prime.hypot(lab2.b);
    let h1_prime = hue_angle(lab1.b, a1_prime);
    let h2_prime = hue_angle(lab2.b, a2_prime);

    let chroma_product = c1_prime * c2_prime;

    // Step 5-7: ΔL', ΔC', Δh', ΔH'
    let delta_l_prime = lab2.l - lab1.l;
    let delta_c_prime = c2_prime - c1_prime;

    let delta_h_prime = if chroma_product == 0.0 {
        0.0
    } else {
        let diff = h2_prime - h1_prime;
        if diff > 180.0 {
            diff - 360.0
        } else if diff < -180.0 {
            diff + 360.0
        } else {
            diff
        }
    };
    let delta_big_h_prime =
        2.0 * chroma_product.sqrt() * (delta_h_prime / 2.0).to_radians().sin();

    // Step 8-9: means
    let l_mean_prime = (lab1.l + lab2.l) / 2.0;
    let c_mean_prime = (c1_prime + c2_prime) / 2.0;

    let h_mean_prime = if chroma_product == 0.0 {
        h1_prime + h2_prime
    } else if (h1_prime - h2_prime).abs() <= 180.0 {
        (h1_prime + h2_prime) / 2.0
    } else if h1_prime + h2_prime < 360.0 {
        (h1_prime + h2_prime + 360.0) / 2.0
    } else {
        (h1_prime + h2_prime - 360.0) / 2.0
    };

    // Step 10: hue weighting
    let t = 1.0 - 0.17 * (h_mean_prime - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean_prime).to_radians().cos()
        + 0.32 * (3.0 * h_mean_prime + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean_prime - 63.0).to_radians().cos();

    // Step 11: weighting functions
    let l_offset_sq = (l_mean_prime - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l_offset_sq / (20.0 + l_offset_sq).sqrt();
    let s_c = 1.0 + 0.045 * c_mean_prime;
    let s_h = 1.0 + 0.015 * c_mean_prime * t;

    // Step 12: blue-region rotation
    let delta_theta = 30.0 * (-((h_mean_prime - 275.0) / 25.0).powi(2)).exp();
    let c_mean_prime7 = c_mean_prime.powi(7);
    let r_c = 2.0 * (c_mean_prime7 / (c_mean_prime7 + POW25_7)).sqrt();
    let r_t = -r_c * (2.0 * delta_theta).to_radians().sin();

    // Step 13
    let l_term = delta_l_prime / (KL * s_l);
    let c_term = delta_c_prime / (KC * s_c);
    let h_term = delta_big_h_prime / (KH * s_h);

    // Rounding can push the radicand a hair below zero for near-identical inputs
    (l_term * l_term + c_term * c_term + h_term * h_term + r_t * c_term * h_term)
        .max(0.0)
        .sqrt()
}

/// Hue angle in degrees, normalized into [0, 360).
#[inline]
fn hue_angle(b: f64, a_prime: f64) -> f64 {
    let mut h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    if h >= 360.0 {
        h -= 360.0;
    }
    h
}
