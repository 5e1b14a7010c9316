//! CIE daylight locus and correlated color temperature.
//!
//! Daylight white points (D50, D65, …) lie on a curve parameterized by
//! temperature. `x` is a cubic in `1/T`, and `y` is a quadratic in `x`:
//!
//! ```text
//! 4000 K ≤ T ≤ 7000 K:  x = −4.6070e9/T³ + 2.9678e6/T² + 0.09911e3/T + 0.244063
//! 7000 K < T ≤ 25000 K: x = −2.0064e9/T³ + 1.9018e6/T² + 0.24748e3/T + 0.237040
//!                       y = −3.000x² + 2.870x − 0.275
//! ```
//!
//! Recovering the temperature from `x` solves that cubic for `1/T`.
//!
//! # Reference
//! - CIE 15:2004, §3.1 — daylight illuminants
//! - McCamy, C. S. (1992) — correlated color temperature as an explicit
//!   function of chromaticity coordinates

use glam::DVec2;

use crate::math::polynomial::{cubic_roots, evaluate};

/// Valid temperature range of the daylight locus, in kelvin.
pub const DAYLIGHT_RANGE: (f64, f64) = (4000.0, 25000.0);

const SPLIT_KELVIN: f64 = 7000.0;

/// `x` as a cubic in `1/T`, highest power first.
const WARM_X: [f64; 4] = [-4.6070e9, 2.9678e6, 0.09911e3, 0.244063];
const COOL_X: [f64; 4] = [-2.0064e9, 1.9018e6, 0.24748e3, 0.237040];

/// `y` as a quadratic in `x`.
const LOCUS_Y: [f64; 3] = [-3.000, 2.870, -0.275];

/// McCamy's CCT cubic in `n = (x − 0.3320) / (0.1858 − y)`.
const MCCAMY: [f64; 4] = [449.0, 3525.0, 6823.3, 5520.33];

/// Chromaticity of the CIE daylight illuminant at `kelvin`.
///
/// The temperature is clamped to [`DAYLIGHT_RANGE`].
pub fn daylight_chromaticity(kelvin: f64) -> DVec2 {
    let t = kelvin.clamp(DAYLIGHT_RANGE.0, DAYLIGHT_RANGE.1);
    let coefficients = if t <= SPLIT_KELVIN { &WARM_X } else { &COOL_X };
    let x = evaluate(coefficients, t.recip());
    DVec2::new(x, evaluate(&LOCUS_Y, x))
}

/// Temperature of the daylight illuminant whose chromaticity has this `x`.
///
/// Returns `None` when no point of the locus in [`DAYLIGHT_RANGE`] has that
/// `x` coordinate.
pub fn daylight_temperature(x: f64) -> Option<f64> {
    let segments = [
        (&WARM_X, DAYLIGHT_RANGE.0, SPLIT_KELVIN),
        (&COOL_X, SPLIT_KELVIN, DAYLIGHT_RANGE.1),
    ];
    segments.into_iter().find_map(|(c, low, high)| {
        // Roots in u = 1/T, so the kelvin range maps to [1/high, 1/low].
        let roots = cubic_roots(c[0], c[1], c[2], c[3] - x);
        let tolerance = 1e-9;
        roots
            .iter()
            .map(f64::recip)
            .find(|t| *t >= low * (1.0 - tolerance) && *t <= high * (1.0 + tolerance))
    })
}

/// Correlated color temperature of a chromaticity near the Planckian locus.
///
/// McCamy's approximation; accurate to a few kelvin between 2856 K and
/// 6504 K.
pub fn mccamy_cct(xy: DVec2) -> f64 {
    let n = (xy.x - 0.3320) / (0.1858 - xy.y);
    evaluate(&MCCAMY, n)
}
