//! Luminance-preserving gamut normalization.

use glam::DVec3;

use crate::color_management::color_space::Chclt;

impl Chclt {
    /// Pull `v` back inside the unit cube without changing its luminance.
    ///
    /// Out-of-range channels are fixed by blending toward the gray of the
    /// same luminance until the worst channel touches the boundary:
    ///
    /// ```text
    /// min(v) < 0 → t = lum / (lum − min),        v = v·t + lum·(1 − t)
    /// max(v) > 1 → t = (lum − 1) / (lum − max),  v = v·t + lum·(1 − t)
    /// ```
    ///
    /// With `leave_positive` the high side is left alone (only negatives are
    /// removed). A final clamp absorbs rounding.
    pub fn normalize(&self, v: DVec3, luminance: f64, leave_positive: bool) -> DVec3 {
        let mut v = v;

        let min = v.min_element();
        if min < 0.0 {
            if luminance <= 0.0 {
                return DVec3::ZERO;
            }
            let t = luminance / (luminance - min);
            v = v * t + DVec3::splat(luminance * (1.0 - t));
        }

        if leave_positive {
            return v.max(DVec3::ZERO);
        }

        let max = v.max_element();
        if max > 1.0 {
            if luminance >= 1.0 {
                return DVec3::ONE;
            }
            let t = (luminance - 1.0) / (luminance - max);
            v = v * t + DVec3::splat(luminance * (1.0 - t));
        }

        v.clamp(DVec3::ZERO, DVec3::ONE)
    }
}
