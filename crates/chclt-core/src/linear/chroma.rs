//! Chroma: saturation relative to the most saturated color of the same
//! luminance and hue that stays inside the unit cube.
//!
//! Colors along a hue line are `gray + (v − gray) × k`. Each channel leaves
//! the cube at
//!
//! ```text
//! k_c = (lum − boundary) / (lum − v[c])
//! ```
//!
//! where `boundary` is the cube face the channel moves toward. The smallest
//! positive `k_c` is the maximum chroma scale; the negative `k_c` closest to
//! zero is the minimum (the same line, pushed through gray to the
//! complementary side).

use glam::DVec3;

use crate::color_management::color_space::Chclt;
use crate::linear::lerp;

/// Channels closer to gray than this (2⁻³⁰) do not constrain chroma.
pub const CHROMA_EPSILON: f64 = 1.0 / 1_073_741_824.0;

impl Chclt {
    /// Largest scale of `v − gray` that keeps every channel in `[0, 1]`.
    ///
    /// `f64::INFINITY` for achromatic colors.
    pub fn maximum_chroma(&self, v: DVec3, luminance: f64) -> f64 {
        let mut bound = f64::INFINITY;
        for channel in v.to_array() {
            let difference = luminance - channel;
            if difference.abs() > CHROMA_EPSILON {
                let boundary = if difference < 0.0 { 1.0 } else { 0.0 };
                bound = bound.min((luminance - boundary) / difference);
            }
        }
        bound
    }

    /// Most negative scale of `v − gray` that keeps every channel in `[0, 1]`.
    ///
    /// `f64::NEG_INFINITY` for achromatic colors.
    pub fn minimum_chroma(&self, v: DVec3, luminance: f64) -> f64 {
        let mut bound = f64::NEG_INFINITY;
        for channel in v.to_array() {
            let difference = luminance - channel;
            if difference.abs() > CHROMA_EPSILON {
                let boundary = if difference < 0.0 { 0.0 } else { 1.0 };
                bound = bound.max((luminance - boundary) / difference);
            }
        }
        bound
    }

    /// Fraction of the available saturation `v` uses, `[0, 1]` for in-gamut colors.
    pub fn chroma(&self, v: DVec3, luminance: f64) -> f64 {
        let maximum = self.maximum_chroma(v, luminance);
        if maximum.is_finite() && maximum > 0.0 {
            maximum.recip()
        } else {
            0.0
        }
    }

    /// Set chroma to `|value|` of the headroom on the side chosen by its sign.
    ///
    /// Positive values saturate along the hue of `v`; negative values pass
    /// through gray toward the complementary hue. ±1 lands on the cube surface.
    pub fn apply_chroma(&self, v: DVec3, luminance: f64, value: f64) -> DVec3 {
        let bound = if value >= 0.0 {
            self.maximum_chroma(v, luminance)
        } else {
            self.minimum_chroma(v, luminance)
        };
        if !bound.is_finite() {
            return v;
        }
        let gray = self.gray(luminance);
        gray + (v - gray) * (bound * value.abs())
    }

    /// Multiply the saturation by `scalar`, stopping at the cube surface.
    pub fn scale_chroma(&self, v: DVec3, luminance: f64, scalar: f64) -> DVec3 {
        let scale = scalar.clamp(
            self.minimum_chroma(v, luminance),
            self.maximum_chroma(v, luminance),
        );
        let gray = self.gray(luminance);
        gray + (v - gray) * scale
    }

    /// Move the chroma of `v` a `fraction` of the way toward that of `other`.
    pub fn match_chroma(&self, v: DVec3, luminance: f64, other: DVec3, fraction: f64) -> DVec3 {
        let target = lerp(
            self.chroma(v, luminance),
            self.chroma(other, self.luminance(other)),
            fraction,
        );
        self.apply_chroma(v, luminance, target)
    }
}
