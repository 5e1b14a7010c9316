//! Hue: the angle of a color around the gray axis, in turns.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::color_management::color_space::Chclt;

/// Offsets from gray shorter than this have no defined hue.
pub const HUE_EPSILON: f64 = 1e-12;

impl Chclt {
    /// Hue of `v` in turns, `[0, 1)`, increasing red → green → blue.
    ///
    /// Measured as the angle between `v − lum` and the direction of pure red.
    /// The half-turn is disambiguated by `v.y < v.z`. Achromatic colors
    /// report 0.
    ///
    /// ```text
    /// θ = atan2(|d̂ × r|, d̂ · r)
    /// ```
    ///
    /// Colors with `v.y == v.z` lie on the reference line itself and report
    /// exactly 0 or 1/2.
    pub fn hue(&self, v: DVec3, luminance: f64) -> f64 {
        let offset = v - DVec3::splat(luminance);
        let length = offset.length();
        if length < HUE_EPSILON {
            return 0.0;
        }
        if v.y == v.z {
            return if offset.x > offset.y { 0.0 } else { 0.5 };
        }

        let unit = offset / length;
        let reference = self.hue_reference();
        let turns = unit.cross(reference).length().atan2(unit.dot(reference)) / TAU;
        if v.y < v.z {
            (1.0 - turns) % 1.0
        } else {
            turns
        }
    }

    /// Rotate `v` about the gray axis by `turns` full turns.
    ///
    /// Rodrigues' rotation of `d = v − lum` about the hue axis:
    ///
    /// ```text
    /// d' = d·cos θ + (k × d)·sin θ + k·(k·d)·(1 − cos θ),  θ = 2π·turns
    /// ```
    ///
    /// The result is normalized back into gamut at the same luminance.
    pub fn hue_shift(&self, v: DVec3, luminance: f64, turns: f64) -> DVec3 {
        let gray = DVec3::splat(luminance);
        let offset = v - gray;
        let axis = self.hue_axis();
        let (sin, cos) = (TAU * turns).sin_cos();

        let rotated =
            offset * cos + axis.cross(offset) * sin + axis * axis.dot(offset) * (1.0 - cos);
        self.normalize(gray + rotated, luminance, false)
    }

    /// Rotate `v` so its hue becomes `hue` (turns).
    pub fn apply_hue(&self, v: DVec3, luminance: f64, hue: f64) -> DVec3 {
        self.hue_shift(v, luminance, hue - self.hue(v, luminance))
    }

    /// Turn the hue of `v` a `fraction` of the shorter way toward that of `other`.
    pub fn match_hue(&self, v: DVec3, luminance: f64, other: DVec3, fraction: f64) -> DVec3 {
        let delta = self.hue(other, self.luminance(other)) - self.hue(v, luminance);
        let shortest = delta - delta.round();
        self.hue_shift(v, luminance, shortest * fraction)
    }
}
