//! Luminance and luma.

use glam::DVec3;

use crate::color_management::color_space::Chclt;
use crate::color_management::transfer::TransferFunction;
use crate::linear::lerp;

impl Chclt {
    /// `dot(v, coefficients)`.
    pub fn luminance(&self, v: DVec3) -> f64 {
        v.dot(self.coefficients())
    }

    /// `v / coefficients`, componentwise.
    ///
    /// Each channel of the result, taken alone, has the luminance given by the
    /// matching channel of `v`.
    pub fn inverse_luminance(&self, v: DVec3) -> DVec3 {
        v / self.coefficients()
    }

    /// The achromatic color with this luminance.
    pub fn gray(&self, luminance: f64) -> DVec3 {
        DVec3::splat(luminance)
    }

    /// Display-encoded luminance.
    pub fn luma(&self, luminance: f64) -> f64 {
        self.transfer().transfer_signed(luminance)
    }

    /// Re-light `v` to luminance `target`, keeping its channel ratio where
    /// the gamut allows.
    ///
    /// ```text
    /// target ≤ 0 → black      target ≥ 1 → white      lum ≤ 0 → gray(target)
    ///
    /// n = normalize(v), d = display(n), s = target / lum
    /// transfer(s) × max(d) ≤ 1 → n × s
    /// otherwise                → blend linear(d / max(d)) toward white
    /// ```
    ///
    /// The blend keeps the display ratio of the brightest in-gamut color along
    /// `v` and trades saturation for luminance as `target` approaches 1.
    ///
    /// The direct branch tests the peak against `transfer(s) × max(d)`. On
    /// piecewise curves `transfer(s·x) ≠ transfer(s) × transfer(x)`, so a
    /// channel of `n × s` can land above 1 while the luminance is still exact.
    /// Callers that need an in-gamut color follow with
    /// `normalize(result, target, false)`, which keeps the luminance.
    pub fn apply_luminance(&self, v: DVec3, luminance: f64, target: f64) -> DVec3 {
        if target <= 0.0 {
            return DVec3::ZERO;
        }
        if target >= 1.0 {
            return DVec3::ONE;
        }
        if luminance <= 0.0 {
            return DVec3::splat(target);
        }

        let normalized = self.normalize(v, luminance, true);
        let display = self.to_display(normalized);
        let peak = display.max_element();
        if peak <= 0.0 {
            return DVec3::splat(target);
        }

        let scale = target / luminance;
        if self.transfer().transfer(scale) * peak <= 1.0 {
            return normalized * scale;
        }

        let brightest = self.to_linear(display / peak);
        let ceiling = self.luminance(brightest);
        if ceiling >= 1.0 {
            return DVec3::ONE;
        }
        let weight = (1.0 - target) / (1.0 - ceiling);
        brightest * weight + DVec3::splat(1.0 - weight)
    }

    /// Multiply the luminance by `scalar`.
    pub fn scale_luminance(&self, v: DVec3, luminance: f64, scalar: f64) -> DVec3 {
        self.apply_luminance(v, luminance, luminance * scalar)
    }

    /// Move the luminance of `v` a `fraction` of the way toward that of `other`.
    pub fn match_luminance(&self, v: DVec3, luminance: f64, other: DVec3, fraction: f64) -> DVec3 {
        let target = lerp(luminance, self.luminance(other), fraction);
        self.apply_luminance(v, luminance, target)
    }

    /// Re-light `v` to the display-encoded luminance `luma`.
    pub fn apply_luma(&self, v: DVec3, luminance: f64, luma: f64) -> DVec3 {
        self.apply_luminance(v, luminance, self.transfer().linear_signed(luma))
    }
}
