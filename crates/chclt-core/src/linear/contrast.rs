//! Contrast operations. All of them pick a target luminance through the
//! space's [`Contrast`](crate::Contrast) model and hand off to
//! `apply_luminance`.

use glam::DVec3;

use crate::color_management::color_space::Chclt;
use crate::linear::lerp;

impl Chclt {
    /// Contrast of a color with this luminance, `[0, 1]`.
    pub fn contrast(&self, luminance: f64) -> f64 {
        self.contrast_model().contrast(luminance)
    }

    /// Contrast, positive above the medium luminance and negative below.
    pub fn signed_contrast(&self, luminance: f64) -> f64 {
        let contrast = self.contrast(luminance);
        if self.contrast_model().is_brighter(luminance) {
            contrast
        } else {
            -contrast
        }
    }

    /// Re-light `v` to contrast `|value|`.
    ///
    /// A positive value keeps `v` on its side of the medium; a negative value
    /// moves it to the opposite side.
    pub fn apply_contrast(&self, v: DVec3, luminance: f64, value: f64) -> DVec3 {
        let model = self.contrast_model();
        let brighter = model.is_brighter(luminance) != (value < 0.0);
        self.apply_luminance(v, luminance, model.luminance_for(value, brighter))
    }

    /// Multiply the contrast of `v` by `scalar`.
    pub fn scale_contrast(&self, v: DVec3, luminance: f64, scalar: f64) -> DVec3 {
        self.apply_contrast(v, luminance, self.contrast(luminance) * scalar)
    }

    /// A color of contrast `value` on the opposite side of the medium, for
    /// text over a background `v`.
    pub fn contrasting(&self, v: DVec3, luminance: f64, value: f64) -> DVec3 {
        self.apply_contrast(v, luminance, -value)
    }

    /// Move the signed contrast of `v` a `fraction` of the way toward that of
    /// `other`. Crossing the medium is allowed.
    pub fn match_contrast(&self, v: DVec3, luminance: f64, other: DVec3, fraction: f64) -> DVec3 {
        let value = lerp(
            self.signed_contrast(luminance),
            self.signed_contrast(self.luminance(other)),
            fraction,
        );
        let target = self.contrast_model().luminance_for(value, value > 0.0);
        self.apply_luminance(v, luminance, target)
    }
}
