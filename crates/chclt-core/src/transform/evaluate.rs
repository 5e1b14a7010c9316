//! Composite transform evaluation for a single linear color.

use glam::DVec3;

use crate::color_management::color_space::Chclt;
use crate::transform::params::{Adjustment, Effect, EffectMode, Transform};

/// Applies a [`Transform`] to one linear RGB color.
///
/// Stage order is fixed:
/// 1. Contrast
/// 2. Luminance
/// 3. Hue (on the luminance after stages 1-2)
/// 4. Chroma (on the luminance after stage 3)
///
/// Absent effects are skipped.
pub fn evaluate_transform(rgb: DVec3, transform: &Transform, space: &Chclt) -> DVec3 {
    let mut v = rgb;
    let mut luminance = space.luminance(v);

    if let Some(Effect { scalar, mode }) = transform.contrast {
        v = match mode {
            EffectMode::Absolute => space.apply_contrast(v, luminance, scalar),
            EffectMode::Relative => space.scale_contrast(v, luminance, scalar),
        };
    }
    if let Some(Effect { scalar, mode }) = transform.luminance {
        luminance = space.luminance(v);
        v = match mode {
            EffectMode::Absolute => space.apply_luminance(v, luminance, scalar),
            EffectMode::Relative => space.scale_luminance(v, luminance, scalar),
        };
    }

    luminance = space.luminance(v);
    if let Some(Effect { scalar, mode }) = transform.hue {
        v = match mode {
            EffectMode::Absolute => space.apply_hue(v, luminance, scalar),
            EffectMode::Relative => space.hue_shift(v, luminance, scalar),
        };
        luminance = space.luminance(v);
    }

    if let Some(Effect { scalar, mode }) = transform.chroma {
        v = match mode {
            EffectMode::Absolute => space.apply_chroma(v, luminance, scalar),
            EffectMode::Relative => space.scale_chroma(v, luminance, scalar),
        };
    }

    v
}

impl Chclt {
    /// [`evaluate_transform`] in this space.
    pub fn transform(&self, v: DVec3, transform: &Transform) -> DVec3 {
        evaluate_transform(v, transform, self)
    }

    /// Set contrast, then chroma, as described by `adjustment`.
    pub fn adjust(&self, v: DVec3, adjustment: Adjustment) -> DVec3 {
        self.transform(v, &adjustment.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_management::color_space::ColorSpaceId;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_identity_passes_through() {
        let space = ColorSpaceId::Srgb.chclt();
        let v = DVec3::new(0.3, 0.6, 0.1);
        assert_eq!(evaluate_transform(v, &Transform::new(), space), v);
    }

    #[test]
    fn test_each_stage_matches_direct_call() {
        let space = ColorSpaceId::DisplayP3.chclt();
        let v = DVec3::new(0.5, 0.3, 0.25);
        let lum = space.luminance(v);

        let cases = [
            (
                Transform::new().with_contrast(Effect::absolute(0.4)),
                space.apply_contrast(v, lum, 0.4),
            ),
            (
                Transform::new().with_contrast(Effect::relative(0.5)),
                space.scale_contrast(v, lum, 0.5),
            ),
            (
                Transform::new().with_luminance(Effect::absolute(0.6)),
                space.apply_luminance(v, lum, 0.6),
            ),
            (
                Transform::new().with_luminance(Effect::relative(0.5)),
                space.scale_luminance(v, lum, 0.5),
            ),
            (
                Transform::new().with_hue(Effect::absolute(0.3)),
                space.apply_hue(v, lum, 0.3),
            ),
            (
                Transform::new().with_hue(Effect::relative(0.1)),
                space.hue_shift(v, lum, 0.1),
            ),
            (
                Transform::new().with_chroma(Effect::absolute(1.0)),
                space.apply_chroma(v, lum, 1.0),
            ),
            (
                Transform::new().with_chroma(Effect::relative(0.5)),
                space.scale_chroma(v, lum, 0.5),
            ),
        ];
        for (transform, expected) in cases {
            let got = space.transform(v, &transform);
            assert!(got.abs_diff_eq(expected, EPSILON), "{transform:?}: {got}");
        }
    }

    #[test]
    fn test_stages_compose_in_order() {
        let space = ColorSpaceId::Srgb.chclt();
        let v = DVec3::new(0.5, 0.3, 0.25);
        let transform = Transform::new()
            .with_luminance(Effect::absolute(0.4))
            .with_hue(Effect::relative(0.25))
            .with_chroma(Effect::absolute(0.5));

        let lum = space.luminance(v);
        let step = space.apply_luminance(v, lum, 0.4);
        let lum = space.luminance(step);
        let step = space.hue_shift(step, lum, 0.25);
        let lum = space.luminance(step);
        let expected = space.apply_chroma(step, lum, 0.5);

        let got = space.transform(v, &transform);
        assert!(got.abs_diff_eq(expected, EPSILON), "{got} vs {expected}");
        assert!((space.luminance(got) - 0.4).abs() < 1e-6);
        assert!((space.chroma(got, space.luminance(got)) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_adjust_sets_contrast_and_chroma() {
        let space = ColorSpaceId::SrgbWcag.chclt();
        let v = DVec3::new(0.6, 0.4, 0.3);
        let out = space.adjust(v, Adjustment::new(0.5, 0.8));
        let lum = space.luminance(out);
        assert!((space.contrast(lum) - 0.5).abs() < 1e-6);
        assert!((space.chroma(out, lum) - 0.8).abs() < 1e-6);
    }
}
