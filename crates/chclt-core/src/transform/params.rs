//! Transform descriptors.
//!
//! `Transform` is the single description of a composite adjustment. Callers
//! (palette builders, UI sliders) fill it in; [`evaluate_transform`] applies
//! it.
//!
//! [`evaluate_transform`]: crate::transform::evaluate::evaluate_transform

use serde::{Deserialize, Serialize};

/// How an [`Effect`]'s scalar is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EffectMode {
    /// Scale (contrast, chroma, luminance) or shift (hue, in turns) the
    /// current value.
    #[default]
    Relative,
    /// Replace the current value.
    Absolute,
}

/// One scalar adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub scalar: f64,
    #[serde(default)]
    pub mode: EffectMode,
}

impl Effect {
    pub const fn relative(scalar: f64) -> Self {
        Self {
            scalar,
            mode: EffectMode::Relative,
        }
    }

    pub const fn absolute(scalar: f64) -> Self {
        Self {
            scalar,
            mode: EffectMode::Absolute,
        }
    }
}

/// Up to one effect per property. Applied contrast → luminance → hue →
/// chroma, with luminance recomputed between stages.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    /// Absolute: target contrast, negative flips sides of the medium.
    /// Relative: contrast multiplier.
    pub contrast: Option<Effect>,
    /// Absolute: target hue in turns. Relative: rotation in turns.
    pub hue: Option<Effect>,
    /// Absolute: fraction of available chroma, negative toward the
    /// complement. Relative: chroma multiplier.
    pub chroma: Option<Effect>,
    /// Absolute: target luminance. Relative: luminance multiplier.
    pub luminance: Option<Effect>,
}

impl Transform {
    /// Identity transform: colors pass through unchanged.
    pub const fn new() -> Self {
        Self {
            contrast: None,
            hue: None,
            chroma: None,
            luminance: None,
        }
    }

    pub const fn with_contrast(self, effect: Effect) -> Self {
        Self {
            contrast: Some(effect),
            ..self
        }
    }

    pub const fn with_hue(self, effect: Effect) -> Self {
        Self {
            hue: Some(effect),
            ..self
        }
    }

    pub const fn with_chroma(self, effect: Effect) -> Self {
        Self {
            chroma: Some(effect),
            ..self
        }
    }

    pub const fn with_luminance(self, effect: Effect) -> Self {
        Self {
            luminance: Some(effect),
            ..self
        }
    }

    /// Whether no effect is set.
    pub const fn is_identity(&self) -> bool {
        self.contrast.is_none()
            && self.hue.is_none()
            && self.chroma.is_none()
            && self.luminance.is_none()
    }
}

/// Target contrast and chroma for one role in a derived palette.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Adjustment {
    pub contrast: f64,
    pub chroma: f64,
}

impl Adjustment {
    pub const fn new(contrast: f64, chroma: f64) -> Self {
        Self { contrast, chroma }
    }
}

impl From<Adjustment> for Transform {
    fn from(adjustment: Adjustment) -> Self {
        Transform::new()
            .with_contrast(Effect::absolute(adjustment.contrast))
            .with_chroma(Effect::absolute(adjustment.chroma))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        assert!(Transform::default().is_identity());
        assert!(Transform::new().is_identity());
        assert!(!Transform::new().with_hue(Effect::relative(0.1)).is_identity());
    }

    #[test]
    fn test_adjustment_converts_to_absolute_effects() {
        let transform = Transform::from(Adjustment::new(0.6, 0.3));
        assert_eq!(transform.contrast, Some(Effect::absolute(0.6)));
        assert_eq!(transform.chroma, Some(Effect::absolute(0.3)));
        assert_eq!(transform.hue, None);
        assert_eq!(transform.luminance, None);
    }

    #[test]
    fn test_transform_from_json() {
        let json = r#"{
            "hue": { "scalar": 0.25 },
            "chroma": { "scalar": 1.0, "mode": "Absolute" }
        }"#;
        let transform: Transform = serde_json::from_str(json).expect("valid transform");
        assert_eq!(transform.hue, Some(Effect::relative(0.25)));
        assert_eq!(transform.chroma, Some(Effect::absolute(1.0)));
        assert!(transform.contrast.is_none());
    }

    #[test]
    fn test_transform_json_roundtrip() {
        let transform = Transform::new()
            .with_contrast(Effect::absolute(-0.7))
            .with_luminance(Effect::relative(1.2));
        let json = serde_json::to_string(&transform).expect("serialize");
        let back: Transform = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, transform);
    }
}
