//! Serde-loadable color-space configuration.
//!
//! A config names a registry space and optionally overrides parts of it:
//!
//! ```json
//! { "space": "DisplayP3", "medium_luminance": 0.18, "contrast_power": 2.0 }
//! ```
//!
//! Without overrides [`ColorSpaceConfig::build`] returns the shared registry
//! instance unchanged.

use serde::{Deserialize, Serialize};

use crate::color_management::color_space::{Chclt, ColorSpaceId};
use crate::color_management::colorimetry::Primaries;
use crate::color_management::contrast::Contrast;
use crate::color_management::transfer::Transfer;
use crate::error::ColorSpaceError;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSpaceConfig {
    /// Base space.
    pub space: ColorSpaceId,
    /// Replaces the base chromaticities.
    pub primaries: Option<Primaries>,
    /// Replaces the base transfer curve.
    pub transfer: Option<Transfer>,
    /// Replaces the contrast medium. Must lie in (0, 1).
    pub medium_luminance: Option<f64>,
    /// Replaces the contrast power. Must be at least 1.
    pub contrast_power: Option<f64>,
}

impl ColorSpaceConfig {
    pub fn new(space: ColorSpaceId) -> Self {
        Self {
            space,
            ..Self::default()
        }
    }

    fn is_override(&self) -> bool {
        self.primaries.is_some()
            || self.transfer.is_some()
            || self.medium_luminance.is_some()
            || self.contrast_power.is_some()
    }

    /// Resolve to a color space.
    pub fn build(&self) -> Result<Chclt, ColorSpaceError> {
        if !self.is_override() {
            return Ok(*self.space.chclt());
        }

        let result = self.build_custom();
        match &result {
            Ok(space) => tracing::debug!(
                base = self.space.label(),
                coefficients = %space.coefficients(),
                medium = space.medium_luminance(),
                "built custom color space"
            ),
            Err(error) => tracing::warn!(
                base = self.space.label(),
                %error,
                "rejected color space config"
            ),
        }
        result
    }

    fn build_custom(&self) -> Result<Chclt, ColorSpaceError> {
        let base = self.space.chclt();
        let transfer = self.transfer.unwrap_or(*base.transfer());

        let space = match self.primaries {
            Some(primaries) => Chclt::from_primaries(&primaries, transfer)?,
            None => Chclt::new(
                base.coefficients(),
                *base.contrast_model(),
                transfer,
            )?,
        };

        // A new transfer curve moves the default medium with it.
        let contrast = if self.transfer.is_some() {
            Contrast::for_transfer(&transfer)
        } else {
            *base.contrast_model()
        };
        let contrast = Contrast::new(
            self.medium_luminance.unwrap_or(contrast.medium_luminance()),
            self.contrast_power.unwrap_or(contrast.power()),
        )?;
        Ok(space.with_contrast(contrast))
    }
}

#[cfg(test)]
mod tests {
    use glam::DVec2;

    use super::*;
    use crate::color_management::colorimetry::D65;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_default_config_is_srgb_registry() {
        let space = ColorSpaceConfig::default().build().expect("default config");
        assert_eq!(space, *ColorSpaceId::Srgb.chclt());
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config: ColorSpaceConfig = serde_json::from_str("{}").expect("empty config");
        assert_eq!(config, ColorSpaceConfig::default());
    }

    #[test]
    fn test_contrast_overrides() {
        let json = r#"{ "space": "DisplayP3", "medium_luminance": 0.18, "contrast_power": 2.0 }"#;
        let config: ColorSpaceConfig = serde_json::from_str(json).expect("valid config");
        let space = config.build().expect("valid overrides");
        let base = ColorSpaceId::DisplayP3.chclt();
        assert_eq!(space.coefficients(), base.coefficients());
        assert_eq!(space.transfer(), base.transfer());
        assert!((space.medium_luminance() - 0.18).abs() < EPSILON);
        assert_eq!(space.contrast_model().power(), 2.0);
    }

    #[test]
    fn test_transfer_override_moves_medium() {
        let config = ColorSpaceConfig {
            transfer: Some(Transfer::Linear),
            ..ColorSpaceConfig::new(ColorSpaceId::Srgb)
        };
        let space = config.build().expect("valid override");
        assert_eq!(*space.transfer(), Transfer::Linear);
        assert!((space.medium_luminance() - 0.5).abs() < EPSILON);
    }

    #[test]
    fn test_wcag_medium_survives_power_override() {
        let config = ColorSpaceConfig {
            contrast_power: Some(1.5),
            ..ColorSpaceConfig::new(ColorSpaceId::SrgbWcag)
        };
        let space = config.build().expect("valid override");
        assert!((space.medium_luminance() - 2.0 / 11.0).abs() < EPSILON);
    }

    #[test]
    fn test_primaries_override() {
        let config = ColorSpaceConfig {
            primaries: Some(Primaries::BT2020),
            ..ColorSpaceConfig::new(ColorSpaceId::Srgb)
        };
        let space = config.build().expect("valid primaries");
        let expected = ColorSpaceId::Bt2020.chclt().coefficients();
        assert!(space.coefficients().abs_diff_eq(expected, EPSILON));
        assert_eq!(*space.transfer(), Transfer::Srgb);
    }

    #[test]
    fn test_invalid_overrides_are_rejected() {
        let config = ColorSpaceConfig {
            medium_luminance: Some(1.5),
            ..ColorSpaceConfig::default()
        };
        assert_eq!(
            config.build(),
            Err(ColorSpaceError::InvalidMediumLuminance(1.5))
        );

        let config = ColorSpaceConfig {
            transfer: Some(Transfer::Power { gamma: 0.0 }),
            ..ColorSpaceConfig::default()
        };
        assert_eq!(config.build(), Err(ColorSpaceError::InvalidGamma(0.0)));

        let config = ColorSpaceConfig {
            primaries: Some(collapsed_primaries()),
            ..ColorSpaceConfig::default()
        };
        assert!(matches!(
            config.build(),
            Err(ColorSpaceError::SingularPrimaries { .. })
        ));
    }

    fn collapsed_primaries() -> Primaries {
        let point = DVec2::new(0.3, 0.3);
        Primaries {
            white: D65,
            red: point,
            green: point,
            blue: DVec2::new(0.15, 0.06),
        }
    }
}
