//! Contrast model: distance from a medium luminance.
//!
//! ```text
//! c = lum > m ? (lum − m) / (1 − m) : 1 − lum / m
//! contrast = |c| ^ power
//! ```
//!
//! Black and white both have contrast 1; a color exactly at the medium has 0.

use serde::Serialize;

use crate::color_management::transfer::Transfer;
use crate::error::ColorSpaceError;

/// Medium luminance and curve power shared by all contrast math of a space.
///
/// Deserialize through [`ColorSpaceConfig`](crate::config::ColorSpaceConfig),
/// which validates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Contrast {
    medium_luminance: f64,
    power: f64,
}

impl Contrast {
    /// WCAG-aligned medium: the luminance whose WCAG contrast ratio against
    /// black equals its ratio against white, rounded to 2/11.
    pub const WCAG: Self = Self {
        medium_luminance: 2.0 / 11.0,
        power: 1.0,
    };

    /// Validated constructor. Requires `0 < medium_luminance < 1` and
    /// `power ≥ 1`.
    pub fn new(medium_luminance: f64, power: f64) -> Result<Self, ColorSpaceError> {
        if !(medium_luminance > 0.0 && medium_luminance < 1.0) {
            return Err(ColorSpaceError::InvalidMediumLuminance(medium_luminance));
        }
        if !(power.is_finite() && power >= 1.0) {
            return Err(ColorSpaceError::InvalidContrastPower(power));
        }
        Ok(Self {
            medium_luminance,
            power,
        })
    }

    /// Default contrast for a transfer curve: medium at the linear image of
    /// display 0.5, power 1.
    pub fn for_transfer(transfer: &Transfer) -> Self {
        Self {
            medium_luminance: transfer
                .medium_luminance()
                .clamp(f64::EPSILON, 1.0 - f64::EPSILON),
            power: 1.0,
        }
    }

    pub fn medium_luminance(&self) -> f64 {
        self.medium_luminance
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    /// Whether `luminance` lies on the bright side of the medium.
    pub fn is_brighter(&self, luminance: f64) -> bool {
        luminance > self.medium_luminance
    }

    /// Contrast of a color with this `luminance`.
    pub fn contrast(&self, luminance: f64) -> f64 {
        let m = self.medium_luminance;
        let c = if luminance > m {
            (luminance - m) / (1.0 - m)
        } else {
            1.0 - luminance / m
        };
        c.abs().powf(self.power)
    }

    /// Luminance with contrast `|value|` on the requested side of the medium.
    ///
    /// Inverse of [`Contrast::contrast`]:
    ///
    /// ```text
    /// t = |value| ^ (1 / power)
    /// brighter → m + t × (1 − m)
    /// darker   → m × (1 − t)
    /// ```
    pub fn luminance_for(&self, value: f64, brighter: bool) -> f64 {
        let m = self.medium_luminance;
        let t = value.abs().powf(self.power.recip());
        if brighter {
            m + t * (1.0 - m)
        } else {
            m * (1.0 - t)
        }
    }
}
