//! Color space configuration (`Chclt`) and the registry of named spaces.
//!
//! A `Chclt` combines luminance coefficients, a [`Contrast`] model and a
//! [`Transfer`] curve. It is immutable once built; every hue/chroma/contrast/
//! luminance operation takes it by reference.

use std::sync::LazyLock;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::color_management::colorimetry::Primaries;
use crate::color_management::contrast::Contrast;
use crate::color_management::transfer::Transfer;
use crate::error::ColorSpaceError;

/// Chroma, hue, contrast, luminance and transfer configuration of an RGB space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chclt {
    coefficients: DVec3,
    contrast: Contrast,
    transfer: Transfer,
    hue_axis: DVec3,
    hue_reference: DVec3,
}

impl Chclt {
    /// Build from explicit luminance coefficients.
    ///
    /// Coefficients must be positive and finite; a power-law transfer must
    /// have a positive gamma.
    pub fn new(
        coefficients: DVec3,
        contrast: Contrast,
        transfer: Transfer,
    ) -> Result<Self, ColorSpaceError> {
        if !(coefficients.is_finite() && coefficients.cmpgt(DVec3::ZERO).all()) {
            return Err(ColorSpaceError::InvalidCoefficients(coefficients));
        }
        transfer.validate()?;

        let white = DVec3::ONE / coefficients;
        let red = DVec3::X;
        Ok(Self {
            coefficients,
            contrast,
            transfer,
            hue_axis: hue_axis(white),
            hue_reference: (red - red.dot(coefficients)).normalize(),
        })
    }

    /// Build from chromaticities; contrast defaults to the transfer curve's
    /// medium.
    pub fn from_primaries(
        primaries: &Primaries,
        transfer: Transfer,
    ) -> Result<Self, ColorSpaceError> {
        let coefficients = primaries.luminance_coefficients()?;
        Self::new(coefficients, Contrast::for_transfer(&transfer), transfer)
    }

    /// Same space with a different contrast model.
    pub fn with_contrast(self, contrast: Contrast) -> Self {
        Self { contrast, ..self }
    }

    pub fn coefficients(&self) -> DVec3 {
        self.coefficients
    }

    pub fn contrast_model(&self) -> &Contrast {
        &self.contrast
    }

    pub fn transfer(&self) -> &Transfer {
        &self.transfer
    }

    pub fn medium_luminance(&self) -> f64 {
        self.contrast.medium_luminance()
    }

    /// Unit axis that hue rotations turn about (parallel to the coefficients).
    pub fn hue_axis(&self) -> DVec3 {
        self.hue_axis
    }

    /// Unit direction of hue 0: pure red minus its luminance.
    pub fn hue_reference(&self) -> DVec3 {
        self.hue_reference
    }
}

/// Normal of the zero-luminance plane, from the inverse luminance of white.
///
/// `(w.x, −w.y, 0)` and `(0, w.y, −w.z)` both have zero luminance, so their
/// cross product `w.x·w.y·w.z × coefficients` points along the gray-preserving
/// rotation axis.
fn hue_axis(white: DVec3) -> DVec3 {
    let red_green = DVec3::new(white.x, -white.y, 0.0);
    let green_blue = DVec3::new(0.0, white.y, -white.z);
    red_green.cross(green_blue).normalize()
}

/// Identifies a named color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorSpaceId {
    /// sRGB (BT.709 primaries, sRGB transfer).
    #[default]
    Srgb,
    /// sRGB with the WCAG-aligned 2/11 contrast medium.
    SrgbWcag,
    /// Linear sRGB (BT.709 primaries, no transfer).
    LinearSrgb,
    /// Display P3 (DCI-P3 primaries, D65, sRGB transfer).
    DisplayP3,
    /// ITU-R BT.601 625-line.
    Bt601,
    /// ITU-R BT.709.
    Bt709,
    /// ITU-R BT.2020 (wide gamut).
    Bt2020,
    /// Adobe RGB (1998), 563/256 power law.
    AdobeRgb,
    /// ROMM RGB / ProPhoto (D50).
    Romm,
}

impl ColorSpaceId {
    /// Every named space, in declaration order.
    pub const ALL: [ColorSpaceId; 9] = [
        ColorSpaceId::Srgb,
        ColorSpaceId::SrgbWcag,
        ColorSpaceId::LinearSrgb,
        ColorSpaceId::DisplayP3,
        ColorSpaceId::Bt601,
        ColorSpaceId::Bt709,
        ColorSpaceId::Bt2020,
        ColorSpaceId::AdobeRgb,
        ColorSpaceId::Romm,
    ];

    /// Human-readable label for UI menus and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Srgb => "sRGB",
            Self::SrgbWcag => "sRGB (WCAG)",
            Self::LinearSrgb => "Linear sRGB",
            Self::DisplayP3 => "Display P3",
            Self::Bt601 => "BT.601",
            Self::Bt709 => "BT.709",
            Self::Bt2020 => "BT.2020",
            Self::AdobeRgb => "Adobe RGB",
            Self::Romm => "ROMM RGB",
        }
    }

    pub fn all() -> &'static [Self] {
        &Self::ALL
    }

    pub const fn primaries(&self) -> Primaries {
        match self {
            Self::Srgb | Self::SrgbWcag | Self::LinearSrgb | Self::Bt709 => Primaries::SRGB,
            Self::DisplayP3 => Primaries::DISPLAY_P3,
            Self::Bt601 => Primaries::BT601,
            Self::Bt2020 => Primaries::BT2020,
            Self::AdobeRgb => Primaries::ADOBE_RGB,
            Self::Romm => Primaries::ROMM,
        }
    }

    pub const fn transfer(&self) -> Transfer {
        match self {
            Self::Srgb | Self::SrgbWcag | Self::DisplayP3 => Transfer::Srgb,
            Self::LinearSrgb => Transfer::Linear,
            Self::Bt601 | Self::Bt709 | Self::Bt2020 => Transfer::Bt,
            Self::AdobeRgb => Transfer::Power {
                gamma: 563.0 / 256.0,
            },
            Self::Romm => Transfer::Romm,
        }
    }

    pub fn contrast(&self) -> Contrast {
        match self {
            Self::SrgbWcag => Contrast::WCAG,
            _ => Contrast::for_transfer(&self.transfer()),
        }
    }

    /// Construct a fresh `Chclt` for this space.
    pub fn build(&self) -> Result<Chclt, ColorSpaceError> {
        let space = Chclt::from_primaries(&self.primaries(), self.transfer())?;
        Ok(space.with_contrast(self.contrast()))
    }

    /// The shared instance, built once on first use.
    pub fn chclt(&self) -> &'static Chclt {
        &REGISTRY[*self as usize]
    }
}

static REGISTRY: LazyLock<[Chclt; 9]> = LazyLock::new(|| {
    ColorSpaceId::ALL.map(|id| {
        let space = id
            .build()
            .expect("standard primaries are never singular");
        tracing::debug!(
            space = id.label(),
            coefficients = %space.coefficients(),
            medium = space.medium_luminance(),
            "built color space"
        );
        space
    })
});
