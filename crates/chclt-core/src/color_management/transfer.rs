//! Transfer functions between linear light and display (gamma-encoded) values.
//!
//! Every curve is monotonic increasing and continuous, and `linear`/`transfer`
//! are exact inverses on the nonnegative reals. Piecewise thresholds are
//! chosen so the two branches meet in value at the boundary.

use serde::{Deserialize, Serialize};

use crate::error::ColorSpaceError;

/// A transfer function that converts between display and linear encodings.
pub trait TransferFunction: Send + Sync {
    /// Convert from display (encoded) to linear light.
    fn linear(&self, encoded: f64) -> f64;

    /// Convert from linear light to display (encoded).
    fn transfer(&self, linear: f64) -> f64;

    /// `linear` extended to negative input by odd symmetry.
    fn linear_signed(&self, encoded: f64) -> f64 {
        encoded.signum() * self.linear(encoded.abs())
    }

    /// `transfer` extended to negative input by odd symmetry.
    fn transfer_signed(&self, linear: f64) -> f64 {
        linear.signum() * self.transfer(linear.abs())
    }
}

// ---------------------------------------------------------------------------
// Power law
// ---------------------------------------------------------------------------

/// Pure power-law curve with exponent `gamma`.
///
/// ```text
/// linear:   |x|^(γ − 1) × x
/// transfer: sign(x) × |x|^(1/γ)
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerTransfer {
    pub gamma: f64,
}

impl TransferFunction for PowerTransfer {
    fn linear(&self, encoded: f64) -> f64 {
        if encoded == 0.0 {
            return 0.0;
        }
        encoded.abs().powf(self.gamma - 1.0) * encoded
    }

    fn transfer(&self, linear: f64) -> f64 {
        if linear == 0.0 {
            return 0.0;
        }
        linear.signum() * linear.abs().powf(self.gamma.recip())
    }
}

// ---------------------------------------------------------------------------
// sRGB (IEC 61966-2-1, continuous variant)
// ---------------------------------------------------------------------------

/// sRGB-style piecewise curve.
///
/// The published 0.04045 / 12.92 pair leaves a small step at the threshold;
/// this variant moves the threshold to 11/280 and uses the slope that makes
/// both branches agree there.
///
/// ```text
/// linear:   V >  11/280 → ((200V + 11) / 211) ^ (12/5)
///           V <= 11/280 → V / 12.9232102
///
/// transfer: L >  11/280 / 12.9232102 → (211 × L^(5/12) − 11) / 200
///           otherwise                → L × 12.9232102
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SrgbTransfer;

impl SrgbTransfer {
    const SLOPE: f64 = 12.923_210_2;
    const THRESHOLD: f64 = 11.0 / 280.0;
    const LINEAR_THRESHOLD: f64 = Self::THRESHOLD / Self::SLOPE;
}

impl TransferFunction for SrgbTransfer {
    fn linear(&self, encoded: f64) -> f64 {
        if encoded > Self::THRESHOLD {
            ((200.0 * encoded + 11.0) / 211.0).powf(12.0 / 5.0)
        } else {
            encoded / Self::SLOPE
        }
    }

    fn transfer(&self, linear: f64) -> f64 {
        if linear > Self::LINEAR_THRESHOLD {
            (211.0 * linear.powf(5.0 / 12.0) - 11.0) / 200.0
        } else {
            linear * Self::SLOPE
        }
    }
}

// ---------------------------------------------------------------------------
// ITU-R BT.601 / BT.709 / BT.2020
// ---------------------------------------------------------------------------

/// Piecewise curve shared by BT.601, BT.709 and BT.2020.
///
/// # Reference
/// ITU-R BT.2020-2, Table 4 (full-precision α and β; the 1.099 / 0.018 /
/// 0.081 values of BT.709 are these rounded).
///
/// ```text
/// linear:   V >  4.5β → ((V + α − 1) / α) ^ (1/0.45)
///           V <= 4.5β → V / 4.5
///
/// transfer: L >  β → α × L^0.45 − (α − 1)
///           L <= β → 4.5 × L
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BtTransfer;

impl BtTransfer {
    const ALPHA: f64 = 1.099_296_826_809_44;
    const BETA: f64 = 0.018_053_968_510_807;
    const SLOPE: f64 = 4.5;
    const EXPONENT: f64 = 0.45;
    const THRESHOLD: f64 = Self::SLOPE * Self::BETA;
}

impl TransferFunction for BtTransfer {
    fn linear(&self, encoded: f64) -> f64 {
        if encoded > Self::THRESHOLD {
            ((encoded + Self::ALPHA - 1.0) / Self::ALPHA).powf(Self::EXPONENT.recip())
        } else {
            encoded / Self::SLOPE
        }
    }

    fn transfer(&self, linear: f64) -> f64 {
        if linear > Self::BETA {
            Self::ALPHA * linear.powf(Self::EXPONENT) - (Self::ALPHA - 1.0)
        } else {
            Self::SLOPE * linear
        }
    }
}

// ---------------------------------------------------------------------------
// ROMM / ProPhoto (ISO 22028-2)
// ---------------------------------------------------------------------------

/// ROMM RGB (ProPhoto) piecewise curve.
///
/// # Reference
/// ISO 22028-2:2013
///
/// ```text
/// linear:   V >  2^-5 → V ^ (9/5)
///           V <= 2^-5 → V / 16
///
/// transfer: L >  2^-9 → L ^ (5/9)
///           L <= 2^-9 → 16 × L
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RommTransfer;

impl RommTransfer {
    const THRESHOLD: f64 = 1.0 / 32.0;
    const LINEAR_THRESHOLD: f64 = 1.0 / 512.0;
    const SLOPE: f64 = 16.0;
}

impl TransferFunction for RommTransfer {
    fn linear(&self, encoded: f64) -> f64 {
        if encoded > Self::THRESHOLD {
            encoded.powf(9.0 / 5.0)
        } else {
            encoded / Self::SLOPE
        }
    }

    fn transfer(&self, linear: f64) -> f64 {
        if linear > Self::LINEAR_THRESHOLD {
            linear.powf(5.0 / 9.0)
        } else {
            Self::SLOPE * linear
        }
    }
}

// ---------------------------------------------------------------------------
// Closed variant set
// ---------------------------------------------------------------------------

/// The transfer curve of a color space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Transfer {
    /// Identity; the color space is already linear.
    Linear,
    /// Pure power law.
    Power { gamma: f64 },
    /// sRGB / Display P3.
    Srgb,
    /// BT.601 / BT.709 / BT.2020.
    Bt,
    /// ROMM / ProPhoto.
    Romm,
}

impl Transfer {
    /// Human-readable label for UI menus and status text.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Power { .. } => "Power law",
            Self::Srgb => "sRGB",
            Self::Bt => "BT.709",
            Self::Romm => "ROMM",
        }
    }

    /// Linear luminance of a display value of one half; the default
    /// contrast medium for color spaces using this curve.
    pub fn medium_luminance(&self) -> f64 {
        self.linear(0.5)
    }

    /// Reject power laws that cannot be inverted.
    pub fn validate(&self) -> Result<(), ColorSpaceError> {
        match *self {
            Self::Power { gamma } if !(gamma.is_finite() && gamma > 0.0) => {
                Err(ColorSpaceError::InvalidGamma(gamma))
            }
            _ => Ok(()),
        }
    }
}

impl TransferFunction for Transfer {
    fn linear(&self, encoded: f64) -> f64 {
        match *self {
            Self::Linear => encoded,
            Self::Power { gamma } => PowerTransfer { gamma }.linear(encoded),
            Self::Srgb => SrgbTransfer.linear(encoded),
            Self::Bt => BtTransfer.linear(encoded),
            Self::Romm => RommTransfer.linear(encoded),
        }
    }

    fn transfer(&self, linear: f64) -> f64 {
        match *self {
            Self::Linear => linear,
            Self::Power { gamma } => PowerTransfer { gamma }.transfer(linear),
            Self::Srgb => SrgbTransfer.transfer(linear),
            Self::Bt => BtTransfer.transfer(linear),
            Self::Romm => RommTransfer.transfer(linear),
        }
    }
}
