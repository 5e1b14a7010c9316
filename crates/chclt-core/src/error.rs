use glam::DVec3;

/// Rejected color space configuration.
///
/// Only construction can fail; per-color operations are total.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorSpaceError {
    #[error("primaries are degenerate (determinant {determinant:e})")]
    SingularPrimaries { determinant: f64 },
    #[error("medium luminance must lie strictly between 0 and 1, got {0}")]
    InvalidMediumLuminance(f64),
    #[error("contrast power must be at least 1, got {0}")]
    InvalidContrastPower(f64),
    #[error("luminance coefficients must be positive and finite, got {0}")]
    InvalidCoefficients(DVec3),
    #[error("power-law gamma must be positive and finite, got {0}")]
    InvalidGamma(f64),
}
