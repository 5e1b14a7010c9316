//! CHCLT Core — perceptual color transforms on RGB.
//!
//! Describes colors by chroma, hue, contrast, luminance and transfer, and
//! derives related colors (contrasting text, rotated accents, desaturated
//! variants, ramps) from a seed while keeping results inside the RGB cube.
//! Pure math with no framework dependencies.

pub mod color_management;
pub mod config;
pub mod display;
pub mod error;
pub mod linear;
pub mod math;
pub mod sequence;
pub mod transform;

// Re-exports for convenience.
pub use color_management::{
    Chclt, ColorSpaceId, Contrast, Primaries, Transfer, TransferFunction,
};
pub use config::ColorSpaceConfig;
pub use error::ColorSpaceError;
pub use transform::evaluate::evaluate_transform;
pub use transform::params::{Adjustment, Effect, EffectMode, Transform};
