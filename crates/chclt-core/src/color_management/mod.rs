//! Color management — transfer curves, colorimetry, contrast and color space configuration.

pub mod color_space;
pub mod colorimetry;
pub mod contrast;
pub mod daylight;
pub mod transfer;

pub use color_space::{Chclt, ColorSpaceId};
pub use colorimetry::Primaries;
pub use contrast::Contrast;
pub use transfer::{Transfer, TransferFunction};
