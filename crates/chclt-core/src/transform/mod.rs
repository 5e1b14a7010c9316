//! Composite transforms: descriptors and their evaluation.

pub mod evaluate;
pub mod params;

pub use evaluate::evaluate_transform;
pub use params::{Adjustment, Effect, EffectMode, Transform};
