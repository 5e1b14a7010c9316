//! Operations on linear-light RGB vectors for a given [`Chclt`](crate::Chclt).
//!
//! Every operation takes the color `v` together with its luminance `lum`
//! (as returned by [`Chclt::luminance`](crate::Chclt::luminance)) so chains
//! of operations can reuse it. Results are new vectors; nothing is mutated.
//!
//! | Concern   | Operations                                                     |
//! |-----------|----------------------------------------------------------------|
//! | luminance | `luminance`, `apply_luminance`, `scale_luminance`, `match_luminance`, `luma`, `apply_luma` |
//! | contrast  | `contrast`, `apply_contrast`, `scale_contrast`, `contrasting`, `match_contrast` |
//! | hue       | `hue`, `hue_shift`, `apply_hue`, `match_hue`                   |
//! | chroma    | `chroma`, `maximum_chroma`, `minimum_chroma`, `apply_chroma`, `scale_chroma`, `match_chroma` |
//! | gamut     | `normalize`                                                    |

mod chroma;
mod contrast;
mod gamut;
mod hue;
mod luminance;

pub use chroma::CHROMA_EPSILON;
pub use hue::HUE_EPSILON;

/// Linear interpolation of a derived scalar.
pub(crate) fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
