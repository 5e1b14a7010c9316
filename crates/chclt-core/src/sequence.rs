//! Finite color sequences derived from one seed: hue sweeps and luminance
//! ramps. Each yields exactly `count` linear colors.

use glam::DVec3;

use crate::color_management::color_space::Chclt;

impl Chclt {
    /// `count` colors evenly spaced around the hue circle, starting at `v`.
    pub fn hue_range(&self, v: DVec3, count: usize) -> impl ExactSizeIterator<Item = DVec3> + '_ {
        let luminance = self.luminance(v);
        (0..count).map(move |i| self.hue_shift(v, luminance, i as f64 / count as f64))
    }

    /// `count` versions of `v` from black to white.
    ///
    /// Step `i` targets luminance `i / (count − 1)`; a single step is black.
    pub fn luminance_ramp(
        &self,
        v: DVec3,
        count: usize,
    ) -> impl ExactSizeIterator<Item = DVec3> + '_ {
        let luminance = self.luminance(v);
        let last = count.saturating_sub(1).max(1) as f64;
        (0..count).map(move |i| self.apply_luminance(v, luminance, i as f64 / last))
    }
}
