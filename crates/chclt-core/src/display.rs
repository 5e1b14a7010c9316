//! Display-space boundary.
//!
//! Callers usually hold gamma-encoded RGB (optionally with alpha). These
//! wrappers decode with the space's transfer curve, run the linear engine,
//! and encode the result. Alpha is carried through untouched.

use glam::{DVec3, DVec4};

use crate::color_management::color_space::Chclt;
use crate::color_management::transfer::TransferFunction;
use crate::transform::Transform;

impl Chclt {
    /// Decode display RGB to linear light, componentwise (odd-extended).
    pub fn to_linear(&self, display: DVec3) -> DVec3 {
        let transfer = self.transfer();
        DVec3::new(
            transfer.linear_signed(display.x),
            transfer.linear_signed(display.y),
            transfer.linear_signed(display.z),
        )
    }

    /// Encode linear RGB for display, componentwise (odd-extended).
    pub fn to_display(&self, linear: DVec3) -> DVec3 {
        let transfer = self.transfer();
        DVec3::new(
            transfer.transfer_signed(linear.x),
            transfer.transfer_signed(linear.y),
            transfer.transfer_signed(linear.z),
        )
    }

    pub fn to_linear_rgba(&self, display: DVec4) -> DVec4 {
        self.to_linear(display.truncate()).extend(display.w)
    }

    pub fn to_display_rgba(&self, linear: DVec4) -> DVec4 {
        self.to_display(linear.truncate()).extend(linear.w)
    }

    /// Luma of a display color.
    pub fn display_luma(&self, display: DVec3) -> f64 {
        self.luma(self.luminance(self.to_linear(display)))
    }

    /// Hue (turns) of a display color.
    pub fn display_hue(&self, display: DVec3) -> f64 {
        let linear = self.to_linear(display);
        self.hue(linear, self.luminance(linear))
    }

    /// Chroma of a display color.
    pub fn display_chroma(&self, display: DVec3) -> f64 {
        let linear = self.to_linear(display);
        self.chroma(linear, self.luminance(linear))
    }

    /// Contrast of a display color.
    pub fn display_contrast(&self, display: DVec3) -> f64 {
        self.contrast(self.luminance(self.to_linear(display)))
    }

    /// [`Chclt::transform`] on a display color.
    pub fn transform_display(&self, display: DVec3, transform: &Transform) -> DVec3 {
        self.to_display(self.transform(self.to_linear(display), transform))
    }

    pub fn transform_display_rgba(&self, display: DVec4, transform: &Transform) -> DVec4 {
        self.transform_display(display.truncate(), transform)
            .extend(display.w)
    }

    /// [`Chclt::contrasting`] on a display color.
    pub fn contrasting_display(&self, display: DVec3, value: f64) -> DVec3 {
        let linear = self.to_linear(display);
        let luminance = self.luminance(linear);
        self.to_display(self.contrasting(linear, luminance, value))
    }

    /// [`Chclt::hue_range`] in display space.
    pub fn display_hue_range(
        &self,
        display: DVec3,
        count: usize,
    ) -> impl ExactSizeIterator<Item = DVec3> + '_ {
        self.hue_range(self.to_linear(display), count)
            .map(move |linear| self.to_display(linear))
    }

    /// [`Chclt::luminance_ramp`] in display space.
    pub fn display_luminance_ramp(
        &self,
        display: DVec3,
        count: usize,
    ) -> impl ExactSizeIterator<Item = DVec3> + '_ {
        self.luminance_ramp(self.to_linear(display), count)
            .map(move |linear| self.to_display(linear))
    }
}
