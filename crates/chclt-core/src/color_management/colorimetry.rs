//! Colorimetry — RGB↔XYZ matrices from chromaticities, and CIE Lab/LCh.
//!
//! # Algorithm
//! 1. Convert each primary's CIE xy chromaticity to a tristimulus column
//!    (Y = 1)
//! 2. Invert the primaries matrix and apply it to the white tristimulus to
//!    get the per-primary scale
//! 3. Scale each column; the Y row of the result holds the luminance
//!    coefficients
//!
//! # Reference
//! - Lindbloom, Bruce J. — RGB/XYZ Matrices
//! - CIE 15:2004 — CIE 1976 L*a*b*

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::error::ColorSpaceError;
use crate::math::matrix::{Matrix3x3, try_inverse};

/// D65 white point (4-digit chromaticity used by sRGB, BT.709, BT.2020, P3).
pub const D65: DVec2 = DVec2::new(0.3127, 0.3290);

/// D50 white point (ICC PCS, ROMM).
pub const D50: DVec2 = DVec2::new(0.3457, 0.3585);

/// `(6/29)³`, the Lab linear/cube-root breakpoint.
const LAB_EPSILON: f64 = 216.0 / 24389.0;
const LAB_DELTA: f64 = 6.0 / 29.0;

/// Convert a chromaticity pair to an XYZ tristimulus value with Y = 1.
pub fn tristimulus(xy: DVec2) -> DVec3 {
    DVec3::new(xy.x / xy.y, 1.0, (1.0 - xy.x - xy.y) / xy.y)
}

/// The Y row of an RGB→XYZ matrix: the luminance contributed by each channel.
pub fn luminance_coefficients(rgb_to_xyz: &Matrix3x3) -> DVec3 {
    rgb_to_xyz.row(1)
}

/// Chromaticities of an RGB color space: white point plus three primaries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primaries {
    pub white: DVec2,
    pub red: DVec2,
    pub green: DVec2,
    pub blue: DVec2,
}

impl Primaries {
    /// sRGB / ITU-R BT.709-6.
    pub const SRGB: Self = Self {
        white: D65,
        red: DVec2::new(0.640, 0.330),
        green: DVec2::new(0.300, 0.600),
        blue: DVec2::new(0.150, 0.060),
    };

    /// Display P3 (DCI-P3 primaries, D65 white).
    pub const DISPLAY_P3: Self = Self {
        white: D65,
        red: DVec2::new(0.680, 0.320),
        green: DVec2::new(0.265, 0.690),
        blue: DVec2::new(0.150, 0.060),
    };

    /// ITU-R BT.601-7, 625-line systems.
    pub const BT601: Self = Self {
        white: D65,
        red: DVec2::new(0.640, 0.330),
        green: DVec2::new(0.290, 0.600),
        blue: DVec2::new(0.150, 0.060),
    };

    /// ITU-R BT.2020-2.
    pub const BT2020: Self = Self {
        white: D65,
        red: DVec2::new(0.708, 0.292),
        green: DVec2::new(0.170, 0.797),
        blue: DVec2::new(0.131, 0.046),
    };

    /// Adobe RGB (1998).
    pub const ADOBE_RGB: Self = Self {
        white: D65,
        red: DVec2::new(0.640, 0.330),
        green: DVec2::new(0.210, 0.710),
        blue: DVec2::new(0.150, 0.060),
    };

    /// ROMM RGB / ProPhoto (ISO 22028-2).
    pub const ROMM: Self = Self {
        white: D50,
        red: DVec2::new(0.7347, 0.2653),
        green: DVec2::new(0.1596, 0.8404),
        blue: DVec2::new(0.0366, 0.0001),
    };

    /// Tristimulus value of the white point (Y = 1).
    pub fn white_xyz(&self) -> DVec3 {
        tristimulus(self.white)
    }

    /// Matrix converting linear RGB in this space to CIE XYZ.
    pub fn rgb_to_xyz(&self) -> Result<Matrix3x3, ColorSpaceError> {
        let primaries = Matrix3x3::from_cols(
            tristimulus(self.red),
            tristimulus(self.green),
            tristimulus(self.blue),
        );
        let inverse = try_inverse(&primaries).ok_or(ColorSpaceError::SingularPrimaries {
            determinant: primaries.determinant(),
        })?;
        let scale = inverse * self.white_xyz();
        Ok(Matrix3x3::from_cols(
            primaries.x_axis * scale.x,
            primaries.y_axis * scale.y,
            primaries.z_axis * scale.z,
        ))
    }

    /// Luminance coefficients derived from the chromaticities.
    pub fn luminance_coefficients(&self) -> Result<DVec3, ColorSpaceError> {
        Ok(luminance_coefficients(&self.rgb_to_xyz()?))
    }

    /// Precompute both conversion directions.
    pub fn conversion(&self) -> Result<XyzConversion, ColorSpaceError> {
        let rgb_to_xyz = self.rgb_to_xyz()?;
        let xyz_to_rgb = try_inverse(&rgb_to_xyz).ok_or(ColorSpaceError::SingularPrimaries {
            determinant: rgb_to_xyz.determinant(),
        })?;
        Ok(XyzConversion {
            rgb_to_xyz,
            xyz_to_rgb,
            white: self.white_xyz(),
        })
    }
}

/// Linear RGB ↔ XYZ ↔ Lab for one set of primaries, relative to its own white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzConversion {
    pub rgb_to_xyz: Matrix3x3,
    pub xyz_to_rgb: Matrix3x3,
    pub white: DVec3,
}

impl XyzConversion {
    pub fn to_xyz(&self, rgb: DVec3) -> DVec3 {
        self.rgb_to_xyz * rgb
    }

    pub fn from_xyz(&self, xyz: DVec3) -> DVec3 {
        self.xyz_to_rgb * xyz
    }

    pub fn to_lab(&self, rgb: DVec3) -> DVec3 {
        xyz_to_lab(self.to_xyz(rgb), self.white)
    }

    pub fn from_lab(&self, lab: DVec3) -> DVec3 {
        self.from_xyz(lab_to_xyz(lab, self.white))
    }
}

fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        t / (3.0 * LAB_DELTA * LAB_DELTA) + 4.0 / 29.0
    }
}

fn lab_f_inverse(t: f64) -> f64 {
    if t > LAB_DELTA {
        t * t * t
    } else {
        3.0 * LAB_DELTA * LAB_DELTA * (t - 4.0 / 29.0)
    }
}

/// CIE 1976 L*a*b* from XYZ relative to `white`.
///
/// ```text
/// L = 116 f(Y/Yn) − 16
/// a = 500 (f(X/Xn) − f(Y/Yn))
/// b = 200 (f(Y/Yn) − f(Z/Zn))
/// ```
pub fn xyz_to_lab(xyz: DVec3, white: DVec3) -> DVec3 {
    let ratio = xyz / white;
    let fx = lab_f(ratio.x);
    let fy = lab_f(ratio.y);
    let fz = lab_f(ratio.z);
    DVec3::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Inverse of [`xyz_to_lab`].
pub fn lab_to_xyz(lab: DVec3, white: DVec3) -> DVec3 {
    let fy = (lab.x + 16.0) / 116.0;
    let fx = fy + lab.y / 500.0;
    let fz = fy - lab.z / 200.0;
    white * DVec3::new(lab_f_inverse(fx), lab_f_inverse(fy), lab_f_inverse(fz))
}

/// Polar form of Lab: `(L, C, h)` with `h` in degrees in `[0, 360)`.
pub fn lab_to_lch(lab: DVec3) -> DVec3 {
    let chroma = lab.y.hypot(lab.z);
    let hue = lab.z.atan2(lab.y).to_degrees().rem_euclid(360.0);
    DVec3::new(lab.x, chroma, hue)
}

/// Inverse of [`lab_to_lch`].
pub fn lch_to_lab(lch: DVec3) -> DVec3 {
    let (sin, cos) = lch.z.to_radians().sin_cos();
    DVec3::new(lch.x, lch.y * cos, lch.y * sin)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_tristimulus_of_d65() {
        let w = tristimulus(D65);
        assert!((w.x - 0.950_455_9).abs() < 1e-6);
        assert_eq!(w.y, 1.0);
        assert!((w.z - 1.089_057_8).abs() < 1e-6);
    }

    #[test]
    fn test_srgb_luminance_coefficients() {
        let c = Primaries::SRGB
            .luminance_coefficients()
            .expect("sRGB primaries are valid");
        assert!((c.x - 0.2126).abs() < 1e-4, "{c}");
        assert!((c.y - 0.7152).abs() < 1e-4, "{c}");
        assert!((c.z - 0.0722).abs() < 1e-4, "{c}");
        assert!((c.element_sum() - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_rgb_white_maps_to_white_point() {
        for primaries in [
            Primaries::SRGB,
            Primaries::DISPLAY_P3,
            Primaries::BT2020,
            Primaries::ROMM,
        ] {
            let m = primaries.rgb_to_xyz().expect("standard primaries are valid");
            let white = m * DVec3::ONE;
            assert!(white.abs_diff_eq(primaries.white_xyz(), EPSILON), "{white}");
        }
    }

    #[test]
    fn test_degenerate_primaries_are_rejected() {
        let primaries = Primaries {
            white: D65,
            red: DVec2::new(0.3, 0.3),
            green: DVec2::new(0.3, 0.3),
            blue: DVec2::new(0.15, 0.06),
        };
        assert!(matches!(
            primaries.rgb_to_xyz(),
            Err(ColorSpaceError::SingularPrimaries { .. })
        ));
    }

    #[test]
    fn test_lab_of_white_and_black() {
        let conversion = Primaries::SRGB.conversion().expect("valid");
        let white = conversion.to_lab(DVec3::ONE);
        assert!(white.abs_diff_eq(DVec3::new(100.0, 0.0, 0.0), 1e-9), "{white}");
        let black = conversion.to_lab(DVec3::ZERO);
        assert!(black.abs_diff_eq(DVec3::ZERO, 1e-9), "{black}");
    }

    #[test]
    fn test_lab_roundtrip_through_rgb() {
        let conversion = Primaries::DISPLAY_P3.conversion().expect("valid");
        for rgb in [
            DVec3::new(0.8, 0.2, 0.1),
            DVec3::new(0.001, 0.002, 0.003),
            DVec3::new(0.3, 0.9, 0.5),
        ] {
            let back = conversion.from_lab(conversion.to_lab(rgb));
            assert!(back.abs_diff_eq(rgb, 1e-9), "{back} vs {rgb}");
        }
    }

    #[test]
    fn test_lch_polar_form() {
        let lch = lab_to_lch(DVec3::new(50.0, 0.0, -20.0));
        assert!((lch.y - 20.0).abs() < EPSILON);
        assert!((lch.z - 270.0).abs() < EPSILON);
        let lab = lch_to_lab(lch);
        assert!(lab.abs_diff_eq(DVec3::new(50.0, 0.0, -20.0), 1e-9));
    }

    #[test]
    fn test_srgb_lab_agrees_with_palette() {
        use palette::white_point::D65 as PaletteD65;
        use palette::{FromColor, Lab, LinSrgb};

        let conversion = Primaries::SRGB.conversion().expect("valid");
        for rgb in [DVec3::new(0.8, 0.2, 0.1), DVec3::new(0.1, 0.5, 0.9)] {
            let ours = conversion.to_lab(rgb);
            let theirs: Lab<PaletteD65, f64> = Lab::from_color(LinSrgb::new(rgb.x, rgb.y, rgb.z));
            assert!((ours.x - theirs.l).abs() < 0.1, "L {} vs {}", ours.x, theirs.l);
            assert!((ours.y - theirs.a).abs() < 0.1, "a {} vs {}", ours.y, theirs.a);
            assert!((ours.z - theirs.b).abs() < 0.1, "b {} vs {}", ours.z, theirs.b);
        }
    }
}
