//! 3x3 matrices for linear color space conversions.
//!
//! Matrices are column-major `glam::DMat3`; `m * v` applies the matrix to an
//! RGB or XYZ column vector.

use glam::DMat3;

/// A 3x3 real matrix stored as three column vectors.
pub type Matrix3x3 = DMat3;

/// Determinants at or below this magnitude are treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-12;

/// Invert `matrix` via its adjugate and determinant.
///
/// Returns `None` when the matrix is singular (or contains non-finite
/// values). Standard primaries never hit this path.
pub fn try_inverse(matrix: &Matrix3x3) -> Option<Matrix3x3> {
    let determinant = matrix.determinant();
    if !determinant.is_finite() || determinant.abs() <= SINGULAR_EPSILON {
        return None;
    }
    Some(matrix.inverse())
}
