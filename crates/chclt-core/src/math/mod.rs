//! Numeric building blocks: polynomial roots and 3x3 matrix helpers.

pub mod matrix;
pub mod polynomial;

pub use matrix::Matrix3x3;
pub use polynomial::Roots;
