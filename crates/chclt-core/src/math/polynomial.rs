//! Closed-form real roots of quadratic and cubic polynomials.
//!
//! Coefficients are ordered highest degree first throughout. Degenerate
//! coefficient sets (leading or constant term of zero) reduce to a smaller
//! polynomial instead of failing, so every solver is total over finite input.
//!
//! # Reference
//! Press et al., *Numerical Recipes* §5.6 — quadratic and cubic equations.

use std::f64::consts::TAU;

/// Real roots of a polynomial of degree ≤ 3, sorted ascending.
///
/// Fixed capacity; never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Roots {
    values: [f64; 3],
    len: usize,
}

impl Roots {
    /// No real roots.
    pub const NONE: Self = Self {
        values: [0.0; 3],
        len: 0,
    };

    fn single(root: f64) -> Self {
        let mut roots = Self::NONE;
        roots.push(root);
        roots
    }

    /// Append a root unless an identical value is already present.
    fn push(&mut self, root: f64) {
        if self.len < self.values.len() && !self.as_slice().contains(&root) {
            self.values[self.len] = root;
            self.len += 1;
        }
    }

    fn sorted(mut self) -> Self {
        self.values[..self.len].sort_by(f64::total_cmp);
        self
    }

    /// The roots as a slice, ascending.
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.len]
    }

    /// Number of distinct real roots found.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.as_slice().iter().copied()
    }
}

/// Evaluate a polynomial at `x` with Horner's scheme.
///
/// `coefficients[0]` multiplies the highest power. An empty slice evaluates to 0.
pub fn evaluate(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Root of `b·x + c = 0`; none when `b` is zero.
fn linear_root(b: f64, c: f64) -> Roots {
    if b == 0.0 {
        Roots::NONE
    } else {
        Roots::single(-c / b)
    }
}

/// Real roots of `a·x² + b·x + c = 0`.
///
/// ```text
/// a = 0 → linear b·x + c
/// c = 0 → x·(a·x + b), zero root factored out
/// else  → q = −½·(b + sign(b)·√(b² − 4ac)),  roots q/a and c/q
/// ```
///
/// Complex roots are not reported.
pub fn quadratic_roots(a: f64, b: f64, c: f64) -> Roots {
    if a == 0.0 {
        return linear_root(b, c);
    }
    if c == 0.0 {
        let mut roots = linear_root(a, b);
        roots.push(0.0);
        return roots.sorted();
    }

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return Roots::NONE;
    }
    if discriminant == 0.0 {
        return Roots::single(-b / (2.0 * a));
    }

    // Cancellation-free form: never subtract two nearly equal magnitudes.
    let q = -0.5 * (b + b.signum() * discriminant.sqrt());
    let mut roots = Roots::single(q / a);
    roots.push(c / q);
    roots.sorted()
}

/// Real roots of `a·x³ + b·x² + c·x + d = 0`.
///
/// After dividing through by `a`, the depressed-cubic quantities are
///
/// ```text
/// P = (B² − 3C) / 9
/// Q = (2B³ − 9BC + 27D) / 54
/// ```
///
/// `Q² − P³ < 0` has three real roots (trigonometric form, via `acos`);
/// otherwise there is one real root (Cardano form).
pub fn cubic_roots(a: f64, b: f64, c: f64, d: f64) -> Roots {
    if a == 0.0 {
        return quadratic_roots(b, c, d);
    }
    if d == 0.0 {
        let mut roots = quadratic_roots(a, b, c);
        roots.push(0.0);
        return roots.sorted();
    }

    let b = b / a;
    let c = c / a;
    let d = d / a;
    let shift = b / 3.0;

    let p = (b * b - 3.0 * c) / 9.0;
    let q = (2.0 * b * b * b - 9.0 * b * c + 27.0 * d) / 54.0;
    let p3 = p * p * p;
    let discriminant = q * q - p3;

    if discriminant < 0.0 {
        // p > 0 here since q² ≥ 0 > q² − p³.
        let theta = (q / p3.sqrt()).clamp(-1.0, 1.0).acos();
        let m = -2.0 * p.sqrt();
        let mut roots = Roots::single(m * (theta / 3.0).cos() - shift);
        roots.push(m * ((theta + TAU) / 3.0).cos() - shift);
        roots.push(m * ((theta - TAU) / 3.0).cos() - shift);
        return roots.sorted();
    }

    let big_a = -q.signum() * (q.abs() + discriminant.sqrt()).cbrt();
    let big_b = if big_a == 0.0 { 0.0 } else { p / big_a };
    let mut roots = Roots::single(big_a + big_b - shift);
    if discriminant == 0.0 && big_a != 0.0 {
        // Repeated root.
        roots.push(-0.5 * (big_a + big_b) - shift);
    }
    roots.sorted()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn assert_roots(roots: Roots, expected: &[f64]) {
        assert_eq!(
            roots.len(),
            expected.len(),
            "root count: got {:?}, expected {expected:?}",
            roots.as_slice()
        );
        for (got, want) in roots.iter().zip(expected) {
            assert!((got - want).abs() < EPSILON, "root {got} vs {want}");
        }
    }

    #[test]
    fn test_evaluate_horner_highest_first() {
        // 2x² − 3x + 1 at x = 2 → 3
        assert!((evaluate(&[2.0, -3.0, 1.0], 2.0) - 3.0).abs() < EPSILON);
        assert_eq!(evaluate(&[], 5.0), 0.0);
        assert_eq!(evaluate(&[7.0], 5.0), 7.0);
    }

    #[test]
    fn test_quadratic_two_roots() {
        assert_roots(quadratic_roots(1.0, -3.0, 2.0), &[1.0, 2.0]);
    }

    #[test]
    fn test_quadratic_no_real_roots() {
        assert!(quadratic_roots(1.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_quadratic_double_root() {
        assert_roots(quadratic_roots(1.0, -2.0, 1.0), &[1.0]);
    }

    #[test]
    fn test_quadratic_degenerate_leading_is_linear() {
        assert_roots(quadratic_roots(0.0, 2.0, -4.0), &[2.0]);
        assert!(quadratic_roots(0.0, 0.0, 1.0).is_empty());
    }

    #[test]
    fn test_quadratic_zero_constant_factors_zero_root() {
        assert_roots(quadratic_roots(1.0, -5.0, 0.0), &[0.0, 5.0]);
        assert_roots(quadratic_roots(3.0, 0.0, 0.0), &[0.0]);
    }

    #[test]
    fn test_cubic_three_roots() {
        assert_roots(cubic_roots(1.0, -6.0, 11.0, -6.0), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_cubic_three_roots_scaled_leading() {
        // 2(x + 1)(x − 0.5)(x − 4)
        assert_roots(cubic_roots(2.0, -7.0, -5.0, 4.0), &[-1.0, 0.5, 4.0]);
    }

    #[test]
    fn test_cubic_single_real_root() {
        assert_roots(cubic_roots(1.0, 0.0, 0.0, -8.0), &[2.0]);
        // (x − 1)(x² + 1)
        assert_roots(cubic_roots(1.0, -1.0, 1.0, -1.0), &[1.0]);
    }

    #[test]
    fn test_cubic_degenerate_leading_delegates_to_quadratic() {
        assert_roots(cubic_roots(0.0, 1.0, -3.0, 2.0), &[1.0, 2.0]);
    }

    #[test]
    fn test_cubic_zero_constant_factors_zero_root() {
        // x(x − 1)(x − 2)
        assert_roots(cubic_roots(1.0, -3.0, 2.0, 0.0), &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_cubic_roots_satisfy_polynomial() {
        let coefficients = [4.607e9, -2.9678e6, -99.11, 0.3127 - 0.244063];
        let roots = cubic_roots(
            coefficients[0],
            coefficients[1],
            coefficients[2],
            coefficients[3],
        );
        assert!(!roots.is_empty());
        for root in roots.iter() {
            let residual = evaluate(&coefficients, root);
            assert!(residual.abs() < 1e-6, "residual {residual} at {root}");
            assert!(root.is_finite());
        }
    }
}
