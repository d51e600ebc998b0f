//! Raw sampling rules on the square [-1, 1]² and their polar mapping.
//!
//! These functions do no disk filtering; [`crate::NodeSet`] does that.

use crate::error::{QuadratureError, QuadratureResult};
use crate::legendre::gauss_legendre;
use rf_core::Real;
use std::f64::consts::PI;

/// Tensor-product Gauss-Legendre rule on [-1, 1]².
///
/// Points are ordered row-major over y then x. Weights are
/// `w_x * w_y / 4`, so they sum to one over the full square.
pub fn gauss_quadrature(
    n_x: usize,
    n_y: usize,
) -> QuadratureResult<(Vec<Real>, Vec<Real>, Vec<Real>)> {
    let (nodes_x, weights_x) = gauss_legendre(n_x)?;
    let (nodes_y, weights_y) = gauss_legendre(n_y)?;

    let count = n_x * n_y;
    let mut x = Vec::with_capacity(count);
    let mut y = Vec::with_capacity(count);
    let mut w = Vec::with_capacity(count);
    for (yj, wyj) in nodes_y.iter().zip(&weights_y) {
        for (xi, wxi) in nodes_x.iter().zip(&weights_x) {
            x.push(*xi);
            y.push(*yj);
            w.push(wxi * wyj / 4.0);
        }
    }
    Ok((x, y, w))
}

/// Gauss-Legendre rule reparameterised to polar coordinates.
///
/// Returns radius in [0, 1], angle in [0, 2π) and the square-rule weights.
pub fn polar_gauss_quadrature(
    n_r: usize,
    n_theta: usize,
) -> QuadratureResult<(Vec<Real>, Vec<Real>, Vec<Real>)> {
    let (x, y, w) = gauss_quadrature(n_r, n_theta)?;
    let r = x.iter().map(|v| (v + 1.0) / 2.0).collect();
    let theta = y.iter().map(|v| (v + 1.0) * PI).collect();
    Ok((r, theta, w))
}

/// Regular n×n grid of interior points of [-1, 1]².
///
/// Uses the `n` interior values of an `n + 2` point linear spacing, so no
/// point lies on the square boundary.
pub fn regular_grid(n: usize) -> QuadratureResult<(Vec<Real>, Vec<Real>)> {
    if n == 0 {
        return Err(QuadratureError::InvalidCount {
            what: "grid point count",
        });
    }

    // (2i - n - 1) / (n + 1) keeps the axis exactly antisymmetric about zero.
    let denom = (n + 1) as Real;
    let axis: Vec<Real> = (1..=n)
        .map(|i| (2.0 * i as Real - denom) / denom)
        .collect();

    let mut x = Vec::with_capacity(n * n);
    let mut y = Vec::with_capacity(n * n);
    for yj in &axis {
        for xi in &axis {
            x.push(*xi);
            y.push(*yj);
        }
    }
    Ok((x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_core::{Tolerances, compensated_sum, nearly_equal};

    #[test]
    fn square_rule_weights_sum_to_one() {
        let (x, y, w) = gauss_quadrature(3, 4).unwrap();
        assert_eq!(x.len(), 12);
        assert_eq!(y.len(), 12);
        assert!(nearly_equal(
            compensated_sum(&w),
            1.0,
            Tolerances { abs: 1e-12, rel: 1e-12 }
        ));
    }

    #[test]
    fn square_rule_is_row_major_over_y() {
        let (x, y, _) = gauss_quadrature(2, 3).unwrap();
        // First row shares the smallest y.
        assert_eq!(y[0], y[1]);
        assert!(x[0] < x[1]);
        assert!(y[1] < y[2]);
    }

    #[test]
    fn polar_rule_ranges() {
        let (r, theta, w) = polar_gauss_quadrature(3, 5).unwrap();
        assert_eq!(r.len(), 15);
        assert!(r.iter().all(|v| *v > 0.0 && *v < 1.0));
        assert!(theta.iter().all(|v| *v > 0.0 && *v < 2.0 * PI));
        assert_eq!(w.len(), 15);
    }

    #[test]
    fn regular_grid_excludes_boundary() {
        let (x, y) = regular_grid(3).unwrap();
        assert_eq!(x.len(), 9);
        assert_eq!(&x[..3], &[-0.5, 0.0, 0.5]);
        assert_eq!(y[3], 0.0);
        assert!(regular_grid(0).is_err());
    }

    #[test]
    fn regular_grid_is_antisymmetric() {
        for n in 1..15 {
            let (x, _) = regular_grid(n).unwrap();
            for i in 0..n {
                assert_eq!(x[i], -x[n - 1 - i]);
            }
        }
    }

    #[test]
    fn single_point_grid_is_centre() {
        let (x, y) = regular_grid(1).unwrap();
        assert_eq!(x, vec![0.0]);
        assert_eq!(y, vec![0.0]);
    }
}
