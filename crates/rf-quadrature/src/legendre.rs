//! One-dimensional Gauss-Legendre rule on [-1, 1].
//!
//! Nodes start from the Golub-Welsch eigenvalues of the Jacobi matrix and
//! are then polished with Newton steps on the Legendre recurrence. The
//! returned rule is mirrored so that `x[i] == -x[n - 1 - i]` and
//! `w[i] == w[n - 1 - i]` hold exactly.

use crate::error::{QuadratureError, QuadratureResult};
use nalgebra::{DMatrix, SymmetricEigen};
use rf_core::Real;

const NEWTON_MAX_ITERS: usize = 8;
const NEWTON_TOL: Real = 1e-15;

/// Nodes (ascending) and weights of the `n`-point Gauss-Legendre rule.
///
/// Weights sum to 2, the length of the interval.
pub fn gauss_legendre(n: usize) -> QuadratureResult<(Vec<Real>, Vec<Real>)> {
    if n == 0 {
        return Err(QuadratureError::InvalidCount {
            what: "gauss-legendre order",
        });
    }

    let mut jacobi = DMatrix::<Real>::zeros(n, n);
    for k in 1..n {
        let kf = k as Real;
        let b = kf / (4.0 * kf * kf - 1.0).sqrt();
        jacobi[(k - 1, k)] = b;
        jacobi[(k, k - 1)] = b;
    }

    let eigen = SymmetricEigen::try_new(jacobi, Real::EPSILON, 0)
        .ok_or(QuadratureError::Decomposition { n })?;
    let mut start: Vec<Real> = eigen.eigenvalues.iter().copied().collect();
    if start.iter().any(|x| !x.is_finite()) {
        return Err(QuadratureError::Decomposition { n });
    }
    start.sort_by(|a, b| a.total_cmp(b));

    let mut nodes = vec![0.0; n];
    let mut weights = vec![0.0; n];
    let half = n / 2;
    for i in 0..half {
        // Average the two mirrored eigenvalues before polishing.
        let guess = 0.5 * (start[i] - start[n - 1 - i]);
        let x = polish(n, guess);
        let (_, dp) = legendre(n, x);
        let w = 2.0 / ((1.0 - x * x) * dp * dp);
        nodes[i] = x;
        nodes[n - 1 - i] = -x;
        weights[i] = w;
        weights[n - 1 - i] = w;
    }
    if n % 2 == 1 {
        let (_, dp) = legendre(n, 0.0);
        nodes[half] = 0.0;
        weights[half] = 2.0 / (dp * dp);
    }

    Ok((nodes, weights))
}

fn polish(n: usize, mut x: Real) -> Real {
    for _ in 0..NEWTON_MAX_ITERS {
        let (p, dp) = legendre(n, x);
        let dx = p / dp;
        x -= dx;
        if dx.abs() < NEWTON_TOL {
            break;
        }
    }
    x
}

/// Evaluate `P_n(x)` and `P_n'(x)` for `n >= 1`, `|x| < 1`.
fn legendre(n: usize, x: Real) -> (Real, Real) {
    let mut p_prev = 1.0;
    let mut p = x;
    for k in 2..=n {
        let kf = k as Real;
        let next = ((2.0 * kf - 1.0) * x * p - (kf - 1.0) * p_prev) / kf;
        p_prev = p;
        p = next;
    }
    let dp = n as Real * (x * p - p_prev) / (x * x - 1.0);
    (p, dp)
}
