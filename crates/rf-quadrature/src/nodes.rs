//! Normalised rotor node sets.

use crate::error::{QuadratureError, QuadratureResult};
use crate::rules::{gauss_quadrature, polar_gauss_quadrature, regular_grid};
use rf_core::{Real, compensated_sum};
use std::f64::consts::FRAC_PI_2;

/// Sample points on the unit disk, in units of the rotor radius.
///
/// `x` is the horizontal cross-wind coordinate and `y` the vertical one.
/// Every node satisfies `x² + y² < 1`. When `weights` is `None` the
/// rotor average is the plain mean over the nodes; otherwise it is the
/// dot product with the weights, which sum to one.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSet {
    x: Vec<Real>,
    y: Vec<Real>,
    weights: Option<Vec<Real>>,
}

impl NodeSet {
    /// The single rotor-centre node.
    pub fn center() -> Self {
        Self {
            x: vec![0.0],
            y: vec![0.0],
            weights: Some(vec![1.0]),
        }
    }

    /// Regular `n × n` grid filtered to the disk, averaged without weights.
    pub fn equal_grid(n: usize) -> QuadratureResult<Self> {
        let (x, y) = regular_grid(n)?;
        let (x, y, _) = filter_disk(x, y, None);
        Self::checked(x, y, None)
    }

    /// Tensor-product Gauss-Legendre grid filtered to the disk.
    ///
    /// The square-rule weights of the surviving nodes are renormalised to
    /// sum to one.
    pub fn gauss_grid(n_x: usize, n_y: usize) -> QuadratureResult<Self> {
        let (x, y, w) = gauss_quadrature(n_x, n_y)?;
        let (x, y, w) = filter_disk(x, y, Some(w));
        let w = w.map(|w| normalize(&w)).transpose()?;
        Self::checked(x, y, w)
    }

    /// Polar Gauss-Legendre rule with `n_r` radial and `n_theta` angular
    /// points.
    ///
    /// The square-rule weights are kept as they are and renormalised over
    /// the nodes that survive the disk filter.
    pub fn polar_gauss(n_r: usize, n_theta: usize) -> QuadratureResult<Self> {
        let (r, theta, w) = polar_gauss_quadrature(n_r, n_theta)?;
        let (x, y) = polar_to_cartesian(&r, &theta);
        let (x, y, w) = filter_disk(x, y, Some(w));
        let w = w.map(|w| normalize(&w)).transpose()?;
        Self::checked(x, y, w)
    }

    /// Explicit polar nodes.
    ///
    /// Angles are measured clockwise starting from straight down, matching
    /// the sign convention of the sampling geometry. Weights are
    /// normalised to sum to one; individual weights may be negative.
    pub fn polar(r: &[Real], theta: &[Real], weights: &[Real]) -> QuadratureResult<Self> {
        check_len("theta", theta.len(), r.len())?;
        check_len("weights", weights.len(), r.len())?;
        let (x, y) = polar_to_cartesian(r, theta);
        check_inside(&x, &y)?;
        let w = normalize(weights)?;
        Self::checked(x, y, Some(w))
    }

    /// Explicit Cartesian nodes with optional weights.
    pub fn grid(x: Vec<Real>, y: Vec<Real>, weights: Option<Vec<Real>>) -> QuadratureResult<Self> {
        check_len("y", y.len(), x.len())?;
        if let Some(w) = &weights {
            check_len("weights", w.len(), x.len())?;
        }
        check_inside(&x, &y)?;
        let weights = weights.map(|w| normalize(&w)).transpose()?;
        Self::checked(x, y, weights)
    }

    fn checked(x: Vec<Real>, y: Vec<Real>, weights: Option<Vec<Real>>) -> QuadratureResult<Self> {
        if x.is_empty() {
            return Err(QuadratureError::Empty);
        }
        Ok(Self { x, y, weights })
    }

    pub fn x(&self) -> &[Real] {
        &self.x
    }

    pub fn y(&self) -> &[Real] {
        &self.y
    }

    pub fn weights(&self) -> Option<&[Real]> {
        self.weights.as_deref()
    }

    // Never zero: construction rejects empty sets.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Iterate `(x, y, weight)`; the weight is `1 / len` for unweighted sets.
    pub fn iter(&self) -> impl Iterator<Item = (Real, Real, Real)> + '_ {
        let uniform = 1.0 / self.len() as Real;
        self.x.iter().zip(&self.y).enumerate().map(move |(i, (x, y))| {
            let w = self.weights.as_ref().map_or(uniform, |w| w[i]);
            (*x, *y, w)
        })
    }
}

fn polar_to_cartesian(r: &[Real], theta: &[Real]) -> (Vec<Real>, Vec<Real>) {
    r.iter()
        .zip(theta)
        .map(|(r, t)| {
            let angle = -t - FRAC_PI_2;
            (r * angle.cos(), r * angle.sin())
        })
        .unzip()
}

fn filter_disk(
    x: Vec<Real>,
    y: Vec<Real>,
    w: Option<Vec<Real>>,
) -> (Vec<Real>, Vec<Real>, Option<Vec<Real>>) {
    let keep: Vec<bool> = x.iter().zip(&y).map(|(x, y)| x * x + y * y < 1.0).collect();
    let pick = |v: Vec<Real>| -> Vec<Real> {
        v.into_iter()
            .zip(&keep)
            .filter_map(|(v, k)| k.then_some(v))
            .collect()
    };
    (pick(x), pick(y), w.map(pick))
}

fn check_inside(x: &[Real], y: &[Real]) -> QuadratureResult<()> {
    for (index, (x, y)) in x.iter().zip(y).enumerate() {
        let r2 = x * x + y * y;
        if !(r2 < 1.0) {
            return Err(QuadratureError::OutsideDisk { index, r2 });
        }
    }
    Ok(())
}

fn check_len(what: &'static str, got: usize, expected: usize) -> QuadratureResult<()> {
    if got != expected {
        return Err(QuadratureError::LengthMismatch {
            what,
            got,
            expected,
        });
    }
    Ok(())
}

fn normalize(w: &[Real]) -> QuadratureResult<Vec<Real>> {
    if w.iter().any(|v| !v.is_finite()) {
        return Err(QuadratureError::InvalidWeights {
            what: "non-finite weight",
        });
    }
    let sum = compensated_sum(w);
    if sum == 0.0 || !sum.is_finite() {
        return Err(QuadratureError::InvalidWeights {
            what: "weights must have a non-zero sum",
        });
    }
    Ok(w.iter().map(|v| v / sum).collect())
}
