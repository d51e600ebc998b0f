//! Error types for quadrature construction.

use thiserror::Error;

/// Errors raised while building a node set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuadratureError {
    #[error("Invalid node count: {what} must be at least 1")]
    InvalidCount { what: &'static str },

    #[error("Length mismatch: {what} has {got} entries, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },

    #[error("Node {index} lies outside the unit disk (r^2 = {r2})")]
    OutsideDisk { index: usize, r2: f64 },

    #[error("Invalid weights: {what}")]
    InvalidWeights { what: &'static str },

    #[error("No nodes left inside the unit disk")]
    Empty,

    #[error("Eigen decomposition failed for Gauss-Legendre order {n}")]
    Decomposition { n: usize },
}

pub type QuadratureResult<T> = Result<T, QuadratureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = QuadratureError::LengthMismatch {
            what: "weights",
            got: 3,
            expected: 4,
        };
        let msg = err.to_string();
        assert!(msg.contains("weights"));
        assert!(msg.contains('3'));
    }
}
