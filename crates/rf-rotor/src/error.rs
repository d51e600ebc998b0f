//! Error types for rotor-averaged evaluation.

use crate::args::ArgName;
use rf_core::layout::Layout;
use rf_quadrature::QuadratureError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a rotor average.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RotorError {
    #[error("Missing argument: {name}")]
    MissingArgument { name: ArgName },

    #[error("Argument {name} has axes '{got}', allowed axes are '{allowed}'")]
    ArgLayout {
        name: ArgName,
        got: Layout,
        allowed: Layout,
    },

    #[error("Layout '{layout}' names {} axes but the data has {ndim}", .layout.ndim())]
    LayoutMismatch { layout: Layout, ndim: usize },

    #[error("Shape mismatch: {what}")]
    ShapeMismatch { what: String },

    #[error("Invalid parameter: {what}")]
    InvalidParameter { what: &'static str },

    #[error("Quadrature error: {0}")]
    Quadrature(#[from] QuadratureError),

    #[error("Deficit model '{model}' failed: {message}")]
    Model { model: String, message: String },
}

pub type RotorResult<T> = Result<T, RotorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RotorError::MissingArgument {
            name: ArgName::HeightOffset,
        };
        assert!(err.to_string().contains("dh"));
    }
}
