//! rf-quadrature: sample-point rules on the unit disk.
//!
//! Provides the node sets used to sample a downstream rotor:
//! - regular n×n grids filtered to the disk (uniform mean)
//! - tensor-product Gauss-Legendre grids filtered to the disk
//! - polar Gauss-Legendre rules and explicit polar/Cartesian node lists
//!
//! All node coordinates are normalised by the rotor radius and lie strictly
//! inside the unit disk. Weights, when present, sum to one.
//!
//! # Example
//!
//! ```
//! use rf_quadrature::NodeSet;
//!
//! let nodes = NodeSet::gauss_grid(4, 4).unwrap();
//! assert!(nodes.len() < 16);
//! let sum: f64 = nodes.weights().unwrap().iter().sum();
//! assert!((sum - 1.0).abs() < 1e-10);
//! ```

pub mod error;
pub mod legendre;
pub mod nodes;
pub mod rules;

pub use error::{QuadratureError, QuadratureResult};
pub use legendre::gauss_legendre;
pub use nodes::NodeSet;
pub use rules::{gauss_quadrature, polar_gauss_quadrature, regular_grid};
