//! rf-rotor: rotor-averaged deficit evaluation.
//!
//! A deficit model is defined point-wise. This crate turns it into a
//! rotor-effective value by sampling each downstream rotor at the nodes of a
//! quadrature rule and reducing the samples to one value per
//! (downstream, upstream, condition, wind-speed) entry.
//!
//! - [`Field`]: `ndarray` tensor with named axes in a fixed order
//! - [`DeficitArgs`]: named argument bundle checked against [`ArgName`]
//! - [`DeficitModel`]: contract every wrapped model implements
//! - [`RotorAvgModel`]: the wrapper, itself a [`DeficitModel`]
//!
//! # Example
//!
//! ```
//! use rf_core::{Dim, Layout};
//! use rf_rotor::{
//!     ArgName, DeficitArgs, DeficitModel, Field, GaussianDeficit, RotorAvgModel,
//!     SamplingStrategy,
//! };
//!
//! let model = GaussianDeficit::new(0.4, 50.0).unwrap();
//! let avg = RotorAvgModel::new(&model, &SamplingStrategy::GaussGrid { n_x: 4, n_y: 4 }).unwrap();
//!
//! let ijl = Layout::of(&[Dim::Downstream, Dim::Upstream, Dim::Condition]);
//! let args = DeficitArgs::new()
//!     .with(ArgName::DestinationDiameter, Field::filled(ijl, &[1, 1, 1], 80.0).unwrap())
//!     .unwrap()
//!     .with(ArgName::HorizontalCrosswind, Field::scalar(0.0))
//!     .unwrap()
//!     .with(ArgName::HeightOffset, Field::scalar(0.0))
//!     .unwrap()
//!     .with(ArgName::Crosswind, Field::scalar(0.0))
//!     .unwrap();
//!
//! let deficit = avg.calc_deficit(&args).unwrap();
//! let value = deficit.get(&[0, 0, 0]).unwrap();
//! assert!(value > 0.0 && value < 0.4);
//! ```

pub mod analytic;
pub mod args;
pub mod error;
pub mod field;
pub mod geometry;
pub mod model;
pub mod reduction;
pub mod rotor_avg;
pub mod strategy;

// Re-exports
pub use analytic::{GaussianDeficit, LinearDeficit};
pub use args::{ArgList, ArgName, DeficitArgs};
pub use error::{RotorError, RotorResult};
pub use field::Field;
pub use model::DeficitModel;
pub use rotor_avg::RotorAvgModel;
pub use strategy::{Sampling, SamplingStrategy};
