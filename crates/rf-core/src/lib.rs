//! rf-core: stable foundation for rotorflow.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - layout (canonical tensor axes and their fixed ordering)
//! - error (numeric-domain error)

pub mod error;
pub mod layout;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RfError, RfResult};
pub use layout::{Dim, Layout};
pub use numeric::*;
