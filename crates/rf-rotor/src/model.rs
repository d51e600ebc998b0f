//! Deficit model contract.

use crate::args::{ArgList, DeficitArgs};
use crate::error::RotorResult;
use crate::field::Field;

/// Trait for point-wise deficit models.
///
/// Models are deterministic functions of their arguments. Inputs may carry
/// an extra point axis when the model is evaluated through a rotor average;
/// implementations must broadcast over it rather than assume a fixed shape.
pub trait DeficitModel: Send + Sync {
    /// Model name for debugging and identification.
    fn name(&self) -> &str;

    /// Arguments the model reads, in declaration order.
    fn required_args(&self) -> ArgList;

    /// Compute the deficit for every entry of the batch.
    ///
    /// The result must carry every axis it depends on, including the point
    /// axis when the inputs have one.
    fn calc_deficit(&self, args: &DeficitArgs) -> RotorResult<Field>;

    /// Optional hook for caching layout-dependent intermediate terms.
    ///
    /// Default implementation does nothing.
    fn calc_layout_terms(&self, _args: &DeficitArgs) -> RotorResult<()> {
        Ok(())
    }
}
