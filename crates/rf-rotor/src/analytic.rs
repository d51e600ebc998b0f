//! Closed-form deficit fields.
//!
//! These are not wake models. They give rotor averages with known answers
//! for verification and command-line demonstrations.

use crate::args::{ArgList, ArgName, DeficitArgs};
use crate::error::{RotorError, RotorResult};
use crate::field::Field;
use crate::model::DeficitModel;
use rf_core::Real;

/// `deficit = hcw + dh`.
///
/// Odd in both offsets, so any node set symmetric about the rotor centre
/// averages it to the centre value.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearDeficit;

impl DeficitModel for LinearDeficit {
    fn name(&self) -> &str {
        "linear"
    }

    fn required_args(&self) -> ArgList {
        ArgList::new(&[ArgName::HorizontalCrosswind, ArgName::HeightOffset])
    }

    fn calc_deficit(&self, args: &DeficitArgs) -> RotorResult<Field> {
        let hcw = args.get(ArgName::HorizontalCrosswind)?;
        let dh = args.get(ArgName::HeightOffset)?;
        hcw.add(dh)
    }
}

/// Axisymmetric Gaussian bump: `amplitude * exp(-cw² / (2 σ²))`.
///
/// Strictly decreasing in the cross-wind distance, so widening the rotor
/// can only lower its average.
#[derive(Debug, Clone, Copy)]
pub struct GaussianDeficit {
    amplitude: Real,
    sigma: Real,
}

impl GaussianDeficit {
    pub fn new(amplitude: Real, sigma: Real) -> RotorResult<Self> {
        if !amplitude.is_finite() {
            return Err(RotorError::InvalidParameter {
                what: "gaussian amplitude must be finite",
            });
        }
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(RotorError::InvalidParameter {
                what: "gaussian sigma must be positive",
            });
        }
        Ok(Self { amplitude, sigma })
    }
}

impl DeficitModel for GaussianDeficit {
    fn name(&self) -> &str {
        "gaussian"
    }

    fn required_args(&self) -> ArgList {
        ArgList::new(&[ArgName::Crosswind])
    }

    fn calc_deficit(&self, args: &DeficitArgs) -> RotorResult<Field> {
        let cw = args.get(ArgName::Crosswind)?;
        let two_sigma2 = 2.0 * self.sigma * self.sigma;
        Ok(cw.map(|c| self.amplitude * (-(c * c) / two_sigma2).exp()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gaussian_peak_and_decay() {
        let model = GaussianDeficit::new(0.5, 10.0).unwrap();
        let args = DeficitArgs::new()
            .with(
                ArgName::Crosswind,
                Field::along(rf_core::Dim::Downstream, vec![0.0, 10.0]),
            )
            .unwrap();
        let out = model.calc_deficit(&args).unwrap();
        assert_eq!(out.get(&[0]), Some(0.5));
        let expected = 0.5 * (-0.5_f64).exp();
        assert!((out.get(&[1]).unwrap() - expected).abs() < 1e-15);
    }

    #[test]
    fn gaussian_rejects_bad_parameters() {
        assert!(GaussianDeficit::new(1.0, 0.0).is_err());
        assert!(GaussianDeficit::new(1.0, -3.0).is_err());
        assert!(GaussianDeficit::new(Real::NAN, 1.0).is_err());
    }

    #[test]
    fn linear_needs_both_offsets() {
        let args = DeficitArgs::new()
            .with(ArgName::HorizontalCrosswind, Field::scalar(1.0))
            .unwrap();
        let err = LinearDeficit.calc_deficit(&args).unwrap_err();
        assert_eq!(
            err,
            RotorError::MissingArgument {
                name: ArgName::HeightOffset
            }
        );
    }
}
