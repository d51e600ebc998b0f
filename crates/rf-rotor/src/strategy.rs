//! Sampling strategies.
//!
//! [`SamplingStrategy`] is the construction-time configuration;
//! [`Sampling`] is the compiled form held by a rotor average model.

use crate::args::{ArgName, DeficitArgs};
use crate::error::RotorResult;
use crate::field::Field;
use crate::geometry;
use crate::reduction;
use rf_core::Real;
use rf_quadrature::NodeSet;
use std::borrow::Cow;

const CENTER_ARGS: &[ArgName] = &[ArgName::DestinationDiameter];

const GRID_ARGS: &[ArgName] = &[
    ArgName::HorizontalCrosswind,
    ArgName::HeightOffset,
    ArgName::DestinationDiameter,
];

/// How the downstream rotor is sampled.
#[derive(Debug, Clone, PartialEq)]
pub enum SamplingStrategy {
    /// Evaluate at the rotor centre only.
    RotorCenter,
    /// Regular `n × n` grid, unweighted mean.
    EqualGrid { n: usize },
    /// Tensor-product Gauss-Legendre grid.
    GaussGrid { n_x: usize, n_y: usize },
    /// Polar Gauss-Legendre rule.
    PolarGauss { n_r: usize, n_theta: usize },
    /// Caller-supplied polar nodes.
    Polar {
        r: Vec<Real>,
        theta: Vec<Real>,
        weights: Vec<Real>,
    },
    /// Caller-supplied Cartesian nodes.
    Grid {
        x: Vec<Real>,
        y: Vec<Real>,
        weights: Option<Vec<Real>>,
    },
}

impl SamplingStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            SamplingStrategy::RotorCenter => "rotor_center",
            SamplingStrategy::EqualGrid { .. } => "equal_grid",
            SamplingStrategy::GaussGrid { .. } => "gauss_grid",
            SamplingStrategy::PolarGauss { .. } => "polar_gauss",
            SamplingStrategy::Polar { .. } => "polar",
            SamplingStrategy::Grid { .. } => "grid",
        }
    }

    /// Generate the node set. Fails on an invalid configuration.
    pub fn build(&self) -> RotorResult<Sampling> {
        let nodes = match self {
            SamplingStrategy::RotorCenter => return Ok(Sampling::Center),
            SamplingStrategy::EqualGrid { n } => NodeSet::equal_grid(*n)?,
            SamplingStrategy::GaussGrid { n_x, n_y } => NodeSet::gauss_grid(*n_x, *n_y)?,
            SamplingStrategy::PolarGauss { n_r, n_theta } => NodeSet::polar_gauss(*n_r, *n_theta)?,
            SamplingStrategy::Polar { r, theta, weights } => NodeSet::polar(r, theta, weights)?,
            SamplingStrategy::Grid { x, y, weights } => {
                NodeSet::grid(x.clone(), y.clone(), weights.clone())?
            }
        };
        Ok(Sampling::Nodes(nodes))
    }
}

/// Compiled sampling geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Sampling {
    /// Rotor centre: no expansion, no reduction.
    Center,
    /// Sample at every node and reduce.
    Nodes(NodeSet),
}

impl Sampling {
    /// Arguments the sampling itself needs from the caller.
    pub fn geometry_args(&self) -> &'static [ArgName] {
        match self {
            Sampling::Center => CENTER_ARGS,
            Sampling::Nodes(_) => GRID_ARGS,
        }
    }

    pub fn nodes(&self) -> Option<&NodeSet> {
        match self {
            Sampling::Center => None,
            Sampling::Nodes(nodes) => Some(nodes),
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes().map_or(1, NodeSet::len)
    }

    /// Add the point axis to `args`. The centre strategy borrows them as is.
    pub fn expand<'a>(
        &self,
        args: &'a DeficitArgs,
        with_crosswind: bool,
    ) -> RotorResult<Cow<'a, DeficitArgs>> {
        match self {
            Sampling::Center => Ok(Cow::Borrowed(args)),
            Sampling::Nodes(nodes) => Ok(Cow::Owned(geometry::expand(
                args,
                nodes,
                with_crosswind,
            )?)),
        }
    }

    /// Collapse the point axis added by [`Sampling::expand`].
    pub fn reduce(&self, deficit: Field) -> RotorResult<Field> {
        match self {
            Sampling::Center => Ok(deficit),
            Sampling::Nodes(nodes) => reduction::reduce(deficit, nodes.weights()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RotorError;
    use rf_quadrature::QuadratureError;

    #[test]
    fn strategies_build_node_sets() {
        assert_eq!(SamplingStrategy::RotorCenter.build().unwrap(), Sampling::Center);
        let gauss = SamplingStrategy::GaussGrid { n_x: 4, n_y: 4 }.build().unwrap();
        assert_eq!(gauss.node_count(), 12);
        assert!(gauss.nodes().unwrap().weights().is_some());
        let equal = SamplingStrategy::EqualGrid { n: 3 }.build().unwrap();
        assert!(equal.nodes().unwrap().weights().is_none());
        let polar = SamplingStrategy::PolarGauss { n_r: 2, n_theta: 4 }
            .build()
            .unwrap();
        assert_eq!(polar.node_count(), 8);
    }

    #[test]
    fn invalid_configuration_rejected() {
        let err = SamplingStrategy::EqualGrid { n: 0 }.build().unwrap_err();
        assert!(matches!(
            err,
            RotorError::Quadrature(QuadratureError::InvalidCount { .. })
        ));
        let err = SamplingStrategy::Polar {
            r: vec![0.5, 0.5],
            theta: vec![0.0, 1.0],
            weights: vec![1.0],
        }
        .build()
        .unwrap_err();
        assert!(matches!(
            err,
            RotorError::Quadrature(QuadratureError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn geometry_args_depend_on_strategy() {
        assert_eq!(Sampling::Center.geometry_args(), &[ArgName::DestinationDiameter]);
        let grid = SamplingStrategy::EqualGrid { n: 2 }.build().unwrap();
        assert!(grid.geometry_args().contains(&ArgName::HorizontalCrosswind));
    }

    #[test]
    fn center_expand_borrows() {
        let args = DeficitArgs::new();
        let out = Sampling::Center.expand(&args, true).unwrap();
        assert!(matches!(out, Cow::Borrowed(_)));
    }
}
