//! Rotor sampling geometry.
//!
//! Moves the evaluation point of every (downstream, upstream, condition)
//! entry from the rotor centre to each quadrature node:
//!
//! ```text
//! hcw_p = hcw + (D_dst / 2) * x_p
//! dh_p  = dh  + (D_dst / 2) * y_p
//! ```
//!
//! The result carries a trailing point axis.

use crate::args::{ArgName, DeficitArgs};
use crate::error::RotorResult;
use crate::field::Field;
use rf_core::Dim;
use rf_quadrature::NodeSet;

/// Expand `args` over the nodes of `nodes`.
///
/// When `with_crosswind` is set the total cross-wind distance is recomputed
/// from the expanded offsets, since it differs per sample point. Every other
/// argument, the destination diameter included, gets a singleton point axis.
pub fn expand(
    args: &DeficitArgs,
    nodes: &NodeSet,
    with_crosswind: bool,
) -> RotorResult<DeficitArgs> {
    let d_dst = args.get(ArgName::DestinationDiameter)?;
    let hcw = args.get(ArgName::HorizontalCrosswind)?;
    let dh = args.get(ArgName::HeightOffset)?;

    let radius = d_dst.map(|d| d / 2.0);
    let nodes_x = Field::along(Dim::Point, nodes.x().to_vec());
    let nodes_y = Field::along(Dim::Point, nodes.y().to_vec());

    let hcw_p = hcw.add(&radius.mul(&nodes_x)?)?;
    let dh_p = dh.add(&radius.mul(&nodes_y)?)?;

    let mut expanded = DeficitArgs::new();
    if with_crosswind {
        let cw_p = hcw_p.zip_with(&dh_p, f64::hypot)?;
        expanded.insert(ArgName::Crosswind, cw_p)?;
    }
    expanded.insert(ArgName::HorizontalCrosswind, hcw_p)?;
    expanded.insert(ArgName::HeightOffset, dh_p)?;

    for (name, field) in args.iter() {
        if !expanded.contains(name) {
            expanded.insert(name, field.with_dim(Dim::Point))?;
        }
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RotorError;
    use rf_core::Layout;

    fn ijl() -> Layout {
        Layout::of(&[Dim::Downstream, Dim::Upstream, Dim::Condition])
    }

    fn ijlk() -> Layout {
        ijl().with(Dim::WindSpeed)
    }

    fn two_rotor_args() -> DeficitArgs {
        // Two downstream rotors (D = 0 and D = 100), one source, one direction,
        // two wind speeds.
        DeficitArgs::new()
            .with(
                ArgName::DestinationDiameter,
                Field::from_shape_vec(ijl(), &[2, 1, 1], vec![0.0, 100.0]).unwrap(),
            )
            .unwrap()
            .with(
                ArgName::HorizontalCrosswind,
                Field::from_shape_vec(ijlk(), &[2, 1, 1, 2], vec![5.0, 5.0, -5.0, -5.0]).unwrap(),
            )
            .unwrap()
            .with(
                ArgName::HeightOffset,
                Field::from_shape_vec(ijl(), &[2, 1, 1], vec![0.0, 10.0]).unwrap(),
            )
            .unwrap()
            .with(
                ArgName::WindSpeed,
                Field::from_shape_vec(
                    Layout::of(&[Dim::Upstream, Dim::Condition, Dim::WindSpeed]),
                    &[1, 1, 2],
                    vec![8.0, 10.0],
                )
                .unwrap(),
            )
            .unwrap()
    }

    #[test]
    fn offsets_scale_with_radius() {
        let nodes = NodeSet::grid(vec![-0.5, 0.5], vec![0.0, 0.25], None).unwrap();
        let out = expand(&two_rotor_args(), &nodes, false).unwrap();

        let hcw = out.get(ArgName::HorizontalCrosswind).unwrap();
        assert_eq!(hcw.layout(), ijlk().with(Dim::Point));
        assert_eq!(hcw.shape(), &[2, 1, 1, 2, 2]);
        // Zero-diameter rotor keeps its centre offset.
        assert_eq!(hcw.get(&[0, 0, 0, 0, 0]), Some(5.0));
        assert_eq!(hcw.get(&[0, 0, 0, 1, 1]), Some(5.0));
        // R = 50: -5 + 50 * -0.5 and -5 + 50 * 0.5
        assert_eq!(hcw.get(&[1, 0, 0, 0, 0]), Some(-30.0));
        assert_eq!(hcw.get(&[1, 0, 0, 1, 1]), Some(20.0));

        let dh = out.get(ArgName::HeightOffset).unwrap();
        assert_eq!(dh.layout(), ijl().with(Dim::Point));
        assert_eq!(dh.get(&[1, 0, 0, 1]), Some(22.5));
        assert!(!out.contains(ArgName::Crosswind));
    }

    #[test]
    fn crosswind_recomputed_per_point() {
        let nodes = NodeSet::grid(vec![0.6, 0.0], vec![0.0, 0.8], None).unwrap();
        let args = DeficitArgs::new()
            .with(ArgName::DestinationDiameter, Field::scalar(10.0))
            .unwrap()
            .with(ArgName::HorizontalCrosswind, Field::scalar(0.0))
            .unwrap()
            .with(ArgName::HeightOffset, Field::scalar(0.0))
            .unwrap()
            // Stale centre value must not leak through.
            .with(ArgName::Crosswind, Field::scalar(123.0))
            .unwrap();
        let out = expand(&args, &nodes, true).unwrap();
        let cw = out.get(ArgName::Crosswind).unwrap();
        assert_eq!(cw.shape(), &[2]);
        assert_eq!(cw.get(&[0]), Some(3.0));
        assert_eq!(cw.get(&[1]), Some(4.0));
    }

    #[test]
    fn other_args_get_singleton_point_axis() {
        let nodes = NodeSet::equal_grid(3).unwrap();
        let out = expand(&two_rotor_args(), &nodes, false).unwrap();
        let ws = out.get(ArgName::WindSpeed).unwrap();
        assert_eq!(ws.shape(), &[1, 1, 2, 1]);
        let d = out.get(ArgName::DestinationDiameter).unwrap();
        assert_eq!(d.shape(), &[2, 1, 1, 1]);
    }

    #[test]
    fn missing_geometry_argument() {
        let args = DeficitArgs::new()
            .with(ArgName::DestinationDiameter, Field::scalar(1.0))
            .unwrap();
        let err = expand(&args, &NodeSet::center(), false).unwrap_err();
        assert_eq!(
            err,
            RotorError::MissingArgument {
                name: ArgName::HorizontalCrosswind
            }
        );
    }

    #[test]
    fn mismatched_batch_sizes_rejected() {
        let args = DeficitArgs::new()
            .with(
                ArgName::DestinationDiameter,
                Field::from_shape_vec(ijl(), &[3, 1, 1], vec![1.0; 3]).unwrap(),
            )
            .unwrap()
            .with(
                ArgName::HorizontalCrosswind,
                Field::from_shape_vec(ijlk(), &[2, 1, 1, 1], vec![0.0; 2]).unwrap(),
            )
            .unwrap()
            .with(ArgName::HeightOffset, Field::scalar(0.0))
            .unwrap();
        let err = expand(&args, &NodeSet::center(), false).unwrap_err();
        assert!(matches!(err, RotorError::ShapeMismatch { .. }));
    }
}
