//! Turn a case file into strategy, model and argument tensors.

use rf_core::{Dim, Layout, Real};
use rf_project::{ModelDef, RotorAvgDef, RotorDef};
use rf_rotor::{
    ArgName, DeficitArgs, DeficitModel, Field, GaussianDeficit, LinearDeficit, RotorResult,
    SamplingStrategy,
};

pub fn strategy(def: &RotorAvgDef) -> SamplingStrategy {
    match def {
        RotorAvgDef::RotorCenter => SamplingStrategy::RotorCenter,
        RotorAvgDef::EqualGrid { n } => SamplingStrategy::EqualGrid { n: *n },
        RotorAvgDef::GaussGrid { n_x, n_y } => SamplingStrategy::GaussGrid {
            n_x: *n_x,
            n_y: *n_y,
        },
        RotorAvgDef::PolarGauss { n_r, n_theta } => SamplingStrategy::PolarGauss {
            n_r: *n_r,
            n_theta: *n_theta,
        },
        RotorAvgDef::Polar { r, theta, weights } => SamplingStrategy::Polar {
            r: r.clone(),
            theta: theta.clone(),
            weights: weights.clone(),
        },
        RotorAvgDef::Grid { x, y, weights } => SamplingStrategy::Grid {
            x: x.clone(),
            y: y.clone(),
            weights: weights.clone(),
        },
    }
}

pub fn model(def: &ModelDef) -> RotorResult<Box<dyn DeficitModel>> {
    let model: Box<dyn DeficitModel> = match def {
        ModelDef::Gaussian { amplitude, sigma } => {
            Box::new(GaussianDeficit::new(*amplitude, *sigma)?)
        }
        ModelDef::Linear => Box::new(LinearDeficit),
    };
    Ok(model)
}

/// One downstream entry per rotor, a single source, condition and speed.
pub fn rotor_args(rotors: &[RotorDef]) -> RotorResult<DeficitArgs> {
    let n = rotors.len();
    let ijl = Layout::of(&[Dim::Downstream, Dim::Upstream, Dim::Condition]);
    let ijlk = ijl.with(Dim::WindSpeed);

    let column = |f: fn(&RotorDef) -> Real| -> Vec<Real> { rotors.iter().map(f).collect() };
    let cw = rotors.iter().map(|r| r.hcw.hypot(r.dh)).collect();

    DeficitArgs::new()
        .with(
            ArgName::DestinationDiameter,
            Field::from_shape_vec(ijl, &[n, 1, 1], column(|r| r.diameter))?,
        )?
        .with(
            ArgName::HorizontalCrosswind,
            Field::from_shape_vec(ijlk, &[n, 1, 1, 1], column(|r| r.hcw))?,
        )?
        .with(
            ArgName::HeightOffset,
            Field::from_shape_vec(ijl, &[n, 1, 1], column(|r| r.dh))?,
        )?
        .with(
            ArgName::Crosswind,
            Field::from_shape_vec(ijlk, &[n, 1, 1, 1], cw)?,
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotor_args_cover_every_geometry_argument() {
        let rotors = vec![
            RotorDef {
                diameter: 80.0,
                hcw: 3.0,
                dh: 4.0,
            },
            RotorDef {
                diameter: 0.0,
                hcw: 0.0,
                dh: 0.0,
            },
        ];
        let args = rotor_args(&rotors).unwrap();
        assert_eq!(args.len(), 4);
        let cw = args.get(ArgName::Crosswind).unwrap();
        assert_eq!(cw.get(&[0, 0, 0, 0]), Some(5.0));
        let d = args.get(ArgName::DestinationDiameter).unwrap();
        assert_eq!(d.shape(), &[2, 1, 1]);
    }

    #[test]
    fn strategy_mapping_keeps_parameters() {
        let s = strategy(&RotorAvgDef::GaussGrid { n_x: 3, n_y: 5 });
        assert_eq!(s, SamplingStrategy::GaussGrid { n_x: 3, n_y: 5 });
        assert_eq!(strategy(&RotorAvgDef::RotorCenter), SamplingStrategy::RotorCenter);
    }

    #[test]
    fn model_parameters_validated() {
        assert!(model(&ModelDef::Gaussian {
            amplitude: 1.0,
            sigma: -1.0
        })
        .is_err());
        assert_eq!(model(&ModelDef::Linear).unwrap().name(), "linear");
    }
}
