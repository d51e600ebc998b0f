//! Rotor-averaging wrapper around a deficit model.

use crate::args::{ArgList, ArgName, DeficitArgs};
use crate::error::RotorResult;
use crate::field::Field;
use crate::model::DeficitModel;
use crate::strategy::{Sampling, SamplingStrategy};
use tracing::{debug, trace};

/// Wraps a [`DeficitModel`] and averages it over the downstream rotor.
///
/// Each call adds a point axis covering the destination rotors, evaluates
/// the wrapped model once over all points and reduces the point axis with
/// the node weights. The wrapper is itself a [`DeficitModel`], so it can be
/// handed to anything that expects a plain model.
///
/// The node set and the merged argument list are fixed at construction.
pub struct RotorAvgModel<'m> {
    deficit_model: &'m dyn DeficitModel,
    sampling: Sampling,
    args: ArgList,
    with_crosswind: bool,
    name: String,
}

impl<'m> RotorAvgModel<'m> {
    /// Wrap `deficit_model` with the given sampling strategy.
    pub fn new(
        deficit_model: &'m dyn DeficitModel,
        strategy: &SamplingStrategy,
    ) -> RotorResult<Self> {
        let sampling = strategy.build()?;
        let args = deficit_model
            .required_args()
            .merged(sampling.geometry_args());
        let with_crosswind = args.contains(ArgName::Crosswind);
        let name = format!("{}[{}]", deficit_model.name(), strategy.name());

        debug!(
            model = deficit_model.name(),
            strategy = strategy.name(),
            nodes = sampling.node_count(),
            args = args.len(),
            "built rotor average model"
        );

        Ok(Self {
            deficit_model,
            sampling,
            args,
            with_crosswind,
            name,
        })
    }

    /// Rotor-centre wrapper; never fails.
    pub fn rotor_center(deficit_model: &'m dyn DeficitModel) -> Self {
        let sampling = Sampling::Center;
        let args = deficit_model
            .required_args()
            .merged(sampling.geometry_args());
        Self {
            deficit_model,
            with_crosswind: args.contains(ArgName::Crosswind),
            name: format!("{}[rotor_center]", deficit_model.name()),
            sampling,
            args,
        }
    }

    pub fn deficit_model(&self) -> &dyn DeficitModel {
        self.deficit_model
    }

    pub fn sampling(&self) -> &Sampling {
        &self.sampling
    }
}

impl DeficitModel for RotorAvgModel<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn required_args(&self) -> ArgList {
        self.args.clone()
    }

    /// Rotor-averaged deficit.
    ///
    /// If every destination diameter in the batch is exactly zero the
    /// wrapped model is called directly on `args`. Otherwise the whole
    /// batch is sampled, even entries whose diameter is zero.
    fn calc_deficit(&self, args: &DeficitArgs) -> RotorResult<Field> {
        args.require(&self.args)?;

        if args.get(ArgName::DestinationDiameter)?.all_zero() {
            trace!(model = %self.name, "zero-diameter batch, evaluating rotor centre");
            return self.deficit_model.calc_deficit(args);
        }

        trace!(
            model = %self.name,
            nodes = self.sampling.node_count(),
            "sampling destination rotors"
        );
        let expanded = self.sampling.expand(args, self.with_crosswind)?;
        let deficit = self.deficit_model.calc_deficit(&expanded)?;
        self.sampling.reduce(deficit)
    }

    fn calc_layout_terms(&self, args: &DeficitArgs) -> RotorResult<()> {
        let expanded = self.sampling.expand(args, self.with_crosswind)?;
        self.deficit_model.calc_layout_terms(&expanded)
    }
}
