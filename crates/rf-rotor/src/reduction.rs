//! Weighted reduction over the point axis.

use crate::error::{RotorError, RotorResult};
use crate::field::Field;
use ndarray::Axis;
use rf_core::{Dim, Real};

/// Collapse the point axis of `field`.
///
/// Without weights this is the arithmetic mean; with weights it is the dot
/// product with `weights`, which the node set has already normalised. A
/// point axis of length one collapses to its only value and a field without
/// a point axis is returned as is.
pub fn reduce(field: Field, weights: Option<&[Real]>) -> RotorResult<Field> {
    let layout = field.layout();
    let Some(pos) = layout.position(Dim::Point) else {
        return Ok(field);
    };
    let axis = Axis(pos);
    let n = field.shape()[pos];
    let data = field.into_data();
    let reduced_layout = layout.without(Dim::Point);

    match (n, weights) {
        (0, _) => Err(RotorError::ShapeMismatch {
            what: "empty point axis".to_string(),
        }),
        (1, _) => Field::new(reduced_layout, data.index_axis_move(axis, 0)),
        (_, None) => Field::new(
            reduced_layout,
            data.map_axis(axis, |lane| running_mean(lane.iter().copied())),
        ),
        (_, Some(w)) if w.len() != n => Err(RotorError::ShapeMismatch {
            what: format!("point axis has {n} entries but {} weights", w.len()),
        }),
        (_, Some(w)) => Field::new(
            reduced_layout,
            data.map_axis(axis, |lane| lane.iter().zip(w).map(|(v, w)| v * w).sum::<Real>()),
        ),
    }
}

// Incremental form: identical inputs reduce to exactly that value.
fn running_mean(values: impl Iterator<Item = Real>) -> Real {
    let mut mean = 0.0;
    for (k, v) in values.enumerate() {
        mean += (v - mean) / (k + 1) as Real;
    }
    mean
}
