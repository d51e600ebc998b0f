//! Named-axis tensors.
//!
//! A [`Field`] is an `ndarray` array whose axes are tagged by a [`Layout`].
//! Axes are always stored in the canonical order
//! `(downstream, upstream, condition, wind-speed, point)`, so two fields can
//! be combined by aligning their axis names instead of by position. An axis
//! absent from a field behaves like a singleton during broadcasting.

use crate::error::{RotorError, RotorResult};
use ndarray::{Array1, ArrayD, ArrayViewD, Axis, IxDyn, Zip};
use rf_core::{Dim, Layout, Real};

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    layout: Layout,
    data: ArrayD<Real>,
}

impl Field {
    /// Wrap an array. Its number of axes must match the layout.
    pub fn new(layout: Layout, data: ArrayD<Real>) -> RotorResult<Self> {
        if data.ndim() != layout.ndim() {
            return Err(RotorError::LayoutMismatch {
                layout,
                ndim: data.ndim(),
            });
        }
        Ok(Self { layout, data })
    }

    /// Build a field from row-major values.
    pub fn from_shape_vec(layout: Layout, shape: &[usize], values: Vec<Real>) -> RotorResult<Self> {
        let data = ArrayD::from_shape_vec(IxDyn(shape), values).map_err(|e| {
            RotorError::ShapeMismatch {
                what: format!("{layout} field: {e}"),
            }
        })?;
        Self::new(layout, data)
    }

    /// Field with every entry equal to `value`.
    pub fn filled(layout: Layout, shape: &[usize], value: Real) -> RotorResult<Self> {
        Self::new(layout, ArrayD::from_elem(IxDyn(shape), value))
    }

    pub fn scalar(value: Real) -> Self {
        Self {
            layout: Layout::SCALAR,
            data: ArrayD::from_elem(IxDyn(&[]), value),
        }
    }

    /// One-dimensional field along `dim`.
    pub fn along(dim: Dim, values: Vec<Real>) -> Self {
        Self {
            layout: Layout::of(&[dim]),
            data: Array1::from_vec(values).into_dyn(),
        }
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn data(&self) -> &ArrayD<Real> {
        &self.data
    }

    pub fn into_data(self) -> ArrayD<Real> {
        self.data
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Length of `dim`, or `None` if the field does not carry it.
    pub fn len_of(&self, dim: Dim) -> Option<usize> {
        self.layout.position(dim).map(|p| self.data.shape()[p])
    }

    /// Entry at a storage-order index.
    pub fn get(&self, index: &[usize]) -> Option<Real> {
        self.data.get(index).copied()
    }

    /// True when every entry is exactly zero (also true for an empty field).
    pub fn all_zero(&self) -> bool {
        self.data.iter().all(|&v| v == 0.0)
    }

    pub fn map(&self, f: impl Fn(Real) -> Real) -> Self {
        Self {
            layout: self.layout,
            data: self.data.mapv(f),
        }
    }

    /// Same data with a singleton `dim` axis added, if not already present.
    pub fn with_dim(&self, dim: Dim) -> Self {
        if self.layout.contains(dim) {
            return self.clone();
        }
        let layout = self.layout.with(dim);
        let pos = layout.position(dim).unwrap_or(0);
        Self {
            layout,
            data: self.data.clone().insert_axis(Axis(pos)),
        }
    }

    /// Combine two fields entry-wise after aligning their named axes.
    ///
    /// The result carries the union of both layouts. Shared axes must have
    /// equal lengths or length one.
    pub fn zip_with(&self, other: &Field, f: impl Fn(Real, Real) -> Real) -> RotorResult<Field> {
        let layout = self.layout.union(other.layout);
        let a = self.aligned(layout);
        let b = other.aligned(layout);
        let shape = broadcast_shape(a.shape(), b.shape(), layout)?;

        let a = a
            .broadcast(IxDyn(&shape))
            .ok_or_else(|| broadcast_error(layout, self.shape(), &shape))?;
        let b = b
            .broadcast(IxDyn(&shape))
            .ok_or_else(|| broadcast_error(layout, other.shape(), &shape))?;

        let data = Zip::from(&a).and(&b).map_collect(|&x, &y| f(x, y));
        Ok(Field { layout, data })
    }

    pub fn add(&self, other: &Field) -> RotorResult<Field> {
        self.zip_with(other, |a, b| a + b)
    }

    pub fn mul(&self, other: &Field) -> RotorResult<Field> {
        self.zip_with(other, |a, b| a * b)
    }

    /// View with singleton axes inserted for every axis of `target` this
    /// field lacks. `self.layout` must be a subset of `target`.
    fn aligned(&self, target: Layout) -> ArrayViewD<'_, Real> {
        let mut view = self.data.view();
        for (pos, dim) in target.dims().enumerate() {
            if !self.layout.contains(dim) {
                view = view.insert_axis(Axis(pos));
            }
        }
        view
    }
}

fn broadcast_shape(a: &[usize], b: &[usize], layout: Layout) -> RotorResult<Vec<usize>> {
    a.iter()
        .zip(b)
        .zip(layout.dims())
        .map(|((&na, &nb), dim)| match (na, nb) {
            _ if na == nb => Ok(na),
            (1, _) => Ok(nb),
            (_, 1) => Ok(na),
            _ => Err(RotorError::ShapeMismatch {
                what: format!(
                    "axis '{}' has incompatible lengths {na} and {nb}",
                    dim.symbol()
                ),
            }),
        })
        .collect()
}

fn broadcast_error(layout: Layout, from: &[usize], to: &[usize]) -> RotorError {
    RotorError::ShapeMismatch {
        what: format!("cannot broadcast {from:?} to {to:?} on axes '{layout}'"),
    }
}
