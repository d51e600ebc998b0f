//! Canonical tensor axes.
//!
//! Every batched quantity in rotorflow is stored with its axes in one fixed
//! order: downstream entity, upstream entity, condition (wind direction),
//! wind-speed bin, sample point. A [`Layout`] records which of those axes a
//! tensor carries; axes it does not carry are implicitly of size one.

use core::fmt;

/// One of the canonical tensor axes, in storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dim {
    /// Downstream (destination) entity whose rotor is sampled.
    Downstream,
    /// Upstream (source) entity producing the deficit.
    Upstream,
    /// Flow condition, typically the wind direction.
    Condition,
    /// Wind-speed bin.
    WindSpeed,
    /// Sample point on the downstream rotor.
    Point,
}

impl Dim {
    /// All axes in storage order.
    pub const ALL: [Dim; 5] = [
        Dim::Downstream,
        Dim::Upstream,
        Dim::Condition,
        Dim::WindSpeed,
        Dim::Point,
    ];

    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Short index letter used in diagnostics.
    pub fn symbol(self) -> char {
        match self {
            Dim::Downstream => 'j',
            Dim::Upstream => 'i',
            Dim::Condition => 'l',
            Dim::WindSpeed => 'k',
            Dim::Point => 'p',
        }
    }
}

/// Set of canonical axes carried by a tensor.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Layout(u8);

impl Layout {
    /// Scalar layout (no axes).
    pub const SCALAR: Layout = Layout(0);

    /// Build a layout from a list of axes. Order and repeats are ignored.
    pub fn of(dims: &[Dim]) -> Self {
        dims.iter().fold(Self::SCALAR, |acc, &d| acc.with(d))
    }

    pub fn with(self, dim: Dim) -> Self {
        Self(self.0 | dim.bit())
    }

    pub fn without(self, dim: Dim) -> Self {
        Self(self.0 & !dim.bit())
    }

    pub fn contains(self, dim: Dim) -> bool {
        self.0 & dim.bit() != 0
    }

    pub fn union(self, other: Layout) -> Self {
        Self(self.0 | other.0)
    }

    pub fn is_subset_of(self, other: Layout) -> bool {
        self.0 & !other.0 == 0
    }

    /// Number of axes.
    pub fn ndim(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Axes present, in storage order.
    pub fn dims(self) -> impl Iterator<Item = Dim> {
        Dim::ALL.into_iter().filter(move |d| self.contains(*d))
    }

    /// Storage position of `dim`, if present.
    pub fn position(self, dim: Dim) -> Option<usize> {
        self.dims().position(|d| d == dim)
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Layout({self})")
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ndim() == 0 {
            return write!(f, "scalar");
        }
        for d in self.dims() {
            write!(f, "{}", d.symbol())?;
        }
        Ok(())
    }
}
