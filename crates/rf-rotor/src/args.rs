//! Named evaluation arguments.
//!
//! Deficit models declare which arguments they need from a fixed schema
//! ([`ArgName`]). Callers pass them as a [`DeficitArgs`] bundle.

use crate::error::{RotorError, RotorResult};
use crate::field::Field;
use rf_core::{Dim, Layout};
use std::collections::BTreeMap;
use std::fmt;

/// Arguments exchanged between the flow engine and deficit models.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArgName {
    /// Free-stream wind speed at the source.
    WindSpeed,
    /// Effective (waked) wind speed at the source.
    EffectiveWindSpeed,
    /// Free-stream turbulence intensity at the source.
    TurbulenceIntensity,
    /// Effective turbulence intensity at the source.
    EffectiveTurbulenceIntensity,
    /// Thrust coefficient of the source.
    ThrustCoefficient,
    /// Rotor diameter of the source.
    SourceDiameter,
    /// Hub height of the source.
    HubHeight,
    Yaw,
    Tilt,
    /// Rotor diameter of the destination.
    DestinationDiameter,
    /// Down-wind distance from source to destination.
    DownwindDistance,
    /// Horizontal cross-wind offset from the wake centre line.
    HorizontalCrosswind,
    /// Total cross-wind distance, `hypot(hcw, dh)`.
    Crosswind,
    /// Vertical offset from the source hub.
    HeightOffset,
}

impl ArgName {
    pub const ALL: [ArgName; 14] = [
        ArgName::WindSpeed,
        ArgName::EffectiveWindSpeed,
        ArgName::TurbulenceIntensity,
        ArgName::EffectiveTurbulenceIntensity,
        ArgName::ThrustCoefficient,
        ArgName::SourceDiameter,
        ArgName::HubHeight,
        ArgName::Yaw,
        ArgName::Tilt,
        ArgName::DestinationDiameter,
        ArgName::DownwindDistance,
        ArgName::HorizontalCrosswind,
        ArgName::Crosswind,
        ArgName::HeightOffset,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ArgName::WindSpeed => "ws",
            ArgName::EffectiveWindSpeed => "ws_eff",
            ArgName::TurbulenceIntensity => "ti",
            ArgName::EffectiveTurbulenceIntensity => "ti_eff",
            ArgName::ThrustCoefficient => "ct",
            ArgName::SourceDiameter => "d_src",
            ArgName::HubHeight => "h",
            ArgName::Yaw => "yaw",
            ArgName::Tilt => "tilt",
            ArgName::DestinationDiameter => "d_dst",
            ArgName::DownwindDistance => "dw",
            ArgName::HorizontalCrosswind => "hcw",
            ArgName::Crosswind => "cw",
            ArgName::HeightOffset => "dh",
        }
    }

    /// Axes this argument may carry (before any point axis is added).
    pub fn layout(self) -> Layout {
        use Dim::*;
        match self {
            ArgName::WindSpeed
            | ArgName::EffectiveWindSpeed
            | ArgName::TurbulenceIntensity
            | ArgName::EffectiveTurbulenceIntensity
            | ArgName::ThrustCoefficient
            | ArgName::Yaw
            | ArgName::Tilt => Layout::of(&[Upstream, Condition, WindSpeed]),
            ArgName::SourceDiameter | ArgName::HubHeight => Layout::of(&[Upstream, Condition]),
            ArgName::DestinationDiameter => Layout::of(&[Downstream, Upstream, Condition]),
            ArgName::DownwindDistance
            | ArgName::HorizontalCrosswind
            | ArgName::Crosswind
            | ArgName::HeightOffset => Layout::of(&[Downstream, Upstream, Condition, WindSpeed]),
        }
    }
}

impl fmt::Display for ArgName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Ordered argument list without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgList(Vec<ArgName>);

impl ArgList {
    pub fn new(names: &[ArgName]) -> Self {
        names.iter().copied().collect()
    }

    /// This list followed by the names of `extra` it does not already hold.
    pub fn merged(&self, extra: &[ArgName]) -> Self {
        self.iter().chain(extra.iter().copied()).collect()
    }

    pub fn contains(&self, name: ArgName) -> bool {
        self.0.contains(&name)
    }

    pub fn iter(&self) -> impl Iterator<Item = ArgName> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[ArgName] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ArgName> for ArgList {
    fn from_iter<T: IntoIterator<Item = ArgName>>(iter: T) -> Self {
        let mut names = Vec::new();
        for name in iter {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Self(names)
    }
}

/// Bundle of named argument fields for one evaluation call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeficitArgs {
    fields: BTreeMap<ArgName, Field>,
}

impl DeficitArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value.
    ///
    /// The field's axes must be a subset of the argument's declared axes
    /// plus the point axis.
    pub fn insert(&mut self, name: ArgName, field: Field) -> RotorResult<Option<Field>> {
        let allowed = name.layout().with(Dim::Point);
        if !field.layout().is_subset_of(allowed) {
            return Err(RotorError::ArgLayout {
                name,
                got: field.layout(),
                allowed,
            });
        }
        Ok(self.fields.insert(name, field))
    }

    /// Builder form of [`DeficitArgs::insert`].
    pub fn with(mut self, name: ArgName, field: Field) -> RotorResult<Self> {
        self.insert(name, field)?;
        Ok(self)
    }

    pub fn get(&self, name: ArgName) -> RotorResult<&Field> {
        self.fields
            .get(&name)
            .ok_or(RotorError::MissingArgument { name })
    }

    pub fn contains(&self, name: ArgName) -> bool {
        self.fields.contains_key(&name)
    }

    /// Fail with the first name of `required` that is absent.
    pub fn require(&self, required: &ArgList) -> RotorResult<()> {
        match required.iter().find(|n| !self.contains(*n)) {
            Some(name) => Err(RotorError::MissingArgument { name }),
            None => Ok(()),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArgName, &Field)> {
        self.fields.iter().map(|(k, v)| (*k, v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
