//! Case file schema definitions.

use serde::{Deserialize, Serialize};

/// A rotor-averaging case: one strategy, one analytic model, a list of
/// rotors to evaluate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub version: u32,
    pub name: String,
    pub rotor_avg: RotorAvgDef,
    pub model: ModelDef,
    #[serde(default)]
    pub rotors: Vec<RotorDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum RotorAvgDef {
    RotorCenter,
    EqualGrid {
        n: usize,
    },
    GaussGrid {
        n_x: usize,
        n_y: usize,
    },
    PolarGauss {
        n_r: usize,
        n_theta: usize,
    },
    Polar {
        r: Vec<f64>,
        theta: Vec<f64>,
        weights: Vec<f64>,
    },
    Grid {
        x: Vec<f64>,
        y: Vec<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        weights: Option<Vec<f64>>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ModelDef {
    Gaussian { amplitude: f64, sigma: f64 },
    Linear,
}

/// One downstream rotor relative to the wake centre line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RotorDef {
    /// Rotor diameter [m]
    pub diameter: f64,
    /// Horizontal cross-wind offset [m]
    #[serde(default)]
    pub hcw: f64,
    /// Vertical offset [m]
    #[serde(default)]
    pub dh: f64,
}
