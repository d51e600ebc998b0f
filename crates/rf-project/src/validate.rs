//! Case validation logic.

use crate::schema::{Case, ModelDef, RotorAvgDef, RotorDef};
use rf_core::ensure_finite;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Length mismatch: {field} has {got} entries, expected {expected}")]
    LengthMismatch {
        field: String,
        got: usize,
        expected: usize,
    },

    #[error("Case has no rotors to evaluate")]
    NoRotors,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }

    validate_rotor_avg(&case.rotor_avg)?;
    validate_model(&case.model)?;

    if case.rotors.is_empty() {
        return Err(ValidationError::NoRotors);
    }
    for (i, rotor) in case.rotors.iter().enumerate() {
        validate_rotor(i, rotor)?;
    }
    Ok(())
}

fn validate_rotor_avg(def: &RotorAvgDef) -> Result<(), ValidationError> {
    match def {
        RotorAvgDef::RotorCenter => Ok(()),
        RotorAvgDef::EqualGrid { n } => positive_count("rotor_avg.n", *n),
        RotorAvgDef::GaussGrid { n_x, n_y } => {
            positive_count("rotor_avg.n_x", *n_x)?;
            positive_count("rotor_avg.n_y", *n_y)
        }
        RotorAvgDef::PolarGauss { n_r, n_theta } => {
            positive_count("rotor_avg.n_r", *n_r)?;
            positive_count("rotor_avg.n_theta", *n_theta)
        }
        RotorAvgDef::Polar { r, theta, weights } => {
            same_len("rotor_avg.theta", theta.len(), r.len())?;
            same_len("rotor_avg.weights", weights.len(), r.len())?;
            if r.is_empty() {
                return Err(invalid("rotor_avg.r", "[]", "at least one node required"));
            }
            Ok(())
        }
        RotorAvgDef::Grid { x, y, weights } => {
            same_len("rotor_avg.y", y.len(), x.len())?;
            if let Some(w) = weights {
                same_len("rotor_avg.weights", w.len(), x.len())?;
            }
            if x.is_empty() {
                return Err(invalid("rotor_avg.x", "[]", "at least one node required"));
            }
            Ok(())
        }
    }
}

fn validate_model(def: &ModelDef) -> Result<(), ValidationError> {
    match def {
        ModelDef::Linear => Ok(()),
        ModelDef::Gaussian { amplitude, sigma } => {
            finite("model.amplitude", *amplitude)?;
            finite("model.sigma", *sigma)?;
            if *sigma <= 0.0 {
                return Err(invalid("model.sigma", sigma, "must be positive"));
            }
            Ok(())
        }
    }
}

fn validate_rotor(i: usize, rotor: &RotorDef) -> Result<(), ValidationError> {
    finite(&format!("rotors[{i}].diameter"), rotor.diameter)?;
    finite(&format!("rotors[{i}].hcw"), rotor.hcw)?;
    finite(&format!("rotors[{i}].dh"), rotor.dh)?;
    if rotor.diameter < 0.0 {
        return Err(invalid(
            format!("rotors[{i}].diameter"),
            rotor.diameter,
            "must be non-negative",
        ));
    }
    Ok(())
}

fn positive_count(field: &str, n: usize) -> Result<(), ValidationError> {
    if n == 0 {
        return Err(invalid(field, n, "must be at least 1"));
    }
    Ok(())
}

fn same_len(field: &str, got: usize, expected: usize) -> Result<(), ValidationError> {
    if got != expected {
        return Err(ValidationError::LengthMismatch {
            field: field.to_string(),
            got,
            expected,
        });
    }
    Ok(())
}

fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    ensure_finite(value, "case value")
        .map(|_| ())
        .map_err(|_| invalid(field, value, "must be finite"))
}

fn invalid(
    field: impl Into<String>,
    value: impl ToString,
    reason: &str,
) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
