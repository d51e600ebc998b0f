use rf_project::*;

fn base() -> Case {
    Case {
        version: 1,
        name: "base".to_string(),
        rotor_avg: RotorAvgDef::EqualGrid { n: 4 },
        model: ModelDef::Linear,
        rotors: vec![RotorDef {
            diameter: 80.0,
            hcw: 0.0,
            dh: 0.0,
        }],
    }
}

#[test]
fn base_case_is_valid() {
    validate_case(&base()).unwrap();
}

#[test]
fn zero_counts_rejected() {
    for rotor_avg in [
        RotorAvgDef::EqualGrid { n: 0 },
        RotorAvgDef::GaussGrid { n_x: 0, n_y: 2 },
        RotorAvgDef::GaussGrid { n_x: 2, n_y: 0 },
        RotorAvgDef::PolarGauss { n_r: 3, n_theta: 0 },
    ] {
        let case = Case {
            rotor_avg,
            ..base()
        };
        assert!(matches!(
            validate_case(&case),
            Err(ValidationError::InvalidValue { .. })
        ));
    }
}

#[test]
fn explicit_lengths_must_match() {
    let case = Case {
        rotor_avg: RotorAvgDef::Polar {
            r: vec![0.2, 0.4],
            theta: vec![0.0, 1.0],
            weights: vec![1.0],
        },
        ..base()
    };
    let err = validate_case(&case).unwrap_err();
    assert!(err.to_string().contains("rotor_avg.weights"));

    let case = Case {
        rotor_avg: RotorAvgDef::Grid {
            x: vec![0.0],
            y: vec![],
            weights: None,
        },
        ..base()
    };
    assert!(matches!(
        validate_case(&case),
        Err(ValidationError::LengthMismatch { .. })
    ));
}

#[test]
fn explicit_negative_weights_allowed() {
    let case = Case {
        rotor_avg: RotorAvgDef::Polar {
            r: vec![0.0, 0.5, 0.5],
            theta: vec![0.0, 0.0, 3.14],
            weights: vec![1.2, -0.1, -0.1],
        },
        ..base()
    };
    validate_case(&case).unwrap();
}

#[test]
fn negative_diameter_rejected() {
    let mut case = base();
    case.rotors[0].diameter = -1.0;
    let err = validate_case(&case).unwrap_err();
    assert!(err.to_string().contains("rotors[0].diameter"));
}

#[test]
fn non_finite_offset_rejected() {
    let mut case = base();
    case.rotors[0].hcw = f64::NAN;
    assert!(validate_case(&case).is_err());
}

#[test]
fn gaussian_sigma_must_be_positive() {
    let case = Case {
        model: ModelDef::Gaussian {
            amplitude: 0.2,
            sigma: 0.0,
        },
        ..base()
    };
    assert!(validate_case(&case).is_err());
}

#[test]
fn unsupported_version_rejected() {
    let case = Case {
        version: LATEST_VERSION + 1,
        ..base()
    };
    assert!(matches!(
        validate_case(&case),
        Err(ValidationError::UnsupportedVersion { .. })
    ));
}
