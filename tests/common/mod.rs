#![allow(dead_code)]

use approx::assert_relative_eq;
use keplerkit::kepler::angle_diff;
use keplerkit::{CartesianState, KeplerianElements};

pub const MU_EARTH: f64 = 398600.433;

/// Compare two element sets; lengths/eccentricity relatively, angles modulo 2π.
pub fn assert_orbit_close(actual: &KeplerianElements, expected: &KeplerianElements, epsilon: f64) {
    assert_relative_eq!(
        actual.semi_major_axis,
        expected.semi_major_axis,
        max_relative = epsilon
    );
    assert_relative_eq!(
        actual.eccentricity,
        expected.eccentricity,
        epsilon = epsilon,
        max_relative = epsilon
    );
    assert_relative_eq!(actual.inclination, expected.inclination, epsilon = epsilon);

    for (name, a, b) in [
        (
            "ascending_node_longitude",
            actual.ascending_node_longitude,
            expected.ascending_node_longitude,
        ),
        (
            "periapsis_argument",
            actual.periapsis_argument,
            expected.periapsis_argument,
        ),
        ("true_anomaly", actual.true_anomaly, expected.true_anomaly),
    ] {
        assert!(
            angle_diff(a, b).abs() <= epsilon,
            "{name}: {a} vs {b} (diff {})",
            angle_diff(a, b)
        );
    }
}

/// Compare two states component-wise, relative to the norm of each vector.
pub fn assert_state_close(actual: &CartesianState, expected: &CartesianState, rel: f64) {
    let dr = (actual.position - expected.position).norm();
    let dv = (actual.velocity - expected.velocity).norm();
    assert!(
        dr <= rel * expected.position.norm(),
        "position mismatch {dr} km\n{actual}\n{expected}"
    );
    assert!(
        dv <= rel * expected.velocity.norm(),
        "velocity mismatch {dv} km/s\n{actual}\n{expected}"
    );
}
