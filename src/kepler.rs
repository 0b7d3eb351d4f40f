//! Angle helpers shared by the element conversions.
//!
//! The classical elements Ω, ω and θ are all recovered from an `arccos`, whose
//! principal value only covers `[0, π]`. [`full_circle_angle`] lifts such a value
//! to `[0, 2π)` using a companion sign indicator; it is the single place where
//! that quadrant resolution happens.

use super::constants::DPI;
use std::f64::consts::PI;

/// Principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: f64) -> f64 {
    let r = a.rem_euclid(DPI);
    // rem_euclid may round up to exactly 2π for tiny negative inputs
    if r >= DPI {
        0.0
    } else {
        r
    }
}

/// Signed difference `a - b` between two angles, in `[-π, π]`.
pub fn angle_diff(a: f64, b: f64) -> f64 {
    let mut diff = principal_angle(a) - principal_angle(b);

    if diff > PI {
        diff -= DPI;
    } else if diff < -PI {
        diff += DPI;
    }

    diff
}

/// `arccos` with its argument clamped to `[-1, 1]`.
///
/// Ratios such as `h_z / |h|` can exceed one by a few ulps; the clamp keeps
/// them from turning into NaN.
pub fn clamped_acos(cos_value: f64) -> f64 {
    cos_value.clamp(-1.0, 1.0).acos()
}

/// Resolve a full-circle angle from its cosine and a disambiguating sign.
///
/// Returns `arccos(cos_value)` when `sign_indicator ≥ 0` and
/// `2π − arccos(cos_value)` otherwise. The result lies in `[0, 2π)`.
///
/// Arguments
/// ---------
/// * `cos_value`: cosine of the wanted angle (clamped to `[-1, 1]`).
/// * `sign_indicator`: any quantity with the sign of the wanted angle's sine
///   (e.g. `N_y` for the node, `e_z` for the pericenter, `r·v` for the true anomaly).
pub fn full_circle_angle(cos_value: f64, sign_indicator: f64) -> f64 {
    let principal = clamped_acos(cos_value);
    if sign_indicator >= 0.0 {
        principal
    } else {
        principal_angle(DPI - principal)
    }
}
