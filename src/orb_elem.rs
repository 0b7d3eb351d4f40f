//! Conversions between Cartesian states and classical orbital elements.
//!
//! * [`cartesian_to_keplerian`] – `(r, v, μ) → (a, e, i, Ω, ω, θ)`.
//! * [`keplerian_to_cartesian`] – the inverse mapping, through the perifocal frame.
//! * [`orbit_invariants`] – the intermediate vectors (h, e, N) and the specific
//!   energy, exposed on their own for monitoring a propagation.
//!
//! Degenerate geometries are reported as [`AstroError`] variants before any
//! division by a vanishing quantity happens; thresholds come from
//! [`ConversionParams`].

use nalgebra::Vector3;

use crate::{
    astro_errors::AstroError,
    kepler::{clamped_acos, full_circle_angle},
    orbit_type::{
        cartesian_state::CartesianState, keplerian_element::KeplerianElements, ConversionParams,
    },
    ref_system::perifocal_to_equatorial,
};

/// Vector invariants of the two-body problem for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitInvariants {
    /// Specific angular momentum `h = r × v` (km²/s).
    pub angular_momentum: Vector3<f64>,
    /// Eccentricity (Laplace–Runge–Lenz) vector, pointing to the pericenter.
    pub eccentricity_vector: Vector3<f64>,
    /// Node line `N = K × h`, pointing to the ascending node.
    pub node_line: Vector3<f64>,
    /// Specific mechanical energy `|v|²/2 − μ/|r|` (km²/s²).
    pub specific_energy: f64,
}

pub(crate) fn check_grav_param(mu: f64) -> Result<(), AstroError> {
    if mu.is_finite() && mu > 0.0 {
        Ok(())
    } else {
        Err(AstroError::InvalidGravitationalParameter(mu))
    }
}

fn degenerate(err: AstroError, state: &CartesianState) -> AstroError {
    log::debug!("rejecting degenerate state ({err}):\n{state}");
    err
}

/// Compute h, e, N and the specific energy of `state`.
///
/// Errors
/// ------
/// * [`AstroError::InvalidGravitationalParameter`] if `mu` is not finite and > 0.
/// * [`AstroError::NonFiniteInput`] if a component of the state is NaN or infinite,
///   or if `|r|`, `|v|²`, `|h|` or `|e|` overflows (`"state magnitude"`).
/// * [`AstroError::ZeroPosition`] if `|r| = 0`.
pub fn orbit_invariants(state: &CartesianState, mu: f64) -> Result<OrbitInvariants, AstroError> {
    check_grav_param(mu)?;
    state.ensure_finite()?;

    let r = &state.position;
    let v = &state.velocity;

    let r_norm = r.norm();
    if r_norm == 0.0 {
        return Err(degenerate(AstroError::ZeroPosition, state));
    }
    let v2 = v.norm_squared();

    let angular_momentum = r.cross(v);
    let eccentricity_vector = ((v2 - mu / r_norm) * r - r.dot(v) * v) / mu;
    let node_line = Vector3::z().cross(&angular_momentum);
    let specific_energy = 0.5 * v2 - mu / r_norm;

    // finite components whose squares overflow
    let overflow = !r_norm.is_finite()
        || !v2.is_finite()
        || !angular_momentum.norm_squared().is_finite()
        || !eccentricity_vector.norm_squared().is_finite()
        || !specific_energy.is_finite();
    if overflow {
        return Err(AstroError::NonFiniteInput("state magnitude"));
    }

    Ok(OrbitInvariants {
        angular_momentum,
        eccentricity_vector,
        node_line,
        specific_energy,
    })
}

/// Convert a Cartesian state to Keplerian elements with the default tolerances.
///
/// See [`cartesian_to_keplerian_with`].
pub fn cartesian_to_keplerian(
    state: &CartesianState,
    mu: f64,
) -> Result<KeplerianElements, AstroError> {
    cartesian_to_keplerian_with(state, mu, &ConversionParams::default())
}

/// Convert a Cartesian state to Keplerian elements.
///
/// Arguments
/// ---------
/// * `state`: position (km) and velocity (km/s) in the inertial equatorial frame.
/// * `mu`: gravitational parameter of the central body (km³/s²).
/// * `params`: degeneracy thresholds.
///
/// Return
/// ------
/// * `(a, e, i, Ω, ω, θ)` with `i ∈ [0, π]` and the three other angles in `[0, 2π)`.
///   Hyperbolic states give `a < 0` and `e > 1`.
///
/// Errors
/// ------
/// * [`AstroError::InvalidParameter`] – a threshold of `params` is negative or not finite.
/// * [`AstroError::InvalidGravitationalParameter`], [`AstroError::NonFiniteInput`] – bad inputs.
/// * [`AstroError::ZeroPosition`], [`AstroError::ZeroVelocity`] – null vectors.
/// * [`AstroError::ZeroAngularMomentum`] – `r` and `v` are parallel.
/// * [`AstroError::ParabolicTrajectory`] – zero specific energy, `a` is not finite.
/// * [`AstroError::EquatorialOrbit`] – null node line, Ω undefined.
/// * [`AstroError::CircularOrbit`] – null eccentricity, ω and θ undefined.
pub fn cartesian_to_keplerian_with(
    state: &CartesianState,
    mu: f64,
    params: &ConversionParams,
) -> Result<KeplerianElements, AstroError> {
    params.validate()?;
    let inv = orbit_invariants(state, mu)?;

    let r = &state.position;
    let v = &state.velocity;
    let r_norm = r.norm();
    let v_norm = v.norm();

    if v_norm == 0.0 {
        return Err(degenerate(AstroError::ZeroVelocity, state));
    }

    let h = &inv.angular_momentum;
    let h_norm = h.norm();
    if h_norm <= params.angular_momentum_eps * r_norm * v_norm {
        return Err(degenerate(AstroError::ZeroAngularMomentum, state));
    }

    let inclination = clamped_acos(h.z / h_norm);

    let energy_scale = 0.5 * v_norm * v_norm + mu / r_norm;
    if inv.specific_energy.abs() <= params.energy_eps * energy_scale {
        return Err(degenerate(AstroError::ParabolicTrajectory, state));
    }
    let semi_major_axis = -mu / (2.0 * inv.specific_energy);

    let n = &inv.node_line;
    let n_norm = n.norm();
    if n_norm <= params.node_eps * h_norm {
        return Err(degenerate(AstroError::EquatorialOrbit, state));
    }

    let e = &inv.eccentricity_vector;
    let ecc = e.norm();
    if ecc <= params.eccentricity_eps {
        return Err(degenerate(AstroError::CircularOrbit, state));
    }

    let ascending_node_longitude = full_circle_angle(n.x / n_norm, n.y);
    let periapsis_argument = full_circle_angle(n.dot(e) / (n_norm * ecc), e.z);

    let radial_velocity = r.dot(v) / r_norm;
    let true_anomaly = full_circle_angle(e.dot(r) / (ecc * r_norm), radial_velocity);

    Ok(KeplerianElements {
        semi_major_axis,
        eccentricity: ecc,
        inclination,
        ascending_node_longitude,
        periapsis_argument,
        true_anomaly,
    })
}

/// Convert Keplerian elements to a Cartesian state.
///
/// The state is first built in the perifocal frame, then rotated to the inertial
/// equatorial frame with [`perifocal_to_equatorial`].
///
/// Arguments
/// ---------
/// * `elements`: `(a, e, i, Ω, ω, θ)`; Ω, ω and θ may be any finite angle.
/// * `mu`: gravitational parameter of the central body (km³/s²).
///
/// Errors
/// ------
/// * [`AstroError::InvalidGravitationalParameter`] if `mu` is not finite and > 0.
/// * [`AstroError::NonFiniteInput`] if an element is NaN or infinite.
/// * [`AstroError::InvalidElements`] if `e < 0`, `i ∉ [0, π]` or `p = a(1 − e²) ≤ 0`
///   (parabola with finite `a`, or `a` and `e` describing different conics).
/// * [`AstroError::UnreachableTrueAnomaly`] if `1 + e·cos θ ≤ 0`, i.e. θ at or
///   beyond the asymptote of a hyperbola.
pub fn keplerian_to_cartesian(
    elements: &KeplerianElements,
    mu: f64,
) -> Result<CartesianState, AstroError> {
    check_grav_param(mu)?;

    let KeplerianElements {
        semi_major_axis: a,
        eccentricity: e,
        inclination,
        ascending_node_longitude,
        periapsis_argument,
        true_anomaly: theta,
    } = *elements;

    if ![a, e, inclination, ascending_node_longitude, periapsis_argument, theta]
        .iter()
        .all(|x| x.is_finite())
    {
        return Err(AstroError::NonFiniteInput("keplerian elements"));
    }
    if e < 0.0 {
        return Err(AstroError::InvalidElements(format!(
            "eccentricity must be >= 0 (got {e})"
        )));
    }
    if !(0.0..=std::f64::consts::PI).contains(&inclination) {
        return Err(AstroError::InvalidElements(format!(
            "inclination must lie in [0, π] (got {inclination})"
        )));
    }

    let p = a * (1.0 - e * e);
    if !(p.is_finite() && p > 0.0) {
        return Err(AstroError::InvalidElements(format!(
            "semi-latus rectum a(1 - e²) must be > 0 (a = {a}, e = {e})"
        )));
    }

    let (sin_th, cos_th) = theta.sin_cos();
    let denom = 1.0 + e * cos_th;
    if denom <= 0.0 {
        return Err(AstroError::UnreachableTrueAnomaly {
            eccentricity: e,
            true_anomaly: theta,
        });
    }
    let r_pf_norm = p / denom;

    let r_pf = Vector3::new(r_pf_norm * cos_th, r_pf_norm * sin_th, 0.0);
    let v_pf = (mu / p).sqrt() * Vector3::new(-sin_th, e + cos_th, 0.0);

    let rot = perifocal_to_equatorial(ascending_node_longitude, inclination, periapsis_argument);

    Ok(CartesianState::new(rot * r_pf, rot * v_pf))
}
