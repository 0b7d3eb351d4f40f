//! Right-hand sides of the two-body equations of motion.
//!
//! The state is the packed 6-vector `y = [x, y, z, vx, vy, vz]` (km, km/s) and
//! the returned derivative is `dy = [vx, vy, vz, ax, ay, az]` (km/s, km/s²).
//!
//! - [`two_body_derivative`] – point-mass gravity `a = −μ r / |r|³`.
//! - [`j2_derivative`] – point-mass gravity plus the J2 oblateness term.
//! - [`DynamicsModel`] – the same two models behind one callback type, for an
//!   external integrator.
//!
//! The time argument is part of the signature expected by integrators; both
//! models are autonomous and ignore it.

use nalgebra::{Vector3, Vector6};

use crate::{
    astro_errors::AstroError,
    constants::{AstroConstant, GravParam, Kilometer, EARTH_EQUATORIAL_RADIUS_JGM2},
    orb_elem::check_grav_param,
};

fn split_state(state: &Vector6<f64>) -> Result<(Vector3<f64>, Vector3<f64>, f64), AstroError> {
    if !state.iter().all(|c| c.is_finite()) {
        return Err(AstroError::NonFiniteInput("state vector"));
    }
    let position: Vector3<f64> = state.fixed_rows::<3>(0).into_owned();
    let velocity: Vector3<f64> = state.fixed_rows::<3>(3).into_owned();

    let r_norm = position.norm();
    if r_norm == 0.0 {
        return Err(AstroError::ZeroPosition);
    }
    Ok((position, velocity, r_norm))
}

fn pack(velocity: &Vector3<f64>, acceleration: &Vector3<f64>) -> Vector6<f64> {
    let mut dy = Vector6::zeros();
    dy.fixed_rows_mut::<3>(0).copy_from(velocity);
    dy.fixed_rows_mut::<3>(3).copy_from(acceleration);
    dy
}

/// Point mass acceleration: a = −μ/r³ × r
fn point_mass_accel(position: &Vector3<f64>, r_norm: f64, mu: f64) -> Vector3<f64> {
    -mu / (r_norm * r_norm * r_norm) * position
}

/// J2 perturbation acceleration.
///
/// With `f = 1.5·J2·μ·Re²/r⁴` and `s = z²/r²`:
/// `a = f · (x/r·(5s − 1), y/r·(5s − 1), z/r·(5s − 3))`.
fn j2_accel(position: &Vector3<f64>, r_norm: f64, mu: f64, re: f64, j2: f64) -> Vector3<f64> {
    let r2 = r_norm * r_norm;
    let factor = 1.5 * j2 * mu * re * re / (r2 * r2);

    let s = position.z * position.z / r2;
    let equatorial = 5.0 * s - 1.0;
    let polar = 5.0 * s - 3.0;

    factor
        * Vector3::new(
            position.x / r_norm * equatorial,
            position.y / r_norm * equatorial,
            position.z / r_norm * polar,
        )
}

/// Time derivative of a state under point-mass gravity.
///
/// Arguments
/// ---------
/// * `state`: `[x, y, z, vx, vy, vz]` in km and km/s.
/// * `_t`: time (s), unused.
/// * `mu`: gravitational parameter (km³/s²).
///
/// Return
/// ------
/// * `[vx, vy, vz, ax, ay, az]` with `a = −μ r / |r|³`.
///
/// Errors
/// ------
/// * [`AstroError::InvalidGravitationalParameter`] if `mu` is not finite and > 0.
/// * [`AstroError::NonFiniteInput`] if the state holds NaN or infinities.
/// * [`AstroError::ZeroPosition`] if the object sits at the center of attraction.
pub fn two_body_derivative(
    state: &Vector6<f64>,
    _t: f64,
    mu: GravParam,
) -> Result<Vector6<f64>, AstroError> {
    check_grav_param(mu)?;
    let (position, velocity, r_norm) = split_state(state)?;

    Ok(pack(&velocity, &point_mass_accel(&position, r_norm, mu)))
}

/// Time derivative of a state under point-mass gravity plus the J2 zonal term.
///
/// Arguments
/// ---------
/// * `state`: `[x, y, z, vx, vy, vz]` in km and km/s, body-centred equatorial frame
///   (the z axis is the body's rotation axis).
/// * `_t`: time (s), unused.
/// * `mu`: gravitational parameter (km³/s²).
/// * `equatorial_radius`: reference radius `Re` of the J2 coefficient (km).
/// * `j2`: second zonal harmonic (unitless).
///
/// Return
/// ------
/// * `[vx, vy, vz, ax, ay, az]`. With `j2 = 0` this equals [`two_body_derivative`] exactly.
///
/// Errors
/// ------
/// * Same as [`two_body_derivative`].
/// * [`AstroError::InvalidParameter`] if `equatorial_radius` is negative or not finite,
///   or `j2` is not finite.
pub fn j2_derivative(
    state: &Vector6<f64>,
    _t: f64,
    mu: GravParam,
    equatorial_radius: Kilometer,
    j2: f64,
) -> Result<Vector6<f64>, AstroError> {
    check_grav_param(mu)?;
    check_j2_params(equatorial_radius, j2)?;
    let (position, velocity, r_norm) = split_state(state)?;

    let acceleration = point_mass_accel(&position, r_norm, mu)
        + j2_accel(&position, r_norm, mu, equatorial_radius, j2);

    Ok(pack(&velocity, &acceleration))
}

fn check_j2_params(equatorial_radius: f64, j2: f64) -> Result<(), AstroError> {
    if !(equatorial_radius.is_finite() && equatorial_radius >= 0.0) {
        return Err(AstroError::InvalidParameter(format!(
            "equatorial radius must be finite and >= 0 (got {equatorial_radius})"
        )));
    }
    if !j2.is_finite() {
        return Err(AstroError::InvalidParameter(format!(
            "J2 must be finite (got {j2})"
        )));
    }
    Ok(())
}

/// Dynamics of a point mass, as seen by an ODE integrator.
///
/// Implementations must be `Send + Sync` so that several objects can be
/// propagated in parallel with a shared model.
pub trait DynamicsModel: Send + Sync {
    /// Time derivative of `state` at time `t`.
    fn derivative(&self, t: f64, state: &Vector6<f64>) -> Result<Vector6<f64>, AstroError>;

    /// Model name, for diagnostics.
    fn name(&self) -> &'static str;
}

/// Unperturbed two-body dynamics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMass {
    mu: GravParam,
}

impl PointMass {
    /// Errors
    /// ------
    /// * [`AstroError::InvalidGravitationalParameter`] if `mu` is not finite and > 0.
    pub fn new(mu: GravParam) -> Result<Self, AstroError> {
        check_grav_param(mu)?;
        log::trace!("point-mass model, mu = {mu} km^3/s^2");
        Ok(Self { mu })
    }

    pub fn mu(&self) -> GravParam {
        self.mu
    }
}

impl DynamicsModel for PointMass {
    fn derivative(&self, t: f64, state: &Vector6<f64>) -> Result<Vector6<f64>, AstroError> {
        two_body_derivative(state, t, self.mu)
    }

    fn name(&self) -> &'static str {
        "point-mass"
    }
}

/// Two-body dynamics with the J2 oblateness perturbation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct J2Perturbed {
    mu: GravParam,
    equatorial_radius: Kilometer,
    j2: f64,
}

impl J2Perturbed {
    /// Errors
    /// ------
    /// * [`AstroError::InvalidGravitationalParameter`] if `mu` is not finite and > 0.
    /// * [`AstroError::InvalidParameter`] on a negative/non-finite radius or non-finite J2.
    pub fn new(mu: GravParam, equatorial_radius: Kilometer, j2: f64) -> Result<Self, AstroError> {
        check_grav_param(mu)?;
        check_j2_params(equatorial_radius, j2)?;
        log::trace!("J2 model, mu = {mu} km^3/s^2, Re = {equatorial_radius} km, J2 = {j2}");
        Ok(Self {
            mu,
            equatorial_radius,
            j2,
        })
    }

    /// Earth J2 model: μ from the constants table, JGM-2 radius and J2.
    pub fn earth() -> Self {
        Self {
            mu: AstroConstant::EarthGravParam.value(),
            equatorial_radius: EARTH_EQUATORIAL_RADIUS_JGM2,
            j2: AstroConstant::EarthJ2.value(),
        }
    }

    pub fn mu(&self) -> GravParam {
        self.mu
    }

    pub fn equatorial_radius(&self) -> Kilometer {
        self.equatorial_radius
    }

    pub fn j2(&self) -> f64 {
        self.j2
    }
}

impl DynamicsModel for J2Perturbed {
    fn derivative(&self, t: f64, state: &Vector6<f64>) -> Result<Vector6<f64>, AstroError> {
        j2_derivative(state, t, self.mu, self.equatorial_radius, self.j2)
    }

    fn name(&self) -> &'static str {
        "J2"
    }
}

/// Bodies of the constants table with a gravitational parameter and a mean radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CentralBody {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Moon,
}

impl CentralBody {
    fn constants(self) -> (AstroConstant, AstroConstant) {
        use AstroConstant::*;
        match self {
            CentralBody::Sun => (SunGravParam, SunRadius),
            CentralBody::Mercury => (MercuryGravParam, MercuryRadius),
            CentralBody::Venus => (VenusGravParam, VenusRadius),
            CentralBody::Earth => (EarthGravParam, EarthRadius),
            CentralBody::Mars => (MarsGravParam, MarsRadius),
            CentralBody::Jupiter => (JupiterGravParam, JupiterRadius),
            CentralBody::Saturn => (SaturnGravParam, SaturnRadius),
            CentralBody::Uranus => (UranusGravParam, UranusRadius),
            CentralBody::Neptune => (NeptuneGravParam, NeptuneRadius),
            CentralBody::Pluto => (PlutoGravParam, PlutoRadius),
            CentralBody::Moon => (MoonGravParam, MoonRadius),
        }
    }

    /// Gravitational parameter μ (km³/s²).
    pub fn mu(self) -> GravParam {
        self.constants().0.value()
    }

    /// Mean radius (km).
    pub fn mean_radius(self) -> Kilometer {
        self.constants().1.value()
    }

    /// Point-mass dynamics around this body.
    pub fn point_mass(self) -> PointMass {
        PointMass { mu: self.mu() }
    }
}
