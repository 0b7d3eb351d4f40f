//! Cartesian position/velocity state of a point mass.

use nalgebra::{Vector3, Vector6};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::astro_errors::AstroError;

/// Instantaneous kinematics of a point mass in an inertial, body-centred
/// equatorial frame.
///
/// Units
/// -----
/// * `position`: km.
/// * `velocity`: km/s.
///
/// The packed form used by the derivative functions is the 6-vector
/// `[x, y, z, vx, vy, vz]` (see [`CartesianState::to_vector6`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CartesianState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl CartesianState {
    pub fn new(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self { position, velocity }
    }

    /// Unpack a `[x, y, z, vx, vy, vz]` vector.
    pub fn from_vector6(state: &Vector6<f64>) -> Self {
        Self {
            position: state.fixed_rows::<3>(0).into_owned(),
            velocity: state.fixed_rows::<3>(3).into_owned(),
        }
    }

    /// Pack into `[x, y, z, vx, vy, vz]`.
    pub fn to_vector6(&self) -> Vector6<f64> {
        let mut y = Vector6::zeros();
        y.fixed_rows_mut::<3>(0).copy_from(&self.position);
        y.fixed_rows_mut::<3>(3).copy_from(&self.velocity);
        y
    }

    /// Specific angular momentum `h = r × v` (km²/s).
    pub fn angular_momentum(&self) -> Vector3<f64> {
        self.position.cross(&self.velocity)
    }

    /// Specific mechanical energy `|v|²/2 − μ/|r|` (km²/s²).
    pub fn specific_energy(&self, mu: f64) -> f64 {
        0.5 * self.velocity.norm_squared() - mu / self.position.norm()
    }

    pub(crate) fn ensure_finite(&self) -> Result<(), AstroError> {
        if !self.position.iter().all(|c| c.is_finite()) {
            return Err(AstroError::NonFiniteInput("position"));
        }
        if !self.velocity.iter().all(|c| c.is_finite()) {
            return Err(AstroError::NonFiniteInput("velocity"));
        }
        Ok(())
    }
}

impl From<Vector6<f64>> for CartesianState {
    fn from(state: Vector6<f64>) -> Self {
        CartesianState::from_vector6(&state)
    }
}

impl From<CartesianState> for Vector6<f64> {
    fn from(state: CartesianState) -> Self {
        state.to_vector6()
    }
}

impl fmt::Display for CartesianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  r = [{:>16.6}, {:>16.6}, {:>16.6}] km",
            self.position.x, self.position.y, self.position.z
        )?;
        write!(
            f,
            "  v = [{:>16.9}, {:>16.9}, {:>16.9}] km/s",
            self.velocity.x, self.velocity.y, self.velocity.z
        )
    }
}
