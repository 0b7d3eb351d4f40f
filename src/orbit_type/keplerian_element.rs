//! # Keplerian orbital elements
//!
//! This module defines the [`KeplerianElements`] struct, the **classical orbital
//! element representation** `(a, e, i, Ω, ω, θ)` of an osculating two-body orbit.
//!
//! ## Provided functionality
//!
//! - [`KeplerianElements::from_cartesian`] – state vector → elements
//!   (see [`crate::orb_elem::cartesian_to_keplerian`]).
//! - [`KeplerianElements::to_cartesian`] – elements → state vector
//!   (see [`crate::orb_elem::keplerian_to_cartesian`]).
//! - Derived quantities: semi-latus rectum, pericenter distance, specific energy,
//!   angular momentum magnitude, orbital period.
//!
//! ## Units
//!
//! - Lengths: **km**
//! - Angles: **radians**
//! - Gravitational parameter: **km³/s²**
//!
//! ## Degeneracies
//!
//! - **Circular orbits (`e → 0`)**: ω and θ are undefined.
//! - **Equatorial orbits (`i → 0` or `π`)**: Ω is undefined.
//!
//! Both are reported as errors by the state → elements conversion
//! ([`AstroError::CircularOrbit`], [`AstroError::EquatorialOrbit`]); no
//! conventional value is substituted.
//!
//! ## Example
//!
//! ```rust
//! use keplerkit::orbit_type::keplerian_element::KeplerianElements;
//!
//! let mu = 398600.433;
//! let kep = KeplerianElements {
//!     semi_major_axis: 7500.0,
//!     eccentricity: 0.05,
//!     inclination: 0.9,
//!     ascending_node_longitude: 0.3,
//!     periapsis_argument: 1.2,
//!     true_anomaly: 2.0,
//! };
//!
//! let state = kep.to_cartesian(mu).unwrap();
//! let back = KeplerianElements::from_cartesian(&state, mu).unwrap();
//! assert!((back.semi_major_axis - kep.semi_major_axis).abs() < 1e-6);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    astro_errors::AstroError,
    constants::{Kilometer, Radian, DPI, RADEG},
    orb_elem::{cartesian_to_keplerian_with, keplerian_to_cartesian},
    orbit_type::{cartesian_state::CartesianState, ConversionParams},
};

/// Keplerian orbital elements (osculating, two-body).
///
/// Units
/// -----
/// * `semi_major_axis`: km (negative for hyperbolic orbits).
/// * `eccentricity`: unitless.
/// * `inclination`: radians, in `[0, π]`.
/// * `ascending_node_longitude`: radians (Ω), in `[0, 2π)`.
/// * `periapsis_argument`: radians (ω), in `[0, 2π)`.
/// * `true_anomaly`: radians (θ), in `[0, 2π)`.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub semi_major_axis: Kilometer,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub true_anomaly: Radian,
}

impl KeplerianElements {
    /// Elements of the orbit passing through `state`, with default tolerances.
    ///
    /// Errors
    /// ------
    /// See [`crate::orb_elem::cartesian_to_keplerian`].
    pub fn from_cartesian(state: &CartesianState, mu: f64) -> Result<Self, AstroError> {
        cartesian_to_keplerian_with(state, mu, &ConversionParams::default())
    }

    /// Same as [`KeplerianElements::from_cartesian`] with explicit degeneracy thresholds.
    pub fn from_cartesian_with(
        state: &CartesianState,
        mu: f64,
        params: &ConversionParams,
    ) -> Result<Self, AstroError> {
        cartesian_to_keplerian_with(state, mu, params)
    }

    /// Position and velocity on this orbit at the stored true anomaly.
    ///
    /// Errors
    /// ------
    /// See [`crate::orb_elem::keplerian_to_cartesian`].
    pub fn to_cartesian(&self, mu: f64) -> Result<CartesianState, AstroError> {
        keplerian_to_cartesian(self, mu)
    }

    /// Semi-latus rectum `p = a(1 − e²)` (km).
    pub fn semi_latus_rectum(&self) -> Kilometer {
        self.semi_major_axis * (1.0 - self.eccentricity * self.eccentricity)
    }

    /// Pericenter distance `q = a(1 − e)` (km).
    pub fn pericenter_distance(&self) -> Kilometer {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Specific mechanical energy `−μ/(2a)` (km²/s²).
    pub fn specific_energy(&self, mu: f64) -> f64 {
        -mu / (2.0 * self.semi_major_axis)
    }

    /// Magnitude of the specific angular momentum `√(μ·p)` (km²/s).
    pub fn angular_momentum(&self, mu: f64) -> f64 {
        (mu * self.semi_latus_rectum()).sqrt()
    }

    /// Orbital period `2π·√(a³/μ)` in seconds, `None` for open orbits.
    pub fn period(&self, mu: f64) -> Option<f64> {
        if self.eccentricity < 1.0 && self.semi_major_axis > 0.0 {
            Some(DPI * (self.semi_major_axis.powi(3) / mu).sqrt())
        } else {
            None
        }
    }

    /// `true` for elliptic orbits (`0 ≤ e < 1`).
    pub fn is_elliptic(&self) -> bool {
        self.eccentricity < 1.0
    }
}

impl fmt::Display for KeplerianElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rad_to_deg = 1.0 / RADEG;
        writeln!(f, "Keplerian Elements")?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} km",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  i   (inclination)           = {:.6} rad ({:.6}°)",
            self.inclination,
            self.inclination * rad_to_deg
        )?;
        writeln!(
            f,
            "  Ω   (RAAN)                  = {:.6} rad ({:.6}°)",
            self.ascending_node_longitude,
            self.ascending_node_longitude * rad_to_deg
        )?;
        writeln!(
            f,
            "  ω   (argument of pericenter)= {:.6} rad ({:.6}°)",
            self.periapsis_argument,
            self.periapsis_argument * rad_to_deg
        )?;
        writeln!(
            f,
            "  θ   (true anomaly)          = {:.6} rad ({:.6}°)",
            self.true_anomaly,
            self.true_anomaly * rad_to_deg
        )
    }
}
