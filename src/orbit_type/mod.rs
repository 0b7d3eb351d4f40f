//! # Orbit representations
//!
//! This module gathers the two representations of a two-body orbit handled by
//! the crate, and the tolerances used when converting between them:
//!
//! - [`cartesian_state`](crate::orbit_type::cartesian_state) – position/velocity
//!   pair `(r, v)` in km and km/s.
//! - [`keplerian_element`](crate::orbit_type::keplerian_element) – classical
//!   elements `(a, e, i, Ω, ω, θ)`.
//! - [`ConversionParams`] – thresholds under which a geometry is declared
//!   degenerate (circular, equatorial, parabolic, rectilinear).
//!
//! ## Typical workflow
//!
//! ```rust
//! use nalgebra::Vector3;
//! use keplerkit::orbit_type::{cartesian_state::CartesianState, ConversionParams};
//! use keplerkit::orbit_type::keplerian_element::KeplerianElements;
//!
//! let state = CartesianState::new(
//!     Vector3::new(7000.0, 0.0, 0.0),
//!     Vector3::new(0.0, 7.5, 1.0),
//! );
//!
//! let params = ConversionParams::builder()
//!     .eccentricity_eps(1e-8)
//!     .build()
//!     .unwrap();
//!
//! let kep = KeplerianElements::from_cartesian_with(&state, 398600.433, &params).unwrap();
//! println!("{kep}");
//! ```
use std::cmp::Ordering::{Equal, Greater};
use std::fmt;

use crate::astro_errors::AstroError;

/// Cartesian position/velocity state.
pub mod cartesian_state;

/// Classical Keplerian elements structure and utilities.
pub mod keplerian_element;

/// Degeneracy thresholds of the state → elements conversion.
///
/// All thresholds are dimensionless, so the same defaults work for a LEO
/// satellite in km or an asteroid in AU.
///
/// Fields
/// ------
/// * `eccentricity_eps` – `e` below this value is a circular orbit
///   ([`AstroError::CircularOrbit`]).
/// * `node_eps` – `|N|/|h|` (that is `sin i`) below this value is an equatorial
///   orbit ([`AstroError::EquatorialOrbit`]).
/// * `energy_eps` – `|E| / (|v|²/2 + μ/|r|)` below this value is a parabolic
///   trajectory ([`AstroError::ParabolicTrajectory`]).
/// * `angular_momentum_eps` – `|h| / (|r||v|)` below this value is a rectilinear
///   trajectory ([`AstroError::ZeroAngularMomentum`]).
///
/// See also
/// --------
/// * [`crate::orb_elem::cartesian_to_keplerian_with`] – consumer of these thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionParams {
    pub eccentricity_eps: f64,
    pub node_eps: f64,
    pub energy_eps: f64,
    pub angular_momentum_eps: f64,
}

impl ConversionParams {
    /// Construct a new [`ConversionParams`] with the default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new [`ConversionParamsBuilder`] starting from the defaults.
    pub fn builder() -> ConversionParamsBuilder {
        ConversionParamsBuilder::new()
    }

    /// Return true iff x >= 0.0 and finite.
    #[inline]
    fn ge0(x: f64) -> bool {
        x.is_finite() && matches!(x.partial_cmp(&0.0), Some(Greater) | Some(Equal))
    }

    /// Check every threshold is finite and non-negative.
    ///
    /// Run by [`ConversionParamsBuilder::build`] and again by every conversion.
    ///
    /// Errors
    /// ------
    /// * [`AstroError::InvalidParameter`] naming the first offending threshold.
    pub fn validate(&self) -> Result<(), AstroError> {
        let checks = [
            ("eccentricity_eps", self.eccentricity_eps),
            ("node_eps", self.node_eps),
            ("energy_eps", self.energy_eps),
            ("angular_momentum_eps", self.angular_momentum_eps),
        ];
        for (name, value) in checks {
            if !Self::ge0(value) {
                return Err(AstroError::InvalidParameter(format!(
                    "{name} must be finite and >= 0 (got {value})"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ConversionParams {
    fn default() -> Self {
        ConversionParams {
            eccentricity_eps: 1.0e-10,
            node_eps: 1.0e-10,
            energy_eps: 1.0e-12,
            angular_momentum_eps: 1.0e-12,
        }
    }
}

/// Builder for [`ConversionParams`], with validation.
#[derive(Debug, Clone)]
pub struct ConversionParamsBuilder {
    params: ConversionParams,
}

impl Default for ConversionParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionParamsBuilder {
    /// Create a new builder initialized with default values.
    pub fn new() -> Self {
        Self {
            params: ConversionParams::default(),
        }
    }

    pub fn eccentricity_eps(mut self, v: f64) -> Self {
        self.params.eccentricity_eps = v;
        self
    }

    pub fn node_eps(mut self, v: f64) -> Self {
        self.params.node_eps = v;
        self
    }

    pub fn energy_eps(mut self, v: f64) -> Self {
        self.params.energy_eps = v;
        self
    }

    pub fn angular_momentum_eps(mut self, v: f64) -> Self {
        self.params.angular_momentum_eps = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Errors
    /// ------
    /// * [`AstroError::InvalidParameter`] if a threshold is negative, NaN or infinite.
    ///   Zero is accepted and disables the corresponding relative check (only an
    ///   exact zero is then degenerate).
    pub fn build(self) -> Result<ConversionParams, AstroError> {
        self.params.validate()?;
        Ok(self.params)
    }
}

impl fmt::Display for ConversionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            const PARAM_COL: usize = 36;
            writeln!(f, "Conversion Parameters")?;
            writeln!(f, "---------------------")?;

            macro_rules! line {
                ($fmt:expr, $val:expr, $comment:expr) => {{
                    let s = format!($fmt, $val);
                    let pad = if s.len() < PARAM_COL {
                        " ".repeat(PARAM_COL - s.len())
                    } else {
                        " ".to_string()
                    };
                    writeln!(f, "  {}{}# {}", s, pad, $comment)
                }};
            }

            line!(
                "eccentricity_eps     = {:.3e}",
                self.eccentricity_eps,
                "Circular orbit threshold on e"
            )?;
            line!(
                "node_eps             = {:.3e}",
                self.node_eps,
                "Equatorial orbit threshold on sin i"
            )?;
            line!(
                "energy_eps           = {:.3e}",
                self.energy_eps,
                "Parabolic threshold on relative energy"
            )?;
            line!(
                "angular_momentum_eps = {:.3e}",
                self.angular_momentum_eps,
                "Rectilinear threshold on |h|/(|r||v|)"
            )
        } else {
            write!(
                f,
                "ConversionParams(e_eps={:.1e}, node_eps={:.1e}, energy_eps={:.1e}, h_eps={:.1e})",
                self.eccentricity_eps, self.node_eps, self.energy_eps, self.angular_momentum_eps
            )
        }
    }
}

#[cfg(test)]
mod conversion_params_test {
    use super::*;

    #[test]
    fn builder_defaults_match_default() {
        let built = ConversionParams::builder().build().unwrap();
        assert_eq!(built, ConversionParams::default());
        assert_eq!(ConversionParams::new(), ConversionParams::default());
    }

    #[test]
    fn builder_sets_fields() {
        let p = ConversionParams::builder()
            .eccentricity_eps(1e-6)
            .node_eps(1e-7)
            .energy_eps(0.0)
            .angular_momentum_eps(1e-9)
            .build()
            .unwrap();
        assert_eq!(p.eccentricity_eps, 1e-6);
        assert_eq!(p.node_eps, 1e-7);
        assert_eq!(p.energy_eps, 0.0);
        assert_eq!(p.angular_momentum_eps, 1e-9);
    }

    #[test]
    fn builder_rejects_invalid_thresholds() {
        let err = ConversionParams::builder()
            .node_eps(-1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, AstroError::InvalidParameter(ref m) if m.starts_with("node_eps")));

        assert!(ConversionParams::builder()
            .energy_eps(f64::NAN)
            .build()
            .is_err());
        assert!(ConversionParams::builder()
            .eccentricity_eps(f64::INFINITY)
            .build()
            .is_err());
    }

    #[test]
    fn validate_catches_hand_built_params() {
        assert_eq!(ConversionParams::default().validate(), Ok(()));

        let nan = ConversionParams {
            eccentricity_eps: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            nan.validate(),
            Err(AstroError::InvalidParameter(ref m)) if m.starts_with("eccentricity_eps")
        ));

        let negative = ConversionParams {
            angular_momentum_eps: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());
    }

    #[test]
    fn alternate_display_is_a_table() {
        let s = format!("{:#}", ConversionParams::default());
        assert!(s.starts_with("Conversion Parameters"));
        assert_eq!(s.lines().filter(|l| l.contains('#')).count(), 4);

        let short = format!("{}", ConversionParams::default());
        assert!(short.starts_with("ConversionParams("));
    }
}
