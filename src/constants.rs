//! # Constants and type definitions for keplerkit
//!
//! This module centralizes the **physical constants**, **conversion factors** and
//! **type aliases** used throughout the crate, together with the
//! **astrodynamics constants table**: a fixed mapping from an integer identifier
//! to a physical constant (gravitational parameters, mean radii, Earth J2, …).
//!
//! ## Overview
//!
//! - Unit conversions (degrees/arcseconds ↔ radians)
//! - Core type aliases used across the crate
//! - [`AstroConstant`] identifiers and the static lookup table
//! - Lenient ([`astro_constant`], [`astro_constants`]) and strict
//!   ([`try_astro_constant`]) lookups
//!
//! The identifiers are stable: new constants get new, unused identifiers and
//! existing ones are never renumbered. Identifier `10` is not assigned.
//!
//! ## Unknown identifiers
//!
//! The lenient lookups keep the historical behaviour of the table: an unknown
//! identifier emits a `log::warn!` diagnostic and yields `0.0`. Callers that
//! cannot tolerate a physically meaningless zero should use
//! [`try_astro_constant`], which returns [`AstroError::UnknownConstant`].
//!
//! ```rust
//! use keplerkit::constants::{astro_constant, try_astro_constant, AstroConstant};
//!
//! let mu_earth = astro_constant(13);
//! assert_eq!(mu_earth, AstroConstant::EarthGravParam.value());
//! assert!(try_astro_constant(10).is_err());
//! ```

use std::fmt;

use crate::astro_errors::AstroError;

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Earth equatorial radius (km) of the JGM-2 model, to be used together with the
/// Earth J2 value of the table ([`AstroConstant::EarthJ2`]).
pub const EARTH_EQUATORIAL_RADIUS_JGM2: Kilometer = 6378.1363;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Gravitational parameter μ = G·M in km³/s²
pub type GravParam = f64;

// -------------------------------------------------------------------------------------------------
// Astrodynamics constants table
// -------------------------------------------------------------------------------------------------

/// Identifier of a constant of the astrodynamics table.
///
/// The discriminant is the numerical identifier accepted by [`astro_constant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum AstroConstant {
    /// Universal gravity constant G [km³/(kg·s²)]
    GravitationalConstant = 1,
    /// Astronomical Unit [km]
    AstronomicalUnit = 2,
    /// Sun mean radius [km]
    SunRadius = 3,
    /// Sun planetary constant μ [km³/s²]
    SunGravParam = 4,
    /// Speed of light in vacuum [km/s]
    SpeedOfLight = 5,
    /// Standard free fall acceleration [m/s²]
    StandardGravity = 6,
    /// Mean Earth–Moon distance [km]
    EarthMoonDistance = 7,
    /// Obliquity of the ecliptic at J2000 [rad]
    EclipticObliquity = 8,
    /// Earth second zonal harmonic J2 (JGM-2) [-]
    EarthJ2 = 9,
    MercuryGravParam = 11,
    VenusGravParam = 12,
    EarthGravParam = 13,
    MarsGravParam = 14,
    JupiterGravParam = 15,
    SaturnGravParam = 16,
    UranusGravParam = 17,
    NeptuneGravParam = 18,
    PlutoGravParam = 19,
    MoonGravParam = 20,
    MercuryRadius = 21,
    VenusRadius = 22,
    EarthRadius = 23,
    MarsRadius = 24,
    JupiterRadius = 25,
    SaturnRadius = 26,
    UranusRadius = 27,
    NeptuneRadius = 28,
    PlutoRadius = 29,
    MoonRadius = 30,
    /// Energy flux density of the Sun at 1 AU [W/m²]
    SolarFlux = 31,
    /// Days in a Julian year [d]
    JulianYear = 32,
}

/// One row of the constants table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantEntry {
    pub constant: AstroConstant,
    pub value: f64,
    pub description: &'static str,
}

const fn entry(constant: AstroConstant, value: f64, description: &'static str) -> ConstantEntry {
    ConstantEntry {
        constant,
        value,
        description,
    }
}

/// The constants table, sorted by identifier.
static ASTRO_CONSTANTS: [ConstantEntry; 31] = {
    use AstroConstant::*;
    [
        entry(GravitationalConstant, 6.67259e-20, "Universal gravity constant G [km^3/(kg*s^2)]"),
        entry(AstronomicalUnit, 149597870.691, "Astronomical Unit [km]"),
        entry(SunRadius, 6.955e5, "Sun mean radius [km]"),
        entry(SunGravParam, 1.32712440017987e11, "Sun planetary constant [km^3/s^2]"),
        entry(SpeedOfLight, 299792.458, "Speed of light in vacuum [km/s]"),
        entry(StandardGravity, 9.80665, "Standard free fall [m/s^2]"),
        entry(EarthMoonDistance, 384400.0, "Mean distance Earth-Moon [km]"),
        entry(EclipticObliquity, 84381.412 * RADSEC, "Obliquity of the ecliptic at J2000 [rad]"),
        entry(EarthJ2, 0.1082626925638815e-2, "Earth J2 (JGM-2, Re = 6378.1363 km) [-]"),
        entry(MercuryGravParam, 2.203208e4, "Mercury planetary constant [km^3/s^2]"),
        entry(VenusGravParam, 3.24858599e5, "Venus planetary constant [km^3/s^2]"),
        entry(EarthGravParam, 3.98600433e5, "Earth planetary constant [km^3/s^2]"),
        entry(MarsGravParam, 4.2828314e4, "Mars planetary constant [km^3/s^2]"),
        entry(JupiterGravParam, 1.26712767863e8, "Jupiter planetary constant [km^3/s^2]"),
        entry(SaturnGravParam, 3.79406260630e7, "Saturn planetary constant [km^3/s^2]"),
        entry(UranusGravParam, 5.79454900700e6, "Uranus planetary constant [km^3/s^2]"),
        entry(NeptuneGravParam, 6.83653406400e6, "Neptune planetary constant [km^3/s^2]"),
        entry(PlutoGravParam, 9.81601e2, "Pluto planetary constant [km^3/s^2]"),
        entry(MoonGravParam, 4902.801, "Moon planetary constant [km^3/s^2]"),
        entry(MercuryRadius, 2439.7, "Mercury mean radius [km]"),
        entry(VenusRadius, 6051.8, "Venus mean radius [km]"),
        entry(EarthRadius, 6371.01, "Earth mean radius [km]"),
        entry(MarsRadius, 3389.9, "Mars mean radius [km]"),
        entry(JupiterRadius, 69911.0, "Jupiter mean radius [km]"),
        entry(SaturnRadius, 58232.0, "Saturn mean radius [km]"),
        entry(UranusRadius, 25362.0, "Uranus mean radius [km]"),
        entry(NeptuneRadius, 24624.0, "Neptune mean radius [km]"),
        entry(PlutoRadius, 1151.0, "Pluto mean radius [km]"),
        entry(MoonRadius, 1738.0, "Moon mean radius [km]"),
        entry(SolarFlux, 1367.0, "Energy flux density of the Sun [W/m^2 at 1 AU]"),
        entry(JulianYear, 365.25, "Days in a Julian year [d]"),
    ]
};

fn lookup(id: u32) -> Option<&'static ConstantEntry> {
    ASTRO_CONSTANTS
        .binary_search_by_key(&id, |e| e.constant.id())
        .ok()
        .map(|idx| &ASTRO_CONSTANTS[idx])
}

impl AstroConstant {
    /// Numerical identifier of the constant.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Map a numerical identifier back to its constant, `None` if unassigned.
    pub fn from_id(id: u32) -> Option<Self> {
        lookup(id).map(|e| e.constant)
    }

    /// Value of the constant in the unit given by [`AstroConstant::description`].
    pub fn value(self) -> f64 {
        self.entry().value
    }

    /// Human readable description, including the unit.
    pub fn description(self) -> &'static str {
        self.entry().description
    }

    fn entry(self) -> &'static ConstantEntry {
        // Every variant has exactly one row; checked by `every_variant_has_a_row`.
        &ASTRO_CONSTANTS[ASTRO_CONSTANTS
            .binary_search_by_key(&self.id(), |e| e.constant.id())
            .unwrap_or_else(|_| unreachable!("constant {self:?} missing from the table"))]
    }

    /// Iterate over the whole table in identifier order.
    pub fn all() -> impl Iterator<Item = &'static ConstantEntry> {
        ASTRO_CONSTANTS.iter()
    }
}

impl fmt::Display for AstroConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:>2}] {} = {}", self.id(), self.description(), self.value())
    }
}

/// Lenient lookup of a constant by identifier.
///
/// Unknown identifiers are **not** an error: a warning is logged and `0.0` is
/// returned. See [`try_astro_constant`] for the strict variant.
pub fn astro_constant(id: u32) -> f64 {
    match lookup(id) {
        Some(e) => e.value,
        None => {
            log::warn!("Constant identifier {id} is not defined, returning 0");
            0.0
        }
    }
}

/// Lenient lookup of several constants at once, in the order of `ids`.
pub fn astro_constants(ids: &[u32]) -> Vec<f64> {
    ids.iter().map(|&id| astro_constant(id)).collect()
}

/// Strict lookup of a constant by identifier.
///
/// Errors
/// ------
/// * [`AstroError::UnknownConstant`] if `id` is not assigned.
pub fn try_astro_constant(id: u32) -> Result<f64, AstroError> {
    lookup(id)
        .map(|e| e.value)
        .ok_or(AstroError::UnknownConstant(id))
}

#[cfg(test)]
mod constants_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn table_is_sorted_and_unique() {
        let ids: Vec<u32> = AstroConstant::all().map(|e| e.constant.id()).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
        assert_eq!(ids.len(), 31);
    }

    #[test]
    fn every_variant_has_a_row() {
        for id in (1..=9).chain(11..=32) {
            let c = AstroConstant::from_id(id).expect("assigned identifier");
            assert_eq!(c.id(), id);
            assert_eq!(c.value(), astro_constant(id));
        }
    }

    #[test]
    fn known_values() {
        assert_eq!(astro_constant(13), 398600.433);
        assert_eq!(astro_constant(4), 1.32712440017987e11);
        assert_eq!(astro_constant(9), 0.1082626925638815e-2);
        assert_eq!(astro_constant(32), 365.25);
        assert_relative_eq!(
            astro_constant(8),
            84381.412 / 3600.0 * std::f64::consts::PI / 180.0,
            max_relative = 1e-15
        );
    }

    #[test]
    fn unknown_identifier_is_lenient_zero() {
        assert_eq!(astro_constant(10), 0.0);
        assert_eq!(astro_constant(0), 0.0);
        assert_eq!(astro_constant(999), 0.0);
        assert!(AstroConstant::from_id(10).is_none());
    }

    #[test]
    fn unknown_identifier_is_strict_error() {
        assert_eq!(try_astro_constant(10), Err(AstroError::UnknownConstant(10)));
        assert_eq!(try_astro_constant(23), Ok(6371.01));
    }

    #[test]
    fn batch_lookup_keeps_order() {
        let values = astro_constants(&[23, 13, 10, 9]);
        assert_eq!(values, vec![6371.01, 398600.433, 0.0, 0.1082626925638815e-2]);
        assert!(astro_constants(&[]).is_empty());
    }

    #[test]
    fn display_shows_id_and_unit() {
        let s = AstroConstant::EarthGravParam.to_string();
        assert!(s.starts_with("[13]"));
        assert!(s.contains("km^3/s^2"));
    }
}
