//! Two-body orbital mechanics primitives.
//!
//! Conversions between Cartesian states and classical Keplerian elements,
//! point-mass and J2 equations of motion for an external ODE integrator, and a
//! table of astrodynamical constants. Units are km, km/s, radians and km³/s².
pub mod astro_errors;
pub mod constants;
pub mod kepler;
pub mod orb_elem;
pub mod orbit_type;
pub mod ref_system;
pub mod two_body;

pub use astro_errors::AstroError;
pub use orb_elem::{cartesian_to_keplerian, cartesian_to_keplerian_with, keplerian_to_cartesian};
pub use orbit_type::{
    cartesian_state::CartesianState, keplerian_element::KeplerianElements, ConversionParams,
};
pub use two_body::{j2_derivative, two_body_derivative, DynamicsModel, J2Perturbed, PointMass};
