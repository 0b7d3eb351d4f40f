use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum AstroError {
    #[error("Invalid gravitational parameter (must be finite and > 0): {0}")]
    InvalidGravitationalParameter(f64),

    #[error("Non-finite value in input: {0}")]
    NonFiniteInput(&'static str),

    #[error("Invalid orbital elements: {0}")]
    InvalidElements(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Position vector has zero norm (object at the center of attraction)")]
    ZeroPosition,

    #[error("Velocity vector has zero norm")]
    ZeroVelocity,

    #[error("Angular momentum is zero (rectilinear motion), orbital plane undefined")]
    ZeroAngularMomentum,

    #[error("Specific energy is zero (parabolic trajectory), semi-major axis is not finite")]
    ParabolicTrajectory,

    #[error("Circular orbit: argument of pericenter and true anomaly are undefined")]
    CircularOrbit,

    #[error("Equatorial orbit: right ascension of the ascending node is undefined")]
    EquatorialOrbit,

    #[error(
        "True anomaly {true_anomaly} rad is unreachable for eccentricity {eccentricity} (1 + e·cos θ ≤ 0)"
    )]
    UnreachableTrueAnomaly {
        eccentricity: f64,
        true_anomaly: f64,
    },

    #[error("Constant identifier {0} is not defined")]
    UnknownConstant(u32),
}

impl PartialEq for AstroError {
    fn eq(&self, other: &Self) -> bool {
        use AstroError::*;
        match (self, other) {
            (InvalidGravitationalParameter(a), InvalidGravitationalParameter(b)) => {
                // NaN payloads still denote the same failure
                a == b || (a.is_nan() && b.is_nan())
            }
            (NonFiniteInput(a), NonFiniteInput(b)) => a == b,
            (InvalidElements(a), InvalidElements(b)) => a == b,
            (InvalidParameter(a), InvalidParameter(b)) => a == b,
            (UnknownConstant(a), UnknownConstant(b)) => a == b,
            (
                UnreachableTrueAnomaly {
                    eccentricity: e1,
                    true_anomaly: t1,
                },
                UnreachableTrueAnomaly {
                    eccentricity: e2,
                    true_anomaly: t2,
                },
            ) => e1 == e2 && t1 == t2,

            // Unit variants
            (ZeroPosition, ZeroPosition) => true,
            (ZeroVelocity, ZeroVelocity) => true,
            (ZeroAngularMomentum, ZeroAngularMomentum) => true,
            (ParabolicTrajectory, ParabolicTrajectory) => true,
            (CircularOrbit, CircularOrbit) => true,
            (EquatorialOrbit, EquatorialOrbit) => true,

            _ => false,
        }
    }
}
