//! Elementary rotations and the frame changes built from them.
//!
//! * [`rotmt`] – rotation of a vector about one coordinate axis.
//! * [`perifocal_to_equatorial`] – maps the orbital (perifocal) frame to the
//!   inertial equatorial frame from `(Ω, i, ω)`.

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::Radian;

/// Coordinate axis of an elementary rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Build the rotation matrix of angle `alpha` about `axis`.
///
/// Arguments
/// ---------
/// * `alpha`: rotation angle in radians, positive counter-clockwise.
/// * `axis`: rotation axis.
///
/// Return
/// ------
/// A 3×3 orthonormal matrix `R` such that the rotated vector is `x' = R · x`.
/// The rotation is applied to the vector in a fixed frame; the matching change of
/// basis is `R.transpose()`.
pub fn rotmt(alpha: Radian, axis: Axis) -> Matrix3<f64> {
    let axis = match axis {
        Axis::X => Vector3::x_axis(),
        Axis::Y => Vector3::y_axis(),
        Axis::Z => Vector3::z_axis(),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Rotation from the perifocal frame to the inertial equatorial frame.
///
/// The change of basis equatorial → perifocal is the 3-1-3 sequence
/// `T = R3(ω) · R1(i) · R3(Ω)` (rotate by Ω about the pole, by i about the line of
/// nodes, then by ω about the angular momentum). This returns `Tᵀ`, which is
/// what maps perifocal vectors into the equatorial frame.
///
/// Arguments
/// ---------
/// * `ascending_node_longitude`: Ω (rad).
/// * `inclination`: i (rad).
/// * `periapsis_argument`: ω (rad).
pub fn perifocal_to_equatorial(
    ascending_node_longitude: Radian,
    inclination: Radian,
    periapsis_argument: Radian,
) -> Matrix3<f64> {
    // Tᵀ = R3(Ω)ᵀ R1(i)ᵀ R3(ω)ᵀ, and the transposed passive rotations are the
    // active ones built by rotmt.
    rotmt(ascending_node_longitude, Axis::Z)
        * rotmt(inclination, Axis::X)
        * rotmt(periapsis_argument, Axis::Z)
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rotmt_quarter_turn() {
        let x = Vector3::x();
        assert_relative_eq!(rotmt(FRAC_PI_2, Axis::Z) * x, Vector3::y(), epsilon = 1e-15);
        assert_relative_eq!(
            rotmt(FRAC_PI_2, Axis::X) * Vector3::y(),
            Vector3::z(),
            epsilon = 1e-15
        );
        assert_relative_eq!(
            rotmt(FRAC_PI_2, Axis::Y) * Vector3::z(),
            Vector3::x(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn perifocal_rotation_is_orthonormal() {
        let m = perifocal_to_equatorial(0.3, 1.1, 2.5);
        assert_relative_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-14);
        assert_relative_eq!(m.determinant(), 1.0, epsilon = 1e-14);
    }

    #[test]
    fn perifocal_axes_land_where_expected() {
        // Ω = 90°, i = 90°, ω = 0: pericenter on the node line (+y),
        // angular momentum along +x.
        let m = perifocal_to_equatorial(FRAC_PI_2, FRAC_PI_2, 0.0);
        assert_relative_eq!(m * Vector3::x(), Vector3::y(), epsilon = 1e-15);
        assert_relative_eq!(m * Vector3::z(), Vector3::x(), epsilon = 1e-15);
    }

    #[test]
    fn perifocal_rotation_matches_passive_product() {
        let (om, inc, w) = (0.4_f64, 0.9_f64, 1.7_f64);
        let r3 = |a: f64| {
            Matrix3::new(a.cos(), a.sin(), 0.0, -a.sin(), a.cos(), 0.0, 0.0, 0.0, 1.0)
        };
        let r1 = |a: f64| {
            Matrix3::new(1.0, 0.0, 0.0, 0.0, a.cos(), a.sin(), 0.0, -a.sin(), a.cos())
        };
        let t = r3(w) * r1(inc) * r3(om);
        assert_relative_eq!(
            perifocal_to_equatorial(om, inc, w),
            t.transpose(),
            epsilon = 1e-15
        );
    }
}
