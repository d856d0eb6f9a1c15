//! 2D and 3D vectors, plus the look-at helpers built on them.
//!
//! - [`Vector2D`]: planar vectors and points
//! - [`Vector3D`]: spatial vectors, normals and points
//! - [`look_at_2d`]: angle to turn from one target to another
//! - [`look_at_3d`]: view-basis matrix for a camera at a position

mod vector2;
mod vector3;

pub use vector2::Vector2D;
pub use vector3::Vector3D;

use crate::utils::clamped_acos;
use crate::{MathResult, Matrix4x4};

/// Angle in radians between the directions `eye → old_target` and `eye → new_target`.
///
/// The dot product of the two unit directions is clamped to `[-1, 1]` before `acos`, so
/// rounding never produces NaN. The result is unsigned, in `[0, π]`. If `eye` coincides
/// with either target the direction is undefined and the result is NaN; use
/// [`try_look_at_2d`] to detect that.
///
/// ```
/// use mapgen_math::{look_at_2d, Vector2D};
/// use std::f64::consts::FRAC_PI_2;
///
/// let eye = Vector2D::zeros();
/// let angle = look_at_2d(&Vector2D::new(5.0, 0.0), &Vector2D::new(0.0, 2.0), &eye);
/// assert!((angle - FRAC_PI_2).abs() < 1e-15);
/// ```
pub fn look_at_2d(old_target: &Vector2D, new_target: &Vector2D, eye: &Vector2D) -> f64 {
    let to_old = eye.way_to(old_target).unit_vector();
    let to_new = eye.way_to(new_target).unit_vector();
    clamped_acos(to_old.dot(&to_new))
}

/// Checked form of [`look_at_2d`]; fails when either direction has zero length.
pub fn try_look_at_2d(old_target: &Vector2D, new_target: &Vector2D, eye: &Vector2D) -> MathResult<f64> {
    let to_old = eye.way_to(old_target).try_unit_vector()?;
    let to_new = eye.way_to(new_target).try_unit_vector()?;
    Ok(clamped_acos(to_old.dot(&to_new)))
}

/// Builds a right-handed view basis for a camera at `position` looking at `target`.
///
/// ```text
/// z = unit(position - target)
/// x = up × z
/// y = z × x
///
/// | x.x  y.x  z.x  position.x |
/// | x.y  y.y  z.y  position.y |
/// | x.z  y.z  z.z  position.z |
/// |  0    0    0       1      |
/// ```
///
/// `x` is only unit length when `up` is a unit vector perpendicular to `z`. When `up`
/// is parallel to the viewing direction the basis collapses and the matrix is singular.
///
/// ```
/// use mapgen_math::{look_at_3d, Vector3D};
///
/// let view = look_at_3d(
///     &Vector3D::new(0.0, 0.0, 5.0),
///     &Vector3D::zeros(),
///     &Vector3D::y_axis(),
/// );
/// assert_eq!(view.get(0, 0), 1.0);
/// assert_eq!(view.get(2, 2), 1.0);
/// assert_eq!(view.get(2, 3), 5.0);
/// ```
pub fn look_at_3d(position: &Vector3D, target: &Vector3D, up: &Vector3D) -> Matrix4x4 {
    let z_axis = (*position - *target).unit_vector();
    let x_axis = up.cross(&z_axis);
    let y_axis = z_axis.cross(&x_axis);

    Matrix4x4::from_array([
        [x_axis.x, y_axis.x, z_axis.x, position.x],
        [x_axis.y, y_axis.y, z_axis.y, position.y],
        [x_axis.z, y_axis.z, z_axis.z, position.z],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HALF_PI, PI};
    use crate::DomainErrorKind;

    #[test]
    fn test_look_at_2d_right_angle() {
        let eye = Vector2D::new(1.0, 1.0);
        let angle = look_at_2d(&Vector2D::new(3.0, 1.0), &Vector2D::new(1.0, -4.0), &eye);
        assert!((angle - HALF_PI).abs() < 1e-15);
    }

    #[test]
    fn test_look_at_2d_same_and_opposite() {
        let eye = Vector2D::zeros();
        let a = Vector2D::new(0.3, 0.7);
        assert!(look_at_2d(&a, &a.scaled(3.0), &eye) < 1e-7);
        assert!((look_at_2d(&a, &a.scaled(-2.0), &eye) - PI).abs() < 1e-7);
    }

    #[test]
    fn test_look_at_2d_never_nan_for_parallel_input() {
        // Unit vectors whose dot product rounds to just above 1.
        let eye = Vector2D::zeros();
        let a = Vector2D::new(0.1, 0.7);
        let b = Vector2D::new(0.1 * 7.0, 0.7 * 7.0);
        let angle = look_at_2d(&a, &b, &eye);
        assert!(angle.is_finite());
        assert!(angle < 1e-7);
    }

    #[test]
    fn test_try_look_at_2d() {
        let eye = Vector2D::new(2.0, 2.0);
        let err = try_look_at_2d(&eye, &Vector2D::zeros(), &eye).unwrap_err();
        assert_eq!(err.kind(), Some(&DomainErrorKind::ZeroNorm));

        let checked = try_look_at_2d(&Vector2D::zeros(), &Vector2D::new(2.0, 5.0), &eye).unwrap();
        let unchecked = look_at_2d(&Vector2D::zeros(), &Vector2D::new(2.0, 5.0), &eye);
        assert_eq!(checked, unchecked);
    }

    #[test]
    fn test_look_at_3d_basis() {
        let position = Vector3D::new(1.0, 2.0, 3.0);
        let target = Vector3D::new(1.0, 2.0, -7.0);
        let view = look_at_3d(&position, &target, &Vector3D::y_axis());

        // Columns: x, y, z axes and the position
        assert_eq!(view.get(0, 0), 1.0);
        assert_eq!(view.get(1, 1), 1.0);
        assert_eq!(view.get(2, 2), 1.0);
        assert_eq!(view.get(0, 3), 1.0);
        assert_eq!(view.get(1, 3), 2.0);
        assert_eq!(view.get(2, 3), 3.0);
        assert_eq!(view.get(3, 3), 1.0);
        assert_eq!(view.get(3, 0), 0.0);
    }

    #[test]
    fn test_look_at_3d_orthonormal_for_perpendicular_up() {
        let view = look_at_3d(
            &Vector3D::new(4.0, 0.0, 0.0),
            &Vector3D::zeros(),
            &Vector3D::z_axis(),
        );
        let basis = view.submatrix_3x3();
        assert!(basis.is_rotation_matrix(1e-14));
    }

    #[test]
    fn test_look_at_3d_parallel_up_is_singular() {
        let view = look_at_3d(
            &Vector3D::new(0.0, 5.0, 0.0),
            &Vector3D::zeros(),
            &Vector3D::y_axis(),
        );
        assert_eq!(view.determinant(), 0.0);
    }
}
