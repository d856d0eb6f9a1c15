//! Scale, rotation and translation builders.
//!
//! Each transform comes in two forms: a `*_matrix*` builder that returns the matrix for
//! the caller to compose, and an applier that multiplies it against a column matrix and
//! returns the transformed column. Appliers never mutate their input; the two
//! `translate_*_in_place` wrappers are the only mutating entry points.
//!
//! # Rotation Convention
//!
//! All rotations act on column vectors in a right-handed frame. A positive angle is
//! anticlockwise when looking down the rotation axis towards the origin, so a quarter
//! turn about Z takes X onto Y:
//!
//! ```
//! use mapgen_math::transform::rotate_3d_z;
//! use mapgen_math::Vector3D;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let rotated = Vector3D::from(rotate_3d_z(&Vector3D::x_axis().into(), FRAC_PI_2));
//! assert!((rotated - Vector3D::y_axis()).magnitude() < 1e-15);
//! ```
//!
//! The 2D rotations name their direction explicitly:
//! [`rotation_matrix_2d_anticlockwise`] is the standard positive rotation and
//! [`rotation_matrix_2d_clockwise`] is its transpose.

use crate::{
    Matrix2x1, Matrix2x2, Matrix3x1, Matrix3x3, Matrix4x1, Matrix4x4, Vector2D, Vector3D,
};

/// Diagonal 2x2 scaling matrix.
pub fn scaling_matrix_2x2(x: f64, y: f64) -> Matrix2x2 {
    Matrix2x2::from_array([[x, 0.0], [0.0, y]])
}

/// Diagonal 3x3 scaling matrix.
pub fn scaling_matrix_3x3(x: f64, y: f64, z: f64) -> Matrix3x3 {
    Matrix3x3::from_array([[x, 0.0, 0.0], [0.0, y, 0.0], [0.0, 0.0, z]])
}

/// Diagonal 4x4 scaling matrix; `w` scales the homogeneous coordinate.
pub fn scaling_matrix_4x4(x: f64, y: f64, z: f64, w: f64) -> Matrix4x4 {
    let mut m = Matrix4x4::identity();
    m.set(0, 0, x);
    m.set(1, 1, y);
    m.set(2, 2, z);
    m.set(3, 3, w);
    m
}

pub fn scale_2d(column: &Matrix2x1, x: f64, y: f64) -> Matrix2x1 {
    scaling_matrix_2x2(x, y) * *column
}

pub fn scale_3d(column: &Matrix3x1, x: f64, y: f64, z: f64) -> Matrix3x1 {
    scaling_matrix_3x3(x, y, z) * *column
}

pub fn scale_4d(column: &Matrix4x1, x: f64, y: f64, z: f64, w: f64) -> Matrix4x1 {
    scaling_matrix_4x4(x, y, z, w) * *column
}

/// `| cos  sin |`
/// `| -sin cos |`
pub fn rotation_matrix_2d_clockwise(theta: f64) -> Matrix2x2 {
    let (s, c) = (libm::sin(theta), libm::cos(theta));
    Matrix2x2::from_array([[c, s], [-s, c]])
}

/// `| cos -sin |`
/// `| sin  cos |`
pub fn rotation_matrix_2d_anticlockwise(theta: f64) -> Matrix2x2 {
    let (s, c) = (libm::sin(theta), libm::cos(theta));
    Matrix2x2::from_array([[c, -s], [s, c]])
}

pub fn rotate_2d_clockwise(column: &Matrix2x1, theta: f64) -> Matrix2x1 {
    rotation_matrix_2d_clockwise(theta) * *column
}

pub fn rotate_2d_anticlockwise(column: &Matrix2x1, theta: f64) -> Matrix2x1 {
    rotation_matrix_2d_anticlockwise(theta) * *column
}

/// Rotation of `theta` radians about the X axis.
pub fn rotation_matrix_3d_x(theta: f64) -> Matrix3x3 {
    let (s, c) = (libm::sin(theta), libm::cos(theta));
    Matrix3x3::from_array([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
}

/// Rotation of `theta` radians about the Y axis.
pub fn rotation_matrix_3d_y(theta: f64) -> Matrix3x3 {
    let (s, c) = (libm::sin(theta), libm::cos(theta));
    Matrix3x3::from_array([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
}

/// Rotation of `theta` radians about the Z axis.
pub fn rotation_matrix_3d_z(theta: f64) -> Matrix3x3 {
    let (s, c) = (libm::sin(theta), libm::cos(theta));
    Matrix3x3::from_array([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
}

pub fn rotate_3d_x(column: &Matrix3x1, theta: f64) -> Matrix3x1 {
    rotation_matrix_3d_x(theta) * *column
}

pub fn rotate_3d_y(column: &Matrix3x1, theta: f64) -> Matrix3x1 {
    rotation_matrix_3d_y(theta) * *column
}

pub fn rotate_3d_z(column: &Matrix3x1, theta: f64) -> Matrix3x1 {
    rotation_matrix_3d_z(theta) * *column
}

/// Rotation of `theta` radians about an arbitrary axis (Rodrigues' formula).
///
/// `axis` must already be unit length; it is not normalised here, and a non-unit axis
/// produces a matrix that also scales and shears.
///
/// ```
/// use mapgen_math::transform::{rotation_matrix_3d_y, rotation_matrix_custom_axis};
/// use mapgen_math::Vector3D;
///
/// let about_y = rotation_matrix_custom_axis(&Vector3D::y_axis(), 0.4);
/// assert!(about_y.approx_eq(&rotation_matrix_3d_y(0.4), 1e-15));
/// ```
pub fn rotation_matrix_custom_axis(axis: &Vector3D, theta: f64) -> Matrix3x3 {
    let (s, c) = (libm::sin(theta), libm::cos(theta));
    let t = 1.0 - c;
    let Vector3D { x, y, z } = *axis;

    Matrix3x3::from_array([
        [c + t * x * x, t * x * y - s * z, t * x * z + s * y],
        [t * x * y + s * z, c + t * y * y, t * y * z - s * x],
        [t * x * z - s * y, t * y * z + s * x, c + t * z * z],
    ])
}

/// [`rotation_matrix_custom_axis`] embedded in a homogeneous 4x4 with no translation.
pub fn rotation_matrix_custom_axis_4x4(axis: &Vector3D, theta: f64) -> Matrix4x4 {
    rotation_matrix_custom_axis(axis, theta).to_4x4()
}

/// Rotates `column` about a unit `axis`. See [`rotation_matrix_custom_axis`].
pub fn rotate_custom_axis(axis: &Vector3D, theta: f64, column: &Matrix3x1) -> Matrix3x1 {
    rotation_matrix_custom_axis(axis, theta) * *column
}

/// Homogeneous translation by `offset`, stored in the last column.
pub fn translation_matrix_4x4(offset: &Vector3D) -> Matrix4x4 {
    let mut m = Matrix4x4::identity();
    m.set(0, 3, offset.x);
    m.set(1, 3, offset.y);
    m.set(2, 3, offset.z);
    m
}

/// Returns `column + offset`.
pub fn translate_2d(column: &Matrix2x1, offset: &Vector2D) -> Matrix2x1 {
    *column + Matrix2x1::from(*offset)
}

/// Returns `column + offset`.
pub fn translate_3d(column: &Matrix3x1, offset: &Vector3D) -> Matrix3x1 {
    *column + Matrix3x1::from(*offset)
}

/// Adds `offset` to `column` in place.
pub fn translate_2d_in_place(column: &mut Matrix2x1, offset: &Vector2D) {
    *column = translate_2d(column, offset);
}

/// Adds `offset` to `column` in place.
pub fn translate_3d_in_place(column: &mut Matrix3x1, offset: &Vector3D) {
    *column = translate_3d(column, offset);
}
