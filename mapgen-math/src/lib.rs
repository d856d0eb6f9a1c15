//! Fixed-size linear algebra for real-time graphics and texture-map generation.
//!
//! `mapgen-math` provides the small, stack-allocated numeric types that height-map and
//! normal-map generation are built from: 2D/3D vectors, matrices up to 4×4,
//! quaternions, transform builders and interpolation. Everything is `f64`, `Copy`,
//! and returned by value.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`vector`] | [`Vector2D`], [`Vector3D`], look-at helpers |
//! | [`matrix`] | Generic [`Matrix<R, C>`](Matrix) and the 2x1 … 4x4 aliases |
//! | [`quaternion`] | [`Quaternion`] algebra and rotation-matrix conversion |
//! | [`transform`] | Scale, rotation (axis-aligned and Rodrigues) and translation builders |
//! | [`interpolation`] | `lerp`, `slerp`, bilinear/trilinear interpolation, weights |
//! | [`polar`] | [`PolarCoordinate`] ↔ Cartesian |
//! | [`utils`] | Angle conversion, clamped and checked `acos`/`asin` |
//! | [`constants`] | π multiples, unit conversions, tolerances |
//! | [`errors`] | [`MathError`] and [`MathResult`] |
//!
//! # Example
//!
//! ```
//! use mapgen_math::transform::rotation_matrix_3d_z;
//! use mapgen_math::{Matrix3x3, Quaternion, Vector3D};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let q = Quaternion::from_axis_angle(&Vector3D::z_axis(), FRAC_PI_2);
//! let m: Matrix3x3 = q.to_matrix_3x3();
//! assert!(m.approx_eq(&rotation_matrix_3d_z(FRAC_PI_2), 1e-15));
//!
//! let inverse = m.inverse();
//! assert!((m * inverse).approx_eq(&Matrix3x3::identity(), 1e-14));
//! ```
//!
//! # Design Notes
//!
//! - **Garbage in, garbage out**: the plain operations never fail. Normalising a zero
//!   vector or inverting a singular matrix yields `NaN`/`Inf`. The `try_*` and
//!   `checked_*` variants return [`MathResult`] instead and agree with the plain
//!   operation on every well-formed input.
//!
//! - **Shapes in the type**: matrix dimensions are const generics, so shape mismatches
//!   are compile errors.
//!
//! - **Radians internally**: every angle argument is in radians except
//!   [`PolarCoordinate::angle`], which is in degrees.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every value type. Matrices serialize as
//!   nested row arrays.

pub mod constants;
pub mod errors;
pub mod interpolation;
pub mod matrix;
pub mod polar;
pub mod quaternion;
pub mod transform;
pub mod utils;
pub mod vector;

pub use errors::{DomainErrorKind, MathError, MathResult};
pub use interpolation::{bi_lerp, interpolation_weight, lerp, slerp, tri_lerp, Lerp};
pub use matrix::{
    Matrix, Matrix2x1, Matrix2x2, Matrix3x1, Matrix3x3, Matrix4x1, Matrix4x3, Matrix4x4,
};
pub use polar::PolarCoordinate;
pub use quaternion::Quaternion;
pub use vector::{look_at_2d, look_at_3d, try_look_at_2d, Vector2D, Vector3D};

pub mod test_helpers;
