//! Fixed-size row-major matrices.
//!
//! All shapes share the generic [`Matrix<R, C>`](Matrix) type. Operations whose
//! formula depends on the shape (determinant, inverse, adjugate) live on the
//! square aliases only.
//!
//! | Alias | Shape | Typical use |
//! |-------|-------|-------------|
//! | [`Matrix2x1`] | 2x1 | 2D column vector |
//! | [`Matrix2x2`] | 2x2 | 2D rotation and scale |
//! | [`Matrix3x1`] | 3x1 | 3D column vector |
//! | [`Matrix3x3`] | 3x3 | 3D rotation and scale |
//! | [`Matrix4x1`] | 4x1 | homogeneous point |
//! | [`Matrix4x3`] | 4x3 | affine basis with a translation row |
//! | [`Matrix4x4`] | 4x4 | homogeneous transform, view matrix |

mod base;
mod ops;
#[cfg(feature = "serde")]
mod serde_;
mod square;

pub use base::Matrix;

pub type Matrix2x1 = Matrix<2, 1>;
pub type Matrix2x2 = Matrix<2, 2>;
pub type Matrix3x1 = Matrix<3, 1>;
pub type Matrix3x3 = Matrix<3, 3>;
pub type Matrix4x1 = Matrix<4, 1>;
pub type Matrix4x3 = Matrix<4, 3>;
pub type Matrix4x4 = Matrix<4, 4>;
