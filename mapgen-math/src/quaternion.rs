//! Quaternions for 3D rotation.
//!
//! A [`Quaternion`] is `w + xi + yj + zk`: a real scalar part `w` and a vector part
//! `(x, y, z)`. Unit quaternions represent rotations; a rotation of `θ` about the unit
//! axis `u` is `(cos θ/2, u·sin θ/2)`.
//!
//! Products follow the Hamilton convention, so `q1 * q2` applies `q2` first and then
//! `q1` when used as a rotation.
//!
//! ```
//! use mapgen_math::{Quaternion, Vector3D};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let quarter_turn = Quaternion::from_axis_angle(&Vector3D::z_axis(), FRAC_PI_2);
//! let v = quarter_turn.rotate_vector(&Vector3D::x_axis());
//!
//! assert!((v.x - 0.0).abs() < 1e-15);
//! assert!((v.y - 1.0).abs() < 1e-15);
//! ```
//!
//! # Normalisation policy
//!
//! [`normalise`](Quaternion::normalise) returns the identity rotation when the norm is
//! zero, so interpolation chains never pick up NaN from a degenerate key.
//! [`try_normalise`](Quaternion::try_normalise) reports the zero norm instead.

use crate::{DomainErrorKind, MathError, MathResult, Matrix3x3, Matrix4x4, Vector3D};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A quaternion `w + xi + yj + zk`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    #[inline]
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Builds a quaternion from a scalar part and a vector part.
    #[inline]
    pub fn from_parts(w: f64, v: &Vector3D) -> Self {
        Self::new(w, v.x, v.y, v.z)
    }

    /// The multiplicative identity `1 + 0i + 0j + 0k` (no rotation).
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// The additive identity, all components zero.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalised here; a zero axis gives non-finite components.
    pub fn from_axis_angle(axis: &Vector3D, angle: f64) -> Self {
        let half = 0.5 * angle;
        let v = axis.unit_vector().scaled(libm::sin(half));
        Self::from_parts(libm::cos(half), &v)
    }

    /// Returns the vector part `(x, y, z)`.
    #[inline]
    pub fn vector_part(&self) -> Vector3D {
        Vector3D::new(self.x, self.y, self.z)
    }

    /// Negates the vector part and keeps the scalar part.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Returns `sqrt(w² + x² + y² + z²)`.
    #[inline]
    pub fn norm(&self) -> f64 {
        libm::sqrt(self.norm_squared())
    }

    #[inline]
    pub fn norm_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Multiplies all four components by `scale`.
    #[inline]
    pub fn scale(&self, scale: f64) -> Self {
        Self::new(self.w * scale, self.x * scale, self.y * scale, self.z * scale)
    }

    /// Divides by the norm, or returns [`identity`](Self::identity) when the norm is zero.
    ///
    /// ```
    /// use mapgen_math::Quaternion;
    ///
    /// let q = Quaternion::new(0.0, 3.0, 0.0, 4.0).normalise();
    /// assert!((q.norm() - 1.0).abs() < 1e-15);
    ///
    /// assert_eq!(Quaternion::zero().normalise(), Quaternion::identity());
    /// ```
    pub fn normalise(&self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            return Self::identity();
        }
        self.scale(1.0 / norm)
    }

    /// Checked form of [`normalise`](Self::normalise); a zero or non-finite norm is an
    /// error instead of the identity fallback.
    pub fn try_normalise(&self) -> MathResult<Self> {
        let norm = self.norm();
        check_norm("Quaternion::try_normalise", norm)?;
        Ok(self.scale(1.0 / norm))
    }

    /// Hamilton product `self · other`.
    ///
    /// Scalar part `a.w·b.w − a.v·b.v`, vector part `a.w·b.v + b.w·a.v + a.v × b.v`.
    /// Not commutative.
    pub fn multiply(&self, other: &Self) -> Self {
        let a = self.vector_part();
        let b = other.vector_part();

        let w = self.w * other.w - a.dot(&b);
        let v = b.scaled(self.w) + a.scaled(other.w) + a.cross(&b);
        Self::from_parts(w, &v)
    }

    /// Inverse `conjugate / norm`.
    ///
    /// For a unit quaternion this is the conjugate, which undoes the rotation. For other
    /// quaternions the result has unit norm and is not the multiplicative inverse; use
    /// [`reciprocal`](Self::reciprocal) for that. A zero quaternion gives non-finite
    /// components; see [`try_inverse`](Self::try_inverse).
    pub fn inverse(&self) -> Self {
        self.conjugate().scale(1.0 / self.norm())
    }

    /// Checked form of [`inverse`](Self::inverse).
    pub fn try_inverse(&self) -> MathResult<Self> {
        let norm = self.norm();
        check_norm("Quaternion::try_inverse", norm)?;
        Ok(self.conjugate().scale(1.0 / norm))
    }

    /// Multiplicative inverse `conjugate / norm²`, so `q * q.reciprocal()` is the identity
    /// for any non-zero `q`.
    pub fn reciprocal(&self) -> Self {
        self.conjugate().scale(1.0 / self.norm_squared())
    }

    /// Checked form of [`reciprocal`](Self::reciprocal).
    pub fn try_reciprocal(&self) -> MathResult<Self> {
        check_norm("Quaternion::try_reciprocal", self.norm())?;
        Ok(self.reciprocal())
    }

    /// Rotation matrix for this quaternion, which is assumed to be unit length.
    ///
    /// The matrix acts on column vectors: `q.to_matrix_3x3() * v` rotates `v` the same
    /// way as [`rotate_vector`](Self::rotate_vector).
    pub fn to_matrix_3x3(&self) -> Matrix3x3 {
        let (w, x, y, z) = (self.w, self.x, self.y, self.z);

        let xx = x * x;
        let yy = y * y;
        let zz = z * z;
        let xy = x * y;
        let xz = x * z;
        let yz = y * z;
        let wx = w * x;
        let wy = w * y;
        let wz = w * z;

        Matrix3x3::from_array([
            [1.0 - 2.0 * (yy + zz), 2.0 * (xy - wz), 2.0 * (xz + wy)],
            [2.0 * (xy + wz), 1.0 - 2.0 * (xx + zz), 2.0 * (yz - wx)],
            [2.0 * (xz - wy), 2.0 * (yz + wx), 1.0 - 2.0 * (xx + yy)],
        ])
    }

    /// [`to_matrix_3x3`](Self::to_matrix_3x3) padded with an identity translation row
    /// and column.
    pub fn to_matrix_4x4(&self) -> Matrix4x4 {
        self.to_matrix_3x3().to_4x4()
    }

    /// Rotates `v` by this unit quaternion.
    pub fn rotate_vector(&self, v: &Vector3D) -> Vector3D {
        self.to_matrix_3x3() * *v
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

fn check_norm(operation: &str, norm: f64) -> MathResult<()> {
    if !norm.is_finite() {
        return Err(MathError::domain_error(
            operation,
            DomainErrorKind::NotFinite,
            "quaternion norm is not finite",
        ));
    }
    if norm == 0.0 {
        return Err(MathError::domain_error(
            operation,
            DomainErrorKind::ZeroNorm,
            "quaternion has zero norm",
        ));
    }
    Ok(())
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Add for Quaternion {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.w + rhs.w, self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Quaternion {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.w - rhs.w, self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul for Quaternion {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scale(scalar)
    }
}

impl Mul<Quaternion> for f64 {
    type Output = Quaternion;

    fn mul(self, q: Quaternion) -> Quaternion {
        q.scale(self)
    }
}

impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion({:.9}, {:.9}i, {:.9}j, {:.9}k)",
            self.w, self.x, self.y, self.z
        )
    }
}
