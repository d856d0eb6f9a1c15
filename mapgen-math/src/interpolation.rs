//! Linear, spherical, bilinear and trilinear interpolation.
//!
//! # Endpoints
//!
//! Scalar [`lerp`] is the plain formula `(1 − t)·a + t·b` and extrapolates outside
//! `[0, 1]`. The vector and quaternion forms clamp instead: `t ≤ 0` returns `a` and
//! `t ≥ 1` returns `b` without doing any arithmetic, so the endpoints are reproduced
//! bit for bit. [`slerp`] follows the same endpoint rule.
//!
//! ```
//! use mapgen_math::interpolation::{bi_lerp, interpolation_weight, lerp};
//!
//! assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
//! assert_eq!(bi_lerp(0.0, 10.0, 0.0, 10.0, 0.5, 0.5), 5.0);
//!
//! // Where does 7.5 sit between 5 and 15?
//! assert_eq!(interpolation_weight(5.0, 15.0, 7.5), 0.25);
//! ```

use crate::constants::SLERP_LINEAR_THRESHOLD;
use crate::utils::clamped_acos;
use crate::{Quaternion, Vector2D, Vector3D};
use std::ops::{Add, Mul};

/// Types that can be linearly interpolated.
///
/// Implemented for `f64`, [`Vector2D`], [`Vector3D`] and [`Quaternion`]; see the module
/// docs for how each treats `t` outside `[0, 1]`.
pub trait Lerp: Sized {
    /// Value at fraction `t` of the way from `self` to `other`.
    fn interpolate(&self, other: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    #[inline]
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        (1.0 - t) * self + t * other
    }
}

impl Lerp for Vector2D {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        lerp_linear(*self, *other, t)
    }
}

impl Lerp for Vector3D {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        lerp_linear(*self, *other, t)
    }
}

/// Componentwise interpolation followed by [`normalise`](Quaternion::normalise).
impl Lerp for Quaternion {
    fn interpolate(&self, other: &Self, t: f64) -> Self {
        if t <= 0.0 {
            return *self;
        }
        if t >= 1.0 {
            return *other;
        }
        lerp_linear(*self, *other, t).normalise()
    }
}

/// Linear interpolation between `a` and `b`.
///
/// ```
/// use mapgen_math::interpolation::lerp;
/// use mapgen_math::Vector2D;
///
/// let a = Vector2D::new(0.0, 2.0);
/// let b = Vector2D::new(4.0, 6.0);
/// assert_eq!(lerp(a, b, 0.25), Vector2D::new(1.0, 3.0));
/// assert_eq!(lerp(a, b, 1.5), b);
/// ```
#[inline]
pub fn lerp<T: Lerp>(a: T, b: T, t: f64) -> T {
    a.interpolate(&b, t)
}

/// `(1 − t)·a + t·b` for any type with addition and scalar multiplication.
///
/// No endpoint clamping and no renormalisation.
#[inline]
pub fn lerp_linear<T>(a: T, b: T, t: f64) -> T
where
    T: Add<Output = T> + Mul<f64, Output = T>,
{
    a * (1.0 - t) + b * t
}

/// Spherical linear interpolation between unit quaternions along the shorter arc.
///
/// `t ≤ 0` returns `a` and `t ≥ 1` returns `b` exactly. When `b` lies in the opposite
/// hemisphere it is negated first (same rotation, shorter path). When the two are within
/// [`SLERP_LINEAR_THRESHOLD`] of parallel the result falls back to normalised lerp,
/// where `sin(ω)` would be too close to zero to divide by. The result is renormalised.
///
/// ```
/// use mapgen_math::interpolation::slerp;
/// use mapgen_math::{Quaternion, Vector3D};
/// use std::f64::consts::FRAC_PI_2;
///
/// let a = Quaternion::identity();
/// let b = Quaternion::from_axis_angle(&Vector3D::z_axis(), FRAC_PI_2);
///
/// let halfway = slerp(&a, &b, 0.5);
/// let expected = Quaternion::from_axis_angle(&Vector3D::z_axis(), FRAC_PI_2 / 2.0);
/// assert!((halfway - expected).norm() < 1e-14);
/// ```
pub fn slerp(a: &Quaternion, b: &Quaternion, t: f64) -> Quaternion {
    if t <= 0.0 {
        return *a;
    }
    if t >= 1.0 {
        return *b;
    }

    let mut end = *b;
    let mut dot = a.dot(b);
    if dot < 0.0 {
        end = -end;
        dot = -dot;
    }

    if dot > SLERP_LINEAR_THRESHOLD {
        return lerp_linear(*a, end, t).normalise();
    }

    let omega = clamped_acos(dot);
    let sin_omega = libm::sin(omega);
    let scale_a = libm::sin((1.0 - t) * omega) / sin_omega;
    let scale_b = libm::sin(t * omega) / sin_omega;

    (a.scale(scale_a) + end.scale(scale_b)).normalise()
}

/// Bilinear interpolation over the corners of a unit square.
///
/// `a0`/`a1` are the `y = 0` edge at `x = 0` and `x = 1`, `b0`/`b1` the `y = 1` edge.
pub fn bi_lerp(a0: f64, a1: f64, b0: f64, b1: f64, tx: f64, ty: f64) -> f64 {
    let ax = lerp(a0, a1, tx);
    let bx = lerp(b0, b1, tx);
    lerp(ax, bx, ty)
}

/// Trilinear interpolation over the corners of a unit cube.
///
/// Corner `cXYZ` is the value at `(X, Y, Z)`; the cube is reduced along x, then y,
/// then z.
#[allow(clippy::too_many_arguments)]
pub fn tri_lerp(
    c000: f64,
    c100: f64,
    c010: f64,
    c110: f64,
    c001: f64,
    c101: f64,
    c011: f64,
    c111: f64,
    tx: f64,
    ty: f64,
    tz: f64,
) -> f64 {
    let front = bi_lerp(c000, c100, c010, c110, tx, ty);
    let back = bi_lerp(c001, c101, c011, c111, tx, ty);
    lerp(front, back, tz)
}

/// Position of `x` within `[min, max]` as a fraction: 0 at `min`, 1 at `max`.
///
/// Values outside the range extrapolate. A zero-width range returns 1.0.
pub fn interpolation_weight(min: f64, max: f64, x: f64) -> f64 {
    let range = max - min;
    if range == 0.0 {
        return 1.0;
    }
    (x - min) / range
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HALF_PI, PI};

    #[test]
    fn test_scalar_lerp() {
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        // Scalars extrapolate
        assert_eq!(lerp(10.0, 20.0, 2.0), 30.0);
    }

    #[test]
    fn test_vector_lerp_endpoints_exact() {
        let a = Vector3D::new(0.1, 0.2, 0.3);
        let b = Vector3D::new(-7.7, 1.0 / 3.0, 1e10);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
        assert_eq!(lerp(a, b, -0.5), a);
        assert_eq!(lerp(a, b, 1.5), b);

        let mid = lerp(Vector3D::zeros(), Vector3D::new(2.0, 4.0, 6.0), 0.5);
        assert_eq!(mid, Vector3D::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_quaternion_lerp_renormalises() {
        let a = Quaternion::identity();
        let b = Quaternion::new(0.0, 1.0, 0.0, 0.0);
        let mid = lerp(a, b, 0.5);
        assert!((mid.norm() - 1.0).abs() < 1e-15);
        assert!((mid.w - mid.x).abs() < 1e-15);

        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    fn test_lerp_linear_generic() {
        let a = Vector2D::new(1.0, 1.0);
        let b = Vector2D::new(3.0, 5.0);
        assert_eq!(lerp_linear(a, b, 0.5), Vector2D::new(2.0, 3.0));
        assert_eq!(lerp_linear(a, b, 2.0), Vector2D::new(5.0, 9.0));
    }

    #[test]
    fn test_slerp_endpoints_exact() {
        let a = Quaternion::from_axis_angle(&Vector3D::x_axis(), 0.3);
        let b = Quaternion::from_axis_angle(&Vector3D::new(0.0, 1.0, 1.0), 2.0);
        assert_eq!(slerp(&a, &b, 0.0), a);
        assert_eq!(slerp(&a, &b, 1.0), b);
    }

    #[test]
    fn test_slerp_same_quaternion() {
        let q = Quaternion::from_axis_angle(&Vector3D::new(1.0, 2.0, 3.0), 1.2);
        let mid = slerp(&q, &q, 0.5);
        assert!(mid.is_finite());
        assert!((mid - q).norm() < 1e-15);
    }

    #[test]
    fn test_slerp_constant_angular_speed() {
        let a = Quaternion::identity();
        let b = Quaternion::from_axis_angle(&Vector3D::z_axis(), HALF_PI);
        for &t in &[0.1, 0.25, 0.6, 0.9] {
            let q = slerp(&a, &b, t);
            let expected = Quaternion::from_axis_angle(&Vector3D::z_axis(), t * HALF_PI);
            assert!((q - expected).norm() < 1e-14, "t = {}", t);
        }
    }

    #[test]
    fn test_slerp_takes_shorter_arc() {
        let a = Quaternion::identity();
        let b = Quaternion::from_axis_angle(&Vector3D::z_axis(), HALF_PI);
        // -b is the same rotation on the far side of the hypersphere
        let q = slerp(&a, &-b, 0.5);
        let expected = Quaternion::from_axis_angle(&Vector3D::z_axis(), 0.5 * HALF_PI);
        assert!((q - expected).norm() < 1e-14);
    }

    #[test]
    fn test_slerp_antipodal_is_finite() {
        let q = Quaternion::from_axis_angle(&Vector3D::y_axis(), PI / 3.0);
        let mid = slerp(&q, &-q, 0.5);
        assert!(mid.is_finite());
        assert!((mid.norm() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_bi_lerp() {
        assert_eq!(bi_lerp(0.0, 10.0, 0.0, 10.0, 0.5, 0.5), 5.0);
        assert_eq!(bi_lerp(1.0, 2.0, 3.0, 4.0, 0.0, 0.0), 1.0);
        assert_eq!(bi_lerp(1.0, 2.0, 3.0, 4.0, 1.0, 0.0), 2.0);
        assert_eq!(bi_lerp(1.0, 2.0, 3.0, 4.0, 0.0, 1.0), 3.0);
        assert_eq!(bi_lerp(1.0, 2.0, 3.0, 4.0, 1.0, 1.0), 4.0);
        assert_eq!(bi_lerp(0.0, 4.0, 8.0, 12.0, 0.25, 0.5), 5.0);
    }

    #[test]
    fn test_tri_lerp() {
        // f(x, y, z) = x + 2y + 4z is reproduced exactly by trilinear interpolation
        let v = tri_lerp(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 0.5, 0.25, 0.75);
        assert_eq!(v, 0.5 + 0.5 + 3.0);
        assert_eq!(tri_lerp(0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 1.0, 1.0, 1.0), 7.0);
    }

    #[test]
    fn test_interpolation_weight() {
        assert_eq!(interpolation_weight(0.0, 0.0, 5.0), 1.0);
        assert_eq!(interpolation_weight(2.0, 4.0, 3.0), 0.5);
        assert_eq!(interpolation_weight(2.0, 4.0, 2.0), 0.0);
        assert_eq!(interpolation_weight(2.0, 4.0, 6.0), 2.0);
        assert_eq!(interpolation_weight(4.0, 2.0, 3.5), 0.25);
    }
}
