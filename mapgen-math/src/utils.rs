//! Angle conversion and domain-safe inverse trigonometry.
//!
//! # Angle Units
//!
//! Everything in this crate takes radians except [`PolarCoordinate`](crate::PolarCoordinate),
//! which stores its angle in degrees. Convert with [`degrees_to_radians`] and
//! [`radians_to_degrees`].
//!
//! # Inverse Trigonometry
//!
//! Dot products of unit vectors drift slightly outside `[-1, 1]` in floating point, and
//! `acos(1.0000000000000002)` is `NaN`. [`clamped_acos`] clamps first and never fails;
//! [`checked_acos`] and [`checked_asin`] accept small drift (up to
//! [`ACOS_DOMAIN_TOLERANCE`]) but report anything larger as a domain error.

use crate::constants::{ACOS_DOMAIN_TOLERANCE, DEG_TO_RAD, RAD_TO_DEG};
use crate::{DomainErrorKind, MathError, MathResult};

/// Converts degrees to radians.
///
/// ```
/// use mapgen_math::utils::degrees_to_radians;
///
/// assert!((degrees_to_radians(180.0) - std::f64::consts::PI).abs() < 1e-15);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Converts radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * RAD_TO_DEG
}

/// `acos` with the argument clamped to `[-1, 1]`.
///
/// NaN input still yields NaN.
#[inline]
pub fn clamped_acos(x: f64) -> f64 {
    libm::acos(x.clamp(-1.0, 1.0))
}

/// `asin` with the argument clamped to `[-1, 1]`.
#[inline]
pub fn clamped_asin(x: f64) -> f64 {
    libm::asin(x.clamp(-1.0, 1.0))
}

/// `acos` that rejects arguments meaningfully outside `[-1, 1]`.
///
/// Drift up to [`ACOS_DOMAIN_TOLERANCE`] is clamped away, so the result agrees with
/// [`clamped_acos`] for every argument it accepts.
///
/// ```
/// use mapgen_math::utils::checked_acos;
///
/// assert_eq!(checked_acos(1.0 + 1e-12).unwrap(), 0.0);
/// assert!(checked_acos(1.5).is_err());
/// ```
pub fn checked_acos(x: f64) -> MathResult<f64> {
    check_unit_domain("checked_acos", x)?;
    Ok(clamped_acos(x))
}

/// `asin` that rejects arguments meaningfully outside `[-1, 1]`.
pub fn checked_asin(x: f64) -> MathResult<f64> {
    check_unit_domain("checked_asin", x)?;
    Ok(clamped_asin(x))
}

fn check_unit_domain(operation: &str, x: f64) -> MathResult<()> {
    if !x.is_finite() {
        return Err(MathError::domain_error(
            operation,
            DomainErrorKind::NotFinite,
            &format!("argument {} is not finite", x),
        ));
    }
    if x.abs() > 1.0 + ACOS_DOMAIN_TOLERANCE {
        return Err(MathError::domain_error(
            operation,
            DomainErrorKind::OutOfDomain,
            &format!("argument {} outside [-1, 1]", x),
        ));
    }
    Ok(())
}
