#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

/// How far beyond `[-1, 1]` an `acos`/`asin` argument may drift before the checked
/// variants report [`OutOfDomain`](crate::DomainErrorKind::OutOfDomain).
pub const ACOS_DOMAIN_TOLERANCE: f64 = 1e-6;

/// `|dot(a, b)|` above which slerp degenerates to normalised lerp.
///
/// Past this point `sin(omega)` is too small to divide by safely.
pub const SLERP_LINEAR_THRESHOLD: f64 = 0.9995;
