//! Assertions for comparing floating-point results in tests.
//!
//! Scalars can be compared in ULPs (units in the last place) with [`assert_ulp_le`] or
//! the [`assert_ulp_lt!`](crate::assert_ulp_lt) macro. Vectors, matrices and
//! quaternions are compared componentwise against an absolute tolerance.

use crate::{Matrix, Quaternion, Vector2D, Vector3D};

/// Maps an `f64` onto a `u64` whose ordering matches the float ordering, so adjacent
/// floats differ by exactly 1.
#[inline]
pub fn f64_to_ordered_u64(x: f64) -> u64 {
    let bits = x.to_bits();
    if bits & 0x8000_0000_0000_0000 != 0 {
        !bits
    } else {
        bits | 0x8000_0000_0000_0000
    }
}

/// Number of representable floats between `a` and `b`.
#[inline]
pub fn ulp_diff(a: f64, b: f64) -> u64 {
    f64_to_ordered_u64(a).abs_diff(f64_to_ordered_u64(b))
}

#[track_caller]
pub fn assert_ulp_le(a: f64, b: f64, max_ulp: u64, ctx: &str) {
    if a == 0.0 && b == 0.0 {
        return;
    }
    assert!(a.is_finite() && b.is_finite(), "non-finite value in {}", ctx);
    let d = ulp_diff(a, b);
    assert!(
        d <= max_ulp,
        "{}: ULP={} exceeds {}, a={} (0x{:016x}) b={} (0x{:016x})",
        ctx,
        d,
        max_ulp,
        a,
        a.to_bits(),
        b,
        b.to_bits()
    );
}

#[track_caller]
pub fn assert_vec2_near(actual: &Vector2D, expected: &Vector2D, tolerance: f64) {
    let diff = (*actual - *expected).to_array();
    assert!(
        diff.iter().all(|d| d.abs() <= tolerance),
        "expected {}, got {} (tolerance {:e})",
        expected,
        actual,
        tolerance
    );
}

#[track_caller]
pub fn assert_vec3_near(actual: &Vector3D, expected: &Vector3D, tolerance: f64) {
    let diff = (*actual - *expected).to_array();
    assert!(
        diff.iter().all(|d| d.abs() <= tolerance),
        "expected {}, got {} (tolerance {:e})",
        expected,
        actual,
        tolerance
    );
}

#[track_caller]
pub fn assert_matrix_near<const R: usize, const C: usize>(
    actual: &Matrix<R, C>,
    expected: &Matrix<R, C>,
    tolerance: f64,
) {
    let diff = actual.max_difference(expected);
    assert!(
        diff <= tolerance,
        "max difference {:e} exceeds {:e}\nexpected {}got {}",
        diff,
        tolerance,
        expected,
        actual
    );
}

#[track_caller]
pub fn assert_quat_near(actual: &Quaternion, expected: &Quaternion, tolerance: f64) {
    let d = *actual - *expected;
    let worst = [d.w, d.x, d.y, d.z]
        .iter()
        .fold(0.0_f64, |acc, c| acc.max(c.abs()));
    assert!(
        worst <= tolerance,
        "expected {}, got {} (tolerance {:e})",
        expected,
        actual,
        tolerance
    );
}

/// Asserts two `f64` expressions are within `max_ulp` ULPs of each other.
///
/// ```
/// use mapgen_math::assert_ulp_lt;
///
/// assert_ulp_lt!(0.1 + 0.2, 0.3, 1);
/// ```
#[macro_export]
macro_rules! assert_ulp_lt {
    ($a:expr, $b:expr, $max_ulp:expr) => {
        $crate::test_helpers::assert_ulp_le(
            $a,
            $b,
            $max_ulp,
            &format!(
                "ULP check failed: {} vs {} (max_ulp={})",
                stringify!($a),
                stringify!($b),
                $max_ulp
            ),
        )
    };
    ($a:expr, $b:expr, $max_ulp:expr, $($arg:tt)*) => {
        $crate::test_helpers::assert_ulp_le($a, $b, $max_ulp, &format!($($arg)*))
    };
}
