//! Error types for the checked numeric operations.
//!
//! The unchecked operations in this crate follow a garbage-in, garbage-out contract:
//! normalising a zero vector or inverting a singular matrix produces `NaN`/`Inf`
//! rather than an error. Callers who want to detect degenerate input use the
//! `try_*`/`checked_*` variants, which return [`MathResult`] and produce exactly the
//! same values as their unchecked twins whenever the input is well formed.
//!
//! # Error Categories
//!
//! | Kind | Raised by |
//! |------|-----------|
//! | [`ZeroNorm`](DomainErrorKind::ZeroNorm) | unit vectors, look-at, quaternion normalise/inverse |
//! | [`SingularMatrix`](DomainErrorKind::SingularMatrix) | matrix inverse |
//! | [`OutOfDomain`](DomainErrorKind::OutOfDomain) | `acos`/`asin` arguments beyond `[-1, 1]` |
//! | [`NotFinite`](DomainErrorKind::NotFinite) | NaN or infinite input |
//! | [`IndexOutOfBounds`](DomainErrorKind::IndexOutOfBounds) | checked element access |
//!
//! ```
//! use mapgen_math::{DomainErrorKind, MathError, Vector3D};
//!
//! let err = Vector3D::zeros().try_unit_vector().unwrap_err();
//! assert_eq!(err.kind(), Some(&DomainErrorKind::ZeroNorm));
//! ```

use thiserror::Error;

/// Classification of numeric domain failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainErrorKind {
    /// Vector or quaternion has zero length and cannot be normalised.
    ZeroNorm,
    /// Matrix determinant is zero (or not finite), so no inverse exists.
    SingularMatrix,
    /// Argument lies outside the function's domain, e.g. `acos(1.5)`.
    OutOfDomain,
    /// Input or result is NaN or infinity.
    NotFinite,
    /// Row, column or component index is outside the value's shape.
    IndexOutOfBounds,
}

/// Error returned by the checked operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Numeric domain violation detected by a checked operation.
    #[error("Domain error in {operation} ({kind:?}): {message}")]
    DomainError {
        operation: String,
        kind: DomainErrorKind,
        message: String,
    },

    /// Structurally invalid input (wrong sequence length, bad shape).
    #[error("Invalid input to {operation}: {message}")]
    InvalidInput { operation: String, message: String },
}

/// Convenience alias for `Result<T, MathError>`.
pub type MathResult<T> = Result<T, MathError>;

impl MathError {
    /// Creates a [`DomainError`](Self::DomainError) with the given kind.
    pub fn domain_error(operation: &str, kind: DomainErrorKind, reason: &str) -> Self {
        log::trace!("{operation} rejected input ({kind:?}): {reason}");
        Self::DomainError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    /// Creates an [`InvalidInput`](Self::InvalidInput) error.
    pub fn invalid_input(operation: &str, reason: &str) -> Self {
        log::trace!("{operation} rejected input: {reason}");
        Self::InvalidInput {
            operation: operation.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns the domain kind, or `None` for structural errors.
    pub fn kind(&self) -> Option<&DomainErrorKind> {
        match self {
            Self::DomainError { kind, .. } => Some(kind),
            Self::InvalidInput { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_display() {
        let err = MathError::domain_error(
            "Matrix3x3::try_inverse",
            DomainErrorKind::SingularMatrix,
            "determinant is zero",
        );
        assert_eq!(
            err.to_string(),
            "Domain error in Matrix3x3::try_inverse (SingularMatrix): determinant is zero"
        );
        assert_eq!(err.kind(), Some(&DomainErrorKind::SingularMatrix));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = MathError::invalid_input("Matrix::deserialize", "expected 3 rows, got 2");
        assert!(err.to_string().contains("Invalid input to Matrix::deserialize"));
        assert!(err.to_string().contains("expected 3 rows"));
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<MathError>();
        _assert_sync::<MathError>();
    }
}
