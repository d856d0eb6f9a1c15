//! Square-matrix operations: identity, determinant, adjugate and inverse.
//!
//! Determinants use cofactor expansion along the first row, and inverses use
//! `adjugate / determinant`. The 4x4 forms are assembled from 3x3 minors, so every
//! term follows the textbook definition:
//!
//! ```text
//! cofactor(i, j) = (-1)^(i+j) · det(minor(i, j))
//! adjugate(M)    = transpose(cofactor matrix)
//! inverse(M)     = adjugate(M) / det(M)
//! ```
//!
//! [`inverse`](Matrix4x4::inverse) does not check the determinant: a singular matrix
//! produces `NaN`/`Inf` elements. [`try_inverse`](Matrix4x4::try_inverse) reports
//! [`SingularMatrix`](crate::DomainErrorKind::SingularMatrix) instead.
//!
//! ```
//! use mapgen_math::Matrix3x3;
//!
//! let m = Matrix3x3::from_array([
//!     [2.0, 0.0, 1.0],
//!     [1.0, 3.0, 0.0],
//!     [0.0, 1.0, 4.0],
//! ]);
//! let product = m * m.inverse();
//! assert!(product.approx_eq(&Matrix3x3::identity(), 1e-14));
//! ```

use super::base::Matrix;
use super::{Matrix2x2, Matrix3x3, Matrix4x4};
use crate::{DomainErrorKind, MathError, MathResult};

impl<const N: usize> Matrix<N, N> {
    /// Returns the identity matrix: ones on the diagonal, zeros elsewhere.
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        m.make_identity();
        m
    }

    /// Overwrites `self` with the identity matrix.
    pub fn make_identity(&mut self) {
        for (i, row) in self.elements.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = if i == j { 1.0 } else { 0.0 };
            }
        }
    }

    /// Sum of the diagonal elements.
    pub fn trace(&self) -> f64 {
        (0..N).map(|i| self.elements[i][i]).sum()
    }
}

#[inline]
fn det2(m: &[[f64; 2]; 2]) -> f64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

#[inline]
fn det3(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

#[inline]
fn cofactor_sign(row: usize, col: usize) -> f64 {
    if (row + col) % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

/// `m` with row `skip_row` and column `skip_col` removed.
fn minor<const N: usize, const M: usize>(
    m: &[[f64; N]; N],
    skip_row: usize,
    skip_col: usize,
) -> [[f64; M]; M] {
    let mut out = [[0.0; M]; M];
    let rows = (0..N).filter(|&r| r != skip_row);
    for (out_row, r) in out.iter_mut().zip(rows) {
        let cols = (0..N).filter(|&c| c != skip_col);
        for (cell, c) in out_row.iter_mut().zip(cols) {
            *cell = m[r][c];
        }
    }
    out
}

fn det4(m: &[[f64; 4]; 4]) -> f64 {
    (0..4)
        .map(|j| m[0][j] * cofactor_sign(0, j) * det3(&minor::<4, 3>(m, 0, j)))
        .sum()
}

fn adjugate3(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut adj = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            adj[j][i] = cofactor_sign(i, j) * det2(&minor::<3, 2>(m, i, j));
        }
    }
    adj
}

fn adjugate4(m: &[[f64; 4]; 4]) -> [[f64; 4]; 4] {
    let mut adj = [[0.0; 4]; 4];
    for i in 0..4 {
        for j in 0..4 {
            adj[j][i] = cofactor_sign(i, j) * det3(&minor::<4, 3>(m, i, j));
        }
    }
    adj
}

fn singular(operation: &str, det: f64) -> MathError {
    let kind = if det.is_finite() {
        DomainErrorKind::SingularMatrix
    } else {
        DomainErrorKind::NotFinite
    };
    MathError::domain_error(operation, kind, &format!("determinant is {}", det))
}

impl Matrix2x2 {
    /// `r1c1·r2c2 − r1c2·r2c1`.
    pub fn determinant(&self) -> f64 {
        det2(&self.elements)
    }

    pub fn adjugate(&self) -> Self {
        let m = &self.elements;
        Self::from_array([[m[1][1], -m[0][1]], [-m[1][0], m[0][0]]])
    }

    /// `adjugate / determinant`. Non-finite for singular input.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        self.adjugate().map(|x| x / det)
    }

    /// Checked form of [`inverse`](Self::inverse).
    pub fn try_inverse(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(singular("Matrix2x2::try_inverse", det));
        }
        Ok(self.inverse())
    }
}

impl Matrix3x3 {
    /// Six-term rule of Sarrus, grouped as a first-row cofactor expansion.
    pub fn determinant(&self) -> f64 {
        det3(&self.elements)
    }

    /// Transpose of the cofactor matrix.
    pub fn adjugate(&self) -> Self {
        Self::from_array(adjugate3(&self.elements))
    }

    /// `adjugate / determinant`. Non-finite for singular input.
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        self.adjugate().map(|x| x / det)
    }

    /// Checked form of [`inverse`](Self::inverse).
    pub fn try_inverse(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(singular("Matrix3x3::try_inverse", det));
        }
        Ok(self.inverse())
    }

    /// Checks for a proper rotation: determinant +1 and `M · Mᵀ = I`, within `tolerance`.
    pub fn is_rotation_matrix(&self, tolerance: f64) -> bool {
        if (self.determinant() - 1.0).abs() > tolerance {
            return false;
        }
        self.multiply(&self.transpose())
            .approx_eq(&Self::identity(), tolerance)
    }

    /// Embeds `self` in the upper-left of a 4x4 identity.
    pub fn to_4x4(&self) -> Matrix4x4 {
        let mut out = Matrix4x4::identity();
        for (i, row) in self.elements.iter().enumerate() {
            out.elements[i][..3].copy_from_slice(row);
        }
        out
    }
}

impl Matrix4x4 {
    /// Laplace expansion along the first row over 3x3 minors.
    pub fn determinant(&self) -> f64 {
        det4(&self.elements)
    }

    pub fn adjugate(&self) -> Self {
        Self::from_array(adjugate4(&self.elements))
    }

    /// `adjugate / determinant`. Non-finite for singular input.
    ///
    /// ```
    /// use mapgen_math::Matrix4x4;
    ///
    /// let m = Matrix4x4::from_array([
    ///     [4.0, 0.0, 0.0, 1.0],
    ///     [0.0, 2.0, 0.0, 2.0],
    ///     [0.0, 0.0, 1.0, 3.0],
    ///     [0.0, 0.0, 0.0, 1.0],
    /// ]);
    /// let inv = m.inverse();
    /// assert_eq!(inv.get(0, 0), 0.25);
    /// assert_eq!(inv.get(0, 3), -0.25);
    /// assert!((m * inv).approx_eq(&Matrix4x4::identity(), 1e-15));
    /// ```
    pub fn inverse(&self) -> Self {
        let det = self.determinant();
        self.adjugate().map(|x| x / det)
    }

    /// Checked form of [`inverse`](Self::inverse).
    pub fn try_inverse(&self) -> MathResult<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return Err(singular("Matrix4x4::try_inverse", det));
        }
        Ok(self.inverse())
    }

    /// Upper-left 3x3 block (the linear part of an affine transform).
    pub fn submatrix_3x3(&self) -> Matrix3x3 {
        Matrix3x3::from_array(minor::<4, 3>(&self.elements, 3, 3))
    }
}
