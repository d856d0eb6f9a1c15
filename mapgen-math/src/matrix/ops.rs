//! Operator impls for [`Matrix`].
//!
//! `+`, `-` and unary `-` are elementwise and only defined between equal shapes.
//! `*` is scalar scaling or the matrix product; the product is defined for every pair
//! `R×K · K×C`, so e.g. `Matrix4x3 * Matrix3x3` compiles and `Matrix3x3 * Matrix4x1`
//! does not.

use super::base::Matrix;
use super::{Matrix2x1, Matrix2x2, Matrix3x1, Matrix3x3};
use crate::{Vector2D, Vector3D};
use std::fmt;
use std::ops::*;

impl<const R: usize, const C: usize> Add for Matrix<R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.add_matrix(&rhs)
    }
}

impl<const R: usize, const C: usize> Sub for Matrix<R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.sub_matrix(&rhs)
    }
}

impl<const R: usize, const C: usize> Neg for Matrix<R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|x| -x)
    }
}

impl<const R: usize, const C: usize> Mul<f64> for Matrix<R, C> {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        self.scaled(scale)
    }
}

impl<const R: usize, const C: usize> Mul<Matrix<R, C>> for f64 {
    type Output = Matrix<R, C>;

    fn mul(self, m: Matrix<R, C>) -> Matrix<R, C> {
        m.scaled(self)
    }
}

impl<const R: usize, const K: usize, const C: usize> Mul<Matrix<K, C>> for Matrix<R, K> {
    type Output = Matrix<R, C>;

    fn mul(self, rhs: Matrix<K, C>) -> Matrix<R, C> {
        self.multiply(&rhs)
    }
}

impl<const R: usize, const K: usize, const C: usize> Mul<&Matrix<K, C>> for &Matrix<R, K> {
    type Output = Matrix<R, C>;

    fn mul(self, rhs: &Matrix<K, C>) -> Matrix<R, C> {
        self.multiply(rhs)
    }
}

/// 2x2 matrix applied to a 2D column vector.
impl Mul<Vector2D> for Matrix2x2 {
    type Output = Vector2D;

    fn mul(self, v: Vector2D) -> Vector2D {
        let column: Matrix2x1 = v.into();
        Vector2D::from(self.multiply(&column))
    }
}

/// 3x3 matrix applied to a 3D column vector.
impl Mul<Vector3D> for Matrix3x3 {
    type Output = Vector3D;

    fn mul(self, v: Vector3D) -> Vector3D {
        let column: Matrix3x1 = v.into();
        Vector3D::from(self.multiply(&column))
    }
}

impl<const R: usize, const C: usize> Index<(usize, usize)> for Matrix<R, C> {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.elements[row][col]
    }
}

impl<const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<R, C> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.elements[row][col]
    }
}

impl<const R: usize, const C: usize> fmt::Display for Matrix<R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Matrix{}x{}:", R, C)?;
        for row in &self.elements {
            write!(f, "  [")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:12.9}", value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::{Matrix2x1, Matrix2x2, Matrix3x1, Matrix3x3, Matrix4x3};
    use crate::{Vector2D, Vector3D};

    #[test]
    fn test_elementwise_operators() {
        let a = Matrix2x1::from_array([[1.0], [2.0]]);
        let b = Matrix2x1::from_array([[0.5], [-1.0]]);
        assert_eq!(a + b, Matrix2x1::from_array([[1.5], [1.0]]));
        assert_eq!(a - b, Matrix2x1::from_array([[0.5], [3.0]]));
        assert_eq!(-a, Matrix2x1::from_array([[-1.0], [-2.0]]));
        assert_eq!(a * 3.0, 3.0 * a);
    }

    #[test]
    fn test_product_operators() {
        let a = Matrix4x3::from_array([
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 1.0],
        ]);
        let b = Matrix3x3::from_array([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);

        let by_value = a * b;
        let by_ref = &a * &b;
        assert_eq!(by_value, by_ref);
        assert_eq!(by_value.get(3, 0), 2.0);
        assert_eq!(by_value.get(3, 2), 4.0);

        let v = Matrix3x1::from_array([[1.0], [1.0], [1.0]]);
        assert_eq!((b * v).get(2, 0), 4.0);
    }

    #[test]
    fn test_matrix_vector_operators() {
        let m = Matrix2x2::from_array([[0.0, -1.0], [1.0, 0.0]]);
        assert_eq!(m * Vector2D::new(1.0, 0.0), Vector2D::new(0.0, 1.0));

        let s = Matrix3x3::from_array([[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]);
        assert_eq!(s * Vector3D::new(1.0, 2.0, 3.0), Vector3D::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn test_index_operators() {
        let mut m = Matrix3x3::zeros();
        m[(1, 2)] = 0.5;
        assert_eq!(m[(1, 2)], 0.5);
        assert_eq!(m.get(1, 2), 0.5);
    }

    #[test]
    fn test_display() {
        let m = Matrix2x1::from_array([[1.0], [2.0]]);
        let s = format!("{}", m);
        assert!(s.starts_with("Matrix2x1:"));
        assert!(s.contains("1.000000000"));
        assert_eq!(s.lines().count(), 3);
    }
}
