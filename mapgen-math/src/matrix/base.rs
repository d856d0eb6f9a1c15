use crate::{DomainErrorKind, MathError, MathResult};
use std::array;

/// A fixed-size `R`×`C` matrix of `f64`.
///
/// Storage is row-major `[[f64; C]; R]`: `elements[i][j]` is row `i`, column `j`.
/// Shapes are part of the type, so adding a 3x3 to a 4x4 or multiplying a 3x3 by a
/// 2x1 is a compile error rather than a runtime failure.
///
/// The shapes used throughout the crate have aliases:
/// [`Matrix2x1`](super::Matrix2x1), [`Matrix2x2`](super::Matrix2x2),
/// [`Matrix3x1`](super::Matrix3x1), [`Matrix3x3`](super::Matrix3x3),
/// [`Matrix4x1`](super::Matrix4x1), [`Matrix4x3`](super::Matrix4x3),
/// [`Matrix4x4`](super::Matrix4x4).
///
/// ```
/// use mapgen_math::{Matrix2x1, Matrix2x2};
///
/// let m = Matrix2x2::from_array([
///     [1.0, 2.0],
///     [3.0, 4.0],
/// ]);
/// let v = Matrix2x1::from_array([[1.0], [1.0]]);
///
/// let product = m * v;
/// assert_eq!(product, Matrix2x1::from_array([[3.0], [7.0]]));
///
/// // r1c2 in 1-based notation is elements[0][1]
/// assert_eq!(m.entry(1, 2), 2.0);
/// assert_eq!(m[(0, 1)], 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<const R: usize, const C: usize> {
    pub(super) elements: [[f64; C]; R],
}

impl<const R: usize, const C: usize> Matrix<R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;
    /// Number of columns.
    pub const COLS: usize = C;

    /// Returns the all-zero matrix.
    pub fn zeros() -> Self {
        Self {
            elements: [[0.0; C]; R],
        }
    }

    /// Creates a matrix from row-major elements.
    pub fn from_array(elements: [[f64; C]; R]) -> Self {
        Self { elements }
    }

    /// Returns a reference to the underlying row-major array.
    pub fn elements(&self) -> &[[f64; C]; R] {
        &self.elements
    }

    /// Returns the element at the specified 0-based row and column.
    ///
    /// Panics if `row >= R` or `col >= C`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.elements[row][col]
    }

    /// Sets the element at the specified 0-based row and column.
    ///
    /// Panics if `row >= R` or `col >= C`.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.elements[row][col] = value;
    }

    /// Checked form of [`get`](Self::get).
    pub fn try_get(&self, row: usize, col: usize) -> MathResult<f64> {
        self.check_index("Matrix::try_get", row, col)?;
        Ok(self.elements[row][col])
    }

    /// Checked form of [`set`](Self::set).
    pub fn try_set(&mut self, row: usize, col: usize, value: f64) -> MathResult<()> {
        self.check_index("Matrix::try_set", row, col)?;
        self.elements[row][col] = value;
        Ok(())
    }

    /// Returns the element at 1-based `row` and `col`, matching `r{row}c{col}` notation.
    ///
    /// Panics if either index is 0 or past the end.
    pub fn entry(&self, row: usize, col: usize) -> f64 {
        assert!(row >= 1 && col >= 1, "Matrix entries are 1-based: r{}c{}", row, col);
        self.elements[row - 1][col - 1]
    }

    fn check_index(&self, operation: &str, row: usize, col: usize) -> MathResult<()> {
        if row >= R || col >= C {
            return Err(MathError::domain_error(
                operation,
                DomainErrorKind::IndexOutOfBounds,
                &format!(
                    "index ({}, {}) out of bounds for {}x{} matrix",
                    row, col, R, C
                ),
            ));
        }
        Ok(())
    }

    /// Multiplies every element by `scale`.
    pub fn scaled(&self, scale: f64) -> Self {
        self.map(|x| x * scale)
    }

    /// Elementwise sum. Also available as `a + b`.
    pub fn add_matrix(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }

    /// Elementwise difference. Also available as `a - b`.
    pub fn sub_matrix(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }

    /// Matrix product `self · other`.
    ///
    /// Only shapes whose inner dimensions agree are accepted by the type checker.
    /// Also available as `a * b`.
    pub fn multiply<const K: usize>(&self, other: &Matrix<C, K>) -> Matrix<R, K> {
        let mut result = [[0.0; K]; R];

        for (i, row) in result.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                for k in 0..C {
                    *cell += self.elements[i][k] * other.elements[k][j];
                }
            }
        }

        Matrix::from_array(result)
    }

    /// Returns the transpose, swapping rows and columns.
    pub fn transpose(&self) -> Matrix<C, R> {
        Matrix::from_array(array::from_fn(|i| array::from_fn(|j| self.elements[j][i])))
    }

    /// Returns the maximum absolute difference between corresponding elements.
    pub fn max_difference(&self, other: &Self) -> f64 {
        let mut max_diff: f64 = 0.0;

        for i in 0..R {
            for j in 0..C {
                let diff = (self.elements[i][j] - other.elements[i][j]).abs();
                max_diff = max_diff.max(diff);
            }
        }

        max_diff
    }

    /// Returns `true` when every element differs by at most `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.max_difference(other) <= tolerance
    }

    /// Returns `true` if every element is finite.
    pub fn is_finite(&self) -> bool {
        self.elements.iter().flatten().all(|x| x.is_finite())
    }

    pub(super) fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_array(array::from_fn(|i| array::from_fn(|j| f(self.elements[i][j]))))
    }

    pub(super) fn zip_with(&self, other: &Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::from_array(array::from_fn(|i| {
            array::from_fn(|j| f(self.elements[i][j], other.elements[i][j]))
        }))
    }
}

impl<const R: usize, const C: usize> Default for Matrix<R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Matrix2x2, Matrix3x1, Matrix3x3, Matrix4x1, Matrix4x3, Matrix4x4};

    #[test]
    fn test_zeros_and_shape() {
        let m = Matrix4x3::zeros();
        assert_eq!(Matrix4x3::ROWS, 4);
        assert_eq!(Matrix4x3::COLS, 3);
        assert!(m.elements().iter().flatten().all(|&x| x == 0.0));
        assert_eq!(Matrix3x3::default(), Matrix3x3::zeros());
    }

    #[test]
    fn test_get_set_entry() {
        let mut m = Matrix2x2::zeros();
        m.set(1, 0, 5.0);
        assert_eq!(m.get(1, 0), 5.0);
        assert_eq!(m.entry(2, 1), 5.0);
    }

    #[test]
    fn test_try_get_set() {
        let mut m = Matrix3x1::zeros();
        m.try_set(2, 0, 1.5).unwrap();
        assert_eq!(m.try_get(2, 0).unwrap(), 1.5);

        let err = m.try_get(0, 1).unwrap_err();
        assert_eq!(err.kind(), Some(&DomainErrorKind::IndexOutOfBounds));
        assert!(err.to_string().contains("out of bounds for 3x1 matrix"));
        assert!(m.try_set(3, 0, 0.0).is_err());
    }

    #[test]
    #[should_panic(expected = "1-based")]
    fn test_entry_rejects_zero_index() {
        Matrix2x2::zeros().entry(0, 1);
    }

    #[test]
    fn test_add_sub_scale() {
        let a = Matrix2x2::from_array([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix2x2::from_array([[0.5, 0.5], [1.0, -1.0]]);

        assert_eq!(a.add_matrix(&b), Matrix2x2::from_array([[1.5, 2.5], [4.0, 3.0]]));
        assert_eq!(a.sub_matrix(&b), Matrix2x2::from_array([[0.5, 1.5], [2.0, 5.0]]));
        assert_eq!(a.scaled(2.0), Matrix2x2::from_array([[2.0, 4.0], [6.0, 8.0]]));
    }

    #[test]
    fn test_multiply_shapes() {
        let a = Matrix4x4::from_array([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let v = Matrix4x1::from_array([[1.0], [0.0], [-1.0], [2.0]]);
        assert_eq!(
            a.multiply(&v),
            Matrix4x1::from_array([[6.0], [14.0], [22.0], [30.0]])
        );

        let b = Matrix4x3::from_array([
            [1.0, 0.0, 2.0],
            [0.0, 1.0, 0.0],
            [3.0, 0.0, 1.0],
            [0.0, 2.0, 0.0],
        ]);
        let p = Matrix3x1::from_array([[1.0], [2.0], [3.0]]);
        assert_eq!(
            b.multiply(&p),
            Matrix4x1::from_array([[7.0], [2.0], [6.0], [4.0]])
        );

        let ab = a.multiply(&b);
        assert_eq!(ab.get(0, 0), 10.0);
        assert_eq!(ab.get(3, 2), 41.0);
    }

    #[test]
    fn test_multiply_4x4_against_naive_sum() {
        let a = Matrix4x4::from_array([
            [2.0, -1.0, 0.5, 3.0],
            [0.0, 4.0, 1.0, -2.0],
            [1.5, 0.0, -3.0, 1.0],
            [-1.0, 2.0, 2.0, 0.0],
        ]);
        let b = a.transpose().scaled(0.5);
        let product = a.multiply(&b);

        for i in 0..4 {
            for j in 0..4 {
                let expected: f64 = (0..4).map(|k| a.get(i, k) * b.get(k, j)).sum();
                assert!((product.get(i, j) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_transpose() {
        let m = Matrix4x3::from_array([
            [1.0, 2.0, 3.0],
            [4.0, 5.0, 6.0],
            [7.0, 8.0, 9.0],
            [10.0, 11.0, 12.0],
        ]);
        let t = m.transpose();
        assert_eq!(t.get(2, 3), 12.0);
        assert_eq!(t.get(0, 1), 4.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_max_difference_and_approx_eq() {
        let a = Matrix2x2::zeros();
        let b = Matrix2x2::from_array([[0.0, 0.1], [0.0, -0.2]]);
        assert!((a.max_difference(&b) - 0.2).abs() < 1e-15);
        assert!(a.approx_eq(&b, 0.25));
        assert!(!a.approx_eq(&b, 0.15));
    }

    #[test]
    fn test_is_finite() {
        let mut m = Matrix3x3::zeros();
        assert!(m.is_finite());
        m.set(1, 1, f64::INFINITY);
        assert!(!m.is_finite());
    }
}
