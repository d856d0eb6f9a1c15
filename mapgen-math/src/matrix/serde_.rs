//! Matrices serialize as a sequence of rows, e.g. `[[1.0, 0.0], [0.0, 1.0]]`.

use super::Matrix;
use crate::MathError;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl<const R: usize, const C: usize> Serialize for Matrix<R, C> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(self.elements.iter().map(|row| row.as_slice()))
    }
}

impl<'de, const R: usize, const C: usize> Deserialize<'de> for Matrix<R, C> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<f64>>::deserialize(d)?;
        if rows.len() != R {
            return Err(D::Error::custom(MathError::invalid_input(
                "Matrix::deserialize",
                &format!("expected {} rows, found {}", R, rows.len()),
            )));
        }

        let mut m = Matrix::<R, C>::zeros();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != C {
                return Err(D::Error::custom(MathError::invalid_input(
                    "Matrix::deserialize",
                    &format!("row {} has {} columns, expected {}", i, row.len(), C),
                )));
            }
            m.elements[i].copy_from_slice(row);
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::{Matrix2x2, Matrix4x1};

    #[test]
    fn test_serialize_rows() {
        let m = Matrix2x2::from_array([[1.0, 2.0], [3.0, 4.0]]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");

        let back: Matrix2x2 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        let err = serde_json::from_str::<Matrix2x2>("[[1.0,2.0]]").unwrap_err();
        assert!(err.to_string().contains("expected 2 rows"));

        let err = serde_json::from_str::<Matrix4x1>("[[1.0],[2.0],[3.0],[4.0,5.0]]").unwrap_err();
        assert!(err.to_string().contains("row 3 has 2 columns"));
    }
}
