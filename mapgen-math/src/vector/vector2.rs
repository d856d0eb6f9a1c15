//! 2D vectors.
use crate::{DomainErrorKind, MathError, MathResult, Matrix2x1};
use std::fmt;

/// A 2D vector with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0)
    }

    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0)
    }

    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Returns the component at the given index (0=x, 1=y).
    ///
    /// Returns an error for indices outside 0-1; `v[i]` panics instead.
    pub fn get(&self, index: usize) -> MathResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(out_of_bounds("Vector2D::get", index)),
        }
    }

    /// Sets the component at the given index (0=x, 1=y).
    pub fn set(&mut self, index: usize, value: f64) -> MathResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            _ => return Err(out_of_bounds("Vector2D::set", index)),
        }
        Ok(())
    }

    /// Returns the Euclidean length `sqrt(x² + y²)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }

    /// `scaled(1 / magnitude)`. Non-finite for the zero vector.
    #[inline]
    pub fn unit_vector(&self) -> Self {
        self.scaled(1.0 / self.magnitude())
    }

    /// Checked form of [`unit_vector`](Self::unit_vector).
    pub fn try_unit_vector(&self) -> MathResult<Self> {
        let mag = self.magnitude();
        if !mag.is_finite() {
            return Err(MathError::domain_error(
                "Vector2D::try_unit_vector",
                DomainErrorKind::NotFinite,
                &format!("magnitude of {} is not finite", self),
            ));
        }
        if mag == 0.0 {
            return Err(MathError::domain_error(
                "Vector2D::try_unit_vector",
                DomainErrorKind::ZeroNorm,
                "cannot normalise the zero vector",
            ));
        }
        Ok(self.unit_vector())
    }

    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Planar cross product.
    ///
    /// Two vectors in the plane have no in-plane perpendicular component, so the
    /// result is always the zero vector. Kept for callers that treat 2D and 3D
    /// vectors uniformly; [`perp_dot`](Self::perp_dot) carries the useful
    /// information.
    #[inline]
    pub fn cross(&self, _other: &Self) -> Self {
        Self::zeros()
    }

    /// Perp-dot product `ax·by − ay·bx`.
    ///
    /// This is the z component of the 3D cross product of the two vectors lifted into
    /// the XY plane: positive when `other` lies anticlockwise of `self`.
    ///
    /// ```
    /// use mapgen_math::Vector2D;
    ///
    /// assert_eq!(Vector2D::x_axis().perp_dot(&Vector2D::y_axis()), 1.0);
    /// assert_eq!(Vector2D::y_axis().perp_dot(&Vector2D::x_axis()), -1.0);
    /// ```
    #[inline]
    pub fn perp_dot(&self, other: &Self) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Displacement from this point to `target`, i.e. `target - self`.
    #[inline]
    pub fn way_to(&self, target: &Self) -> Self {
        *target - *self
    }

    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn from_array(arr: [f64; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

fn out_of_bounds(operation: &str, index: usize) -> MathError {
    MathError::domain_error(
        operation,
        DomainErrorKind::IndexOutOfBounds,
        &format!("index {} out of bounds (valid range: 0-1)", index),
    )
}

impl std::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scaled(scalar)
    }
}

impl std::ops::Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, vec: Vector2D) -> Vector2D {
        vec.scaled(self)
    }
}

impl std::ops::Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar)
    }
}

impl std::ops::Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl std::ops::Index<usize> for Vector2D {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Vector2D index out of bounds: {}", index),
        }
    }
}

impl std::ops::IndexMut<usize> for Vector2D {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Vector2D index out of bounds: {}", index),
        }
    }
}

impl From<Vector2D> for Matrix2x1 {
    fn from(v: Vector2D) -> Self {
        Matrix2x1::from_array([[v.x], [v.y]])
    }
}

impl From<Matrix2x1> for Vector2D {
    fn from(m: Matrix2x1) -> Self {
        Vector2D::new(m[(0, 0)], m[(1, 0)])
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({:.9}, {:.9})", self.x, self.y)
    }
}
