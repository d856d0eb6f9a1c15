//! 3D Cartesian vectors.
//!
//! [`Vector3D`] is the type every map-generation routine ends up producing: surface
//! normals, tangent vectors, rotation axes and translations are all 3-vectors.
//!
//! ```
//! use mapgen_math::Vector3D;
//!
//! // Tangents along the x and y texel directions of a height map
//! let s = Vector3D::new(1.0, 0.0, 0.25);
//! let t = Vector3D::new(0.0, 1.0, -0.5);
//!
//! let normal = s.cross(&t).unit_vector();
//! assert!((normal.magnitude() - 1.0).abs() < 1e-15);
//! assert!(normal.dot(&s).abs() < 1e-15);
//! ```
//!
//! # Zero-length input
//!
//! [`unit_vector`](Vector3D::unit_vector) divides by the magnitude without checking it,
//! so a zero vector comes back as NaN components. Use
//! [`try_unit_vector`](Vector3D::try_unit_vector) when the input may be degenerate.
use crate::{DomainErrorKind, MathError, MathResult, Matrix3x1, Matrix4x1};
use std::fmt;

/// A 3D vector with `f64` components.
///
/// Also used as a point; [`way_to`](Self::way_to) gives the displacement between two
/// points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    /// Creates a new vector from x, y, z components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns the zero vector `[0, 0, 0]`.
    #[inline]
    pub fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the X axis `[1, 0, 0]`.
    #[inline]
    pub fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// Returns the unit vector along the Y axis `[0, 1, 0]`.
    #[inline]
    pub fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Returns the unit vector along the Z axis `[0, 0, 1]`.
    #[inline]
    pub fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Returns the component at the given index (0=x, 1=y, 2=z).
    ///
    /// Returns an error for indices outside 0-2. For unchecked access, use
    /// indexing syntax `v[i]` or the public fields directly.
    pub fn get(&self, index: usize) -> MathResult<f64> {
        match index {
            0 => Ok(self.x),
            1 => Ok(self.y),
            2 => Ok(self.z),
            _ => Err(out_of_bounds("Vector3D::get", index)),
        }
    }

    /// Sets the component at the given index (0=x, 1=y, 2=z).
    pub fn set(&mut self, index: usize, value: f64) -> MathResult<()> {
        match index {
            0 => self.x = value,
            1 => self.y = value,
            2 => self.z = value,
            _ => return Err(out_of_bounds("Vector3D::set", index)),
        }
        Ok(())
    }

    /// Returns the Euclidean length `sqrt(x² + y² + z²)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.magnitude_squared())
    }

    /// Returns the squared magnitude.
    ///
    /// Cheaper than [`magnitude`](Self::magnitude) when only comparing lengths.
    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Returns the vector with every component multiplied by `scale`.
    #[inline]
    pub fn scaled(&self, scale: f64) -> Self {
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }

    /// Returns a unit vector pointing in the same direction.
    ///
    /// Computed as `scaled(1 / magnitude)`. A zero vector yields non-finite
    /// components; see [`try_unit_vector`](Self::try_unit_vector).
    ///
    /// ```
    /// use mapgen_math::Vector3D;
    ///
    /// let unit = Vector3D::new(0.0, 3.0, 4.0).unit_vector();
    /// assert!((unit.y - 0.6).abs() < 1e-15);
    /// assert!((unit.z - 0.8).abs() < 1e-15);
    ///
    /// assert!(Vector3D::zeros().unit_vector().x.is_nan());
    /// ```
    #[inline]
    pub fn unit_vector(&self) -> Self {
        self.scaled(1.0 / self.magnitude())
    }

    /// Checked form of [`unit_vector`](Self::unit_vector).
    ///
    /// Fails with [`DomainErrorKind::ZeroNorm`] for the zero vector and
    /// [`DomainErrorKind::NotFinite`] for non-finite components.
    pub fn try_unit_vector(&self) -> MathResult<Self> {
        let mag = self.magnitude();
        if !mag.is_finite() {
            return Err(MathError::domain_error(
                "Vector3D::try_unit_vector",
                DomainErrorKind::NotFinite,
                &format!("magnitude of {} is not finite", self),
            ));
        }
        if mag == 0.0 {
            return Err(MathError::domain_error(
                "Vector3D::try_unit_vector",
                DomainErrorKind::ZeroNorm,
                "cannot normalise the zero vector",
            ));
        }
        Ok(self.unit_vector())
    }

    /// Computes the dot product `Σ aᵢ·bᵢ`.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the right-handed cross product.
    ///
    /// ```
    /// use mapgen_math::Vector3D;
    ///
    /// let z = Vector3D::x_axis().cross(&Vector3D::y_axis());
    /// assert_eq!(z, Vector3D::z_axis());
    /// ```
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Displacement from this point to `target`, i.e. `target - self`.
    #[inline]
    pub fn way_to(&self, target: &Self) -> Self {
        *target - *self
    }

    /// Returns the components as a `[f64; 3]` array.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Creates a vector from a `[f64; 3]` array.
    #[inline]
    pub fn from_array(arr: [f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }

    /// Homogeneous point form `[x, y, z, 1]` for use with 4x4 transforms.
    #[inline]
    pub fn to_homogeneous(&self) -> Matrix4x1 {
        Matrix4x1::from_array([[self.x], [self.y], [self.z], [1.0]])
    }

    /// Returns `true` if every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

fn out_of_bounds(operation: &str, index: usize) -> MathError {
    MathError::domain_error(
        operation,
        DomainErrorKind::IndexOutOfBounds,
        &format!("index {} out of bounds (valid range: 0-2)", index),
    )
}

impl std::ops::Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl std::ops::Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl std::ops::Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        self.scaled(scalar)
    }
}

impl std::ops::Mul<Vector3D> for f64 {
    type Output = Vector3D;

    fn mul(self, vec: Vector3D) -> Vector3D {
        vec.scaled(self)
    }
}

impl std::ops::Div<f64> for Vector3D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl std::ops::Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl std::ops::Index<usize> for Vector3D {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3D index out of bounds: {}", index),
        }
    }
}

impl std::ops::IndexMut<usize> for Vector3D {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("Vector3D index out of bounds: {}", index),
        }
    }
}

impl From<Vector3D> for Matrix3x1 {
    fn from(v: Vector3D) -> Self {
        Matrix3x1::from_array([[v.x], [v.y], [v.z]])
    }
}

impl From<Matrix3x1> for Vector3D {
    fn from(m: Matrix3x1) -> Self {
        Vector3D::new(m[(0, 0)], m[(1, 0)], m[(2, 0)])
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector3D({:.9}, {:.9}, {:.9})", self.x, self.y, self.z)
    }
}
