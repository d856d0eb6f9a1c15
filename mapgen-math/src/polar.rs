//! Polar coordinates in the plane.

use crate::utils::{degrees_to_radians, radians_to_degrees};
use crate::Vector2D;
use std::fmt;

/// A 2D point as a distance from the origin and an angle from the +x axis.
///
/// The angle is stored in **degrees**, anticlockwise positive, in `(-180, 180]` when
/// produced by [`cartesian_to_polar`](Self::cartesian_to_polar).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolarCoordinate {
    pub angle: f64,
    pub radius: f64,
}

impl PolarCoordinate {
    pub fn new(angle_degrees: f64, radius: f64) -> Self {
        Self {
            angle: angle_degrees,
            radius,
        }
    }

    /// Converts a Cartesian point.
    ///
    /// The angle comes from `atan2(y, x)`, so every quadrant (and the y axis) is handled.
    /// The origin maps to angle 0, radius 0.
    ///
    /// ```
    /// use mapgen_math::{PolarCoordinate, Vector2D};
    ///
    /// let p = PolarCoordinate::cartesian_to_polar(&Vector2D::new(0.0, 2.0));
    /// assert_eq!(p.radius, 2.0);
    /// assert_eq!(p.angle, 90.0);
    /// ```
    pub fn cartesian_to_polar(point: &Vector2D) -> Self {
        Self::new(
            radians_to_degrees(libm::atan2(point.y, point.x)),
            point.magnitude(),
        )
    }

    /// Converts back to a Cartesian point.
    pub fn polar_to_cartesian(&self) -> Vector2D {
        let angle = degrees_to_radians(self.angle);
        Vector2D::new(
            self.radius * libm::cos(angle),
            self.radius * libm::sin(angle),
        )
    }
}

impl From<Vector2D> for PolarCoordinate {
    fn from(point: Vector2D) -> Self {
        Self::cartesian_to_polar(&point)
    }
}

impl From<PolarCoordinate> for Vector2D {
    fn from(polar: PolarCoordinate) -> Self {
        polar.polar_to_cartesian()
    }
}

impl fmt::Display for PolarCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polar(r={:.9}, {:.6}°)", self.radius, self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axes_and_quadrants() {
        let cases = [
            (Vector2D::new(3.0, 0.0), 0.0),
            (Vector2D::new(0.0, 3.0), 90.0),
            (Vector2D::new(-3.0, 0.0), 180.0),
            (Vector2D::new(0.0, -3.0), -90.0),
            (Vector2D::new(1.0, 1.0), 45.0),
            (Vector2D::new(-1.0, 1.0), 135.0),
            (Vector2D::new(-1.0, -1.0), -135.0),
            (Vector2D::new(1.0, -1.0), -45.0),
        ];
        for (point, angle) in cases {
            let p = PolarCoordinate::cartesian_to_polar(&point);
            assert!((p.angle - angle).abs() < 1e-12, "{} -> {}", point, p);
            assert!((p.radius - point.magnitude()).abs() < 1e-15);
        }
    }

    #[test]
    fn test_origin() {
        let p = PolarCoordinate::from(Vector2D::zeros());
        assert_eq!(p.radius, 0.0);
        assert_eq!(p.angle, 0.0);
        assert_eq!(Vector2D::from(p), Vector2D::zeros());
    }

    #[test]
    fn test_polar_to_cartesian() {
        let v = PolarCoordinate::new(60.0, 2.0).polar_to_cartesian();
        assert!((v.x - 1.0).abs() < 1e-15);
        assert!((v.y - 3.0_f64.sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_round_trip_recovers_point() {
        for point in [
            Vector2D::new(0.3, -4.2),
            Vector2D::new(-12.0, 5.0),
            Vector2D::new(1e-3, 7e-4),
        ] {
            let back = Vector2D::from(PolarCoordinate::from(point));
            assert!((back - point).magnitude() < 1e-13 * point.magnitude().max(1.0));
        }
    }
}
