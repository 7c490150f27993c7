use std::ops::{Mul, Div};
use serde::{Serialize, Deserialize};

use crate::geo_2d::{Degrees, Point};

/// A vector in the plane.
/// Used for displacements and edge directions.
#[derive(Debug, Clone, Copy)]
#[derive(Serialize, Deserialize)]
pub struct GeoVector {
    pub x: f64,
    pub y: f64,
}
impl GeoVector {
    /// Create a new vector.
    pub fn new(x: f64, y: f64) -> Self {
        GeoVector{x, y}
    }

    /// Normalize and return a new vector.
    pub fn normalize(&self) -> Self {
        let mag = self.norm();
        GeoVector{
            x: self.x / mag,
            y: self.y / mag,
        }
    }

    /// Get the dot product of two vectors.
    pub fn dot(&self, other: &GeoVector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Get the z-component of the cross product of two vectors.
    /// Positive when `other` turns counter-clockwise from `self`.
    pub fn cross(&self, other: &GeoVector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Get the magnitude squared of the vector.
    pub fn norm_sq(&self) -> f64 {
        self.x*self.x + self.y*self.y
    }

    /// Get the magnitude of the vector.
    pub fn norm(&self) -> f64 {
        self.norm_sq().sqrt()
    }

    /// Get the unsigned angle between two vectors, in degrees.
    pub fn angle_to(&self, other: &GeoVector) -> Degrees {
        let dot = self.dot(other);
        let mag = self.norm() * other.norm();
        // Catch float errors when vectors are exactly aligned
        if (dot / mag) > 1.0 {
            return 0.0;
        }
        if (dot / mag) < -1.0 {
            return 180.0;
        }
        (dot / mag).acos().to_degrees()
    }

    /// Get the signed angle to turn from `self` onto `other`, in degrees within (-180, 180].
    /// Counter-clockwise turns are positive.
    pub fn signed_angle_to(&self, other: &GeoVector) -> Degrees {
        self.cross(other).atan2(self.dot(other)).to_degrees()
    }

    /// Get the vector projection of `self` onto `other`.
    pub fn proj_onto(&self, other: &GeoVector) -> GeoVector {
        *other * (self.dot(other) / other.norm_sq())
    }

    /// Rotate counter-clockwise by an angle in degrees.
    pub fn rotate(&self, angle: Degrees) -> GeoVector {
        let (s, c) = angle.to_radians().sin_cos();
        GeoVector{
            x: self.x * c - self.y * s,
            y: self.x * s + self.y * c,
        }
    }

    /// Get the vector rotated by 90 degrees counter-clockwise.
    pub fn perp(&self) -> GeoVector {
        GeoVector{x: -self.y, y: self.x}
    }
}
impl Mul<f64> for GeoVector {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        GeoVector{
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl Div<f64> for GeoVector {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        GeoVector{
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl std::convert::From<Point> for GeoVector {
    fn from(point: Point) -> Self {
        GeoVector{
            x: point.x,
            y: point.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cross_sign_follows_turn_direction() {
        let x = GeoVector::new(1.0, 0.0);
        let y = GeoVector::new(0.0, 1.0);
        assert!(x.cross(&y) > 0.0);
        assert!(y.cross(&x) < 0.0);
    }

    #[test]
    fn angle_to_is_unsigned_degrees() {
        let x = GeoVector::new(2.0, 0.0);
        assert_abs_diff_eq!(x.angle_to(&GeoVector::new(0.0, 3.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x.angle_to(&GeoVector::new(0.0, -3.0)), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x.angle_to(&GeoVector::new(-1.0, 0.0)), 180.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x.angle_to(&x), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn signed_angle_keeps_turn_direction() {
        let x = GeoVector::new(1.0, 0.0);
        assert_abs_diff_eq!(x.signed_angle_to(&GeoVector::new(1.0, 1.0)), 45.0, epsilon = 1e-9);
        assert_abs_diff_eq!(x.signed_angle_to(&GeoVector::new(1.0, -1.0)), -45.0, epsilon = 1e-9);
    }

    #[test]
    fn rotate_and_perp_agree() {
        let v = GeoVector::new(3.0, -1.0);
        let rotated = v.rotate(90.0);
        let perp = v.perp();
        assert_abs_diff_eq!(rotated.x, perp.x, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.y, perp.y, epsilon = 1e-12);
    }

    #[test]
    fn projection_onto_axis() {
        let v = GeoVector::new(3.0, 4.0);
        let p = v.proj_onto(&GeoVector::new(5.0, 0.0));
        assert_abs_diff_eq!(p.x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-12);
    }
}
