use std::ops::{
    Add, AddAssign,
    Sub,
};
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{Degrees, GeoVector, EPS};

/// A point in the plane.
/// Contains the coordinates of the point.
/// Has basic math support for adding and subtracting vectors,
/// and the in-place transforms every shape is built from.
///
/// Equality is tolerant to `EPS` on each coordinate.
/// Note that this makes it non-transitive: `a == b` and `b == c` does not imply `a == c`.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}
impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Point{x, y}
    }

    /// Create a new zero point.
    pub fn zero() -> Self {
        Point{x: 0.0, y: 0.0}
    }

    /// Get the distance from the origin.
    pub fn norm(&self) -> f64 {
        (self.x*self.x + self.y*self.y).sqrt()
    }

    /// Move the point by a displacement.
    pub fn shift(&mut self, delta: GeoVector) {
        *self += delta;
    }

    /// Rotate the point counter-clockwise around a center, by an angle in degrees.
    pub fn rotate(&mut self, center: &Point, angle: Degrees) {
        let offset = *self - *center;
        if offset.norm() < EPS {
            return;
        }
        *self = *center + offset.rotate(angle);
    }

    /// Reflect the point through a center point.
    pub fn reflect(&mut self, center: &Point) {
        self.x = 2.0 * center.x - self.x;
        self.y = 2.0 * center.y - self.y;
    }

    /// Scale the distance to a center point by a factor.
    /// Negative factors also reflect through the center.
    pub fn scale(&mut self, center: &Point, factor: f64) {
        *self = *center + (*self - *center) * factor;
    }

    /// Get the unsigned angle between two points taken as position vectors, in degrees.
    pub fn angle(lhs: &Point, rhs: &Point) -> Degrees {
        GeoVector::from(*lhs).angle_to(&GeoVector::from(*rhs))
    }

    /// Get the distance between two points.
    pub fn distance(lhs: &Point, rhs: &Point) -> f64 {
        (*rhs - *lhs).norm()
    }

    /// Get the midpoint between two points.
    pub fn midpoint(lhs: &Point, rhs: &Point) -> Point {
        Point{
            x: (lhs.x + rhs.x) / 2.0,
            y: (lhs.y + rhs.y) / 2.0,
        }
    }
}
impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < EPS && (self.y - other.y).abs() < EPS
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(3);
        write!(f, "({:.*}, {:.*})", precision, self.x, precision, self.y)
    }
}
impl Add<GeoVector> for Point {
    type Output = Self;

    fn add(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl AddAssign<GeoVector> for Point {
    fn add_assign(&mut self, rhs: GeoVector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}
impl Sub<GeoVector> for Point {
    type Output = Self;

    fn sub(self, rhs: GeoVector) -> Self {
        Point{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl Sub<Point> for Point {
    type Output = GeoVector;

    fn sub(self, rhs: Self) -> GeoVector {
        GeoVector{
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
