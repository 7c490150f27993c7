use std::fmt;
use serde::{Serialize, Deserialize};

use crate::geo_2d::{Degrees, GeoVector, Point, EPS};
use crate::shapes::{self, ShapeResult};

/// A line through two distinct points.
/// The points are ordered, but the line compares as an infinite line:
/// two lines are equal when each contains both endpoints of the other.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}
impl Line {
    /// Create a new line.
    /// Errors if the points coincide, since no direction could be derived from them.
    pub fn new(p1: Point, p2: Point) -> ShapeResult<Self> {
        if p1 == p2 {
            return shapes::degenerate_err(&format!("Line endpoints coincide at {}", p1));
        }
        Ok(Line{p1, p2})
    }

    /// Get the direction vector, `p2 - p1`.
    pub fn vector(&self) -> GeoVector {
        self.p2 - self.p1
    }

    /// Get the distance between the two defining points.
    pub fn length(&self) -> f64 {
        self.vector().norm()
    }

    /// Check whether a point lies on the (infinite) line.
    pub fn contains(&self, point: &Point) -> bool {
        if *point == self.p1 || *point == self.p2 {
            return true;
        }
        let direction = self.vector();
        (direction.cross(&(*point - self.p1)) / direction.norm()).abs() < EPS
    }

    /// Check whether two lines run in the same or opposite direction.
    pub fn is_parallel_to(&self, other: &Line) -> bool {
        self.vector().normalize().cross(&other.vector().normalize()).abs() < EPS
    }

    /// Get the unsigned angle between the directions of two lines, in degrees.
    pub fn angle(lhs: &Line, rhs: &Line) -> Degrees {
        lhs.vector().angle_to(&rhs.vector())
    }

    /// Reflect a point across an axis line, in place.
    pub fn reflect(point: &mut Point, axis: &Line) {
        let direction = axis.vector();
        let foot = axis.p1 + (*point - axis.p1).proj_onto(&direction);
        let offset = foot - *point;
        point.shift(offset * 2.0);
    }
}
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.contains(&other.p1) && self.contains(&other.p2)
    }
}
impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {} -> {}", self.p1, self.p2)
    }
}
