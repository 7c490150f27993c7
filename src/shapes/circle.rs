use crate::geo_2d::{Degrees, GeoVector, Line, Point, EPS};
use crate::shapes::{
    Ellipse,
    Shape,
    ShapeChoice,
    ShapeKind,
    ShapeResult,
    domain_err,
};

/// A circle.
/// Stored as center and radius; measured and compared through its ellipse view,
/// an ellipse whose foci both sit at the center.
#[derive(Debug, Clone, Copy)]
pub struct Circle {
    center: Point,
    radius: f64,
}
impl Circle {
    /// Create a new circle. The radius must be positive.
    pub fn new(center: Point, radius: f64) -> ShapeResult<Self> {
        if !(radius > 0.0) {
            return domain_err(&format!("Circle radius must be positive, got {}", radius));
        }
        Ok(Circle{center, radius})
    }

    /// Get the radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Get the center.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Get the circle as an ellipse with coincident foci.
    pub fn to_ellipse(&self) -> Ellipse {
        Ellipse::from_parts(self.center, self.center, self.radius)
    }
}
impl Shape for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn perimeter(&self) -> f64 {
        self.to_ellipse().perimeter()
    }

    fn area(&self) -> f64 {
        self.to_ellipse().area()
    }

    fn equals(&self, other: &ShapeChoice) -> bool {
        self.to_ellipse().equals(other)
    }

    fn is_congruent_to(&self, other: &ShapeChoice) -> bool {
        self.to_ellipse().is_congruent_to(other)
    }

    fn is_similar_to(&self, other: &ShapeChoice) -> bool {
        self.to_ellipse().is_similar_to(other)
    }

    fn contains_point(&self, point: &Point) -> bool {
        Point::distance(&self.center, point) <= self.radius + EPS
    }

    fn shift(&mut self, delta: GeoVector) {
        self.center.shift(delta);
    }

    fn rotate(&mut self, center: &Point, angle: Degrees) {
        self.center.rotate(center, angle);
    }

    fn reflect_around_point(&mut self, center: &Point) {
        self.center.reflect(center);
    }

    fn reflect_around_line(&mut self, axis: &Line) {
        Line::reflect(&mut self.center, axis);
    }

    fn scale(&mut self, center: &Point, factor: f64) {
        self.center.scale(center, factor);
        self.radius *= factor.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;
    use approx::assert_abs_diff_eq;

    #[test]
    fn radius_must_be_positive() {
        assert!(Circle::new(Point::zero(), 0.0).is_err());
        assert!(Circle::new(Point::zero(), -1.0).is_err());
    }

    #[test]
    fn area_and_perimeter_are_exact() {
        for r in [0.25, 1.0, 3.0, 120.5] {
            let c = Circle::new(Point::new(1.0, -2.0), r).unwrap();
            assert_abs_diff_eq!(c.area(), PI * r * r, epsilon = 1e-9);
            assert_abs_diff_eq!(c.perimeter(), 2.0 * PI * r, epsilon = 1e-9);
        }
    }

    #[test]
    fn ellipse_view() {
        let c = Circle::new(Point::new(2.0, 3.0), 4.0).unwrap();
        let e = c.to_ellipse();
        assert_abs_diff_eq!(e.a(), 4.0);
        assert_abs_diff_eq!(e.b(), 4.0);
        assert_abs_diff_eq!(e.eccentricity(), 0.0);
        assert_eq!(e.center(), Point::new(2.0, 3.0));
    }

    #[test]
    fn all_circles_are_similar() {
        let small: ShapeChoice = Circle::new(Point::new(0.0, 0.0), 1.0).unwrap().into();
        let large: ShapeChoice = Circle::new(Point::new(5.0, 5.0), 7.0).unwrap().into();
        assert!(small.is_similar_to(&large));
        assert!(!small.is_congruent_to(&large));

        let moved: ShapeChoice = Circle::new(Point::new(-9.0, 1.0), 1.0).unwrap().into();
        assert!(small.is_congruent_to(&moved));
        assert!(!small.equals(&moved));
    }

    #[test]
    fn transforms_move_center() {
        let mut c = Circle::new(Point::new(1.0, 0.0), 2.0).unwrap();
        c.rotate(&Point::zero(), 90.0);
        assert_eq!(c.center(), Point::new(0.0, 1.0));
        c.scale(&Point::zero(), -2.0);
        assert_eq!(c.center(), Point::new(0.0, -2.0));
        assert_abs_diff_eq!(c.radius(), 4.0);
        assert!(c.contains_point(&Point::new(4.0, -2.0)));
        assert!(!c.contains_point(&Point::new(4.0, -1.0)));
    }
}
