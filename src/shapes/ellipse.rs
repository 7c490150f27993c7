use std::f64::consts::PI;

use crate::geo_2d::{Degrees, GeoVector, Line, Point, EPS};
use crate::shapes::{
    Shape,
    ShapeChoice,
    ShapeKind,
    ShapeResult,
    domain_err,
    degenerate_err,
};

/// An ellipse.
/// Defined by its two foci and its semi-major axis.
#[derive(Debug, Clone, Copy)]
pub struct Ellipse {
    focus1: Point,
    focus2: Point,
    semi_major_axis: f64,
}
impl Ellipse {
    /// Create a new ellipse.
    /// The semi-major axis must be positive, and the foci must be closer together than the major axis.
    pub fn new(focus1: Point, focus2: Point, semi_major_axis: f64) -> ShapeResult<Self> {
        if !(semi_major_axis > 0.0) {
            return domain_err(&format!("Ellipse semi-major axis must be positive, got {}", semi_major_axis));
        }
        let focal_distance = Point::distance(&focus1, &focus2);
        if focal_distance >= 2.0 * semi_major_axis {
            return domain_err(&format!(
                "Ellipse foci are {} apart, must be less than the major axis ({})",
                focal_distance, 2.0 * semi_major_axis,
            ));
        }
        Ok(Ellipse{focus1, focus2, semi_major_axis})
    }

    /// Build an ellipse from parts already known to be valid.
    pub(super) fn from_parts(focus1: Point, focus2: Point, semi_major_axis: f64) -> Self {
        Ellipse{focus1, focus2, semi_major_axis}
    }

    /// Get the two foci.
    pub fn focuses(&self) -> (Point, Point) {
        (self.focus1, self.focus2)
    }

    /// Get the semi-major axis.
    pub fn a(&self) -> f64 {
        self.semi_major_axis
    }

    /// Get the semi-minor axis.
    pub fn b(&self) -> f64 {
        let c = self.a() * self.eccentricity();
        (self.a() * self.a() - c * c).max(0.0).sqrt()
    }

    /// Get the eccentricity, from 0 (circle) towards 1.
    pub fn eccentricity(&self) -> f64 {
        Point::distance(&self.center(), &self.focus1) / self.a()
    }

    /// Get the center, halfway between the foci.
    pub fn center(&self) -> Point {
        Point::midpoint(&self.focus1, &self.focus2)
    }

    /// Get the two directrices, ordered to match the foci.
    /// Each is perpendicular to the major axis, at `a / e` from the center.
    pub fn directrices(&self) -> ShapeResult<(Line, Line)> {
        let e = self.eccentricity();
        if e < EPS {
            return degenerate_err("Ellipse with coincident foci has no directrices");
        }
        let center = self.center();
        let axis = (self.focus1 - center).normalize();
        let offset = axis * (self.a() / e);

        let near_focus1 = center + offset;
        let near_focus2 = center - offset;
        Ok((
            Line::new(near_focus1, near_focus1 + axis.perp())?,
            Line::new(near_focus2, near_focus2 + axis.perp())?,
        ))
    }

    /// Same foci (in either order) and same semi-major axis.
    fn same_as(&self, other: &Ellipse) -> bool {
        let same_foci = (self.focus1 == other.focus1 && self.focus2 == other.focus2)
            || (self.focus1 == other.focus2 && self.focus2 == other.focus1);
        same_foci && (self.a() - other.a()).abs() < EPS
    }

    /// Same pair of semi-axes.
    fn congruent_with(&self, other: &Ellipse) -> bool {
        (self.a() - other.a()).abs() < EPS && (self.b() - other.b()).abs() < EPS
    }

    /// Same axis ratio and parallel major axes.
    fn similar_to(&self, other: &Ellipse) -> bool {
        if (self.a() / self.b() - other.a() / other.b()).abs() >= EPS {
            return false;
        }
        // Coincident foci leave no axis to orient, so any matching ratio will do
        match (Line::new(self.focus1, self.focus2), Line::new(other.focus1, other.focus2)) {
            (Ok(axis), Ok(other_axis)) => axis.is_parallel_to(&other_axis),
            _ => true,
        }
    }
}
impl Shape for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    /// Ramanujan's approximation.
    fn perimeter(&self) -> f64 {
        let (a, b) = (self.a(), self.b());
        4.0 * (PI * a * b + (a - b).powi(2)) / (a + b)
    }

    fn area(&self) -> f64 {
        PI * self.a() * self.b()
    }

    fn equals(&self, other: &ShapeChoice) -> bool {
        match other.as_ellipse() {
            Some(ellipse) => self.same_as(&ellipse),
            None => false,
        }
    }

    fn is_congruent_to(&self, other: &ShapeChoice) -> bool {
        match other.as_ellipse() {
            Some(ellipse) => self.congruent_with(&ellipse),
            None => false,
        }
    }

    fn is_similar_to(&self, other: &ShapeChoice) -> bool {
        match other.as_ellipse() {
            Some(ellipse) => self.similar_to(&ellipse),
            None => false,
        }
    }

    fn contains_point(&self, point: &Point) -> bool {
        Point::distance(&self.focus1, point) + Point::distance(&self.focus2, point) <= 2.0 * self.a() + EPS
    }

    fn shift(&mut self, delta: GeoVector) {
        self.focus1.shift(delta);
        self.focus2.shift(delta);
    }

    fn rotate(&mut self, center: &Point, angle: Degrees) {
        self.focus1.rotate(center, angle);
        self.focus2.rotate(center, angle);
    }

    fn reflect_around_point(&mut self, center: &Point) {
        self.focus1.reflect(center);
        self.focus2.reflect(center);
    }

    fn reflect_around_line(&mut self, axis: &Line) {
        Line::reflect(&mut self.focus1, axis);
        Line::reflect(&mut self.focus2, axis);
    }

    fn scale(&mut self, center: &Point, factor: f64) {
        self.focus1.scale(center, factor);
        self.focus2.scale(center, factor);
        self.semi_major_axis *= factor.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::shapes::ShapeError;

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// 5-4-3 ellipse centered on the origin, major axis along x.
    fn ellipse_543() -> Ellipse {
        Ellipse::new(p(-3.0, 0.0), p(3.0, 0.0), 5.0).unwrap()
    }

    #[test]
    fn construction_checks_domain() {
        assert!(matches!(Ellipse::new(p(0.0, 0.0), p(1.0, 0.0), 0.0), Err(ShapeError::Domain(_))));
        assert!(matches!(Ellipse::new(p(0.0, 0.0), p(1.0, 0.0), -2.0), Err(ShapeError::Domain(_))));
        assert!(matches!(Ellipse::new(p(0.0, 0.0), p(1.0, 0.0), f64::NAN), Err(ShapeError::Domain(_))));
        assert!(matches!(Ellipse::new(p(0.0, 0.0), p(4.0, 0.0), 2.0), Err(ShapeError::Domain(_))));
    }

    #[test]
    fn axes_and_eccentricity() {
        let e = ellipse_543();
        assert_abs_diff_eq!(e.a(), 5.0);
        assert_abs_diff_eq!(e.b(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(e.eccentricity(), 0.6, epsilon = 1e-12);
        assert_eq!(e.center(), p(0.0, 0.0));
        assert_eq!(e.focuses(), (p(-3.0, 0.0), p(3.0, 0.0)));
    }

    #[test]
    fn area_and_perimeter() {
        let e = ellipse_543();
        assert_abs_diff_eq!(e.area(), 20.0 * PI, epsilon = 1e-9);
        // Ramanujan's first approximation for a = 5, b = 4
        assert_abs_diff_eq!(e.perimeter(), 4.0 * (20.0 * PI + 1.0) / 9.0, epsilon = 1e-9);
    }

    #[test]
    fn contains_point_uses_focal_sum() {
        let e = ellipse_543();
        assert!(e.contains_point(&p(0.0, 0.0)));
        assert!(e.contains_point(&p(5.0, 0.0)));
        assert!(e.contains_point(&p(0.0, 4.0)));
        assert!(!e.contains_point(&p(0.0, 4.1)));
        assert!(!e.contains_point(&p(4.0, 3.0)));
    }

    #[test]
    fn directrices_sit_at_a_over_e() {
        let (d1, d2) = ellipse_543().directrices().unwrap();
        let x = 5.0 / 0.6;
        assert!(d1.contains(&p(-x, 0.0)));
        assert!(d1.contains(&p(-x, 10.0)));
        assert!(d2.contains(&p(x, -3.0)));
        assert_abs_diff_eq!(Line::angle(&d1, &Line::new(p(0.0, 0.0), p(1.0, 0.0)).unwrap()), 90.0, epsilon = 1e-9);

        let circle_like = Ellipse::new(p(1.0, 1.0), p(1.0, 1.0), 2.0).unwrap();
        assert!(matches!(circle_like.directrices(), Err(ShapeError::Degenerate(_))));
    }

    #[test]
    fn equality_ignores_focus_order() {
        let e: ShapeChoice = ellipse_543().into();
        let swapped: ShapeChoice = Ellipse::new(p(3.0, 0.0), p(-3.0, 0.0), 5.0).unwrap().into();
        let bigger: ShapeChoice = Ellipse::new(p(3.0, 0.0), p(-3.0, 0.0), 5.5).unwrap().into();
        assert!(e.equals(&swapped));
        assert!(swapped.equals(&e));
        assert!(!e.equals(&bigger));
    }

    #[test]
    fn congruence_and_similarity() {
        let e: ShapeChoice = ellipse_543().into();

        let mut turned = ellipse_543();
        turned.rotate(&p(1.0, 2.0), 90.0);
        let turned: ShapeChoice = turned.into();
        assert!(e.is_congruent_to(&turned));
        assert!(!e.is_similar_to(&turned));

        let mut doubled = ellipse_543();
        doubled.scale(&p(7.0, 0.0), 2.0);
        assert_abs_diff_eq!(doubled.a(), 10.0, epsilon = 1e-12);
        let doubled: ShapeChoice = doubled.into();
        assert!(!e.is_congruent_to(&doubled));
        assert!(e.is_similar_to(&doubled));

        let mut flipped = ellipse_543();
        flipped.reflect_around_point(&p(0.0, 5.0));
        let flipped: ShapeChoice = flipped.into();
        assert!(e.is_similar_to(&flipped));
        assert!(e.is_congruent_to(&flipped));
    }

    #[test]
    fn reflect_across_line_moves_foci() {
        let mut e = ellipse_543();
        e.reflect_around_line(&Line::new(p(0.0, 1.0), p(1.0, 1.0)).unwrap());
        assert_eq!(e.focuses(), (p(-3.0, 2.0), p(3.0, 2.0)));
        assert_abs_diff_eq!(e.a(), 5.0);
    }
}
