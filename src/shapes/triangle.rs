use crate::geo_2d::{Point, EPS};
use crate::shapes::{
    Circle,
    Polygon,
    Shape,
    ShapeError,
    ShapeKind,
    ShapeResult,
    domain_err,
    degenerate_err,
};

/// A triangle.
#[derive(Debug, Clone)]
pub struct Triangle {
    polygon: Polygon,
}
impl Triangle {
    /// Create a new triangle.
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Triangle{polygon: Polygon::new_unchecked(vec![p1, p2, p3])}
    }

    /// Get the underlying polygon.
    pub fn as_polygon(&self) -> &Polygon {
        &self.polygon
    }

    fn corners(&self) -> (Point, Point, Point) {
        let v = self.polygon.vertices();
        (v[0], v[1], v[2])
    }

    /// Get the circle through all three vertices.
    /// Errors for collinear vertices.
    pub fn circumscribed_circle(&self) -> ShapeResult<Circle> {
        let (a, b, c) = self.corners();

        let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
        // Sine of the angle at a; NaN when two vertices coincide
        let sine = d.abs() / (2.0 * Point::distance(&a, &b) * Point::distance(&a, &c));
        if !(sine >= EPS) {
            return degenerate_err("Collinear triangle has no circumscribed circle");
        }

        let a_sq = a.x * a.x + a.y * a.y;
        let b_sq = b.x * b.x + b.y * b.y;
        let c_sq = c.x * c.x + c.y * c.y;
        let center = Point::new(
            (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d,
            (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d,
        );
        Circle::new(center, Point::distance(&center, &a))
    }

    /// Get the circle touching all three sides.
    /// Errors for collinear vertices.
    pub fn inscribed_circle(&self) -> ShapeResult<Circle> {
        let (a, b, c) = self.corners();
        let perimeter = self.perimeter();
        let radius = 2.0 * self.area() / perimeter;
        if !(radius >= EPS) {
            return degenerate_err("Collinear triangle has no inscribed circle");
        }

        // The incircle touches side ab at (s - |bc|) from a; the center sits r off that point,
        // on whichever side of ab holds the triangle.
        let tangent_distance = perimeter / 2.0 - Point::distance(&b, &c);
        let along = (b - a).normalize();
        let touch = a + along * tangent_distance;

        let candidate = touch + along.perp() * radius;
        let center = if self.contains_point(&candidate) {
            candidate
        } else {
            touch - along.perp() * radius
        };
        Circle::new(center, radius)
    }
}
forward_shape!(Triangle, ShapeKind::Triangle, polygon);

impl TryFrom<Polygon> for Triangle {
    type Error = ShapeError;

    fn try_from(polygon: Polygon) -> ShapeResult<Self> {
        if polygon.vertex_count() != 3 {
            return domain_err(&format!("Triangle needs exactly 3 vertices, got {}", polygon.vertex_count()));
        }
        Ok(Triangle{polygon})
    }
}
