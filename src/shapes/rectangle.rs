use crate::geo_2d::{Line, Point, EPS};
use crate::shapes::{
    Polygon,
    ShapeKind,
    ShapeResult,
    domain_err,
    degenerate_err,
};

/// A rectangle.
/// Built from two opposite corners and the ratio between its sides.
/// Vertices are stored as `[corner1, corner2, corner3, corner4]`,
/// with `corner2` on the counter-clockwise side of the `corner1 -> corner3` diagonal.
#[derive(Debug, Clone)]
pub struct Rectangle {
    polygon: Polygon,
}
impl Rectangle {
    /// Create a new rectangle from opposite corners.
    /// `ratio` is `|corner2 corner3| / |corner1 corner2|` and must be positive.
    pub fn new(corner1: Point, corner3: Point, ratio: f64) -> ShapeResult<Self> {
        if !(ratio > 0.0) {
            return domain_err(&format!("Rectangle side ratio must be positive, got {}", ratio));
        }
        let diagonal = corner3 - corner1;
        let d = diagonal.norm();
        if d < EPS {
            return degenerate_err(&format!("Rectangle corners coincide at {}", corner1));
        }

        // Drop the perpendicular from corner2 onto the diagonal:
        // its foot sits at a²/d along the diagonal, at height a·b/d.
        let a = d / (1.0 + ratio * ratio).sqrt();
        let b = a * ratio;
        let along = diagonal / d;
        let corner2 = corner1 + along * (a * a / d) + along.perp() * (a * b / d);
        let corner4 = corner1 + (corner3 - corner2);

        Ok(Rectangle{polygon: Polygon::new_unchecked(vec![corner1, corner2, corner3, corner4])})
    }

    /// Get the underlying polygon.
    pub fn as_polygon(&self) -> &Polygon {
        &self.polygon
    }

    /// Get the center, where the diagonals cross.
    pub fn center(&self) -> Point {
        let vertices = self.polygon.vertices();
        Point::midpoint(&vertices[0], &vertices[2])
    }

    /// Get the two diagonals, `corner1 -> corner3` and `corner2 -> corner4`.
    pub fn diagonals(&self) -> (Line, Line) {
        let vertices = self.polygon.vertices();
        (
            Line{p1: vertices[0], p2: vertices[2]},
            Line{p1: vertices[1], p2: vertices[3]},
        )
    }

    /// Get the side lengths, `|corner1 corner2|` then `|corner2 corner3|`.
    pub fn side_lengths(&self) -> (f64, f64) {
        let vertices = self.polygon.vertices();
        (
            Point::distance(&vertices[0], &vertices[1]),
            Point::distance(&vertices[1], &vertices[2]),
        )
    }
}
forward_shape!(Rectangle, ShapeKind::Rectangle, polygon);
