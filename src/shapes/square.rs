use crate::geo_2d::{Line, Point};
use crate::shapes::{
    Circle,
    Polygon,
    Rectangle,
    ShapeKind,
    ShapeResult,
};

/// A square.
/// A rectangle with side ratio fixed to 1.
#[derive(Debug, Clone)]
pub struct Square {
    rectangle: Rectangle,
}
impl Square {
    /// Create a new square from opposite corners.
    pub fn new(corner1: Point, corner3: Point) -> ShapeResult<Self> {
        Ok(Square{rectangle: Rectangle::new(corner1, corner3, 1.0)?})
    }

    /// Get the underlying polygon.
    pub fn as_polygon(&self) -> &Polygon {
        self.rectangle.as_polygon()
    }

    pub fn center(&self) -> Point {
        self.rectangle.center()
    }

    pub fn diagonals(&self) -> (Line, Line) {
        self.rectangle.diagonals()
    }

    /// Get the side length.
    pub fn side(&self) -> f64 {
        self.rectangle.side_lengths().0
    }

    /// Get the circle through all four corners.
    pub fn circumscribed_circle(&self) -> ShapeResult<Circle> {
        Circle::new(self.center(), self.diagonals().0.length() / 2.0)
    }

    /// Get the circle touching all four sides.
    pub fn inscribed_circle(&self) -> ShapeResult<Circle> {
        Circle::new(self.center(), self.side() / 2.0)
    }
}
forward_shape!(Square, ShapeKind::Square, rectangle);
