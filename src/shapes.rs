/*!
 * This is the shapes module.
 * Adding new shapes should be done here.
 *
 * New shapes need:
 * - A struct implementing `Shape`
 * - An enum variant containing that struct in `ShapeChoice`
 * - A matching `ShapeKind` variant, placed in the right family
 * - A config variant in `scene::ShapeCfg`
 *
 */

use enum_dispatch::enum_dispatch;
use serde::{Serialize, Deserialize};
use strum::{Display, EnumIter};

use crate::geo_2d::{Degrees, GeoVector, Line, Point};

/// Implement `Shape` for a wrapper shape by forwarding every call to one of its fields.
/// Used for shapes that are specialised views over a base shape (e.g. a square over a rectangle).
macro_rules! forward_shape {
    ($wrapper:ty, $kind:expr, $field:ident) => {
        impl $crate::shapes::Shape for $wrapper {
            fn kind(&self) -> $crate::shapes::ShapeKind {
                $kind
            }
            fn perimeter(&self) -> f64 {
                $crate::shapes::Shape::perimeter(&self.$field)
            }
            fn area(&self) -> f64 {
                $crate::shapes::Shape::area(&self.$field)
            }
            fn equals(&self, other: &$crate::shapes::ShapeChoice) -> bool {
                $crate::shapes::Shape::equals(&self.$field, other)
            }
            fn is_congruent_to(&self, other: &$crate::shapes::ShapeChoice) -> bool {
                $crate::shapes::Shape::is_congruent_to(&self.$field, other)
            }
            fn is_similar_to(&self, other: &$crate::shapes::ShapeChoice) -> bool {
                $crate::shapes::Shape::is_similar_to(&self.$field, other)
            }
            fn contains_point(&self, point: &$crate::geo_2d::Point) -> bool {
                $crate::shapes::Shape::contains_point(&self.$field, point)
            }
            fn shift(&mut self, delta: $crate::geo_2d::GeoVector) {
                $crate::shapes::Shape::shift(&mut self.$field, delta)
            }
            fn rotate(&mut self, center: &$crate::geo_2d::Point, angle: $crate::geo_2d::Degrees) {
                $crate::shapes::Shape::rotate(&mut self.$field, center, angle)
            }
            fn reflect_around_point(&mut self, center: &$crate::geo_2d::Point) {
                $crate::shapes::Shape::reflect_around_point(&mut self.$field, center)
            }
            fn reflect_around_line(&mut self, axis: &$crate::geo_2d::Line) {
                $crate::shapes::Shape::reflect_around_line(&mut self.$field, axis)
            }
            fn scale(&mut self, center: &$crate::geo_2d::Point, factor: f64) {
                $crate::shapes::Shape::scale(&mut self.$field, center, factor)
            }
        }
    };
}

mod proc_errors;
mod ellipse;
mod circle;
mod polygon;
mod rectangle;
mod square;
mod triangle;

// Re-export errors
pub use proc_errors::{
    ShapeError,
    ShapeResult,
    domain_err,
    degenerate_err,
};
// Re-export shapes
pub use ellipse::Ellipse;
pub use circle::Circle;
pub use polygon::Polygon;
pub use rectangle::Rectangle;
pub use square::Square;
pub use triangle::Triangle;

/// Shape trait.
/// This trait defines the capability set that every shape must implement.
/// Comparisons take any `ShapeChoice` and are `false` across families, never an error.
/// Transforms mutate the shape in place.
#[enum_dispatch] // enum dispatch allows us to use the enum as a kind of trait object
pub trait Shape {
    /// Get the kind tag of the shape.
    fn kind(&self) -> ShapeKind;

    /// Get the perimeter of the shape.
    fn perimeter(&self) -> f64;

    /// Get the area of the shape.
    fn area(&self) -> f64;

    /// Check whether two shapes describe the same point set.
    fn equals(&self, other: &ShapeChoice) -> bool;

    /// Check whether an isometry maps one shape onto the other.
    fn is_congruent_to(&self, other: &ShapeChoice) -> bool;

    /// Check whether the shapes match up to scaling.
    fn is_similar_to(&self, other: &ShapeChoice) -> bool;

    /// Check whether a point is inside or on the boundary of the shape.
    fn contains_point(&self, point: &Point) -> bool;

    /// Move the shape by a displacement.
    fn shift(&mut self, delta: GeoVector);

    /// Rotate the shape counter-clockwise around a center, by an angle in degrees.
    fn rotate(&mut self, center: &Point, angle: Degrees);

    /// Reflect the shape through a center point.
    fn reflect_around_point(&mut self, center: &Point);

    /// Reflect the shape across an axis line.
    fn reflect_around_line(&mut self, axis: &Line);

    /// Scale the shape around a center point.
    fn scale(&mut self, center: &Point, factor: f64);
}

/// Shapes enum.
/// To add a new shape:
/// implement the `Shape` trait for it,
/// include it here,
/// and give it a `ShapeKind`.
#[derive(Debug, Clone)]
#[enum_dispatch(Shape)]
pub enum ShapeChoice {
    /// Ellipse defined by its foci and semi-major axis.
    Ellipse(Ellipse),
    /// Circle defined by its center and radius.
    Circle(Circle),
    /// Polygon defined by an ordered list of vertices.
    Polygon(Polygon),
    /// Rectangle defined by two opposite corners and a side ratio.
    Rectangle(Rectangle),
    /// Square defined by two opposite corners.
    Square(Square),
    /// Triangle defined by three vertices.
    Triangle(Triangle),
}
impl ShapeChoice {
    /// View the shape as an ellipse, if it belongs to the elliptic family.
    pub fn as_ellipse(&self) -> Option<Ellipse> {
        match self {
            ShapeChoice::Ellipse(ellipse) => Some(*ellipse),
            ShapeChoice::Circle(circle) => Some(circle.to_ellipse()),
            _ => None,
        }
    }

    /// View the shape as a polygon, if it belongs to the polygonal family.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            ShapeChoice::Polygon(polygon) => Some(polygon),
            ShapeChoice::Rectangle(rectangle) => Some(rectangle.as_polygon()),
            ShapeChoice::Square(square) => Some(square.as_polygon()),
            ShapeChoice::Triangle(triangle) => Some(triangle.as_polygon()),
            _ => None,
        }
    }
}
impl PartialEq for ShapeChoice {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Shape kind tag, one per `ShapeChoice` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, Display, EnumIter, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShapeKind {
    Ellipse,
    Circle,
    Polygon,
    Rectangle,
    Square,
    Triangle,
}
impl ShapeKind {
    /// Get the comparison family of the kind.
    pub fn family(&self) -> ShapeFamily {
        match self {
            ShapeKind::Ellipse | ShapeKind::Circle => ShapeFamily::Elliptic,
            ShapeKind::Polygon | ShapeKind::Rectangle | ShapeKind::Square | ShapeKind::Triangle => ShapeFamily::Polygonal,
        }
    }
}

/// Comparison family. Shapes are only ever equal, congruent or similar within a family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ShapeFamily {
    Elliptic,
    Polygonal,
}
