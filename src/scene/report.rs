use serde::{Serialize, Deserialize};
use std::fmt;

use crate::geo_2d::Point;
use crate::shapes::{Ellipse, Polygon, Shape, ShapeChoice, ShapeKind};

/// Measurements of a single shape, after its transforms.
#[derive(Debug, Serialize, Deserialize)]
pub struct ShapeReport {
    pub name: String,
    pub kind: ShapeKind,
    pub perimeter: f64,
    pub area: f64,
    /// Only set for polygonal shapes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub convex: Option<bool>,
    pub geometry: Geometry,
    #[serde(default)]
    pub probes: Vec<ProbeResult>,
}
impl ShapeReport {
    /// Measure a shape and check it against the probe points.
    pub fn new(name: &str, shape: &ShapeChoice, probes: &[Point]) -> Self {
        ShapeReport{
            name: name.to_string(),
            kind: shape.kind(),
            perimeter: shape.perimeter(),
            area: shape.area(),
            convex: shape.as_polygon().map(|polygon| polygon.is_convex()),
            geometry: Geometry::from_shape(shape),
            probes: probes.iter().map(|point| ProbeResult{
                point: *point,
                inside: shape.contains_point(point),
            }).collect(),
        }
    }
}
impl fmt::Display for ShapeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.kind)?;
        writeln!(f, "  perimeter: {:.3}", self.perimeter)?;
        writeln!(f, "  area: {:.3}", self.area)?;
        if let Some(convex) = self.convex {
            writeln!(f, "  convex: {}", convex)?;
        }
        write!(f, "{}", self.geometry)?;
        for probe in self.probes.iter() {
            write!(f, "\n  probe {}: {}", probe.point, if probe.inside { "inside" } else { "outside" })?;
        }
        Ok(())
    }
}

/// Resulting geometry of a shape, by family.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum Geometry {
    Elliptic {
        focus1: Point,
        focus2: Point,
        semi_major_axis: f64,
    },
    Polygonal {
        vertices: Vec<Point>,
    },
}
impl Geometry {
    pub fn from_shape(shape: &ShapeChoice) -> Self {
        match shape {
            ShapeChoice::Ellipse(ellipse) => Geometry::from_ellipse(ellipse),
            ShapeChoice::Circle(circle) => Geometry::from_ellipse(&circle.to_ellipse()),
            ShapeChoice::Polygon(polygon) => Geometry::from_polygon(polygon),
            ShapeChoice::Rectangle(rectangle) => Geometry::from_polygon(rectangle.as_polygon()),
            ShapeChoice::Square(square) => Geometry::from_polygon(square.as_polygon()),
            ShapeChoice::Triangle(triangle) => Geometry::from_polygon(triangle.as_polygon()),
        }
    }

    fn from_ellipse(ellipse: &Ellipse) -> Self {
        let (focus1, focus2) = ellipse.focuses();
        Geometry::Elliptic{focus1, focus2, semi_major_axis: ellipse.a()}
    }

    fn from_polygon(polygon: &Polygon) -> Self {
        Geometry::Polygonal{vertices: polygon.vertices().to_vec()}
    }
}
impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Elliptic{focus1, focus2, semi_major_axis} => {
                write!(f, "  foci: {} {}\n  semi-major axis: {:.3}", focus1, focus2, semi_major_axis)
            },
            Geometry::Polygonal{vertices} => {
                write!(f, "  vertices:")?;
                for vertex in vertices.iter() {
                    write!(f, " {}", vertex)?;
                }
                Ok(())
            },
        }
    }
}

/// Containment result for one probe point.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProbeResult {
    pub point: Point,
    pub inside: bool,
}

/// Comparison flags for an unordered pair of shapes.
#[derive(Debug, Serialize, Deserialize)]
pub struct PairReport {
    pub first: String,
    pub second: String,
    pub equal: bool,
    pub congruent: bool,
    pub similar: bool,
}
impl PairReport {
    pub fn new(first_name: &str, first: &ShapeChoice, second_name: &str, second: &ShapeChoice) -> Self {
        log::debug!("Comparing {} ({}) with {} ({})", first_name, first.kind(), second_name, second.kind());
        PairReport{
            first: first_name.to_string(),
            second: second_name.to_string(),
            equal: first.equals(second),
            congruent: first.is_congruent_to(second),
            similar: first.is_similar_to(second),
        }
    }
}
impl fmt::Display for PairReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}: equal={} congruent={} similar={}",
            self.first, self.second, self.equal, self.congruent, self.similar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Square, Triangle};

    #[test]
    fn square_report() {
        let square: ShapeChoice = Square::new(Point::new(0.0, 0.0), Point::new(1.0, 1.0)).unwrap().into();
        let report = ShapeReport::new("unit", &square, &[Point::new(0.5, 0.5), Point::new(2.0, 0.5)]);
        assert_eq!(report.kind, ShapeKind::Square);
        assert_eq!(report.convex, Some(true));
        assert!(report.probes[0].inside);
        assert!(!report.probes[1].inside);
        assert!(matches!(&report.geometry, Geometry::Polygonal{vertices} if vertices.len() == 4));

        let text = report.to_string();
        assert!(text.starts_with("unit (square)"));
        assert!(text.contains("  area: 1.000"));
        assert!(text.contains("  perimeter: 4.000"));
        assert!(text.contains("probe (0.500, 0.500): inside"));
        assert!(text.contains("probe (2.000, 0.500): outside"));
    }

    #[test]
    fn circle_report_is_elliptic() {
        let circle: ShapeChoice = Circle::new(Point::new(1.0, 2.0), 2.0).unwrap().into();
        let report = ShapeReport::new("ring", &circle, &[]);
        assert_eq!(report.convex, None);
        match &report.geometry {
            Geometry::Elliptic{focus1, focus2, semi_major_axis} => {
                assert_eq!(*focus1, Point::new(1.0, 2.0));
                assert_eq!(*focus2, Point::new(1.0, 2.0));
                assert_eq!(*semi_major_axis, 2.0);
            },
            other => panic!("Expected elliptic geometry, got {:?}", other),
        }

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "circle");
        assert_eq!(json["geometry"]["form"], "elliptic");
        assert!(json.get("convex").is_none());
    }

    #[test]
    fn pair_report() {
        let small: ShapeChoice = Triangle::new(Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)).into();
        let large: ShapeChoice = Triangle::new(Point::new(0.0, 0.0), Point::new(8.0, 0.0), Point::new(0.0, 6.0)).into();
        let pair = PairReport::new("small", &small, "large", &large);
        assert!(!pair.equal);
        assert!(!pair.congruent);
        assert!(pair.similar);
        assert_eq!(pair.to_string(), "small vs large: equal=false congruent=false similar=true");
    }
}
