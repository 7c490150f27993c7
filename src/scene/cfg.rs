use serde::{Serialize, Deserialize};

use crate::geo_2d::{Degrees, GeoVector, Line, Point};
use crate::shapes::{
    Circle,
    Ellipse,
    Polygon,
    Rectangle,
    Shape,
    ShapeChoice,
    ShapeKind,
    ShapeResult,
    Square,
    Triangle,
};

/// Scene file contents.
/// A list of named shapes, each with its own transforms, and the probe points to test against them.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    pub shapes: Vec<ShapeEntry>,

    /// Points to check containment for, against every shape.
    #[serde(default, alias = "points")]
    pub probes: Vec<Point>,
}
impl Scene {
    /// Example scene holding a single shape of the given kind.
    pub fn example(kind: ShapeKind) -> Self {
        Scene{
            shapes: vec![ShapeEntry{
                name: format!("my_{}", kind),
                shape: ShapeCfg::example(kind),
                transforms: vec![
                    TransformCfg::Shift{delta: GeoVector::new(1.0, 0.5)},
                    TransformCfg::Rotate{center: Point::zero(), degrees: 30.0},
                ],
            }],
            probes: vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)],
        }
    }
}

/// A named shape and the transforms applied to it, in order.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeEntry {
    pub name: String,

    pub shape: ShapeCfg,

    #[serde(default)]
    pub transforms: Vec<TransformCfg>,
}

/// Shape parameters, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ShapeCfg {
    Ellipse {
        focus1: Point,
        focus2: Point,
        #[serde(alias = "a")]
        semi_major_axis: f64,
    },
    Circle {
        center: Point,
        radius: f64,
    },
    Polygon {
        vertices: Vec<Point>,
    },
    Rectangle {
        corner1: Point,
        corner3: Point,
        ratio: f64,
    },
    Square {
        corner1: Point,
        corner3: Point,
    },
    Triangle {
        vertices: [Point; 3],
    },
}
impl ShapeCfg {
    pub fn kind(&self) -> ShapeKind {
        match self {
            ShapeCfg::Ellipse{..} => ShapeKind::Ellipse,
            ShapeCfg::Circle{..} => ShapeKind::Circle,
            ShapeCfg::Polygon{..} => ShapeKind::Polygon,
            ShapeCfg::Rectangle{..} => ShapeKind::Rectangle,
            ShapeCfg::Square{..} => ShapeKind::Square,
            ShapeCfg::Triangle{..} => ShapeKind::Triangle,
        }
    }

    /// Construct the shape, checking its parameters.
    pub fn build(&self) -> ShapeResult<ShapeChoice> {
        let shape = match self {
            ShapeCfg::Ellipse{focus1, focus2, semi_major_axis} => {
                Ellipse::new(*focus1, *focus2, *semi_major_axis)?.into()
            },
            ShapeCfg::Circle{center, radius} => {
                Circle::new(*center, *radius)?.into()
            },
            ShapeCfg::Polygon{vertices} => {
                Polygon::new(vertices.clone())?.into()
            },
            ShapeCfg::Rectangle{corner1, corner3, ratio} => {
                Rectangle::new(*corner1, *corner3, *ratio)?.into()
            },
            ShapeCfg::Square{corner1, corner3} => {
                Square::new(*corner1, *corner3)?.into()
            },
            ShapeCfg::Triangle{vertices: [p1, p2, p3]} => {
                Triangle::new(*p1, *p2, *p3).into()
            },
        };
        Ok(shape)
    }

    /// Example parameters for a shape kind.
    pub fn example(kind: ShapeKind) -> Self {
        let p = Point::new;
        match kind {
            ShapeKind::Ellipse => ShapeCfg::Ellipse{focus1: p(-1.0, 0.0), focus2: p(1.0, 0.0), semi_major_axis: 2.0},
            ShapeKind::Circle => ShapeCfg::Circle{center: p(0.0, 0.0), radius: 1.0},
            ShapeKind::Polygon => ShapeCfg::Polygon{vertices: vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 3.0), p(2.0, 5.0), p(0.0, 3.0)]},
            ShapeKind::Rectangle => ShapeCfg::Rectangle{corner1: p(0.0, 0.0), corner3: p(4.0, 2.0), ratio: 0.5},
            ShapeKind::Square => ShapeCfg::Square{corner1: p(0.0, 0.0), corner3: p(1.0, 1.0)},
            ShapeKind::Triangle => ShapeCfg::Triangle{vertices: [p(0.0, 0.0), p(4.0, 0.0), p(0.0, 3.0)]},
        }
    }
}

/// A transform step, tagged by `op`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum TransformCfg {
    Shift {
        delta: GeoVector,
    },
    Rotate {
        center: Point,
        #[serde(alias = "angle")]
        degrees: Degrees,
    },
    ReflectPoint {
        center: Point,
    },
    ReflectLine {
        p1: Point,
        p2: Point,
    },
    Scale {
        center: Point,
        #[serde(alias = "coefficient")]
        factor: f64,
    },
}
impl TransformCfg {
    /// Apply the transform to a shape in place.
    /// Only a degenerate reflection axis can fail.
    pub fn apply(&self, shape: &mut ShapeChoice) -> ShapeResult<()> {
        log::debug!("Applying {:?} to {}", self, shape.kind());
        match self {
            TransformCfg::Shift{delta} => shape.shift(*delta),
            TransformCfg::Rotate{center, degrees} => shape.rotate(center, *degrees),
            TransformCfg::ReflectPoint{center} => shape.reflect_around_point(center),
            TransformCfg::ReflectLine{p1, p2} => shape.reflect_around_line(&Line::new(*p1, *p2)?),
            TransformCfg::Scale{center, factor} => shape.scale(center, *factor),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use crate::shapes::ShapeError;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_tagged_shapes_and_aliases() {
        let yaml = r#"
shapes:
  - name: oval
    shape: { kind: ellipse, focus1: {x: -3, y: 0}, focus2: {x: 3, y: 0}, a: 5 }
  - name: tri
    shape:
      kind: triangle
      vertices: [ {x: 0, y: 0}, {x: 4, y: 0}, {x: 0, y: 3} ]
    transforms:
      - { op: scale, center: {x: 0, y: 0}, coefficient: 2 }
"#;
        let scene: Scene = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scene.shapes.len(), 2);
        assert!(scene.probes.is_empty());
        assert_eq!(scene.shapes[0].shape.kind(), ShapeKind::Ellipse);
        assert!(scene.shapes[0].transforms.is_empty());
        assert!(matches!(&scene.shapes[1].transforms[0], TransformCfg::Scale{factor, ..} if *factor == 2.0));

        let oval = scene.shapes[0].shape.build().unwrap();
        assert_abs_diff_eq!(oval.area(), std::f64::consts::PI * 5.0 * 4.0, epsilon = 1e-9);
    }

    #[test]
    fn triangle_needs_three_vertices() {
        let yaml = "{ kind: triangle, vertices: [ {x: 0, y: 0}, {x: 1, y: 0} ] }";
        assert!(serde_yaml::from_str::<ShapeCfg>(yaml).is_err());
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let yaml = "{ kind: hexagon, vertices: [] }";
        assert!(serde_yaml::from_str::<ShapeCfg>(yaml).is_err());
    }

    #[test]
    fn build_checks_parameters() {
        let bad_circle = ShapeCfg::Circle{center: Point::zero(), radius: -1.0};
        assert!(matches!(bad_circle.build(), Err(ShapeError::Domain(_))));

        let flat_rectangle = ShapeCfg::Rectangle{corner1: Point::zero(), corner3: Point::zero(), ratio: 1.0};
        assert!(matches!(flat_rectangle.build(), Err(ShapeError::Degenerate(_))));
    }

    #[test]
    fn examples_build_to_their_kind() {
        for kind in ShapeKind::iter() {
            let cfg = ShapeCfg::example(kind);
            assert_eq!(cfg.kind(), kind);
            assert_eq!(cfg.build().unwrap().kind(), kind);
        }
    }

    #[test]
    fn transforms_apply_in_place() {
        let mut shape = ShapeCfg::Square{corner1: Point::new(0.0, 0.0), corner3: Point::new(1.0, 1.0)}.build().unwrap();
        let steps = [
            TransformCfg::Shift{delta: GeoVector::new(1.0, 0.0)},
            TransformCfg::Rotate{center: Point::zero(), degrees: 90.0},
            TransformCfg::ReflectLine{p1: Point::new(0.0, 0.0), p2: Point::new(0.0, 1.0)},
        ];
        for step in steps.iter() {
            step.apply(&mut shape).unwrap();
        }
        // (1,0)-(2,1) rotated to (0,1)-(-1,2), then mirrored across the y axis
        let expected = ShapeCfg::Square{corner1: Point::new(0.0, 1.0), corner3: Point::new(1.0, 2.0)}.build().unwrap();
        assert!(shape.equals(&expected));
    }

    #[test]
    fn degenerate_reflection_axis_fails() {
        let mut shape = ShapeCfg::example(ShapeKind::Circle).build().unwrap();
        let step = TransformCfg::ReflectLine{p1: Point::new(1.0, 1.0), p2: Point::new(1.0, 1.0)};
        assert!(matches!(step.apply(&mut shape), Err(ShapeError::Degenerate(_))));
    }
}
