use itertools::Itertools;

use crate::geo_2d::{Degrees, GeoVector, Line, Point, EPS};
use crate::shapes::{
    Shape,
    ShapeChoice,
    ShapeKind,
    ShapeResult,
    domain_err,
};

/// A polygon.
/// Contains the ordered vertices; the last vertex connects back to the first.
#[derive(Debug, Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
}
impl Polygon {
    /// Create a new polygon. Needs at least 3 vertices.
    pub fn new(vertices: Vec<Point>) -> ShapeResult<Self> {
        if vertices.len() < 3 {
            return domain_err(&format!("Polygon must have at least 3 vertices, got {}", vertices.len()));
        }
        Ok(Polygon{vertices})
    }

    /// Build a polygon from vertices already known to be enough.
    pub(super) fn new_unchecked(vertices: Vec<Point>) -> Self {
        Polygon{vertices}
    }

    /// Get the vertices, in order.
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate over the edges as `(start, end)` pairs, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> + '_ {
        self.vertices.iter().circular_tuple_windows::<(_, _)>()
    }

    /// Check if the polygon is convex.
    /// Turns at every vertex must all go the same way; straight angles are ignored.
    pub fn is_convex(&self) -> bool {
        let mut left = false;
        let mut right = false;
        for (a, b, c) in self.vertices.iter().circular_tuple_windows::<(_, _, _)>() {
            let (incoming, outgoing) = (*b - *a, *c - *b);
            let lengths = incoming.norm() * outgoing.norm();
            if lengths == 0.0 {
                continue;
            }
            // Sine of the turn
            let turn = incoming.cross(&outgoing) / lengths;
            if turn > EPS {
                left = true;
            } else if turn < -EPS {
                right = true;
            }
        }
        left != right
    }

    /// Get the length of the shortest edge.
    fn shortest_edge(&self) -> f64 {
        self.edges()
            .map(|(a, b)| Point::distance(a, b))
            .fold(f64::INFINITY, f64::min)
    }

    /// Same undirected edges, each matched exactly once.
    fn same_as(&self, other: &Polygon) -> bool {
        if self.vertex_count() != other.vertex_count() {
            return false;
        }
        let mut unmatched: Vec<(&Point, &Point)> = self.edges().collect();
        for (p1, p2) in other.edges() {
            let found = unmatched.iter().position(|(q1, q2)| {
                (*q1 == p1 && *q2 == p2) || (*q1 == p2 && *q2 == p1)
            });
            match found {
                Some(idx) => {
                    unmatched.swap_remove(idx);
                },
                None => return false,
            }
        }
        unmatched.is_empty()
    }

    /// Some isometry (rotation, translation, reflection) maps one vertex cycle onto the other.
    fn congruent_with(&self, other: &Polygon) -> bool {
        if self.vertex_count() != other.vertex_count() {
            return false;
        }
        let own = signature(&self.vertices);

        let reversed: Vec<Point> = other.vertices.iter().rev().copied().collect();
        for candidate in [signature(&other.vertices), signature(&reversed)] {
            let mirrored: Vec<(f64, Degrees)> = candidate.iter().map(|&(len, turn)| (len, -turn)).collect();
            if matches_cyclically(&own, &candidate) || matches_cyclically(&own, &mirrored) {
                return true;
            }
        }
        false
    }

    /// Congruent once the other polygon is scaled so that the shortest edges match.
    fn similar_to(&self, other: &Polygon) -> bool {
        if self.vertex_count() != other.vertex_count() {
            return false;
        }
        let own_shortest = self.shortest_edge();
        let other_shortest = other.shortest_edge();
        if own_shortest < EPS || other_shortest < EPS {
            return false;
        }
        let mut scaled = other.clone();
        scaled.scale(&Point::zero(), own_shortest / other_shortest);
        self.congruent_with(&scaled)
    }
}
impl Shape for Polygon {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Polygon
    }

    fn perimeter(&self) -> f64 {
        self.edges().map(|(a, b)| Point::distance(a, b)).sum()
    }

    /// Shoelace formula.
    fn area(&self) -> f64 {
        let twice_signed: f64 = self.edges()
            .map(|(a, b)| a.x * b.y - a.y * b.x)
            .sum();
        twice_signed.abs() / 2.0
    }

    fn equals(&self, other: &ShapeChoice) -> bool {
        match other.as_polygon() {
            Some(polygon) => self.same_as(polygon),
            None => false,
        }
    }

    fn is_congruent_to(&self, other: &ShapeChoice) -> bool {
        match other.as_polygon() {
            Some(polygon) => self.congruent_with(polygon),
            None => false,
        }
    }

    fn is_similar_to(&self, other: &ShapeChoice) -> bool {
        match other.as_polygon() {
            Some(polygon) => self.similar_to(polygon),
            None => false,
        }
    }

    /// Boundary points count as contained.
    /// Otherwise, count crossings of a horizontal ray going right from the point.
    /// Each edge covers the half-open span `[y_min, y_max)`, so a vertex on the ray is counted once.
    fn contains_point(&self, point: &Point) -> bool {
        if self.edges().any(|(a, b)| on_segment(point, a, b)) {
            return true;
        }
        let mut inside = false;
        for (a, b) in self.edges() {
            if (a.y > point.y) != (b.y > point.y) {
                let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if x_cross > point.x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    fn shift(&mut self, delta: GeoVector) {
        for vertex in self.vertices.iter_mut() {
            vertex.shift(delta);
        }
    }

    fn rotate(&mut self, center: &Point, angle: Degrees) {
        for vertex in self.vertices.iter_mut() {
            vertex.rotate(center, angle);
        }
    }

    fn reflect_around_point(&mut self, center: &Point) {
        for vertex in self.vertices.iter_mut() {
            vertex.reflect(center);
        }
    }

    fn reflect_around_line(&mut self, axis: &Line) {
        for vertex in self.vertices.iter_mut() {
            Line::reflect(vertex, axis);
        }
    }

    fn scale(&mut self, center: &Point, factor: f64) {
        for vertex in self.vertices.iter_mut() {
            vertex.scale(center, factor);
        }
    }
}

/// Edge length and signed turn at the end of the edge, for every edge in order.
fn signature(vertices: &[Point]) -> Vec<(f64, Degrees)> {
    vertices.iter()
        .circular_tuple_windows::<(_, _, _)>()
        .map(|(a, b, c)| {
            let edge = *b - *a;
            (edge.norm(), edge.signed_angle_to(&(*c - *b)))
        })
        .collect()
}

/// Check whether `rhs` is a cyclic shift of `lhs`, within `EPS`.
fn matches_cyclically(lhs: &[(f64, Degrees)], rhs: &[(f64, Degrees)]) -> bool {
    let n = lhs.len();
    if n != rhs.len() {
        return false;
    }
    (0..n).any(|offset| {
        (0..n).all(|i| {
            let (l_len, l_turn) = lhs[i];
            let (r_len, r_turn) = rhs[(i + offset) % n];
            (l_len - r_len).abs() < EPS && (l_turn - r_turn).abs() < EPS
        })
    })
}

/// Check whether a point lies on the closed segment `a -> b`.
fn on_segment(point: &Point, a: &Point, b: &Point) -> bool {
    let edge = *b - *a;
    let length = edge.norm();
    if length < EPS {
        return *point == *a;
    }
    let to_point = *point - *a;
    let along = to_point.dot(&edge);
    (edge.cross(&to_point) / length).abs() < EPS
        && along >= -EPS * length
        && along <= edge.norm_sq() + EPS * length
}
