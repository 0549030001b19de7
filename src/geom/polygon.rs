//! Rigid polygonal shapes: vehicles, camera hitbox, track frame and paths
//!
//! Vertices live in local space and never change after construction. The
//! pose (`position`, `angle`) is the only mutable state. Queries documented
//! as world space use `vertex + position`.

use serde::{Deserialize, Serialize};

use super::hull;
use super::point::Point3;
use super::vertex::Vertex;
use crate::consts::REBOUND_DISTANCE;

/// Physical parameters carried as data (no dynamics solver consumes them)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub mass: f32,
    /// How strongly the shape grips another shape it touches
    pub friction: f32,
    /// How strongly the shape bounces off another shape it hits
    pub restitution: f32,
}

/// World-space axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3,
    pub max: Point3,
}

impl Bounds {
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Inclusive planar containment
    pub fn contains(&self, point: Point3) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// A closed polygon (last vertex connects back to the first)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    vertices: Vec<Vertex>,
    position: Point3,
    /// Heading in radians
    angle: f32,
    color: String,
    material: Option<String>,
    body: Body,
}

impl Polygon {
    /// # Panics
    ///
    /// Panics if fewer than three vertices are given.
    pub fn new(vertices: Vec<Vertex>, position: Point3, color: impl Into<String>, body: Body) -> Self {
        assert!(
            vertices.len() >= 3,
            "polygon needs at least 3 vertices, got {}",
            vertices.len()
        );
        Self {
            vertices,
            position,
            angle: 0.0,
            color: color.into(),
            material: None,
            body,
        }
    }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Local-space vertices
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Vertices offset by the world position
    pub fn world_vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().map(|v| *v + self.position)
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn material(&self) -> Option<&str> {
        self.material.as_deref()
    }

    pub fn body(&self) -> Body {
        self.body
    }

    pub fn set_position(&mut self, position: Point3) {
        self.position = position;
    }

    pub fn translate(&mut self, offset: Point3) {
        self.position = self.position + offset;
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Index of the first vertex whose key beats every other under `better`
    fn extreme_index(&self, key: impl Fn(&Vertex) -> f32, better: impl Fn(f32, f32) -> bool) -> usize {
        let mut best = 0;
        for (i, v) in self.vertices.iter().enumerate().skip(1) {
            if better(key(v), key(&self.vertices[best])) {
                best = i;
            }
        }
        best
    }

    fn world(&self, index: usize) -> Vertex {
        self.vertices[index] + self.position
    }

    pub fn leftmost(&self) -> Vertex {
        self.world(self.extreme_index(Vertex::x, |a, b| a < b))
    }

    pub fn rightmost(&self) -> Vertex {
        self.world(self.extreme_index(Vertex::x, |a, b| a > b))
    }

    /// Smallest y (screen space is y-down)
    pub fn topmost(&self) -> Vertex {
        self.world(self.extreme_index(Vertex::y, |a, b| a < b))
    }

    pub fn bottommost(&self) -> Vertex {
        self.world(self.extreme_index(Vertex::y, |a, b| a > b))
    }

    /// Mean of the local vertex coordinates
    pub fn centroid(&self) -> Point3 {
        let sum = self
            .vertices
            .iter()
            .fold(Point3::ZERO, |acc, v| acc + v.point);
        sum.scaled_by(1.0 / self.vertices.len() as f32)
    }

    pub fn bounds(&self) -> Bounds {
        let first = self.world(0).point;
        self.world_vertices().fold(
            Bounds {
                min: first,
                max: first,
            },
            |b, v| Bounds {
                min: b.min.min(v.point),
                max: b.max.max(v.point),
            },
        )
    }

    /// Even-odd ray cast against the world-space outline.
    ///
    /// `point` must already be in world space. Holds for any simple polygon,
    /// convex or not, in either winding order.
    pub fn contains_point(&self, point: Point3) -> bool {
        let n = self.vertices.len();
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let a = self.world(i).point;
            let b = self.world(j).point;
            if (a.y >= point.y) != (b.y >= point.y) {
                let crossing_x = (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x;
                if point.x <= crossing_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// Axis-aligned nudge that pushes stray points back inside the bounding box.
    ///
    /// Each point contributes its first violated side, checked in the order
    /// left, right, top, bottom. A later point overwrites the axis an earlier
    /// one set, so the last offender per axis decides. This works against the
    /// bounding box rather than the true outline; it is a cheap correction
    /// signal, not contact resolution.
    pub fn rebound_vector(&self, points: &[Point3]) -> Point3 {
        let Bounds { min, max } = self.bounds();
        let mut rebound = Point3::ZERO;
        for point in points {
            if point.x < min.x {
                rebound.x = min.x - point.x + REBOUND_DISTANCE;
            } else if point.x > max.x {
                rebound.x = max.x - point.x - REBOUND_DISTANCE;
            } else if point.y < min.y {
                rebound.y = min.y - point.y + REBOUND_DISTANCE;
            } else if point.y > max.y {
                rebound.y = max.y - point.y - REBOUND_DISTANCE;
            }
        }
        rebound
    }

    /// Convex hull of an arbitrary point set
    pub fn convex_hull(points: &[Point3]) -> Vec<Point3> {
        hull::convex_hull(points)
    }

    /// Convex hull of this shape's world-space outline
    pub fn hull(&self) -> Vec<Point3> {
        let points: Vec<Point3> = self.world_vertices().map(Vertex::to_point).collect();
        hull::convex_hull(&points)
    }

    /// Angle at every vertex between its two neighbours, in degrees.
    ///
    /// # Panics
    ///
    /// Panics if a vertex coincides with one of its neighbours.
    pub fn interior_angles(&self) -> Vec<f32> {
        let n = self.vertices.len();
        (0..n)
            .map(|i| {
                let prev = self.vertices[(i + n - 1) % n];
                let current = self.vertices[i];
                let next = self.vertices[(i + 1) % n];
                angle_at_vertex(prev, current, next)
            })
            .collect()
    }

    /// Move the shape down by its top-most local vertex so that vertex sits on the old origin
    pub fn shift_baseline_forward(&mut self) {
        let top = self.vertices[self.extreme_index(Vertex::y, |a, b| a < b)];
        self.position.y += top.y();
    }
}

/// Law of cosines on the triangle (prev, current, next)
fn angle_at_vertex(prev: Vertex, current: Vertex, next: Vertex) -> f32 {
    let a = prev.distance_to(current);
    let b = current.distance_to(next);
    let c = next.distance_to(prev);
    assert!(
        a > 0.0 && b > 0.0,
        "zero-length edge at vertex ({}, {})",
        current.x(),
        current.y()
    );

    let cos = ((a * a + b * b - c * c) / (2.0 * a * b)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(position: Point3) -> Polygon {
        Polygon::new(
            vec![
                Vertex::line(0.0, 0.0, 0.0),
                Vertex::line(10.0, 0.0, 0.0),
                Vertex::line(10.0, 10.0, 0.0),
                Vertex::line(0.0, 10.0, 0.0),
            ],
            position,
            "black",
            Body::default(),
        )
    }

    #[test]
    fn test_square_contains() {
        let sq = square(Point3::ZERO);
        assert!(sq.contains_point(Point3::new(5.0, 5.0, 0.0)));
        assert!(!sq.contains_point(Point3::new(15.0, 5.0, 0.0)));
        assert!(!sq.contains_point(Point3::new(-1.0, 5.0, 0.0)));
        assert!(!sq.contains_point(Point3::new(5.0, 20.0, 0.0)));
    }

    #[test]
    fn test_contains_uses_world_position() {
        let sq = square(Point3::new(100.0, 0.0, 0.0));
        assert!(!sq.contains_point(Point3::new(5.0, 5.0, 0.0)));
        assert!(sq.contains_point(Point3::new(105.0, 5.0, 0.0)));
    }

    #[test]
    fn test_contains_concave() {
        // U shape open at the top
        let u = Polygon::new(
            vec![
                Vertex::line(0.0, 0.0, 0.0),
                Vertex::line(3.0, 0.0, 0.0),
                Vertex::line(3.0, 10.0, 0.0),
                Vertex::line(7.0, 10.0, 0.0),
                Vertex::line(7.0, 0.0, 0.0),
                Vertex::line(10.0, 0.0, 0.0),
                Vertex::line(10.0, 12.0, 0.0),
                Vertex::line(0.0, 12.0, 0.0),
            ],
            Point3::ZERO,
            "grey",
            Body::default(),
        );
        assert!(u.contains_point(Point3::new(1.5, 5.0, 0.0)));
        assert!(u.contains_point(Point3::new(5.0, 11.0, 0.0)));
        assert!(!u.contains_point(Point3::new(5.0, 5.0, 0.0)));
    }

    #[test]
    fn test_rebound_right_side() {
        let sq = square(Point3::ZERO);
        let rebound = sq.rebound_vector(&[Point3::new(15.0, 5.0, 0.0)]);
        assert_eq!(rebound, Point3::new(10.0 - 15.0 - REBOUND_DISTANCE, 0.0, 0.0));
    }

    #[test]
    fn test_rebound_priority_and_last_wins() {
        let sq = square(Point3::ZERO);

        // Left violation is checked before top, so y stays untouched
        let rebound = sq.rebound_vector(&[Point3::new(-2.0, -5.0, 0.0)]);
        assert_eq!(rebound, Point3::new(3.0, 0.0, 0.0));

        // The second left offender overwrites x, the top offender sets y
        let rebound = sq.rebound_vector(&[
            Point3::new(-2.0, 5.0, 0.0),
            Point3::new(5.0, -4.0, 0.0),
            Point3::new(-1.0, 5.0, 0.0),
        ]);
        assert_eq!(rebound, Point3::new(2.0, 5.0, 0.0));

        assert_eq!(sq.rebound_vector(&[]), Point3::ZERO);
    }

    #[test]
    fn test_extremes_keep_first_on_ties() {
        let sq = square(Point3::new(1.0, 2.0, 0.0));
        assert_eq!(sq.leftmost().to_point(), Point3::new(1.0, 2.0, 0.0));
        assert_eq!(sq.rightmost().to_point(), Point3::new(11.0, 2.0, 0.0));
        assert_eq!(sq.topmost().to_point(), Point3::new(1.0, 2.0, 0.0));
        assert_eq!(sq.bottommost().to_point(), Point3::new(11.0, 12.0, 0.0));
    }

    #[test]
    fn test_centroid_and_bounds() {
        let sq = square(Point3::new(50.0, 50.0, 0.0));
        assert_eq!(sq.centroid(), Point3::new(5.0, 5.0, 0.0));

        let bounds = sq.bounds();
        assert_eq!(bounds.min, Point3::new(50.0, 50.0, 0.0));
        assert_eq!(bounds.max, Point3::new(60.0, 60.0, 0.0));
        assert!((bounds.width() - 10.0).abs() < 0.001);
        assert!(bounds.contains(Point3::new(55.0, 60.0, 0.0)));
    }

    #[test]
    fn test_interior_angles() {
        let angles = square(Point3::ZERO).interior_angles();
        assert_eq!(angles.len(), 4);
        assert!(angles.iter().all(|a| (a - 90.0).abs() < 0.01));

        let triangle = Polygon::new(
            vec![
                Vertex::line(0.0, 0.0, 0.0),
                Vertex::line(4.0, 0.0, 0.0),
                Vertex::line(0.0, 3.0, 0.0),
            ],
            Point3::ZERO,
            "red",
            Body::default(),
        );
        let angles = triangle.interior_angles();
        assert!((angles[0] - 90.0).abs() < 0.01);
        assert!((angles.iter().sum::<f32>() - 180.0).abs() < 0.01);
    }

    #[test]
    #[should_panic(expected = "zero-length edge")]
    fn test_interior_angles_duplicate_vertex_panics() {
        let poly = Polygon::new(
            vec![
                Vertex::line(0.0, 0.0, 0.0),
                Vertex::line(0.0, 0.0, 0.0),
                Vertex::line(4.0, 0.0, 0.0),
                Vertex::line(0.0, 3.0, 0.0),
            ],
            Point3::ZERO,
            "red",
            Body::default(),
        );
        poly.interior_angles();
    }

    #[test]
    #[should_panic(expected = "at least 3 vertices")]
    fn test_degenerate_polygon_panics() {
        Polygon::new(
            vec![Vertex::line(0.0, 0.0, 0.0), Vertex::line(1.0, 0.0, 0.0)],
            Point3::ZERO,
            "red",
            Body::default(),
        );
    }

    #[test]
    fn test_shift_baseline_forward() {
        let mut kart = Polygon::new(
            vec![
                Vertex::line(-5.0, 2.0, 5.0),
                Vertex::line(5.0, 2.0, 5.0),
                Vertex::line(5.0, 12.0, 5.0),
                Vertex::line(-5.0, 12.0, 5.0),
            ],
            Point3::new(0.0, 100.0, 0.0),
            "blue",
            Body {
                mass: 300.0,
                ..Default::default()
            },
        );
        kart.shift_baseline_forward();
        assert_eq!(kart.position(), Point3::new(0.0, 102.0, 0.0));
        assert_eq!(kart.body().mass, 300.0);
    }

    #[test]
    fn test_own_hull() {
        let sq = square(Point3::new(1.0, 1.0, 0.0));
        assert_eq!(sq.hull().len(), 4);
        assert_eq!(sq.hull()[0], Point3::new(1.0, 1.0, 0.0));
    }
}
