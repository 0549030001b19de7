//! The moving viewpoint, which doubles as the player's hitbox

use super::point::Point3;
use super::polygon::Polygon;
use super::vertex::Vertex;
use crate::normalize_angle;

/// A polygon plus a zoom factor. The heading is the shape's own angle, so
/// rendering the camera's shape through itself applies no rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    shape: Polygon,
    zoom: f32,
}

impl Camera {
    /// # Panics
    ///
    /// Panics if `zoom` is not positive.
    pub fn new(shape: Polygon, zoom: f32) -> Self {
        assert!(zoom > 0.0, "camera zoom must be positive, got {zoom}");
        Self { shape, zoom }
    }

    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn angle(&self) -> f32 {
        self.shape.angle()
    }

    pub fn position(&self) -> Point3 {
        self.shape.position()
    }

    pub fn centroid(&self) -> Point3 {
        self.shape.centroid()
    }

    pub fn vertices(&self) -> &[Vertex] {
        self.shape.vertices()
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        assert!(zoom > 0.0, "camera zoom must be positive, got {zoom}");
        self.zoom = zoom;
    }

    pub fn set_position(&mut self, position: Point3) {
        self.shape.set_position(position);
    }

    pub fn translate(&mut self, offset: Point3) {
        self.shape.translate(offset);
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.shape.set_angle(angle);
    }

    /// Turn by `delta` radians, keeping the heading in [-π, π)
    pub fn turn(&mut self, delta: f32) {
        self.shape.set_angle(normalize_angle(self.shape.angle() + delta));
    }

    /// Centroid placed at the camera's world position
    pub fn world_anchor(&self) -> Point3 {
        self.centroid() + self.position()
    }

    /// Hitbox vertices in the unrotated world frame the course is stored in.
    ///
    /// Each vertex is moved to the camera position, then the camera's own
    /// heading is undone about its world anchor.
    pub fn frame_space_vertices(&self) -> impl Iterator<Item = Point3> + '_ {
        let position = self.position();
        let anchor = self.world_anchor();
        let angle = -self.angle();
        self.shape
            .vertices()
            .iter()
            .map(move |v| (v.point + position).rotated_around(anchor, angle))
    }
}

impl AsRef<Polygon> for Camera {
    fn as_ref(&self) -> &Polygon {
        &self.shape
    }
}
