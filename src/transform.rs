//! World space to render space
//!
//! The order of the steps matters:
//! 1. Scale the local vertex by the zoom
//! 2. Move it to the canvas center
//! 3. Offset it by the shape's world position relative to the camera, at the
//!    same zoom so neighbouring shapes keep their spacing on screen
//! 4. Rotate about the camera's on-screen anchor by the relative heading
//!
//! Scaling before translating keeps the zoom from distorting offsets, and
//! the pivot is the already scaled and recentered camera centroid so the
//! scene turns around the viewer rather than the world origin.

use crate::geom::{Camera, Polygon, Vertex};
use crate::viewport::Viewport;

/// Render-space outline of `polygon` as seen from `camera`.
///
/// The result has the same length, order and edge styles as the local
/// vertices. Pure: safe to call for many shapes in parallel.
pub fn render_vertices(polygon: &Polygon, camera: &Camera, viewport: &Viewport) -> Vec<Vertex> {
    let relative = (polygon.position() - camera.position()).scaled_by(viewport.zoom);
    let pivot = camera.centroid().scaled_by(viewport.zoom) + viewport.canvas_center;
    let angle = polygon.angle() - camera.angle();

    polygon
        .vertices()
        .iter()
        .map(|v| {
            (v.scaled_by(viewport.zoom) + viewport.canvas_center + relative).rotated_around(pivot, angle)
        })
        .collect()
}

/// Render every shape of a frame with the same viewport snapshot
pub fn render_scene<'a>(
    polygons: impl IntoIterator<Item = &'a Polygon>,
    camera: &Camera,
    viewport: &Viewport,
) -> Vec<Vec<Vertex>> {
    polygons
        .into_iter()
        .map(|polygon| render_vertices(polygon, camera, viewport))
        .collect()
}
