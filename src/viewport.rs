//! Render viewport settings
//!
//! One snapshot is taken per frame and handed to every render transform, so
//! all shapes drawn in that frame share the same zoom and canvas center.

use serde::{Deserialize, Serialize};

use crate::consts::SIZE_RATIO;
use crate::geom::{Camera, Point3};

/// Zoom scale and canvas-center offset shared by a frame's render transforms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// World units to render units (> 0)
    pub zoom: f32,
    /// Render-space point the world origin is drawn at
    pub canvas_center: Point3,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            canvas_center: Point3::ZERO,
        }
    }
}

impl Viewport {
    /// # Panics
    ///
    /// Panics if `zoom` is not positive.
    pub fn new(zoom: f32, canvas_center: Point3) -> Self {
        assert!(zoom > 0.0, "viewport zoom must be positive, got {zoom}");
        Self { zoom, canvas_center }
    }

    /// Viewport for a canvas of the given pixel size.
    ///
    /// The zoom is the canvas width relative to the design canvas, and the
    /// origin is drawn at the canvas center.
    pub fn for_canvas(width: f32, height: f32) -> Self {
        Self::new(width / SIZE_RATIO, Point3::new(width / 2.0, height / 2.0, 0.0))
    }

    /// Same center, different zoom
    pub fn with_zoom(self, zoom: f32) -> Self {
        Self::new(zoom, self.canvas_center)
    }

    /// This frame's snapshot as seen through `camera`: the canvas scale
    /// multiplied by the camera's own zoom
    pub fn through(self, camera: &Camera) -> Self {
        self.with_zoom(self.zoom * camera.zoom())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{CANVAS_HEIGHT_PIXEL, CANVAS_WIDTH_PIXEL};

    #[test]
    fn test_default_is_identity() {
        let viewport = Viewport::default();
        assert_eq!(viewport.zoom, 1.0);
        assert_eq!(viewport.canvas_center, Point3::ZERO);
    }

    #[test]
    fn test_for_canvas() {
        let viewport = Viewport::for_canvas(CANVAS_WIDTH_PIXEL, CANVAS_HEIGHT_PIXEL);
        assert!((viewport.zoom - 1.0).abs() < 0.001);
        assert_eq!(viewport.canvas_center, Point3::new(500.0, 500.0, 0.0));

        let small = Viewport::for_canvas(640.0, 480.0);
        assert!((small.zoom - 0.64).abs() < 0.001);
        assert_eq!(small.canvas_center, Point3::new(320.0, 240.0, 0.0));
    }

    #[test]
    fn test_through_camera_combines_zoom() {
        use crate::geom::{Body, Polygon, Vertex};

        let shape = Polygon::new(
            vec![
                Vertex::line(-5.0, 0.0, 5.0),
                Vertex::line(5.0, 0.0, 5.0),
                Vertex::line(5.0, 10.0, 5.0),
            ],
            Point3::ZERO,
            "black",
            Body::default(),
        );
        let mut camera = Camera::new(shape, 2.0);
        let canvas = Viewport::for_canvas(500.0, 500.0);

        let framed = canvas.through(&camera);
        assert!((framed.zoom - 1.0).abs() < 0.001);
        assert_eq!(framed.canvas_center, canvas.canvas_center);

        camera.set_zoom(4.0);
        assert!((canvas.through(&camera).zoom - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_json_round_trip() {
        let viewport = Viewport::for_canvas(800.0, 600.0).with_zoom(2.0);
        let json = serde_json::to_string(&viewport).unwrap();
        let back: Viewport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, viewport);
    }

    #[test]
    #[should_panic(expected = "zoom must be positive")]
    fn test_negative_zoom_panics() {
        Viewport::default().with_zoom(-1.0);
    }
}
