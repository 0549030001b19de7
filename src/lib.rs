//! Kart Course - geometry core of a top-down kart racer
//!
//! Core modules:
//! - `geom`: Points, vertices, polygons, camera hitbox and hull analysis
//! - `transform`: World space to render space pipeline
//! - `course`: Track frame and decorative paths, boundary checks
//! - `viewport`: Per-frame zoom and canvas-center snapshot
//! - `renderer`: Render-space vertices to drawable path commands

pub mod course;
pub mod geom;
pub mod renderer;
pub mod transform;
pub mod viewport;

pub use course::{Course, CourseData, ShapeData};
pub use geom::{Body, Bounds, Camera, EdgeStyle, Point3, Polygon, Vertex};
pub use transform::{render_scene, render_vertices};
pub use viewport::Viewport;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Extra distance added to a rebound so the shape ends up strictly inside the frame
    pub const REBOUND_DISTANCE: f32 = 1.0;

    /// Design canvas width the course coordinates are authored against
    pub const SIZE_RATIO: f32 = 1000.0;

    /// Default canvas dimensions (pixels)
    pub const CANVAS_WIDTH_PIXEL: f32 = 1000.0;
    pub const CANVAS_HEIGHT_PIXEL: f32 = 1000.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit direction a shape faces for a heading angle.
///
/// Heading 0 points up the screen (negative y, screen coordinates are y-down);
/// positive headings turn the same way `Point3::rotated_around` does.
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(Vec2::NEG_Y)
}
